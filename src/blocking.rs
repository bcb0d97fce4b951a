//! Blocking versions of the verb functions.
//!
//! Every call builds a current-thread tokio runtime, drives one exchange on
//! it and drops it again, so nothing outlives the call. Called from inside an
//! async runtime they fail with [`ReqError::Runtime`]; use the functions at
//! the crate root there.

use crate::config::{Data, RequestOptions};
use crate::errors::ReqError;
use crate::net::Response;
use serde_json::Value;
use std::future::Future;

fn block_on<F>(fut: F) -> Result<Response, ReqError>
where
    F: Future<Output = Result<Response, ReqError>>,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(ReqError::Runtime(std::io::Error::other(
            "blocking call made from inside an async runtime",
        )));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ReqError::Runtime)?;
    runtime.block_on(fut)
}

pub fn request(method: &str, url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::request(method, url, options))
}

pub fn get(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::get(url, options))
}

pub fn options(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::options(url, options))
}

pub fn head(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::head(url, options))
}

pub fn post(url: &str, data: Option<Data>, json: Option<Value>, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::post(url, data, json, options))
}

pub fn put(url: &str, data: Option<Data>, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::put(url, data, options))
}

pub fn patch(url: &str, data: Option<Data>, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::patch(url, data, options))
}

pub fn delete(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    block_on(crate::api::delete(url, options))
}
