//! Verb functions.
//!
//! Each function fixes the HTTP method and the `allow_redirects` default
//! (follow for everything except `HEAD`) and hands over to [`request`].

use crate::config::{Data, RequestOptions};
use crate::errors::ReqError;
use crate::net::{self, Response};
use serde_json::Value;

/// Sends a single request.
///
/// Call-shape problems (unsupported options, redirect conflicts, bad URL or
/// headers) fail before any connection is made. Any HTTP status, including
/// 4xx and 5xx, comes back as a [`Response`].
pub async fn request(method: &str, url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    let method = net::parse_method(method)?;
    let prepared = net::prepare(method, url, options)?;
    net::fetch(prepared).await
}

fn with_redirect_default(mut options: RequestOptions, allow: bool) -> RequestOptions {
    options.allow_redirects.get_or_insert(allow);
    options
}

fn with_body(mut options: RequestOptions, data: Option<Data>, json: Option<Value>) -> RequestOptions {
    if data.is_some() {
        options.data = data;
    }
    if json.is_some() {
        options.json = json;
    }
    options
}

pub async fn get(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    request("GET", url, with_redirect_default(options, true)).await
}

pub async fn options(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    request("OPTIONS", url, with_redirect_default(options, true)).await
}

pub async fn head(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    request("HEAD", url, with_redirect_default(options, false)).await
}

pub async fn post(
    url: &str,
    data: Option<Data>,
    json: Option<Value>,
    options: RequestOptions,
) -> Result<Response, ReqError> {
    request("POST", url, with_body(options, data, json)).await
}

pub async fn put(url: &str, data: Option<Data>, options: RequestOptions) -> Result<Response, ReqError> {
    request("PUT", url, with_body(options, data, None)).await
}

pub async fn patch(url: &str, data: Option<Data>, options: RequestOptions) -> Result<Response, ReqError> {
    request("PATCH", url, with_body(options, data, None)).await
}

pub async fn delete(url: &str, options: RequestOptions) -> Result<Response, ReqError> {
    request("DELETE", url, options).await
}
