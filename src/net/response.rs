//! Buffered HTTP response model.
//!
//! A [`Response`] is built once the exchange has completed and the whole body
//! has been read. It holds the final URL (after redirects, when they were
//! followed), status code and reason phrase, response headers, and the raw
//! body bytes. Every accessor works on that buffered state; none of them
//! touch the network.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `reason` is the canonical reason phrase for the status code and is
//!   `"Unknown"` for non-standard codes.
//! - 4xx and 5xx statuses are ordinary responses. Use [`Response::ok`] or
//!   [`Response::raise_for_status`] to classify them.

use crate::errors::ReqError;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Response {
    url: url::Url,
    status: u16,
    reason: String,
    headers: HeaderMap,
    content: Vec<u8>,
}

impl Response {
    pub(crate) fn new(url: url::Url, status: u16, headers: HeaderMap, content: Vec<u8>) -> Self {
        let reason = http::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown")
            .to_string();

        Self {
            url,
            status,
            reason,
            headers,
            content,
        }
    }

    /// Final URL of the response.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Reason phrase, e.g. `"Not Found"`.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Body decoded as UTF-8. Fails on invalid UTF-8.
    pub fn text(&self) -> Result<&str, ReqError> {
        Ok(std::str::from_utf8(&self.content)?)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Parses the body as JSON into `T`.
    ///
    /// Use `serde_json::Value` as `T` for untyped access.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ReqError> {
        Ok(serde_json::from_slice(&self.content)?)
    }

    /// True when the status code is below 400.
    pub fn ok(&self) -> bool {
        self.status < 400
    }

    /// Fails with [`ReqError::Status`] carrying this response when the status is 400 or above.
    pub fn raise_for_status(&self) -> Result<(), ReqError> {
        if self.ok() {
            Ok(())
        } else {
            Err(ReqError::Status(Box::new(self.clone())))
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]>", self.status)
    }
}
