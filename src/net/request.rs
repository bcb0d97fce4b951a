//! Turns a method, URL and [`RequestOptions`] into a [`PreparedRequest`].
//!
//! Preparation is pure: it validates the options, rewrites the URL and
//! encodes headers and body, but never opens a connection. Every call-shape
//! error is raised here, before the exchange is attempted.

use crate::config::{Auth, Data, RequestOptions};
use crate::errors::ReqError;
use base64::Engine as _;
use http::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use std::time::Duration;
use url::{form_urlencoded, Url};

const TEXT_PLAIN: &str = "text/plain";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const APPLICATION_JSON: &str = "application/json";

/// A fully built exchange, ready to be sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    /// Final URL, query applied and userinfo stripped.
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
    pub follow_redirects: bool,
}

/// Redirects are followed for every method except `HEAD`.
pub fn default_allow_redirects(method: &Method) -> bool {
    *method != Method::HEAD
}

pub fn parse_method(method: &str) -> Result<Method, ReqError> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| ReqError::InvalidMethod(method.to_string()))
}

pub fn prepare(method: Method, url: &str, options: RequestOptions) -> Result<PreparedRequest, ReqError> {
    if !options.unsupported.is_empty() {
        return Err(ReqError::UnsupportedOptions(options.unsupported));
    }

    let follow_redirects = default_allow_redirects(&method);
    if let Some(requested) = options.allow_redirects {
        if requested != follow_redirects {
            return Err(ReqError::RedirectPolicy { method, requested });
        }
    }

    let timeout = options.timeout.map(timeout_from_secs).transpose()?;

    let mut url = Url::parse(url)?;
    let url_auth = take_userinfo(&mut url);
    let auth = options.auth.or(url_auth);

    if !options.params.is_empty() {
        url.query_pairs_mut().extend_pairs(options.params.iter());
    }

    let mut headers = HeaderMap::new();
    for (name, value) in &options.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ReqError::InvalidHeader(name.clone()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ReqError::InvalidHeader(format!("{name}: invalid value")))?;
        headers.append(name, value);
    }

    if let Some(auth) = auth {
        headers.insert(AUTHORIZATION, basic_auth_header(&auth)?);
    }

    let has_json = options.json.as_ref().is_some_and(|j| !j.is_null());
    let data = options.data.filter(|d| !d.is_empty() || !has_json);
    let body = match data {
        Some(Data::Text(text)) => Some(encoded(&mut headers, TEXT_PLAIN, text.into_bytes())),
        Some(Data::Bytes(bytes)) => Some(encoded(&mut headers, TEXT_PLAIN, bytes)),
        Some(Data::Form(pairs)) => {
            let form = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs.iter())
                .finish();
            Some(encoded(&mut headers, FORM_URLENCODED, form.into_bytes()))
        }
        None => match options.json {
            Some(json) if !json.is_null() => {
                let bytes = serde_json::to_vec(&json)?;
                Some(encoded(&mut headers, APPLICATION_JSON, bytes))
            }
            _ => None,
        },
    };

    Ok(PreparedRequest {
        method,
        url,
        headers,
        body,
        timeout,
        follow_redirects,
    })
}

/// Sets `Content-Type` unless the caller already chose one.
fn encoded(headers: &mut HeaderMap, content_type: &'static str, body: Vec<u8>) -> Vec<u8> {
    if !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    body
}

fn timeout_from_secs(secs: f64) -> Result<Duration, ReqError> {
    Duration::try_from_secs_f64(secs).map_err(|_| ReqError::InvalidTimeout(secs))
}

/// Removes `user:pass@` from the URL, returning it as a credential when a username is present.
fn take_userinfo(url: &mut Url) -> Option<Auth> {
    let username = url.username().to_string();
    let password = url.password().map(str::to_string);
    if username.is_empty() && password.is_none() {
        return None;
    }

    // Only fails for cannot-be-a-base URLs, which carry no userinfo
    let _ = url.set_username("");
    let _ = url.set_password(None);

    if username.is_empty() {
        return None;
    }
    Some(Auth::new(username, password.unwrap_or_default()))
}

fn basic_auth_header(auth: &Auth) -> Result<HeaderValue, ReqError> {
    let credentials = format!("{}:{}", auth.username, auth.password);
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials);
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|_| ReqError::InvalidHeader("authorization".into()))?;
    value.set_sensitive(true);
    Ok(value)
}
