//! Per-call request options.
//!
//! [`RequestOptions`] is the configuration bag handed to [`crate::request`]
//! and the verb functions. Every field is optional and the defaults describe
//! a plain request with no query, no body and no credentials.
//!
//! # Examples
//!
//! ## Fluent setters
//! ```rust
//! use quickreq::RequestOptions;
//! let opts = RequestOptions::default()
//!     .param("q", "rust")
//!     .header("Accept", "application/json")
//!     .basic_auth("user", "pass")
//!     .timeout(2.5);
//! assert_eq!(opts.params.len(), 1);
//! ```
//!
//! ## Loose configuration bag
//! ```rust
//! use quickreq::RequestOptions;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = RequestOptions::from_value(serde_json::json!({
//!     "params": {"a": "1", "b": ["2", "3"]},
//!     "timeout": 5,
//! }))?;
//! assert_eq!(opts.params.len(), 3);
//! # Ok(()) }
//! ```
//!
//! # Unsupported keys
//!
//! The loose path accepts the key names `cookies`, `files`, `proxies`,
//! `verify`, `stream` and `cert` but only records them. [`crate::request`]
//! rejects such options before any network activity.

use crate::errors::ReqError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Option keys that are recognised but cannot be honoured.
pub const UNSUPPORTED_OPTIONS: [&str; 6] = ["cookies", "files", "proxies", "verify", "stream", "cert"];

/// Request body given through the `data` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    /// Sent as UTF-8 with `Content-Type: text/plain`.
    Text(String),
    /// Sent as is with `Content-Type: text/plain`.
    Bytes(Vec<u8>),
    /// Form-encoded pairs. A repeated key carries a list value.
    Form(Vec<(String, String)>),
}

impl Data {
    /// Builds form data from key/value pairs, keeping their order.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Data::Form(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Data::Text(s) => s.is_empty(),
            Data::Bytes(b) => b.is_empty(),
            Data::Form(pairs) => pairs.is_empty(),
        }
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::Text(s)
    }
}

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Data {
    fn from(b: Vec<u8>) -> Self {
        Data::Bytes(b)
    }
}

impl From<&[u8]> for Data {
    fn from(b: &[u8]) -> Self {
        Data::Bytes(b.to_vec())
    }
}

impl From<Vec<(String, String)>> for Data {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Data::Form(pairs)
    }
}

/// Basic-auth credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Auth {
    pub username: String,
    pub password: String,
}

impl Auth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of debug logs
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters, appended in order.
    pub params: Vec<(String, String)>,
    /// Extra request headers, in order.
    pub headers: Vec<(String, String)>,
    pub data: Option<Data>,
    /// JSON body, used when `data` is unset or empty.
    pub json: Option<Value>,
    pub auth: Option<Auth>,
    /// Seconds before the whole exchange fails with a timeout.
    pub timeout: Option<f64>,
    /// `None` means "use the method's default".
    pub allow_redirects: Option<bool>,
    /// Unsupported keys seen by [`RequestOptions::from_value`].
    pub(crate) unsupported: Vec<String>,
}

impl RequestOptions {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut RequestOptions)) -> Self {
        f(&mut self);
        self
    }

    pub fn param(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|o| o.params.push((key.into(), value.into())))
    }

    pub fn params<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.map(|o| o.params.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into()))))
    }

    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.map(|o| o.headers.push((name.into(), value.into())))
    }

    pub fn data(self, data: impl Into<Data>) -> Self {
        self.map(|o| o.data = Some(data.into()))
    }

    pub fn form<I, K, V>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.map(|o| o.data = Some(Data::form(pairs)))
    }

    pub fn json(self, value: impl Into<Value>) -> Self {
        self.map(|o| o.json = Some(value.into()))
    }

    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.map(|o| o.auth = Some(Auth::new(username, password)))
    }

    pub fn timeout(self, seconds: f64) -> Self {
        self.map(|o| o.timeout = Some(seconds))
    }

    pub fn allow_redirects(self, allow: bool) -> Self {
        self.map(|o| o.allow_redirects = Some(allow))
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut RequestOptions)) -> Self {
        self.map(f)
    }

    /// Keys from [`UNSUPPORTED_OPTIONS`] that were present in the source bag, sorted.
    pub fn unsupported(&self) -> &[String] {
        &self.unsupported
    }

    /// Builds options from a JSON object using the option key names.
    ///
    /// `params` and `data` accept an object (array values repeat the key) or
    /// an array of `[key, value]` pairs. A string `data` becomes
    /// [`Data::Text`]. `auth` is a `[username, password]` pair.
    pub fn from_value(value: Value) -> Result<Self, ReqError> {
        let Value::Object(mut bag) = value else {
            return Err(ReqError::InvalidOptions("expected a JSON object".into()));
        };

        let mut unsupported: Vec<String> = UNSUPPORTED_OPTIONS
            .iter()
            .filter(|key| bag.remove(**key).is_some())
            .map(|key| key.to_string())
            .collect();
        unsupported.sort();

        let raw: RawOptions = serde_json::from_value(Value::Object(bag))
            .map_err(|e| ReqError::InvalidOptions(e.to_string()))?;

        for key in raw.unknown.keys() {
            log::warn!("Ignoring unknown request option: {key}");
        }

        let data = match raw.data {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(Data::Text(s)),
            Some(other) => Some(Data::Form(pairs_from_value("data", other)?)),
        };

        Ok(Self {
            params: match raw.params {
                Some(v) => pairs_from_value("params", v)?,
                None => Vec::new(),
            },
            headers: match raw.headers {
                Some(map) => pairs_from_value("headers", Value::Object(map))?,
                None => Vec::new(),
            },
            data,
            json: raw.json.filter(|v| !v.is_null()),
            auth: raw.auth.map(|(username, password)| Auth { username, password }),
            timeout: raw.timeout,
            allow_redirects: raw.allow_redirects,
            unsupported,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawOptions {
    params: Option<Value>,
    headers: Option<Map<String, Value>>,
    data: Option<Value>,
    json: Option<Value>,
    auth: Option<(String, String)>,
    timeout: Option<f64>,
    allow_redirects: Option<bool>,
    #[serde(flatten)]
    unknown: Map<String, Value>,
}

/// Flattens an object or an array of pairs into ordered string pairs.
fn pairs_from_value(field: &str, value: Value) -> Result<Vec<(String, String)>, ReqError> {
    let mut out = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match v {
                    Value::Array(items) => {
                        for item in items {
                            out.push((key.clone(), scalar_to_string(field, item)?));
                        }
                    }
                    other => out.push((key, scalar_to_string(field, other)?)),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Array(pair) if pair.len() == 2 => {
                        let mut it = pair.into_iter();
                        if let (Some(k), Some(v)) = (it.next(), it.next()) {
                            out.push((scalar_to_string(field, k)?, scalar_to_string(field, v)?));
                        }
                    }
                    _ => {
                        return Err(ReqError::InvalidOptions(format!(
                            "{field}: expected [key, value] pairs"
                        )))
                    }
                }
            }
        }
        _ => {
            return Err(ReqError::InvalidOptions(format!(
                "{field}: expected an object or a list of pairs"
            )))
        }
    }
    Ok(out)
}

fn scalar_to_string(field: &str, value: Value) -> Result<String, ReqError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ReqError::InvalidOptions(format!(
            "{field}: values must be strings, numbers or booleans"
        ))),
    }
}
