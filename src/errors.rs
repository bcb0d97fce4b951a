use crate::net::Response;

#[derive(Debug, thiserror::Error)]
pub enum ReqError {
    #[error("{} is not supported", .0.join(", "))]
    UnsupportedOptions(Vec<String>),

    #[error("allow_redirects={requested} is not supported for {method} requests")]
    RedirectPolicy { method: http::Method, requested: bool },

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(f64),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Cannot build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("Connection error: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Cannot start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("HTTP error ({}): {} for url {}", .0.status_code(), .0.reason(), .0.url())]
    Status(Box<Response>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Body is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

impl ReqError {
    /// True for failures of the exchange itself (DNS, connect, timeout, I/O).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ReqError::Timeout | ReqError::Connect(_) | ReqError::Transport(_) | ReqError::Runtime(_)
        )
    }

    /// The response carried by a [`ReqError::Status`], if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            ReqError::Status(resp) => Some(resp),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ReqError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ReqError::Timeout
        } else if err.is_builder() {
            ReqError::Build(err)
        } else if err.is_connect() {
            ReqError::Connect(err)
        } else {
            ReqError::Transport(err)
        }
    }
}
