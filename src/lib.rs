//! Verb-named HTTP convenience functions.
//!
//! ```rust,no_run
//! use quickreq::RequestOptions;
//! # async fn run() -> Result<(), quickreq::ReqError> {
//! let resp = quickreq::get(
//!     "https://httpbin.org/get",
//!     RequestOptions::default().param("q", "rust"),
//! )
//! .await?;
//! resp.raise_for_status()?;
//! let body: serde_json::Value = resp.json()?;
//! # let _ = body;
//! # Ok(()) }
//! ```
//!
//! The [`blocking`] module offers the same functions for synchronous callers.

pub mod api;
pub mod blocking;
pub mod config;
pub mod errors;
pub mod net;

pub use api::*;
pub use config::{Auth, Data, RequestOptions, UNSUPPORTED_OPTIONS};
pub use errors::ReqError;
pub use net::{PreparedRequest, Response};
