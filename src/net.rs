mod fetch;
mod request;
mod response;

pub use fetch::fetch;
pub use request::{default_allow_redirects, parse_method, prepare, PreparedRequest};
pub use response::Response;
