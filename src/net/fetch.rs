use crate::errors::ReqError;
use crate::net::{PreparedRequest, Response};
use reqwest::redirect;

const DEFAULT_USER_AGENT: &str = concat!("quickreq/", env!("CARGO_PKG_VERSION"));

// Sends a prepared request and returns the fully buffered response. HTTP error statuses are
// returned as normal responses, only transport failures are errors.
pub async fn fetch(req: PreparedRequest) -> Result<Response, ReqError> {
    // One client per exchange, dropped when the call returns
    let client = reqwest::Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .redirect(if req.follow_redirects {
            redirect::Policy::default()
        } else {
            redirect::Policy::none()
        })
        .build()?;

    log::debug!("{} {}", req.method, req.url);

    let mut builder = client.request(req.method, req.url).headers(req.headers);
    if let Some(timeout) = req.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(body) = req.body {
        builder = builder.body(body);
    }

    let res = builder.send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let headers = res.headers().clone();

    // Fetch body. No streaming, the body is read once here
    let body = res.bytes().await?.to_vec();

    log::debug!("{} {} ({} bytes)", status, final_url, body.len());

    Ok(Response::new(final_url, status, headers, body))
}
