//! Sends one request and prints the response.
//!
//! ```text
//! RUST_LOG=debug cargo run --example fetch -- GET https://httpbin.org/get '{"params": {"q": "rust"}}'
//! ```

use anyhow::{bail, Context};
use quickreq::RequestOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(method), Some(url)) = (args.next(), args.next()) else {
        bail!("usage: fetch <METHOD> <URL> [JSON options]");
    };

    // Options use the same key names as RequestOptions::from_value
    let options = match args.next() {
        Some(raw) => {
            let value = serde_json::from_str(&raw).context("options must be a JSON object")?;
            RequestOptions::from_value(value)?
        }
        None => RequestOptions::default(),
    };

    let resp = quickreq::request(&method, &url, options).await?;

    println!("{} {} {}", resp, resp.reason(), resp.url());
    for (name, value) in resp.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }
    println!();
    println!("{}", resp.text_lossy());

    resp.raise_for_status()?;
    Ok(())
}
