mod basic;
mod client;
pub mod auth;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Result, bail};

/// Issues a GET for `url` through `client` and returns the response body.
///
/// # Errors
///
/// Fails on transport errors and on non-success HTTP statuses (the upstream
/// provider reports quota and auth problems as 4xx with a JSON body).
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("feed request failed with status {status}: {body}");
    }

    Ok(resp.bytes().await?.to_vec())
}
