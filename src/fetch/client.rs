use async_trait::async_trait;
use reqwest::{Request, Response};

/// Seam between the pipeline and the HTTP layer, so provider clients and
/// tests can decorate or replace the transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
