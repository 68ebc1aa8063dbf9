use crate::fetch::client::HttpClient;
use async_trait::async_trait;

/// An [`HttpClient`] wrapper that appends an API key as a URL query
/// parameter.
///
/// `param_name` is the query parameter name and `key` is its value.
/// Aviationstack authenticates every request this way (`access_key=<key>`).
pub struct UrlParam<C> {
    pub inner: C,
    pub param_name: String,
    pub key: String,
}

impl<C> UrlParam<C> {
    /// Convenience constructor for the aviationstack `access_key` scheme.
    pub fn access_key(inner: C, key: String) -> Self {
        Self {
            inner,
            param_name: "access_key".to_string(),
            key,
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(&self.param_name, &self.key);
        self.inner.execute(req).await
    }
}
