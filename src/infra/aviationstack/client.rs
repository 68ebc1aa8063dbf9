use anyhow::Result;
use async_trait::async_trait;

use crate::services::arrivals_api::ArrivalsApi;
use bcn_arrivals::fetch::{BasicClient, auth::UrlParam, fetch_bytes};
use bcn_arrivals::parser::parse_batch;
use bcn_arrivals::records::RawFlightRecord;

/// The free tier caps a single page at 100 records, which covers the
/// arrivals window we render.
const PAGE_LIMIT: u32 = 100;

/// Client for the aviationstack flights endpoint.
pub struct AviationstackClient {
    base_url: String,
    access_key: String,
}

impl AviationstackClient {
    pub fn new(access_key: String) -> Self {
        Self {
            // The free tier is plain HTTP; https is a paid feature.
            base_url: "http://api.aviationstack.com/v1".to_string(),
            access_key,
        }
    }
}

#[async_trait]
impl ArrivalsApi for AviationstackClient {
    async fn fetch_arrivals(&self, airport_iata: &str) -> Result<Vec<RawFlightRecord>> {
        let client = UrlParam::access_key(BasicClient::new(), self.access_key.clone());
        let url = format!(
            "{}/flights?arr_iata={}&limit={}",
            self.base_url, airport_iata, PAGE_LIMIT
        );

        let bytes = fetch_bytes(&client, &url).await?;
        parse_batch(&bytes)
    }
}
