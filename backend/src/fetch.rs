use std::time::Duration;

use futures::StreamExt;
use serde_json::Value;
use tracing::debug;

use crate::{
    country::Region,
    error::HolidayError,
};

pub const DEFAULT_ENDPOINT: &str = "https://www.gov.uk/bank-holidays.json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// The whole-UK document is well under 100 KiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Fetches the bank holiday documents. Holds no state between requests beyond the connection
/// pool inside `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HolidayClient{
    client: reqwest::Client,
    endpoint: String,
    max_body_bytes: usize,
}

impl HolidayClient{
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built (e.g., no TLS backend)
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, HolidayError>{
        Ok(Self{
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()?,
            endpoint: endpoint.into(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    #[must_use] pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self{
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Pure
    ///
    /// The whole-UK document, or the one scoped to a single region
    #[must_use] pub fn url_for(&self, region: Option<Region>) -> String{
        match region{
            Some(region) => self.endpoint.replacen(".json", &format!("/{}.json", region.key()), 1),
            None         => self.endpoint.clone(),
        }
    }

    /// Impure (network)
    ///
    /// # Errors
    /// Returns `UpstreamUnavailable` on connection failure, timeout or an error status,
    /// `BodyTooLarge` once the body passes the size cap, and `MalformedUpstreamData` if the body
    /// is not JSON. Nothing is retried.
    pub async fn fetch(&self, url: &str) -> Result<Value, HolidayError>{
        debug!(url, "fetching holiday data");

        let response = self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?;

        let limit = self.max_body_bytes;
        if response.content_length().is_some_and(|length| usize::try_from(length).map_or(true, |length| length > limit)){
            return Err(HolidayError::BodyTooLarge{ limit });
        }

        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await{
            let chunk = chunk?;
            if body.len() + chunk.len() > limit{
                return Err(HolidayError::BodyTooLarge{ limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Impure (network)
    ///
    /// # Errors
    /// See [`HolidayClient::fetch`]
    pub async fn fetch_region(&self, region: Option<Region>) -> Result<Value, HolidayError>{
        self.fetch(&self.url_for(region)).await
    }
}
