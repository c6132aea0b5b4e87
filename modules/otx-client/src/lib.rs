pub mod error;
pub mod types;

pub use error::{OtxError, Result};
pub use types::{Pulse, PulseIndicator, SubscribedPulses};

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://otx.alienvault.com";

/// Header OTX reads the API key from.
const API_KEY_HEADER: &str = "X-OTX-API-KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct OtxClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OtxClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Point the client at a different host (mirrors, test servers).
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Fetch the pulses the account is subscribed to. Single request, no paging.
    pub async fn subscribed_pulses(&self) -> Result<Vec<Pulse>> {
        let url = format!("{}/api/v1/pulses/subscribed", self.base_url);
        tracing::debug!(url = url.as_str(), "Requesting subscribed pulses");

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OtxError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let page: SubscribedPulses = serde_json::from_str(&body)?;
        let pulses = page.into_pulses();
        tracing::debug!(count = pulses.len(), "Decoded subscribed pulses");

        Ok(pulses)
    }
}
