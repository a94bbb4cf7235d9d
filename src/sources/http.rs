use reqwest::blocking::Client;
use tracing::debug;

use crate::errors::{FeederError, FeederResult};
use crate::sources::traits::FeedClient;

const USER_AGENT: &str = concat!("medium-feeder/", env!("CARGO_PKG_VERSION"));

pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient for HttpFeedClient {
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeederError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes()?;
        debug!(%url, bytes = bytes.len(), "Fetched feed document");

        Ok(bytes.to_vec())
    }
}
