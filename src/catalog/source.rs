use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::CatalogError;

/// Anything that can hand back the raw text of a catalog document.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, CatalogError>;
}

/// Fetches catalog documents over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, CatalogError> {
        debug!(%url, "fetching catalog document");

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = res.bytes().await.map_err(|source| CatalogError::Network {
            url: url.to_string(),
            source,
        })?;
        debug!(%url, bytes = bytes.len(), "catalog document received");

        String::from_utf8(bytes.to_vec()).map_err(|source| CatalogError::Encoding {
            url: url.to_string(),
            source,
        })
    }
}
