use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://downloads.raspberrypi.org/os_list_imagingutility.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_DEPTH: usize = 8;

/// Runtime settings; serde is confined to this module tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub(crate) catalog_url: String,
    pub(crate) timeout_secs: u64,
    pub(crate) max_depth: usize,
    pub(crate) user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_depth: DEFAULT_MAX_DEPTH,
            user_agent: concat!("imagine-pi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    // Borrowing getters (no clones).
    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Deepest chain of linked catalog documents that will be followed.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
