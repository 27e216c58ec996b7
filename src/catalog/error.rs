use std::fmt;

use reqwest::StatusCode;

/// Which lookup key failed to match an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Name,
    Url,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Name => "name",
            LookupKind::Url => "url",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to GET '{url}'")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("response from '{url}' is not valid UTF-8")]
    Encoding {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("malformed catalog JSON from '{url}'")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing required catalog field '{0}'")]
    MissingField(&'static str),
    #[error("invalid url '{value}'")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid release date '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("no raspberry pi os found with {kind} '{key}'")]
    NotFound { kind: LookupKind, key: String },
    #[error("catalog nesting exceeds {max_depth} documents at '{url}'")]
    TooDeep { url: String, max_depth: usize },
}
