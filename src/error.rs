use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by the drivers to pick a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Conversion,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("matched anchor #{index} has no href attribute")]
    MissingHref { index: usize },

    #[error("document node {0:?} is no longer reachable")]
    UnreachableNode(ego_tree::NodeId),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write progress output: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } | Self::Request { .. } | Self::Status { .. } | Self::Client(_) => {
                ErrorKind::Fetch
            }
            Self::Selector { .. } | Self::MissingHref { .. } | Self::UnreachableNode(_) => {
                ErrorKind::Conversion
            }
            Self::Read { .. } | Self::Write { .. } | Self::Output(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn selector(selector: &str, err: impl std::fmt::Display) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            message: err.to_string(),
        }
    }
}
