//! Data source client for the log-parsing backend.
//!
//! The backend exposes one `graph` endpoint (selected by `?type=`) per dataset
//! and a `parse` endpoint that reprocesses raw server logs. This module keeps
//! the wire contract in one place:
//!
//! - [`DataSource`] is the async seam the refresh controllers depend on.
//! - [`decode`] turns response bodies into typed rows (pure, no I/O).
//! - [`HttpSource`] is the browser transport built on `gloo-net`.
//!
//! The client never retries; retry policy belongs to the caller.

mod dataset;
pub mod decode;
mod http;

pub use dataset::{
    ConcurrencyPoint, CountryShare, DatasetKind, DatasetRows, HourBucket, PlayerRoster,
    RosterPlayer, TimeSpentRow,
};
pub use http::{check_status, HttpSource, RawResponse};

use serde::Deserialize;

/// Acknowledgement returned by the reparse endpoint. Only the message is kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReparseAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Coarse failure class, useful for badges and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorReason {
    NetworkError,
    BadStatus,
    ParseError,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend responded with HTTP {status}: {message}")]
    BadStatus { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn reason(&self) -> FetchErrorReason {
        match self {
            FetchError::Network(_) => FetchErrorReason::NetworkError,
            FetchError::BadStatus { .. } => FetchErrorReason::BadStatus,
            FetchError::Parse(_) => FetchErrorReason::ParseError,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Backend operations consumed by the dashboard.
///
/// Futures are `!Send`: everything runs on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_dataset(&self, kind: DatasetKind) -> Result<DatasetRows, FetchError>;

    /// Ask the backend to reparse its logs. `nonce` is appended to the query
    /// so intermediate caches never answer with a stale acknowledgement.
    async fn trigger_reparse(&self, nonce: i64) -> Result<ReparseAck, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_follow_variants() {
        assert_eq!(
            FetchError::Network("offline".into()).reason(),
            FetchErrorReason::NetworkError
        );
        assert_eq!(
            FetchError::BadStatus {
                status: 502,
                message: "Bad Gateway".into()
            }
            .reason(),
            FetchErrorReason::BadStatus
        );
        assert_eq!(
            FetchError::Parse("eof".into()).reason(),
            FetchErrorReason::ParseError
        );
    }

    #[test]
    fn bad_status_message_is_human_readable() {
        let err = FetchError::BadStatus {
            status: 500,
            message: "redis unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "backend responded with HTTP 500: redis unavailable"
        );
    }
}
