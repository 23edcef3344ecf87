//! Browser transport for the backend, built on `gloo-net`.

use dioxus::logger::tracing::debug;

use crate::core::config::DashboardConfig;

use super::{decode, DataSource, DatasetKind, DatasetRows, FetchError, ReparseAck};

/// HTTP client for the `graph` and `parse` endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSource {
    config: DashboardConfig,
}

impl HttpSource {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    pub fn graph_url(&self, kind: DatasetKind) -> String {
        format!(
            "{}?type={}",
            self.config.endpoint("api/v1/graph"),
            kind.query_value()
        )
    }

    pub fn parse_url(&self, nonce: i64) -> String {
        format!("{}?t={nonce}", self.config.endpoint("api/v1/parse"))
    }

    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "GET");
        check_status(transport::get(url).await?)
    }
}

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Body of a 2xx response. Anything else is [`FetchError::BadStatus`], carrying
/// the backend's `{"error": ..}` message or, failing that, the status text.
pub fn check_status(response: RawResponse) -> Result<String, FetchError> {
    if (200..300).contains(&response.status) {
        return Ok(response.body);
    }
    let message = decode::error_message(&response.body).unwrap_or(response.status_text);
    Err(FetchError::BadStatus {
        status: response.status,
        message,
    })
}

impl DataSource for HttpSource {
    async fn fetch_dataset(&self, kind: DatasetKind) -> Result<DatasetRows, FetchError> {
        let body = self.get_body(&self.graph_url(kind)).await?;
        decode::decode_dataset(kind, &body)
    }

    async fn trigger_reparse(&self, nonce: i64) -> Result<ReparseAck, FetchError> {
        let body = self.get_body(&self.parse_url(nonce)).await?;
        decode::decode_ack(&body)
    }
}

#[cfg(target_arch = "wasm32")]
mod transport {
    use gloo_net::http::Request;

    use super::{FetchError, RawResponse};

    pub(super) async fn get(url: &str) -> Result<RawResponse, FetchError> {
        let response = Request::get(url).send().await?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await?;
        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod transport {
    use super::{FetchError, RawResponse};

    // Native builds only host tests; the dashboard talks to the backend from the browser.
    pub(super) async fn get(url: &str) -> Result<RawResponse, FetchError> {
        Err(FetchError::Network(format!(
            "no browser transport available for {url}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpSource {
        HttpSource::new(DashboardConfig::with_api_url("https://stats.example.org/"))
    }

    #[test]
    fn graph_urls_select_dataset_by_type() {
        let source = source();
        assert_eq!(
            source.graph_url(DatasetKind::TopTimeSpent),
            "https://stats.example.org/api/v1/graph?type=top-time-spent"
        );
        assert_eq!(
            source.graph_url(DatasetKind::OnlineConcurrency),
            "https://stats.example.org/api/v1/graph?type=online-statistics"
        );
    }

    #[test]
    fn parse_url_carries_nonce() {
        assert_eq!(
            source().parse_url(1_718_000_000_123),
            "https://stats.example.org/api/v1/parse?t=1718000000123"
        );
    }

    fn response(status: u16, status_text: &str, body: &str) -> RawResponse {
        RawResponse {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    #[test]
    fn success_passes_body_through() {
        assert_eq!(
            check_status(response(200, "OK", r#"{"data":[]}"#)),
            Ok(r#"{"data":[]}"#.to_string())
        );
        assert_eq!(check_status(response(204, "No Content", "")), Ok(String::new()));
    }

    #[test]
    fn backend_error_field_becomes_message() {
        let err = check_status(response(
            500,
            "Internal Server Error",
            r#"{"error":"failed to read csv"}"#,
        ))
        .unwrap_err();
        assert_eq!(
            err,
            FetchError::BadStatus {
                status: 500,
                message: "failed to read csv".into()
            }
        );
    }

    #[test]
    fn non_json_error_falls_back_to_status_text() {
        let err = check_status(response(
            502,
            "Bad Gateway",
            "<html><body>nginx</body></html>",
        ))
        .unwrap_err();
        assert_eq!(
            err,
            FetchError::BadStatus {
                status: 502,
                message: "Bad Gateway".into()
            }
        );
        assert_eq!(err.reason(), crate::source::FetchErrorReason::BadStatus);
    }

    #[test]
    fn native_transport_reports_network_error() {
        let err = futures::executor::block_on(source().fetch_dataset(DatasetKind::PlayerRoster))
            .unwrap_err();
        assert_eq!(err.reason(), crate::source::FetchErrorReason::NetworkError);
    }
}
