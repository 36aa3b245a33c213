//! Generic HTTP client tools
//!
//! Shared request/response handling for every endpoint: sending, logging,
//! reading the body, and turning non-success statuses into [`ClientError`].
//!
//! Nothing here retries. A failed call is reported once and the caller
//! decides what to do with it.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::types::{ErrorBody, Marca};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Transport failures map to [`ClientError::Timeout`] or
    /// [`ClientError::NetworkError`]; the status code is returned as-is so
    /// callers can apply [`HttpUtils::ensure_success`].
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Turns a non-2xx status into [`ClientError::Rejected`].
    ///
    /// The `detail` field of a JSON error body is carried verbatim; bodies
    /// that are not JSON (proxies, HTML error pages) yield `detail: None`.
    pub fn ensure_success(status_code: u16, response_text: &str) -> Result<(), ClientError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        let detail = serde_json::from_str::<ErrorBody>(response_text)
            .ok()
            .and_then(|body| body.detail);
        let err = ClientError::Rejected {
            status: status_code,
            detail,
        };

        if err.is_expected() {
            log::warn!("Request rejected: {err}");
        } else {
            log::error!("Request rejected: {err}");
        }
        Err(err)
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Parses a record list row by row.
    ///
    /// A row that does not decode (unknown status, missing field) is logged
    /// and skipped so the rest of the list still loads. A body that is not a
    /// JSON array is a [`ClientError::ParseError`].
    pub fn parse_records(response_text: &str) -> Result<Vec<Marca>, ClientError> {
        let rows: Vec<serde_json::Value> = Self::parse_json(response_text)?;
        let total = rows.len();

        let records: Vec<Marca> = rows
            .into_iter()
            .filter_map(|row| match Marca::deserialize(&row) {
                Ok(marca) => Some(marca),
                Err(e) => {
                    log::warn!(
                        "Skipping record that failed to parse ({e}): {}",
                        truncate_for_log(&row.to_string())
                    );
                    None
                }
            })
            .collect();

        if records.len() < total {
            log::warn!("Skipped {} of {total} records", total - records.len());
        }
        Ok(records)
    }
}
