// src/core/net.rs
// Single-attempt blocking GET. The boards are served over HTTPS only, so
// this goes through reqwest rather than a raw socket.

use std::time::Duration;

use crate::config::REQUEST_TIMEOUT_SECS;
use crate::error::Error;

/// Fetch one page and return the body as text.
/// Non-success statuses are errors; there is no retry.
pub fn http_get(url: &str) -> Result<String, Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| fetch_err(url, e))?;

    client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|e| fetch_err(url, e))
}

fn fetch_err(url: &str, source: reqwest::Error) -> Error {
    Error::Fetch {
        url: url.to_string(),
        source,
    }
}
