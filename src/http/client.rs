use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};
use std::time::{Duration, Instant};

use crate::error::HarnessError;

use super::request::RequestInput;
use super::response::HttpResponse;

pub fn build_client(timeout: Option<Duration>) -> Result<Client, HarnessError> {
    let mut builder = Client::builder();

    if let Some(timeout) = timeout {
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
    }

    builder.build().map_err(HarnessError::Client)
}

/// Joins an endpoint path onto a base URL, tolerating a trailing `/` on the base.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url, HarnessError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    Url::parse(&raw).map_err(|e| HarnessError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })
}

pub fn build_headers(input: &[(String, String)]) -> Result<HeaderMap, HarnessError> {
    let mut headers = HeaderMap::new();

    for (key, value) in input {
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let header_name =
            HeaderName::from_bytes(key.as_bytes()).map_err(|e| HarnessError::InvalidHeader {
                name: key.to_string(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value.trim()).map_err(|e| HarnessError::InvalidHeader {
                name: key.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

pub async fn send_request(
    client: &Client,
    request: RequestInput,
) -> Result<HttpResponse, HarnessError> {
    let method: reqwest::Method = request.method.into();
    let url = Url::parse(&request.url).map_err(|e| HarnessError::InvalidUrl {
        url: request.url.clone(),
        reason: e.to_string(),
    })?;
    let headers = build_headers(&request.headers)?;

    tracing::debug!(%method, %url, "sending request");

    let mut req_builder = client.request(method, url).headers(headers);
    if let Some(body) = request.body {
        req_builder = req_builder.body(body);
    }

    let started = Instant::now();
    let response = req_builder.send().await.map_err(|e| {
        tracing::debug!(url = %request.url, error = %e, "request failed");
        HarnessError::Transport(e)
    })?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(HarnessError::ReadBody)?;
    let elapsed = started.elapsed().as_millis();

    tracing::debug!(
        status = status.as_u16(),
        size_bytes = bytes.len(),
        duration_ms = elapsed as u64,
        "received response"
    );

    Ok(HttpResponse {
        status: status.as_u16(),
        duration_ms: elapsed,
        body: bytes.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn endpoint_url_joins_path() {
        let url = endpoint_url("http://localhost:5000", "/api/generate-pdf").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/generate-pdf");
    }

    #[test]
    fn endpoint_url_strips_trailing_slashes() {
        let url = endpoint_url("https://pdf.example.com//", "/").unwrap();
        assert_eq!(url.as_str(), "https://pdf.example.com/");
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "/").unwrap_err();
        assert!(matches!(err, HarnessError::InvalidUrl { .. }));
    }

    #[test]
    fn build_headers_skips_empty_keys() {
        let headers = build_headers(&[
            ("Content-Type".into(), "application/json".into()),
            ("  ".into(), "ignored".into()),
        ])
        .unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn build_headers_rejects_invalid_name() {
        let err = build_headers(&[("bad header".into(), "x".into())]).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidHeader { name, .. } if name == "bad header"));
    }

    #[test]
    fn zero_timeout_builds_client() {
        assert!(build_client(Some(Duration::ZERO)).is_ok());
        assert!(build_client(None).is_ok());
    }
}
