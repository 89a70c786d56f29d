use log::{debug, warn};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::errors::RelayError;

/// Build the upstream request URL. `lang` is only added when non-empty.
pub fn upstream_url(base_url: &str, number: i64, lang: &str) -> Result<Url, RelayError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| RelayError::Unavailable(format!("Invalid upstream URL {}: {}", base_url, e)))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("words", &number.to_string());
        if !lang.is_empty() {
            pairs.append_pair("lang", lang);
        }
    }
    Ok(url)
}

/// Fetch `number` words from the upstream generator.
///
/// The whole exchange (headers and body) is bounded by the configured
/// timeout; when it elapses the in-flight request is dropped.
pub async fn fetch_words(
    client: &Client,
    upstream: &UpstreamConfig,
    number: i64,
    lang: &str,
) -> Result<Vec<Value>, RelayError> {
    let url = upstream_url(&upstream.base_url, number, lang)?;
    debug!("Requesting upstream: {}", url);

    match tokio::time::timeout(upstream.timeout, request_words(client, url)).await {
        Ok(result) => result,
        Err(_) => {
            let timeout_ms = upstream.timeout.as_millis() as u64;
            warn!("Upstream request aborted after {} ms", timeout_ms);
            Err(RelayError::Timeout(timeout_ms))
        }
    }
}

async fn request_words(client: &Client, url: Url) -> Result<Vec<Value>, RelayError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::BadStatus(status.as_u16()));
    }

    match response.json::<Value>().await? {
        Value::Array(words) => Ok(words),
        _ => Err(RelayError::InvalidShape),
    }
}
