use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::config::UpstreamConfig;

/// Application state shared across all handlers
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream: UpstreamConfig,
}

impl AppState {
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream,
        }
    }
}

#[derive(Serialize)]
pub struct LangInfo {
    pub name: String,
    pub code: String,
}

/// Raw query of the words endpoint. Values are kept as strings so that a
/// malformed `number` falls back to the default instead of rejecting the call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordsQuery {
    pub number: Option<String>,
    pub lang: Option<String>,
}

impl WordsQuery {
    /// Read the query as key/value pairs. The first occurrence of each key
    /// wins and unknown keys are ignored; a query that cannot be decoded at
    /// all reads as empty.
    pub fn from_query_string(query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let mut parsed = WordsQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "number" if parsed.number.is_none() => parsed.number = Some(value),
                "lang" if parsed.lang.is_none() => parsed.lang = Some(value),
                _ => {}
            }
        }
        parsed
    }
}

/// Error body returned by the relay. Both fields are best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RelayErrorBody {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            details: Some(details.into()),
        }
    }
}
