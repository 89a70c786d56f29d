use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::client::state::{FetchOutcome, RequestParams, RequestState};
use crate::errors::FetchError;
use crate::models::RelayErrorBody;
use crate::utils::join_words;

pub const MAX_WORD_COUNT: u32 = 10;

pub fn clamp_word_count(count: u32) -> u32 {
    count.min(MAX_WORD_COUNT)
}

/// Talks to the relay's words endpoint on behalf of a [`RequestState`].
pub struct ClientFetcher {
    client: Client,
    relay_url: String,
}

impl ClientFetcher {
    pub fn new(relay_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), relay_url)
    }

    pub fn with_client(client: Client, relay_url: impl Into<String>) -> Self {
        Self {
            client,
            relay_url: relay_url.into(),
        }
    }

    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Relay URL for `params`: `number` is clamped, `lang` only appears for a
    /// non-empty language.
    pub fn request_url(&self, params: &RequestParams) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.relay_url).map_err(|e| {
            FetchError::Transport(format!("Invalid relay URL {}: {}", self.relay_url, e))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("number", &clamp_word_count(params.count).to_string());
            if !params.language.is_empty() {
                pairs.append_pair("lang", &params.language);
            }
        }
        Ok(url)
    }

    /// Fetch words and return them joined with single spaces.
    pub async fn fetch_random_words(&self, params: &RequestParams) -> Result<String, FetchError> {
        let url = self.request_url(params)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(FetchError::RelayStatus {
                status: status.as_u16(),
                body: parse_error_body(&bytes),
            });
        }

        let bytes = response.bytes().await?;
        let data: Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        match data {
            Value::Array(words) => Ok(join_words(&words)),
            _ => Err(FetchError::InvalidFormat),
        }
    }

    /// Like [`fetch_random_words`](Self::fetch_random_words), but gives up with
    /// [`FetchError::Cancelled`] as soon as `cancel` fires.
    pub async fn fetch_random_words_with_cancel(
        &self,
        params: &RequestParams,
        cancel: &CancellationToken,
    ) -> Result<String, FetchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.fetch_random_words(params) => result,
        }
    }

    /// Run one full cycle against `state`: begin, fetch, complete. The lock is
    /// not held across the request. Returns the outcome visible afterwards,
    /// which belongs to a newer cycle if this one was superseded.
    pub async fn run_cycle(
        &self,
        state: &Mutex<RequestState>,
        cancel: &CancellationToken,
    ) -> FetchOutcome {
        let (ticket, params) = {
            let mut state = lock(state);
            (state.begin_fetch(), state.params())
        };

        let result = self.fetch_random_words_with_cancel(&params, cancel).await;
        if let Err(e) = &result {
            warn!("Fetch error: {:?}", e);
        }

        let mut state = lock(state);
        if !state.complete_fetch(ticket, result.map_err(|e| e.user_message())) {
            warn!("Discarding result of a superseded fetch");
        }
        state.outcome().clone()
    }
}

fn lock(state: &Mutex<RequestState>) -> MutexGuard<'_, RequestState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Error body of a failed relay response. Anything that is not a JSON object
/// with string fields reads as an empty body.
fn parse_error_body(bytes: &[u8]) -> RelayErrorBody {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => RelayErrorBody::default(),
    }
}
