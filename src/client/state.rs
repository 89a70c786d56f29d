use crate::catalog::{default_language, DEFAULT_WORD_COUNT};

/// Result of the most recent fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchOutcome {
    #[default]
    Idle,
    Loading,
    /// Fetched words joined with single spaces.
    Success(String),
    Failure(String),
}

/// Parameters of one request, built from the current selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub language: String,
    pub count: u32,
}

/// Identifies a fetch cycle started by [`RequestState::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Selections and fetch outcome bound to the UI.
///
/// The last successful text is kept in `words` and stays visible while a new
/// cycle is loading or after it fails, until another success replaces it.
#[derive(Debug, Clone)]
pub struct RequestState {
    language: String,
    word_count: u32,
    outcome: FetchOutcome,
    words: String,
    generation: u64,
}

impl Default for RequestState {
    fn default() -> Self {
        Self {
            language: default_language().code.to_string(),
            word_count: DEFAULT_WORD_COUNT,
            outcome: FetchOutcome::Idle,
            words: String::new(),
            generation: 0,
        }
    }
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
    }

    /// Stores the raw value; clamping happens when the request is built.
    pub fn set_word_count(&mut self, count: u32) {
        self.word_count = count;
    }

    /// Start a new cycle. Any previous failure is cleared and completions
    /// of earlier cycles are ignored from now on.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.outcome = FetchOutcome::Loading;
        FetchTicket(self.generation)
    }

    /// Record the result of the cycle identified by `ticket`. Returns `false`
    /// and leaves the state untouched when a newer cycle has begun since.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<String, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.outcome = match result {
            Ok(text) => {
                self.words = text.clone();
                FetchOutcome::Success(text)
            }
            Err(message) => FetchOutcome::Failure(message),
        };
        true
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn outcome(&self) -> &FetchOutcome {
        &self.outcome
    }

    pub fn is_loading(&self) -> bool {
        self.outcome == FetchOutcome::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Text of the last successful fetch, empty if there was none.
    pub fn words(&self) -> &str {
        &self.words
    }

    pub fn params(&self) -> RequestParams {
        RequestParams {
            language: self.language.clone(),
            count: self.word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RequestState::new();
        assert_eq!(state.language(), "");
        assert_eq!(state.word_count(), 3);
        assert_eq!(state.outcome(), &FetchOutcome::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.words(), "");
    }

    #[test]
    fn test_selections_are_stored_raw() {
        let mut state = RequestState::new();
        state.set_language("fr");
        state.set_word_count(42);
        assert_eq!(
            state.params(),
            RequestParams { language: "fr".to_string(), count: 42 }
        );
    }

    #[test]
    fn test_success_cycle() {
        let mut state = RequestState::new();
        let ticket = state.begin_fetch();
        assert!(state.is_loading());

        assert!(state.complete_fetch(ticket, Ok("apple banana".to_string())));
        assert_eq!(state.outcome(), &FetchOutcome::Success("apple banana".to_string()));
        assert_eq!(state.words(), "apple banana");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_begin_clears_error_and_keeps_stale_words() {
        let mut state = RequestState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, Ok("old words".to_string()));

        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, Err("boom".to_string()));
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.words(), "old words");

        state.begin_fetch();
        assert_eq!(state.error(), None);
        assert!(state.is_loading());
        assert_eq!(state.words(), "old words");
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut state = RequestState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.complete_fetch(second, Ok("new".to_string())));
        assert!(!state.complete_fetch(first, Ok("old".to_string())));
        assert_eq!(state.outcome(), &FetchOutcome::Success("new".to_string()));
        assert_eq!(state.words(), "new");
    }
}
