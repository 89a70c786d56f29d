//! Client side of the relay: the view state a UI renders from and the
//! fetcher that drives one request cycle against the relay endpoint.

pub mod fetcher;
pub mod state;

pub use fetcher::ClientFetcher;
pub use state::{FetchOutcome, FetchTicket, RequestParams, RequestState};
