//! Random word relay: a small HTTP relay in front of a third-party word
//! generator, plus the client-side state and fetch logic that talk to it.

pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
