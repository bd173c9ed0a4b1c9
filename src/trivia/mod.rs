//! Trivia API integration
//!
//! Fetches batches of multiple-choice questions over HTTP.

pub mod client;
pub mod error;
pub mod models;

pub use client::TriviaClient;
pub use error::TriviaError;
pub use models::{RawQuestion, TriviaResponse};
