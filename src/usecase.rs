//! Fetch use case: wraps a repository call in a three-state stream.

use futures_util::stream::{self, Stream, StreamExt};
use std::sync::Arc;

use crate::api::FetchError;
use crate::card::Card;
use crate::repository::CardRepository;

/// Message shown when the transport fails.
pub const NETWORK_ERROR_MESSAGE: &str = "Couldn't reach server. Check your internet connection.";

/// Fallback when an API error carries no detail.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Progress of one fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error(String),
}

/// Turns a fetch failure into a user-facing message.
pub fn error_message(err: &FetchError) -> String {
    match err {
        FetchError::Network { .. } => NETWORK_ERROR_MESSAGE.to_string(),
        FetchError::Api { message, .. } if message.is_empty() => {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        }
        FetchError::Api { message, .. } => message.clone(),
        other => format!("An unknown error occurred: {}", other),
    }
}

/// Fetches a page of cards and reports progress as a [`Resource`] stream.
#[derive(Clone)]
pub struct GetCardsUseCase {
    repository: Arc<dyn CardRepository>,
}

impl GetCardsUseCase {
    pub fn new(repository: Arc<dyn CardRepository>) -> Self {
        Self { repository }
    }

    /// Emits `Loading`, then exactly one of `Success` or `Error`.
    ///
    /// Nothing happens until the stream is polled; every call produces an
    /// independent attempt. A blank query means "no name filter".
    pub fn run(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> impl Stream<Item = Resource<Vec<Card>>> + Send + 'static {
        let repository = Arc::clone(&self.repository);
        let query = query.trim().to_string();

        let fetch = stream::once(async move {
            let name = (!query.is_empty()).then_some(query.as_str());
            match repository.fetch(name, page, page_size).await {
                Ok(cards) => Resource::Success(cards),
                Err(err) => {
                    tracing::warn!(kind = err.kind(), error = %err, "card fetch failed");
                    Resource::Error(error_message(&err))
                }
            }
        });

        stream::once(async { Resource::Loading }).chain(fetch)
    }
}
