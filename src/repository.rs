//! Card repository: one network call per page, mapped to domain cards.

use async_trait::async_trait;

use crate::api::{CardApiClient, FetchError};
use crate::card::Card;

/// Source of card pages.
///
/// The controller only depends on this trait, so it can be driven by the
/// HTTP implementation or by an in-memory double.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Fetch one page of cards, optionally filtered by name.
    ///
    /// `page` starts at 1 and `page_size` must be positive.
    async fn fetch(
        &self,
        query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Card>, FetchError>;
}

/// [`CardRepository`] backed by the remote card API.
pub struct ApiCardRepository {
    client: CardApiClient,
}

impl ApiCardRepository {
    pub fn new(client: CardApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CardRepository for ApiCardRepository {
    async fn fetch(
        &self,
        query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Card>, FetchError> {
        validate_paging(page, page_size)?;
        let response = self.client.get_cards(query, page, page_size).await?;
        let cards: Vec<Card> = response.cards.iter().map(|dto| dto.to_card()).collect();
        tracing::debug!(count = cards.len(), page, "mapped card page");
        Ok(cards)
    }
}

/// Rejects paging parameters the API would misinterpret.
pub fn validate_paging(page: u32, page_size: u32) -> Result<(), FetchError> {
    if page == 0 {
        return Err(FetchError::InvalidRequest("page must be at least 1".to_string()));
    }
    if page_size == 0 {
        return Err(FetchError::InvalidRequest(
            "page size must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_validation() {
        assert!(validate_paging(1, 20).is_ok());
        assert!(matches!(
            validate_paging(0, 20),
            Err(FetchError::InvalidRequest(_))
        ));
        assert!(matches!(
            validate_paging(1, 0),
            Err(FetchError::InvalidRequest(_))
        ));
    }
}
