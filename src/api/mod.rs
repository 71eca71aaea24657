//! HTTP access to the card API.
//!
//! ```text
//! GET <base>/cards?page=<n>&pageSize=<n>[&name=<query>]  →  { "cards": [...] }
//! ```

mod client;
mod dto;
mod error;

pub use client::{parse_base_url, CardApiClient, TimeoutConfig};
pub use dto::{CardDto, CardResponseDto, ForeignNameDto, LegalityDto, RulingDto, WireId};
pub use error::FetchError;
