use reqwest::{Client, Url};
use std::time::Duration;

use crate::api::dto::CardResponseDto;
use crate::api::error::FetchError;
use crate::config::ApiConfig;

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            connect: Duration::from_secs(api.connect_timeout_seconds as u64),
            request: Duration::from_secs(api.timeout_seconds as u64),
        }
    }
}

/// Thin wrapper over `reqwest` for the `/cards` endpoint.
#[derive(Clone)]
pub struct CardApiClient {
    client: Client,
    base_url: Url,
}

impl CardApiClient {
    pub fn new(base_url: &str, timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .user_agent(concat!("cardlister/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(&api.base_url, TimeoutConfig::from(api))
    }

    /// Builds `<base>/cards?page=..&pageSize=..[&name=..]`.
    pub fn cards_url(&self, name: Option<&str>, page: u32, page_size: u32) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join("cards")
            .map_err(|e| FetchError::Client(format!("Invalid cards URL: {}", e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("pageSize", &page_size.to_string());
            if let Some(name) = name {
                pairs.append_pair("name", name);
            }
        }
        Ok(url)
    }

    /// Issues one GET for a page of cards and decodes the body.
    pub async fn get_cards(
        &self,
        name: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<CardResponseDto, FetchError> {
        let url = self.cards_url(name, page, page_size)?;
        tracing::debug!(%url, "GET cards");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "card API returned error status");
            return Err(FetchError::status(status.as_u16(), status.canonical_reason()));
        }

        let body = response.bytes().await.map_err(FetchError::from_reqwest)?;
        serde_json::from_slice(&body).map_err(FetchError::malformed)
    }
}

/// Parses the configured base URL, making sure `join` appends rather than
/// replaces the last path segment.
pub fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| FetchError::Client(format!("Invalid base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::Client(format!(
            "Unsupported URL scheme '{}' in '{}'",
            other, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CardApiClient {
        CardApiClient::new(base, TimeoutConfig::default()).unwrap()
    }

    #[test]
    fn cards_url_keeps_base_path() {
        let url = client("https://api.magicthegathering.io/v1")
            .cards_url(None, 1, 20)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.magicthegathering.io/v1/cards?page=1&pageSize=20"
        );
    }

    #[test]
    fn cards_url_encodes_name() {
        let url = client("http://localhost:8080/")
            .cards_url(Some("Shivan Dragon"), 2, 10)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/cards?page=2&pageSize=10&name=Shivan+Dragon"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(FetchError::Client(_))
        ));
        assert!(parse_base_url("not a url").is_err());
    }
}
