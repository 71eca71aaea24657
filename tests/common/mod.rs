//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use cardlister::api::FetchError;
use cardlister::card::Card;
use cardlister::config::{Config, ConfigStore};
use cardlister::controller::{CardListController, ControllerSettings};
use cardlister::repository::{validate_paging, CardRepository};
use cardlister::scope::TaskScope;
use cardlister::usecase::GetCardsUseCase;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

// -- Cards --------------------------------------------------------------------

pub fn card(id: &str, name: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        card_type: "Creature".to_string(),
        image_url: None,
        text: None,
        rarity: Some("Common".to_string()),
        set_name: Some("Alpha".to_string()),
        artist: None,
        flavor_text: None,
    }
}

/// `count` cards named `"<prefix> <n>"` with ids `"<prefix>-<n>"`.
pub fn cards(prefix: &str, count: usize) -> Vec<Card> {
    (1..=count)
        .map(|n| card(&format!("{}-{}", prefix, n), &format!("{} {}", prefix, n)))
        .collect()
}

/// A `/cards` response body with one minimal record per name.
pub fn cards_json(names: &[&str]) -> String {
    let records: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"id":"id-{}","name":"{}","type":"Creature","rarity":"Common","setName":"Alpha"}}"#,
                i, name
            )
        })
        .collect();
    format!(r#"{{"cards":[{}]}}"#, records.join(","))
}

// -- Recording repository -----------------------------------------------------

/// What the fake repository answers for a given query.
#[derive(Clone)]
pub enum Outcome {
    Cards(Vec<Card>),
    ApiError(String),
}

#[derive(Clone)]
struct Scripted {
    outcome: Outcome,
    delay: Duration,
}

/// In-memory [`CardRepository`] that records every call.
///
/// Queries are keyed by name; the empty string stands for "no filter".
pub struct RecordingRepository {
    calls: Mutex<Vec<Option<String>>>,
    scripted: Mutex<HashMap<String, Scripted>>,
    fallback: Mutex<Scripted>,
}

impl RecordingRepository {
    pub fn new() -> Arc<Self> {
        Self::with_default(Outcome::Cards(Vec::new()))
    }

    pub fn with_default(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            scripted: Mutex::new(HashMap::new()),
            fallback: Mutex::new(Scripted {
                outcome,
                delay: Duration::ZERO,
            }),
        })
    }

    pub fn respond(&self, query: &str, outcome: Outcome) {
        self.respond_after(query, Duration::ZERO, outcome);
    }

    pub fn respond_after(&self, query: &str, delay: Duration, outcome: Outcome) {
        self.scripted
            .lock()
            .insert(query.to_string(), Scripted { outcome, delay });
    }

    pub fn set_default_delay(&self, delay: Duration) {
        self.fallback.lock().delay = delay;
    }

    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl CardRepository for RecordingRepository {
    async fn fetch(
        &self,
        query: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Card>, FetchError> {
        validate_paging(page, page_size)?;
        self.calls.lock().push(query.map(str::to_string));

        let key = query.unwrap_or_default();
        let scripted = self
            .scripted
            .lock()
            .get(key)
            .cloned()
            .unwrap_or_else(|| self.fallback.lock().clone());

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }

        match scripted.outcome {
            Outcome::Cards(cards) => Ok(cards),
            Outcome::ApiError(message) => Err(FetchError::Api {
                status: None,
                message,
            }),
        }
    }
}

// -- Controller helpers -------------------------------------------------------

pub const DEBOUNCE: Duration = Duration::from_millis(500);

pub fn settings() -> ControllerSettings {
    ControllerSettings {
        debounce: DEBOUNCE,
        page_size: 20,
    }
}

pub fn controller_for(repo: &Arc<RecordingRepository>) -> (CardListController, TaskScope) {
    let scope = TaskScope::new();
    let use_case = GetCardsUseCase::new(repo.clone());
    let controller = CardListController::new(use_case, settings(), scope.clone());
    (controller, scope)
}

/// Let spawned tasks run; under a paused clock this also advances time.
pub async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Wait until nothing accepts connections on `addr`.
pub async fn wait_for_port_closed(addr: std::net::SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_err() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn config_with_base_url(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 5;
    config.api.connect_timeout_seconds = 2;
    config
}

pub fn store_with(config: Config) -> ConfigStore {
    ConfigStore::new(config, PathBuf::from("/tmp/cardlister-test.toml"))
}
