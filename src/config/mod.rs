//! Configuration loading.
//!
//! ```toml
//! [api]
//! base_url = "https://api.magicthegathering.io/v1/"
//! timeout_seconds = 30
//! connect_timeout_seconds = 5
//!
//! [search]
//! debounce_ms = 500
//! page_size = 20
//! featured_count = 5
//! ```

mod loader;
mod store;
mod types;

pub use loader::{ConfigError, MAX_PAGE_SIZE};
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, SearchConfig, DEFAULT_BASE_URL};
