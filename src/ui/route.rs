//! Screen routes.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    CardList,
    CardDetails { card_id: String },
}

impl Route {
    pub const CARD_LIST: &'static str = "card_list";

    pub fn card_details(card_id: &str) -> Self {
        Route::CardDetails {
            card_id: card_id.to_string(),
        }
    }

    /// Path form of the route, e.g. `card_details/abc`.
    pub fn path(&self) -> String {
        match self {
            Route::CardList => Self::CARD_LIST.to_string(),
            Route::CardDetails { card_id } => format!("card_details/{}", card_id),
        }
    }

    /// Inverse of [`Route::path`].
    pub fn parse(path: &str) -> Option<Self> {
        if path == Self::CARD_LIST {
            return Some(Route::CardList);
        }
        path.strip_prefix("card_details/")
            .filter(|id| !id.is_empty())
            .map(Route::card_details)
    }
}
