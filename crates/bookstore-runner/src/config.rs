pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION: &str = "books";

/// Where the runner connects. Every field can be overridden from the
/// environment; unset or empty variables keep the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            uri: var("BOOKSTORE_MONGO_URI", DEFAULT_URI),
            database: var("BOOKSTORE_DATABASE", DEFAULT_DATABASE),
            collection: var("BOOKSTORE_COLLECTION", DEFAULT_COLLECTION),
        }
    }
}
