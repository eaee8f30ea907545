use std::time::Duration;

use market::FeedConfig;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// JSON logs and one JSON frame per store change instead of the
    /// pretty table. Enabled by `APP_ENV=production`.
    pub json: bool,

    // =========================
    // Feed configuration
    // =========================
    /// Milliseconds between feed ticks.
    pub feed_interval_ms: u64,

    /// Fixed RNG seed for a reproducible run. Seeds from the OS when unset.
    pub feed_seed: Option<u64>,

    /// Symbols that get the tight stablecoin bands.
    pub stablecoins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or unparsable values fall back to
    /// defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let json = get("APP_ENV").is_some_and(|v| v == "production");

        let feed_interval_ms = get("FEED_INTERVAL_MS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(2_000);

        let feed_seed = get("FEED_SEED").and_then(|v| v.trim().parse().ok());

        let stablecoins = get("STABLECOINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| vec!["USDT".to_string()]);

        Self {
            json,
            feed_interval_ms,
            feed_seed,
            stablecoins,
        }
    }

    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            interval: Duration::from_millis(self.feed_interval_ms),
            stablecoins: self.stablecoins.clone(),
            ..FeedConfig::default()
        }
    }
}
