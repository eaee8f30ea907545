use std::time::Duration;

/// Tuning for the simulated feed. Bands are half-widths of uniform
/// symmetric draws.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Time between ticks. The first tick fires one interval after start.
    pub interval: Duration,

    /// Relative price move per tick for volatile assets (0.01 = ±1%).
    pub volatile_price_band: f64,
    /// Relative price move per tick for stablecoins.
    pub stable_price_band: f64,

    /// Additive drift applied to the 1h change of volatile assets.
    pub change_1h_band: f64,
    /// Additive drift applied to the 24h change of volatile assets.
    pub change_24h_band: f64,
    /// Stablecoin 1h/24h changes are redrawn from this band every tick.
    pub stable_change_band: f64,

    /// Relative 24h volume move per tick.
    pub volume_band: f64,
    /// Relative move of each new sparkline sample from the previous one.
    pub sample_band: f64,

    /// Symbols treated as stablecoins, matched case-insensitively.
    pub stablecoins: Vec<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            volatile_price_band: 0.01,
            stable_price_band: 0.0005,
            change_1h_band: 0.2,
            change_24h_band: 0.15,
            stable_change_band: 0.005,
            volume_band: 0.025,
            sample_band: 0.01,
            stablecoins: vec!["USDT".to_string()],
        }
    }
}

impl FeedConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_stablecoin(&self, symbol: &str) -> bool {
        self.stablecoins
            .iter()
            .any(|s| s.eq_ignore_ascii_case(symbol))
    }

    /// Price band that applies to `symbol`.
    pub fn price_band(&self, symbol: &str) -> f64 {
        if self.is_stablecoin(symbol) {
            self.stable_price_band
        } else {
            self.volatile_price_band
        }
    }
}
