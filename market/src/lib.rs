//! Simulated crypto market: seed data, a timer-driven price feed and the
//! in-memory asset store it publishes into.

pub mod error;
pub mod feed;
pub mod rolling_window;
pub mod seed;
pub mod store;
pub mod types;

pub use error::MarketError;
pub use feed::{FeedConfig, FeedHandle, FeedSimulator, Jitter, RngJitter};
pub use rolling_window::RollingSamples;
pub use store::{AssetStore, StoreView};
pub use types::{Asset, AssetPatch, LoadStatus, PriceMove, SortDirection, SortKey, SparklineTrend};
