//! Hardcoded starting dataset.
//!
//! Numbers are fixed; only the sparkline history is randomized, from a
//! trend-biased random walk clamped to [`SAMPLE_FLOOR`].

use rand::Rng;

use crate::rolling_window::RollingSamples;
use crate::types::Asset;

/// Length of every asset's rolling sample window.
pub const SAMPLE_LEN: usize = 30;

/// Random walk start value.
pub const SAMPLE_START: f64 = 100.0;

/// The random walk never drops below this value.
pub const SAMPLE_FLOOR: f64 = 50.0;

/// Shape of the generated sample history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkShape {
    Up,
    Down,
    Stable,
}

/// Generate `len` samples from a random walk of the given shape.
pub fn generate_samples<R: Rng>(len: usize, shape: WalkShape, rng: &mut R) -> RollingSamples {
    let mut value = SAMPLE_START;

    RollingSamples::new((0..len).map(|_| {
        match shape {
            WalkShape::Up => value += rng.random_range(-3.0..7.0),
            WalkShape::Down => value -= rng.random_range(-3.0..5.0),
            WalkShape::Stable => value += rng.random_range(-2.0..2.0),
        }
        value = value.max(SAMPLE_FLOOR);
        value
    }))
}

struct SeedRow {
    id: &'static str,
    rank: u32,
    name: &'static str,
    symbol: &'static str,
    price: f64,
    change_1h: f64,
    change_24h: f64,
    change_7d: f64,
    market_cap: u64,
    volume_24h: u64,
    circulating_supply: f64,
    max_supply: Option<f64>,
    shape: WalkShape,
}

const SEED: [SeedRow; 6] = [
    SeedRow {
        id: "bitcoin",
        rank: 1,
        name: "Bitcoin",
        symbol: "BTC",
        price: 93759.48,
        change_1h: 0.43,
        change_24h: 0.93,
        change_7d: 11.11,
        market_cap: 1_861_618_902_186,
        volume_24h: 43_874_950_947,
        circulating_supply: 19.85,
        max_supply: Some(21.0),
        shape: WalkShape::Up,
    },
    SeedRow {
        id: "ethereum",
        rank: 2,
        name: "Ethereum",
        symbol: "ETH",
        price: 1802.46,
        change_1h: 0.60,
        change_24h: 3.21,
        change_7d: 13.68,
        market_cap: 217_581_279_327,
        volume_24h: 23_547_469_307,
        circulating_supply: 120.71,
        max_supply: None,
        shape: WalkShape::Up,
    },
    SeedRow {
        id: "tether",
        rank: 3,
        name: "Tether",
        symbol: "USDT",
        price: 1.00,
        change_1h: 0.0,
        change_24h: 0.0,
        change_7d: 0.04,
        market_cap: 145_320_022_085,
        volume_24h: 92_288_882_007,
        circulating_supply: 145.27,
        max_supply: None,
        shape: WalkShape::Stable,
    },
    SeedRow {
        id: "xrp",
        rank: 4,
        name: "XRP",
        symbol: "XRP",
        price: 2.22,
        change_1h: 0.46,
        change_24h: 0.54,
        change_7d: 6.18,
        market_cap: 130_073_814_966,
        volume_24h: 5_131_481_491,
        circulating_supply: 58.39,
        max_supply: Some(100.0),
        shape: WalkShape::Up,
    },
    SeedRow {
        id: "bnb",
        rank: 5,
        name: "BNB",
        symbol: "BNB",
        price: 606.65,
        change_1h: 0.09,
        change_24h: -1.20,
        change_7d: 3.73,
        market_cap: 85_471_956_947,
        volume_24h: 1_874_281_784,
        circulating_supply: 140.89,
        max_supply: Some(200.0),
        shape: WalkShape::Up,
    },
    SeedRow {
        id: "solana",
        rank: 6,
        name: "Solana",
        symbol: "SOL",
        price: 151.51,
        change_1h: 0.53,
        change_24h: 1.26,
        change_7d: 14.74,
        market_cap: 78_381_958_631,
        volume_24h: 4_881_674_486,
        circulating_supply: 517.31,
        max_supply: None,
        shape: WalkShape::Up,
    },
];

/// Build the starting asset list in rank order.
pub fn initial_assets<R: Rng>(rng: &mut R) -> Vec<Asset> {
    SEED.iter()
        .map(|row| Asset {
            id: row.id.to_string(),
            rank: row.rank,
            name: row.name.to_string(),
            symbol: row.symbol.to_string(),
            price: row.price,
            previous_price: None,
            percent_change_1h: row.change_1h,
            percent_change_24h: row.change_24h,
            percent_change_7d: row.change_7d,
            market_cap: row.market_cap,
            volume_24h: row.volume_24h,
            circulating_supply: row.circulating_supply,
            max_supply: row.max_supply,
            samples: generate_samples(SAMPLE_LEN, row.shape, rng),
        })
        .collect()
}
