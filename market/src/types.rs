use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::rolling_window::RollingSamples;

/// One tracked instrument as held by the store and emitted by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Stable identity, never changes for the lifetime of the asset.
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,

    /// Current price in USD.
    pub price: f64,
    /// Price before the most recent change. Absent until the first change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<f64>,

    /// Signed percent change figures.
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,

    pub market_cap: u64,
    pub volume_24h: u64,

    /// Supply figures in millions of units. `None` max supply means uncapped.
    pub circulating_supply: f64,
    pub max_supply: Option<f64>,

    /// Trailing price samples for the sparkline.
    #[serde(rename = "chartData")]
    pub samples: RollingSamples,
}

/// Direction of the last recorded price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceMove {
    Up,
    Down,
    Flat,
}

/// Colour hint for the sparkline, taken from the 7d change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SparklineTrend {
    Up,
    Down,
}

impl Asset {
    pub fn price_move(&self) -> PriceMove {
        match self.previous_price {
            Some(prev) if self.price > prev => PriceMove::Up,
            Some(prev) if self.price < prev => PriceMove::Down,
            _ => PriceMove::Flat,
        }
    }

    pub fn sparkline_trend(&self) -> SparklineTrend {
        if self.percent_change_7d >= 0.0 {
            SparklineTrend::Up
        } else {
            SparklineTrend::Down
        }
    }

    /// Share of max supply already in circulation, for capped assets.
    pub fn supply_ratio(&self) -> Option<f64> {
        self.max_supply
            .filter(|max| *max > 0.0)
            .map(|max| self.circulating_supply / max)
    }
}

/// Sparse update for a single asset.
///
/// Every `Some` field is overlaid onto the stored asset; `None` means the
/// field was not supplied. `max_supply: Some(None)` sets the asset uncapped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetPatch {
    pub id: String,
    pub rank: Option<u32>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub market_cap: Option<u64>,
    pub volume_24h: Option<u64>,
    pub circulating_supply: Option<f64>,
    pub max_supply: Option<Option<f64>>,
    pub samples: Option<RollingSamples>,
}

impl AssetPatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(MarketError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Sortable asset attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    #[default]
    Rank,
    Name,
    Symbol,
    Price,
    PreviousPrice,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
    MarketCap,
    Volume24h,
    CirculatingSupply,
    MaxSupply,
}

impl SortKey {
    pub const ALL: [SortKey; 13] = [
        Self::Id,
        Self::Rank,
        Self::Name,
        Self::Symbol,
        Self::Price,
        Self::PreviousPrice,
        Self::PercentChange1h,
        Self::PercentChange24h,
        Self::PercentChange7d,
        Self::MarketCap,
        Self::Volume24h,
        Self::CirculatingSupply,
        Self::MaxSupply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Rank => "rank",
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Price => "price",
            Self::PreviousPrice => "previousPrice",
            Self::PercentChange1h => "percentChange1h",
            Self::PercentChange24h => "percentChange24h",
            Self::PercentChange7d => "percentChange7d",
            Self::MarketCap => "marketCap",
            Self::Volume24h => "volume24h",
            Self::CirculatingSupply => "circulatingSupply",
            Self::MaxSupply => "maxSupply",
        }
    }

    /// Ascending comparison of `a` and `b` on this attribute.
    ///
    /// Floats use `total_cmp`, strings compare lexically and optional
    /// fields order absent before present.
    pub fn compare(&self, a: &Asset, b: &Asset) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Rank => a.rank.cmp(&b.rank),
            Self::Name => a.name.cmp(&b.name),
            Self::Symbol => a.symbol.cmp(&b.symbol),
            Self::Price => a.price.total_cmp(&b.price),
            Self::PreviousPrice => cmp_optional(a.previous_price, b.previous_price),
            Self::PercentChange1h => a.percent_change_1h.total_cmp(&b.percent_change_1h),
            Self::PercentChange24h => a.percent_change_24h.total_cmp(&b.percent_change_24h),
            Self::PercentChange7d => a.percent_change_7d.total_cmp(&b.percent_change_7d),
            Self::MarketCap => a.market_cap.cmp(&b.market_cap),
            Self::Volume24h => a.volume_24h.cmp(&b.volume_24h),
            Self::CirculatingSupply => a.circulating_supply.total_cmp(&b.circulating_supply),
            Self::MaxSupply => cmp_optional(a.max_supply, b.max_supply),
        }
    }
}

fn cmp_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MarketError;

    /// Accepts camelCase (`marketCap`) and snake_case (`market_cap`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|k| k.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| MarketError::UnknownSortKey(s.to_string()))
    }
}

/// Loading status slot for a future async source. The simulator never sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}
