//! Console view of the asset store.
//!
//! Re-renders from [`AssetStore::view`] every time the store revision
//! changes. All display strings are derived on each render.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use market::{
    Asset, AssetStore, PriceMove, RollingSamples, SortDirection, SortKey, SparklineTrend,
    StoreView,
};
use tracing::{debug, warn};

use crate::format::{format_circulating_supply, format_currency, format_max_supply, format_percent};

const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const SUPPLY_CELLS: usize = 10;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewFormat {
    /// Full-screen table redrawn in place.
    Table,
    /// One JSON object per store change.
    Json,
}

impl ViewFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Table }
    }

    pub fn render(&self, view: &StoreView) -> Result<String> {
        match self {
            Self::Table => Ok(format!("{CLEAR}{}", render_table(view))),
            Self::Json => serde_json::to_string(view).context("serialize store view"),
        }
    }
}

/// Print the board once, then again after every store change.
///
/// Runs until the store is gone or the task is aborted.
pub async fn run_view(store: AssetStore, format: ViewFormat) {
    let mut changes = store.subscribe();

    loop {
        // Mark seen before reading so a concurrent change triggers a redraw.
        let _ = changes.borrow_and_update();
        let view = store.view();

        match format.render(&view) {
            Ok(frame) => println!("{frame}"),
            Err(e) => warn!(error = ?e, revision = view.revision, "failed to render view"),
        }
        debug!(revision = view.revision, "view rendered");

        if changes.changed().await.is_err() {
            break;
        }
    }
}

/// Table of all assets in store order.
pub fn render_table(view: &StoreView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Cryptocurrency Prices | sorted by {} {} | rev {}",
        view.sort_key, view.sort_direction, view.revision
    );
    if let Some(err) = &view.error {
        let _ = writeln!(out, "error: {err}");
    }

    let h = |label: &str, key: SortKey| header(label, key, view);
    let _ = writeln!(
        out,
        "{:>4} {:<20} {:>15} {:>9} {:>9} {:>9} {:>13} {:>13} {:>18} {:<10} {:>10}  Last 7 Days",
        h("#", SortKey::Rank),
        h("Name", SortKey::Name),
        h("Price", SortKey::Price),
        h("1h %", SortKey::PercentChange1h),
        h("24h %", SortKey::PercentChange24h),
        h("7d %", SortKey::PercentChange7d),
        h("Market Cap", SortKey::MarketCap),
        h("Volume(24h)", SortKey::Volume24h),
        h("Circulating", SortKey::CirculatingSupply),
        "Supply",
        h("Max", SortKey::MaxSupply),
    );

    for asset in &view.assets {
        let _ = writeln!(out, "{}", render_row(asset));
    }

    out
}

fn header(label: &str, key: SortKey, view: &StoreView) -> String {
    if view.sort_key != key {
        return label.to_string();
    }
    match view.sort_direction {
        SortDirection::Asc => format!("{label} ▲"),
        SortDirection::Desc => format!("{label} ▼"),
    }
}

fn render_row(asset: &Asset) -> String {
    let arrow = match asset.price_move() {
        PriceMove::Up => '↑',
        PriceMove::Down => '↓',
        PriceMove::Flat => ' ',
    };

    let colour = match asset.sparkline_trend() {
        SparklineTrend::Up => GREEN,
        SparklineTrend::Down => RED,
    };

    format!(
        "{:>4} {:<20} {:>14}{} {:>9} {:>9} {:>9} {:>13} {:>13} {:>18} {} {:>10}  {colour}{}{RESET}",
        asset.rank,
        format!("{} {}", asset.name, asset.symbol),
        format_currency(asset.price, 2),
        arrow,
        format_percent(asset.percent_change_1h),
        format_percent(asset.percent_change_24h),
        format_percent(asset.percent_change_7d),
        format_currency(asset.market_cap as f64, 0),
        format_currency(asset.volume_24h as f64, 0),
        format_circulating_supply(asset),
        supply_bar(asset),
        format_max_supply(asset),
        sparkline(&asset.samples),
    )
}

/// Circulating share of max supply as a fixed-width bar. Uncapped assets
/// show a full bar.
pub fn supply_bar(asset: &Asset) -> String {
    let ratio = asset.supply_ratio().unwrap_or(1.0).clamp(0.0, 1.0);
    let filled = (ratio * SUPPLY_CELLS as f64).round() as usize;

    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(SUPPLY_CELLS - filled));
    bar
}

/// One bar glyph per sample, scaled between the window's min and max.
pub fn sparkline(samples: &RollingSamples) -> String {
    let Some((lo, hi)) = samples.bounds() else {
        return String::new();
    };
    let range = hi - lo;

    samples
        .iter()
        .map(|v| {
            if range > 0.0 {
                let idx = ((v - lo) / range * (BARS.len() - 1) as f64).round() as usize;
                BARS[idx.min(BARS.len() - 1)]
            } else {
                BARS[BARS.len() / 2]
            }
        })
        .collect()
}
