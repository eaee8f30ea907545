//! Field-level merge rules shared by snapshot and patch application.

use crate::types::{Asset, AssetPatch};

/// Merge a complete update into `existing`.
///
/// Every field comes from `update` except the previous price, which becomes
/// the existing price when the price moved and is kept as-is otherwise.
pub fn merge_update(existing: &Asset, update: &Asset) -> Asset {
    let previous_price = if existing.price != update.price {
        Some(existing.price)
    } else {
        existing.previous_price
    };

    Asset {
        previous_price,
        ..update.clone()
    }
}

/// Overlay the supplied fields of `patch` onto `existing`.
///
/// A supplied price that differs from the current one records the current
/// price as previous, overriding any previous price carried in the patch.
/// Zero is a valid price here.
pub fn overlay_patch(existing: &mut Asset, patch: AssetPatch) {
    let AssetPatch {
        id: _,
        rank,
        name,
        symbol,
        price,
        previous_price,
        percent_change_1h,
        percent_change_24h,
        percent_change_7d,
        market_cap,
        volume_24h,
        circulating_supply,
        max_supply,
        samples,
    } = patch;

    let old_price = existing.price;

    if let Some(v) = rank {
        existing.rank = v;
    }
    if let Some(v) = name {
        existing.name = v;
    }
    if let Some(v) = symbol {
        existing.symbol = v;
    }
    if let Some(v) = previous_price {
        existing.previous_price = Some(v);
    }
    if let Some(v) = percent_change_1h {
        existing.percent_change_1h = v;
    }
    if let Some(v) = percent_change_24h {
        existing.percent_change_24h = v;
    }
    if let Some(v) = percent_change_7d {
        existing.percent_change_7d = v;
    }
    if let Some(v) = market_cap {
        existing.market_cap = v;
    }
    if let Some(v) = volume_24h {
        existing.volume_24h = v;
    }
    if let Some(v) = circulating_supply {
        existing.circulating_supply = v;
    }
    if let Some(v) = max_supply {
        existing.max_supply = v;
    }
    if let Some(v) = samples {
        existing.samples = v;
    }

    if let Some(p) = price {
        existing.price = p;
        if p != old_price {
            existing.previous_price = Some(old_price);
        }
    }
}
