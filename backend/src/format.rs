//! Display formatting. Pure functions of the raw numeric fields; nothing
//! here is stored back into the asset.

use market::Asset;

/// USD amount for the table.
///
/// Billions and millions are abbreviated (`$1.86B`, `$5.00M`). Amounts
/// whose magnitude is below 1 show 4 to 6 decimals, everything else exactly
/// `decimals`, with thousands separators. Negatives are prefixed `-$`.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1e9 {
        return format!("{sign}${:.2}B", abs / 1e9);
    }
    if abs >= 1e6 {
        return format!("{sign}${:.2}M", abs / 1e6);
    }

    // Sub-dollar precision is decided on magnitude, so -1234.5 keeps `decimals`.
    let (min, max) = if abs < 1.0 { (4, 6) } else { (decimals, decimals) };
    let body = group_thousands(&fixed_trimmed(abs, min, max));

    format!("{sign}${body}")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Circulating supply in millions, e.g. `19.85M BTC`.
pub fn format_circulating_supply(asset: &Asset) -> String {
    format!("{}M {}", format_number(asset.circulating_supply, 2), asset.symbol)
}

/// Max supply in millions, or `∞` when uncapped.
pub fn format_max_supply(asset: &Asset) -> String {
    match asset.max_supply {
        Some(max) => format!("{}M", format_number(max, 2)),
        None => "∞".to_string(),
    }
}

/// `max` decimals, then trailing zeros dropped down to `min`.
fn fixed_trimmed(value: f64, min: usize, max: usize) -> String {
    let mut s = format!("{value:.max$}");

    if let Some(dot) = s.find('.') {
        while s.len() > dot + 1 + min && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    s
}

fn group_thousands(s: &str) -> String {
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let mut grouped = String::with_capacity(s.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}
