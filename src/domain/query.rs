// src/domain/query.rs

use crate::domain::property::SearchParams;
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 24;
pub const MAX_LIMIT: usize = 50;

/// Turns raw query-string values into `SearchParams`.
///
/// Never fails: anything malformed falls back to a default. Text filters are
/// kept verbatim, case handling happens at match time.
pub fn normalize_query(query: &HashMap<String, String>) -> SearchParams {
    let text = |key: &str| query.get(key).filter(|v| !v.is_empty()).cloned();

    SearchParams {
        city: text("city"),
        state: text("state"),
        zip_code: text("zipCode"),
        limit: normalize_limit(query.get("limit").map(String::as_str)),
        offset: normalize_offset(query.get("offset").map(String::as_str)),
        property_type: text("propertyType"),
        ..SearchParams::default()
    }
}

/// Missing, unparsable or non-positive → 24, then capped at 50.
pub fn normalize_limit(raw: Option<&str>) -> usize {
    raw.and_then(parse_whole)
        .filter(|&n| n > 0)
        .map(|n| n.min(MAX_LIMIT as i128) as usize)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Missing, unparsable, zero or negative → 0. Huge values saturate, which
/// lands past the last page.
pub fn normalize_offset(raw: Option<&str>) -> usize {
    raw.and_then(parse_whole)
        .filter(|&n| n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .unwrap_or(0)
}

/// Whole part of a plain decimal like `12`, `-3` or `2.5`. Digit runs too long
/// for `u64` saturate instead of failing.
fn parse_whole(raw: &str) -> Option<i128> {
    let v = raw.trim();
    let (negative, digits) = match v.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, v.strip_prefix('+').unwrap_or(v)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = whole.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    });
    let magnitude = i128::from(magnitude);

    Some(if negative { -magnitude } else { magnitude })
}
