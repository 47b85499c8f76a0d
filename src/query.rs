//! Free-text query interpretation.
//!
//! Each recognizer runs independently over the normalized text: category keywords,
//! a named-region table, and the `near`, `count` and `bbox` key/value forms.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BBox, Category, LatLng};
use crate::procgen::normalize_query;

/// Bounds for the `count` hint.
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 20;

/// Named regions, scanned in order; the first name contained in the query wins.
pub const LOCATIONS: [(&str, LatLng); 6] = [
    ("california", LatLng::new(36.5, -119.5)),
    ("texas", LatLng::new(31.0, -99.0)),
    ("india", LatLng::new(22.5, 79.0)),
    ("europe", LatLng::new(50.0, 10.0)),
    ("sahara", LatLng::new(23.5, 13.0)),
    ("amazon", LatLng::new(-5.0, -63.0)),
];

const NUMBER: &str = r"(-?[0-9]+\.?[0-9]*)";

static CATEGORY_PATTERNS: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    Category::DETECTABLE
        .iter()
        .map(|&category| {
            let words = category.keywords().join("|");
            (category, Regex::new(&format!(r"(?-u:\b)(?:{words})(?-u:\b)")).unwrap())
        })
        .collect()
});

static NEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"near\s*[:=]?\s*{NUMBER},\s*{NUMBER}")).unwrap());
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"count\s*[:=]\s*([0-9]{1,2})").unwrap());
static BBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"bbox\s*[:=]\s*{NUMBER},\s*{NUMBER},\s*{NUMBER},\s*{NUMBER}"
    ))
    .unwrap()
});

/// Structured reading of a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Lowercased, trimmed query text.
    pub normalized: String,
    /// Never empty; `[Generic]` when no keyword matched.
    pub categories: Vec<Category>,
    pub center: Option<LatLng>,
    /// Always within `MIN_COUNT..=MAX_COUNT` when present.
    pub count: Option<u32>,
    pub bbox: Option<BBox>,
}

pub fn parse_query(query: &str) -> ParsedQuery {
    let normalized = normalize_query(query);
    let categories = detect_categories(&normalized);
    let center = parse_near(&normalized).or_else(|| lookup_location(&normalized));
    let count = parse_count(&normalized);
    let bbox = parse_bbox(&normalized);

    ParsedQuery {
        normalized,
        categories,
        center,
        count,
        bbox,
    }
}

/// Categories whose keywords appear in the text, in fixed priority order.
pub fn detect_categories(normalized: &str) -> Vec<Category> {
    let mut categories: Vec<Category> = CATEGORY_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(normalized))
        .map(|&(category, _)| category)
        .collect();
    if categories.is_empty() {
        categories.push(Category::Generic);
    }
    categories
}

pub fn lookup_location(normalized: &str) -> Option<LatLng> {
    LOCATIONS
        .iter()
        .find(|(name, _)| normalized.contains(name))
        .map(|&(_, center)| center)
}

/// `near:<lat>,<lng>`, `near=<lat>,<lng>` or `near <lat>,<lng>`.
pub fn parse_near(normalized: &str) -> Option<LatLng> {
    let caps = NEAR_RE.captures(normalized)?;
    let lat = caps[1].parse().ok()?;
    let lng = caps[2].parse().ok()?;
    Some(LatLng::new(lat, lng))
}

/// `count:<n>` or `count=<n>`, clamped into `MIN_COUNT..=MAX_COUNT`.
pub fn parse_count(normalized: &str) -> Option<u32> {
    let caps = COUNT_RE.captures(normalized)?;
    let n: u32 = caps[1].parse().ok()?;
    Some(n.clamp(MIN_COUNT, MAX_COUNT))
}

/// `bbox:<minLng>,<minLat>,<maxLng>,<maxLat>` (or with `=`).
pub fn parse_bbox(normalized: &str) -> Option<BBox> {
    let caps = BBOX_RE.captures(normalized)?;
    let mut values = [0.0f64; 4];
    for (slot, i) in values.iter_mut().zip(1..=4) {
        *slot = caps[i].parse().ok()?;
    }
    Some(BBox::from(values))
}
