//! Clustered placement of per-category features around a center point.

pub mod config;

use chrono::{DateTime, Utc};
use rand::RngCore;
use tracing::trace;

use crate::geometry::{blobby, chaikin, measure, square, urban_block};
use crate::model::{BBox, Category, Geometry, LatLng, Ring};
use crate::procgen::draw;

pub use config::{OverlapScope, PlacementConfig};

/// Start of the synthesized `updated_at` window (2023-11-14T22:13:20Z).
pub const TIMESTAMP_EPOCH_MS: i64 = 1_700_000_000_000;
/// Length of the synthesized `updated_at` window.
pub const TIMESTAMP_WINDOW_MS: f64 = 5e9;

/// Bounding boxes of everything placed so far.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    boxes: Vec<BBox>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlaps(&self, candidate: &BBox) -> bool {
        self.boxes.iter().any(|b| b.overlaps(candidate))
    }

    pub fn insert(&mut self, bbox: BBox) {
        self.boxes.push(bbox);
    }

    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// A placed feature before measurement and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFeature {
    pub category: Category,
    pub geometry: Geometry,
    pub id: String,
    pub value: u32,
    pub updated_at: DateTime<Utc>,
    /// Unrounded, in `[0.6, 1.0)`.
    pub confidence: f64,
    pub name: String,
}

/// Outline accepted by the attempt loop, with the position it was generated at.
struct Placement {
    lng: f64,
    lat: f64,
    ring: Ring,
}

/// Place one category's features in 1–2 jittered clusters around `center`.
///
/// Each feature makes up to `max_attempts` tries at a jittered position and keeps the
/// first outline whose bounding box misses everything in `occupancy`. Once
/// `forced_accept_after` tries have failed the next outline is kept regardless, so
/// overlap is discouraged rather than prevented.
pub fn place_features(
    category: Category,
    center: LatLng,
    count_hint: Option<u32>,
    config: &PlacementConfig,
    occupancy: &mut Occupancy,
    rng: &mut dyn RngCore,
) -> Vec<PlacedFeature> {
    let clusters = config
        .clusters
        .unwrap_or_else(|| 1 + (draw(rng) * 2.0).floor() as u32);
    let base_per_cluster = count_hint
        .or(config.features_per_cluster)
        .unwrap_or_else(|| 4 + (draw(rng) * 4.0).floor() as u32);

    let mut features = Vec::new();
    for c in 0..clusters {
        let cluster_lng = center.lng + (draw(rng) - 0.5) * config.cluster_spread_deg;
        let cluster_lat = center.lat + (draw(rng) - 0.5) * config.cluster_spread_deg;
        let per_cluster = base_per_cluster + (draw(rng) * 2.0).floor() as u32;

        for i in 0..per_cluster {
            let placement = place_outline(category, cluster_lng, cluster_lat, config, occupancy, rng);
            let geometry = vary_shape(category, placement, config, rng);
            let name = format!("{category} {}-{}", c + 1, i + 1);
            features.push(stamp(category, geometry, name, rng));
        }
    }
    features
}

/// Category-specific outline at `(lng, lat)`.
pub fn outline(category: Category, lng: f64, lat: f64, rng: &mut dyn RngCore) -> Ring {
    let (base, span) = category.size_range();
    let size = base + draw(rng) * span;
    match category {
        // Blocks pick their own size; the category size is still drawn.
        Category::Urban => urban_block(lng, lat, rng),
        Category::Crops => square(lng, lat, size),
        Category::Water | Category::Forest | Category::Generic => {
            chaikin(&blobby(lng, lat, size, rng), category.smoothing_passes())
        }
    }
}

fn place_outline(
    category: Category,
    cluster_lng: f64,
    cluster_lat: f64,
    config: &PlacementConfig,
    occupancy: &mut Occupancy,
    rng: &mut dyn RngCore,
) -> Placement {
    let max_attempts = config.max_attempts.max(1);
    let mut tried = 0;
    loop {
        let lng = cluster_lng + (draw(rng) - 0.5) * config.feature_jitter_deg;
        let lat = cluster_lat + (draw(rng) - 0.5) * config.feature_jitter_deg;
        let ring = outline(category, lng, lat, rng);
        let bounds = measure::bbox(ring.positions());
        tried += 1;

        let clear = !occupancy.overlaps(&bounds);
        if clear || tried > config.forced_accept_after || tried >= max_attempts {
            if !clear {
                trace!(%category, tried, "accepting overlapping placement");
            }
            occupancy.insert(bounds);
            return Placement { lng, lat, ring };
        }
    }
}

/// Occasionally punch an island into a water body, or give any feature a second part.
fn vary_shape(
    category: Category,
    placement: Placement,
    config: &PlacementConfig,
    rng: &mut dyn RngCore,
) -> Geometry {
    let Placement { lng, lat, ring } = placement;
    if category == Category::Water && draw(rng) > config.hole_threshold {
        let island = chaikin(&blobby(lng, lat, config.hole_radius_deg, rng), 1);
        Geometry::Polygon {
            coordinates: vec![ring, island],
        }
    } else if draw(rng) > config.multipart_threshold {
        let offset = 0.05 + draw(rng) * 0.05;
        let part = blobby(lng + offset, lat + offset, config.part_radius_deg, rng);
        Geometry::MultiPolygon {
            coordinates: vec![vec![ring], vec![part]],
        }
    } else {
        Geometry::polygon(ring)
    }
}

fn stamp(
    category: Category,
    geometry: Geometry,
    name: String,
    rng: &mut dyn RngCore,
) -> PlacedFeature {
    let id = format!("{category}-{}", (draw(rng) * 1e9).floor() as u64);
    let value = (draw(rng) * 100.0).round() as u32;
    let offset_ms = (draw(rng) * TIMESTAMP_WINDOW_MS).floor() as i64;
    let updated_at =
        DateTime::from_timestamp_millis(TIMESTAMP_EPOCH_MS + offset_ms).unwrap_or_default();
    let confidence = 0.6 + draw(rng) * 0.4;

    PlacedFeature {
        category,
        geometry,
        id,
        value,
        updated_at,
        confidence,
        name,
    }
}
