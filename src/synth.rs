//! Query-to-FeatureCollection synthesis.

use rand::RngCore;
use tracing::debug;

use crate::geometry::measure::{self, round_to};
use crate::model::{
    BBox, ColorTable, Feature, FeatureCollection, FeatureProperties, LatLng, Metadata,
};
use crate::placement::{self, Occupancy, OverlapScope, PlacedFeature, PlacementConfig};
use crate::procgen::{draw, make_rng, seed_from_query};
use crate::query::parse_query;

/// Configuration for a synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    pub placement: PlacementConfig,
    /// Apply a query's `bbox` as a centroid filter.
    pub apply_bbox_filter: bool,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            placement: PlacementConfig::default(),
            apply_bbox_filter: true,
        }
    }
}

/// Synthesize a collection for `query` with the default configuration.
pub fn synthesize(query: &str) -> FeatureCollection {
    synthesize_with(query, &SynthConfig::default())
}

/// Synthesize a collection for `query`. Identical input always yields identical output.
pub fn synthesize_with(query: &str, config: &SynthConfig) -> FeatureCollection {
    let seed = seed_from_query(query);
    let mut rng = make_rng(query);
    let parsed = parse_query(query);
    let center = parsed.center.unwrap_or_else(|| random_center(&mut rng));

    let mut occupancy = Occupancy::new();
    let mut features = Vec::new();
    for &category in &parsed.categories {
        if config.placement.overlap_scope == OverlapScope::Category {
            occupancy.clear();
        }
        let placed = placement::place_features(
            category,
            center,
            parsed.count,
            &config.placement,
            &mut occupancy,
            &mut rng,
        );
        features.extend(placed.into_iter().map(assemble_feature));
    }

    let generated = features.len();
    if let Some(bbox) = parsed.bbox.filter(|_| config.apply_bbox_filter) {
        features = filter_by_bbox(features, &bbox);
    }

    debug!(
        seed,
        query = %parsed.normalized,
        categories = ?parsed.categories,
        generated,
        returned = features.len(),
        "synthesized feature collection"
    );

    FeatureCollection {
        features,
        metadata: Metadata {
            center,
            query: parsed.normalized,
            categories: parsed.categories,
            color_by_category: ColorTable,
        },
    }
}

/// Longitude in `[-100, 100)`, then latitude in `[-40, 40)`.
fn random_center(rng: &mut dyn RngCore) -> LatLng {
    let lng = -100.0 + draw(rng) * 200.0;
    let lat = -40.0 + draw(rng) * 80.0;
    LatLng::new(lat, lng)
}

/// Measure a placed feature's outer ring and attach its colour.
pub fn assemble_feature(placed: PlacedFeature) -> Feature {
    let outer = placed.geometry.outer_ring().positions();
    let centroid = measure::centroid(outer);

    let properties = FeatureProperties {
        id: placed.id,
        category: placed.category,
        kind: placed.category,
        value: placed.value,
        area_deg2: round_to(measure::planar_area(outer), 5),
        area_ha: round_to(measure::hectares(outer), 1),
        centroid_lat_lng: LatLng::new(round_to(centroid.lat, 6), round_to(centroid.lng, 6)),
        bbox: measure::bbox(outer),
        updated_at: placed.updated_at,
        confidence: round_to(placed.confidence, 2),
        name: placed.name,
        color: ColorTable.get(placed.category),
    };

    Feature {
        geometry: placed.geometry,
        properties,
    }
}

/// Keep features whose outer-ring vertex average lies inside `bbox`. A filter that
/// would drop everything is ignored and the input comes back unchanged.
pub fn filter_by_bbox(features: Vec<Feature>, bbox: &BBox) -> Vec<Feature> {
    let inside = |f: &Feature| bbox.contains(measure::centroid(f.geometry.outer_ring().positions()));
    if !features.iter().any(inside) {
        return features;
    }
    features.into_iter().filter(|f| inside(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Geometry, Ring};
    use crate::procgen::Mulberry32;
    use chrono::DateTime;

    fn placed_at(lng: f64, lat: f64) -> PlacedFeature {
        PlacedFeature {
            category: Category::Water,
            geometry: Geometry::polygon(crate::geometry::square(lng, lat, 0.1)),
            id: "water-1".to_string(),
            value: 50,
            updated_at: DateTime::from_timestamp_millis(placement::TIMESTAMP_EPOCH_MS).unwrap(),
            confidence: 0.87654,
            name: "water 1-1".to_string(),
        }
    }

    #[test]
    fn assemble_rounds_and_colors() {
        let feature = assemble_feature(placed_at(1.0, 2.0));
        let p = &feature.properties;
        assert_eq!(p.kind, Category::Water);
        assert_eq!(p.color, "#1e88e5");
        assert_eq!(p.confidence, 0.88);
        assert_eq!(p.area_deg2, 0.01);
        assert_eq!(p.bbox, BBox::new(0.95, 1.95, 1.05, 2.05));
    }

    #[test]
    fn assemble_measures_first_part_of_multipolygon() {
        let mut placed = placed_at(0.0, 0.0);
        let far = Ring::close(vec![[10.0, 10.0], [11.0, 10.0], [11.0, 11.0], [10.0, 11.0]]);
        placed.geometry = Geometry::MultiPolygon {
            coordinates: vec![vec![crate::geometry::square(0.0, 0.0, 0.1)], vec![far]],
        };
        let feature = assemble_feature(placed);
        assert!(feature.properties.bbox.max_lng < 1.0);
    }

    #[test]
    fn bbox_filter_keeps_inside_features() {
        let features = vec![
            assemble_feature(placed_at(0.0, 0.0)),
            assemble_feature(placed_at(5.0, 5.0)),
        ];
        let kept = filter_by_bbox(features, &BBox::new(4.0, 4.0, 6.0, 6.0));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].properties.bbox.min_lng, 4.95);
    }

    #[test]
    fn bbox_filter_never_empties_the_list() {
        let features = vec![
            assemble_feature(placed_at(0.0, 0.0)),
            assemble_feature(placed_at(5.0, 5.0)),
        ];
        let kept = filter_by_bbox(features.clone(), &BBox::new(100.0, 50.0, 101.0, 51.0));
        assert_eq!(kept, features);
    }

    #[test]
    fn random_center_ranges() {
        let mut rng = Mulberry32::new(17);
        for _ in 0..1000 {
            let c = random_center(&mut rng);
            assert!((-100.0..100.0).contains(&c.lng));
            assert!((-40.0..40.0).contains(&c.lat));
        }
    }

    #[test]
    fn center_is_first_draw_of_query_generator() {
        let mut rng = make_rng("  Lake ");
        let expected = random_center(&mut rng);
        assert_eq!(synthesize("lake").metadata.center, expected);
    }

    #[test]
    fn explicit_center_is_used() {
        let collection = synthesize("crops near 10,20 count=3");
        assert_eq!(collection.metadata.center, LatLng::new(10.0, 20.0));
        assert_eq!(collection.metadata.categories, vec![Category::Crops]);
    }

    #[test]
    fn category_scope_is_deterministic() {
        let config = SynthConfig {
            placement: PlacementConfig {
                overlap_scope: OverlapScope::Category,
                ..PlacementConfig::default()
            },
            ..SynthConfig::default()
        };
        let a = synthesize_with("forest water", &config);
        let b = synthesize_with("forest water", &config);
        assert_eq!(a, b);
    }

    #[test]
    fn disabling_filter_keeps_everything() {
        let query = "water near 0,0 bbox:0,0,0.01,0.01";
        let unfiltered = synthesize_with(
            query,
            &SynthConfig {
                apply_bbox_filter: false,
                ..SynthConfig::default()
            },
        );
        let filtered = synthesize(query);
        assert!(unfiltered.features.len() >= filtered.features.len());
        assert!(!filtered.features.is_empty());
    }
}
