//! Planar measurements over ring vertices.
//!
//! Areas treat degrees as planar coordinates; the hectare estimate projects with a
//! local equirectangular scale at the ring's vertex-average centroid. Neither is a
//! geodesic computation.

use std::f64::consts::PI;

use crate::model::{BBox, LatLng, Position};

/// Meters per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Extents over every vertex. An empty slice yields an inverted infinite box.
pub fn bbox(points: &[Position]) -> BBox {
    points.iter().fold(
        BBox::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        ),
        |b, &[lng, lat]| {
            BBox::new(
                b.min_lng.min(lng),
                b.min_lat.min(lat),
                b.max_lng.max(lng),
                b.max_lat.max(lat),
            )
        },
    )
}

/// Shoelace area in square degrees. Rings shorter than 4 points have no area.
pub fn planar_area(points: &[Position]) -> f64 {
    if points.len() < 4 {
        return 0.0;
    }
    shoelace(points.iter().copied())
}

/// Approximate area in hectares.
pub fn hectares(points: &[Position]) -> f64 {
    if points.len() < 4 {
        return 0.0;
    }
    let center = centroid(points);
    let meters_per_lng = (center.lat * PI / 180.0).cos() * METERS_PER_DEGREE;
    let projected = points
        .iter()
        .map(|&[lng, lat]| [lng * meters_per_lng, lat * METERS_PER_DEGREE]);
    shoelace(projected) / SQUARE_METERS_PER_HECTARE
}

/// Arithmetic mean of every vertex, the closing vertex included.
pub fn centroid(points: &[Position]) -> LatLng {
    let n = points.len() as f64;
    let (sum_lng, sum_lat) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &[lng, lat]| (sx + lng, sy + lat));
    LatLng::new(sum_lat / n, sum_lng / n)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn shoelace(points: impl Iterator<Item = Position>) -> f64 {
    let mut area = 0.0;
    let mut prev: Option<Position> = None;
    for p in points {
        if let Some([x1, y1]) = prev {
            area += x1 * p[1] - p[0] * y1;
        }
        prev = Some(p);
    }
    (area / 2.0).abs()
}
