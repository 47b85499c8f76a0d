use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair in degrees, GeoJSON axis order.
pub type Position = [f64; 2];

// ---------------------------------------------------------------------------
// LatLng
// ---------------------------------------------------------------------------

/// A point in latitude-first order. Serializes as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

// ---------------------------------------------------------------------------
// BBox
// ---------------------------------------------------------------------------

/// Axis-aligned box. Serializes as `[minLng, minLat, maxLng, maxLat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", from = "[f64; 4]")]
pub struct BBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BBox {
    pub const fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Self {
        Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        }
    }

    /// Inclusive test: boxes that only touch count as overlapping.
    pub fn overlaps(&self, other: &BBox) -> bool {
        !(self.max_lng < other.min_lng
            || self.min_lng > other.max_lng
            || self.max_lat < other.min_lat
            || self.min_lat > other.max_lat)
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lng >= self.min_lng
            && point.lng <= self.max_lng
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        [b.min_lng, b.min_lat, b.max_lng, b.max_lat]
    }
}

impl From<[f64; 4]> for BBox {
    fn from([min_lng, min_lat, max_lng, max_lat]: [f64; 4]) -> Self {
        Self::new(min_lng, min_lat, max_lng, max_lat)
    }
}

// ---------------------------------------------------------------------------
// Ring
// ---------------------------------------------------------------------------

/// A closed polygon boundary: the first position is repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<Position>);

impl Ring {
    /// Close an open vertex list by repeating its first vertex.
    pub fn close(mut points: Vec<Position>) -> Self {
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Ring(points)
    }

    /// Wrap positions that already end on their first vertex.
    pub fn from_closed(points: Vec<Position>) -> Self {
        debug_assert!(points.first() == points.last(), "ring is not closed");
        Ring(points)
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.0.len() >= 4 && self.0.first() == self.0.last()
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// GeoJSON polygonal geometry. The first ring of a polygon is its outer boundary,
/// any further rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    pub fn polygon(outer: Ring) -> Self {
        Geometry::Polygon {
            coordinates: vec![outer],
        }
    }

    /// Outer ring of the polygon, or of the first part of a multipolygon.
    pub fn outer_ring(&self) -> &Ring {
        match self {
            Geometry::Polygon { coordinates } => &coordinates[0],
            Geometry::MultiPolygon { coordinates } => &coordinates[0][0],
        }
    }

    /// Every ring in the geometry, outer boundaries and holes alike.
    pub fn rings(&self) -> Vec<&Ring> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.iter().collect(),
            Geometry::MultiPolygon { coordinates } => coordinates.iter().flatten().collect(),
        }
    }

    pub fn hole_count(&self) -> usize {
        match self {
            Geometry::Polygon { coordinates } => coordinates.len().saturating_sub(1),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .map(|part| part.len().saturating_sub(1))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Ring {
        Ring::close(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    #[test]
    fn close_repeats_first_vertex() {
        let ring = unit_square();
        assert_eq!(ring.len(), 5);
        assert!(ring.is_closed());
    }

    #[test]
    fn short_ring_is_not_closed() {
        let ring = Ring::close(vec![[0.0, 0.0], [1.0, 0.0]]);
        assert!(!ring.is_closed());
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = BBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BBox::new(1.0, 1.0, 2.0, 2.0);
        let c = BBox::new(1.5, 0.0, 2.0, 1.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = BBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.contains(LatLng::new(1.0, 0.0)));
        assert!(!b.contains(LatLng::new(1.01, 0.5)));
    }

    #[test]
    fn geometry_serializes_as_geojson() {
        let geom = Geometry::polygon(unit_square());
        let json = serde_json::to_value(&geom).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"][0][4], serde_json::json!([0.0, 0.0]));
    }

    #[test]
    fn multipolygon_outer_ring_is_first_part() {
        let far = Ring::close(vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]);
        let geom = Geometry::MultiPolygon {
            coordinates: vec![vec![unit_square()], vec![far]],
        };
        assert_eq!(geom.outer_ring(), &unit_square());
        assert_eq!(geom.rings().len(), 2);
        assert_eq!(geom.hole_count(), 0);
    }

    #[test]
    fn lat_lng_serializes_latitude_first() {
        let json = serde_json::to_value(LatLng::new(10.0, 20.0)).unwrap();
        assert_eq!(json, serde_json::json!([10.0, 20.0]));
    }

    #[test]
    fn bbox_serializes_as_array() {
        let json = serde_json::to_value(BBox::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, serde_json::json!([1.0, 2.0, 3.0, 4.0]));
    }
}
