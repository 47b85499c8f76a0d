use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::category::Category;
use super::geometry::{BBox, Geometry, LatLng};

/// Properties attached to every synthesized feature, in wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureProperties {
    pub id: String,
    pub category: Category,
    /// Mirrors `category`; map clients style on `type`.
    #[serde(rename = "type")]
    pub kind: Category,
    /// Score in `0..=100`.
    pub value: u32,
    /// Planar shoelace area in square degrees.
    pub area_deg2: f64,
    /// Equirectangular area estimate in hectares.
    pub area_ha: f64,
    pub centroid_lat_lng: LatLng,
    pub bbox: BBox,
    #[serde(serialize_with = "serialize_millis")]
    pub updated_at: DateTime<Utc>,
    /// Score in `0.6..=1.0`.
    pub confidence: f64,
    pub name: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub center: LatLng,
    pub query: String,
    pub categories: Vec<Category>,
    pub color_by_category: ColorTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
    pub metadata: Metadata,
}

/// The fixed category to colour mapping, serialized as an ordered JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorTable;

impl ColorTable {
    pub fn get(&self, category: Category) -> &'static str {
        category.color()
    }
}

impl Serialize for ColorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            map.serialize_entry(category.as_str(), category.color())?;
        }
        map.end()
    }
}

/// ISO-8601 with exactly three fractional digits and a `Z` suffix.
fn serialize_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
