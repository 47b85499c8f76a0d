use geo_synth::{FeatureCollection, Ring};

/// Every ring of every feature, outer boundaries and holes.
pub fn all_rings(collection: &FeatureCollection) -> Vec<&Ring> {
    collection
        .features
        .iter()
        .flat_map(|f| f.geometry.rings())
        .collect()
}

pub fn ids(collection: &FeatureCollection) -> Vec<&str> {
    collection
        .features
        .iter()
        .map(|f| f.properties.id.as_str())
        .collect()
}

/// A spread of queries touching every recognizer.
pub const SAMPLE_QUERIES: &[&str] = &[
    "",
    "water",
    "forest water",
    "crops near 10,20 count=3",
    "urban texas count:2",
    "farm land in california",
    "woodland near:-3.5,120 count=20",
    "city lake bbox:-1,-1,1,1 near 0,0",
    "something unrecognized entirely",
];
