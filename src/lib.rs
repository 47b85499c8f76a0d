pub mod error;
pub mod geometry;
pub mod model;
pub mod placement;
pub mod procgen;
pub mod query;
pub mod server;
pub mod synth;

pub use error::{Error, Result};
pub use model::{
    BBox, Category, Feature, FeatureCollection, FeatureProperties, Geometry, LatLng, Ring,
};
pub use query::{ParsedQuery, parse_query};
pub use synth::{SynthConfig, synthesize, synthesize_with};
