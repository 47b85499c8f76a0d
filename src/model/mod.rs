#[macro_use]
mod macros;

pub mod category;
pub mod feature;
pub mod geometry;

pub use category::Category;
pub use feature::{ColorTable, Feature, FeatureCollection, FeatureProperties, Metadata};
pub use geometry::{BBox, Geometry, LatLng, Position, Ring};
