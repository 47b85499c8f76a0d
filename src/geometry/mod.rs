//! Procedural outlines and the measurements taken from them.

pub mod measure;
pub mod primitives;
pub mod smoothing;

pub use measure::{bbox, centroid, hectares, planar_area};
pub use primitives::{blobby, square, urban_block};
pub use smoothing::chaikin;
