//! Seed derivation and the deterministic generator every synthesis pass draws from.

pub mod rng;
pub mod seed;

pub use rng::{Mulberry32, draw};
pub use seed::{make_rng, normalize_query, seed_from_query};
