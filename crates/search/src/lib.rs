//! Fuzzy food and restaurant search for FoodShare.
//!
//! This crate provides:
//! - Case-insensitive weighted edit distance
//! - A fixed table of cost models forgiving missing characters, extra
//!   characters and plain typos
//! - Dual-field (food + restaurant) matching with a distance tolerance
//! - Optional parallel scanning with rayon

mod distance;
mod error;
mod matcher;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::{best_distance, weighted_distance, WeightProfile, Weights};
pub use error::{Result, SearchError};
pub use matcher::{search, FoodQuery, MenuEntry, SearchResult};
