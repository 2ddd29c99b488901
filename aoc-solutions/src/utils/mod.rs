//! Reusable building blocks for puzzle solutions.

pub mod dp_cache;
pub mod grid_search;
