//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains the shared search utilities and the puzzle solutions
//! built on them, organized by year. Each solution uses the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
