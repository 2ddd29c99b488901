//! Puzzle solutions, one module per year.

pub mod year_2016;
pub mod year_2021;
pub mod year_2022;
pub mod year_2024;
