pub mod day_11;
pub mod day_13;
