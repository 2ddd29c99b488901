pub mod day_15;
