pub mod day_13;
pub mod day_18;
