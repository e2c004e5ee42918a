pub mod day_2;
pub mod day_5;
pub mod day_7;
pub mod day_9;
