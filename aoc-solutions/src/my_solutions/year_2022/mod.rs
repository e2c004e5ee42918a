pub mod day_23;
