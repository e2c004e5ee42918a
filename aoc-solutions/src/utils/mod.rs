//! Building blocks shared by the solutions

pub mod grid;
pub mod intcode;
pub mod matrix;
pub mod point;
pub mod priority_queue;
