//! Advent of Code puzzle solutions with automatic registration
//!
//! [`utils`] holds the toolkit the puzzles are built on: coordinates and
//! directions, grids parsed from text, a priority queue with decrease-key, an
//! exact rational matrix reducer and the Intcode virtual machine.
//!
//! The solutions themselves are organized by year. Each one uses the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
