//! The Intcode virtual machine
//!
//! A program is a list of integers that doubles as the machine's initial
//! memory. Each instruction word encodes an opcode in its two lowest decimal
//! digits and one addressing mode per parameter in the digits above them.
//!
//! | Op | Effect                          |
//! |----|---------------------------------|
//! | 1  | `c <- a + b`                    |
//! | 2  | `c <- a * b`                    |
//! | 3  | `a <- input`                    |
//! | 4  | output `a`                      |
//! | 5  | jump to `b` if `a != 0`         |
//! | 6  | jump to `b` if `a == 0`         |
//! | 7  | `c <- (a < b)`                  |
//! | 8  | `c <- (a == b)`                 |
//! | 9  | relative base `+= a`            |
//! | 99 | halt                            |
//!
//! Modes are 0 (position), 1 (immediate, not writable) and 2 (relative to the
//! relative base).
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::intcode::Intcode;
//!
//! let mut vm: Intcode = "3,9,8,9,10,9,4,9,99,-1,8".parse().unwrap();
//! assert_eq!(vm.run([8]).unwrap(), vec![1]);
//!
//! vm.reset();
//! assert_eq!(vm.run([7]).unwrap(), vec![0]);
//! ```
//!
//! Machines can also be driven one output at a time, which is how several of
//! them are chained together:
//!
//! ```rust
//! use aoc_solutions::utils::intcode::{Intcode, State};
//!
//! // Doubles every input until it reads a zero
//! let mut vm: Intcode = "3,15,1006,15,14,1002,15,2,16,4,16,1105,1,0,99"
//!     .parse()
//!     .unwrap();
//!
//! vm.add_input(21);
//! assert_eq!(vm.resume().unwrap(), State::Output(42));
//! assert_eq!(vm.resume().unwrap(), State::NeedsInput);
//! vm.add_input(0);
//! assert_eq!(vm.resume().unwrap(), State::Halted);
//! ```

mod io;
mod machine;
mod program;

pub use io::{Io, QueueIo};
pub use machine::{Generate, Intcode, State, Step};
pub use program::Program;

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntcodeError {
    #[error("word {index} of the program is not an integer: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("negative address {addr}")]
    Address { addr: i64 },
    #[error("invalid parameter mode {mode} at {ip}")]
    InvalidMode { mode: i64, ip: usize },
    #[error("unknown opcode {opcode} at {ip}")]
    UnknownOpcode { opcode: i64, ip: usize },
    #[error("input instruction at {ip} has nothing to read")]
    InputUnderflow { ip: usize },
    #[error("arithmetic overflow at {ip}")]
    Overflow { ip: usize },
}

#[cfg(test)]
mod tests;
