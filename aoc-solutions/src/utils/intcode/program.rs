use super::IntcodeError;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

/// An immutable, cheaply cloned Intcode image
///
/// The text form is one line of comma-separated signed decimals. Only commas
/// separate words; surrounding whitespace is a parse error, so callers trim
/// puzzle input first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(Arc<[i64]>);

impl Program {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for Program {
    fn from(words: Vec<i64>) -> Self {
        Self(words.into())
    }
}

impl Deref for Program {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl FromStr for Program {
    type Err = IntcodeError;

    fn from_str(s: &str) -> Result<Self, IntcodeError> {
        s.split(',')
            .enumerate()
            .map(|(index, word)| {
                word.parse::<i64>()
                    .map_err(|source| IntcodeError::Parse { index, source })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}
