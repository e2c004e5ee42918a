//! Exact Gaussian elimination over rationals.
//!
//! A [`Matrix`] is an augmented system: every row holds the coefficients of
//! the unknowns followed by the right-hand side in the last column.
//!
//! ```rust
//! use aoc_solutions::utils::matrix::Matrix;
//! use num_rational::BigRational;
//!
//! let mut m = Matrix::from_integers([[2, 1, 8], [1, 3, 13]]).unwrap();
//! let x = m.solve_gaussian().unwrap();
//! assert_eq!(x[0], BigRational::new(11.into(), 5.into()));
//! assert_eq!(x[1], BigRational::new(18.into(), 5.into()));
//! ```
//!
//! Reduction never fails. A system with no solution shows up as a row of
//! zero coefficients with a nonzero right-hand side, which
//! [`Matrix::inconsistent_row`] reports; only the `solve_*` methods turn it
//! into an error.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("rows need at least a right-hand side column")]
    NoColumns,
    #[error("row {row} reduces to 0 = nonzero; the system has no solution")]
    Inconsistent { row: usize },
    #[error("system is underdetermined; free variables {free:?}")]
    Underdetermined { free: BTreeSet<usize> },
    #[error("variable {column} does not exist in a system of {unknowns} unknowns")]
    VariableOutOfRange { column: usize, unknowns: usize },
}

/// Number of zero cells before the first nonzero one; `row.len()` for a zero row
pub fn num_leading_zeros(row: &[BigRational]) -> usize {
    row.iter().position(|v| !v.is_zero()).unwrap_or(row.len())
}

/// First row whose leading-zero count does not exceed the row above it.
///
/// All-zero rows never break echelon form. `None` means `rows` is already in
/// row-echelon form.
pub fn get_non_echelon_row(rows: &[Vec<BigRational>]) -> Option<usize> {
    let mut prev = rows.first().map(|row| num_leading_zeros(row))?;
    for (i, row) in rows.iter().enumerate().skip(1) {
        let cur = num_leading_zeros(row);
        if cur < row.len() && cur <= prev {
            return Some(i);
        }
        prev = cur;
    }
    None
}

/// `target -= factor * source`
fn sub_scaled(target: &mut [BigRational], source: &[BigRational], factor: &BigRational) {
    for (t, s) in target.iter_mut().zip(source) {
        *t -= factor * s;
    }
}

/// An augmented matrix of exact rationals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<BigRational>>,
}

impl Matrix {
    /// Build from rows that must all have the same, nonzero length
    pub fn new(rows: Vec<Vec<BigRational>>) -> Result<Self, MatrixError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if expected == 0 {
                return Err(MatrixError::NoColumns);
            }
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected,
                    found: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn from_integers<I, R, V>(rows: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<BigInt>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| BigRational::from_integer(v.into()))
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    pub fn rows(&self) -> &[Vec<BigRational>] {
        &self.rows
    }

    /// Number of unknowns, i.e. columns minus the right-hand side
    pub fn unknowns(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len() - 1)
    }

    /// Bring the matrix to row-echelon form in place
    pub fn row_echelon(&mut self) {
        loop {
            self.rows.sort_by_key(|row| num_leading_zeros(row));
            let Some(i) = get_non_echelon_row(&self.rows) else {
                break;
            };

            let col = num_leading_zeros(&self.rows[i]);
            let pivot_row = self.rows[i - 1].clone();
            let factor = &self.rows[i][col] / &pivot_row[col];
            sub_scaled(&mut self.rows[i], &pivot_row, &factor);
        }
    }

    /// Bring the matrix to reduced row-echelon form in place
    pub fn row_reduce(&mut self) {
        self.row_echelon();

        let unknowns = self.unknowns();
        for r in 0..self.rows.len() {
            let col = num_leading_zeros(&self.rows[r]);
            if col == self.rows[r].len() {
                break;
            }

            let pivot = self.rows[r][col].clone();
            if !pivot.is_one() {
                for v in self.rows[r].iter_mut() {
                    *v /= &pivot;
                }
            }
            if col == unknowns {
                continue;
            }

            let pivot_row = self.rows[r].clone();
            for above in self.rows[..r].iter_mut() {
                let factor = above[col].clone();
                if !factor.is_zero() {
                    sub_scaled(above, &pivot_row, &factor);
                }
            }
        }
    }

    /// Pivot column -> row holding it, for a matrix in echelon form
    pub fn pivots(&self) -> BTreeMap<usize, usize> {
        let unknowns = self.unknowns();
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(r, row)| {
                let col = num_leading_zeros(row);
                (col < unknowns).then_some((col, r))
            })
            .collect()
    }

    /// Coefficient columns without a pivot, for a matrix in echelon form
    pub fn find_free(&self) -> BTreeSet<usize> {
        let pivots = self.pivots();
        (0..self.unknowns())
            .filter(|col| !pivots.contains_key(col))
            .collect()
    }

    /// First row reading `0 = c` with `c != 0`
    pub fn inconsistent_row(&self) -> Option<usize> {
        let unknowns = self.unknowns();
        self.rows
            .iter()
            .position(|row| num_leading_zeros(row) == unknowns)
    }

    /// Back-substitute on a matrix in (reduced) echelon form.
    ///
    /// Fails if the system has no solution or leaves variables free.
    pub fn solve_reduced(&self) -> Result<Vec<BigRational>, MatrixError> {
        if let Some(row) = self.inconsistent_row() {
            return Err(MatrixError::Inconsistent { row });
        }
        let free = self.find_free();
        if !free.is_empty() {
            return Err(MatrixError::Underdetermined { free });
        }

        let unknowns = self.unknowns();
        let mut x = vec![BigRational::zero(); unknowns];
        for (&col, &r) in self.pivots().iter().rev() {
            let row = &self.rows[r];
            let mut rhs = row[unknowns].clone();
            for j in col + 1..unknowns {
                rhs -= &row[j] * &x[j];
            }
            x[col] = rhs / &row[col];
        }
        Ok(x)
    }

    /// [`Matrix::row_reduce`] then [`Matrix::solve_reduced`]
    pub fn solve_gaussian(&mut self) -> Result<Vec<BigRational>, MatrixError> {
        self.row_reduce();
        self.solve_reduced()
    }

    /// Fix some unknowns and solve for the rest without touching `self`.
    ///
    /// `values` maps a column to its value. The returned vector covers every
    /// unknown, fixed ones included.
    pub fn solve_values(
        &self,
        values: &BTreeMap<usize, BigRational>,
    ) -> Result<Vec<BigRational>, MatrixError> {
        let unknowns = self.unknowns();
        let mut system = self.clone();
        for (&column, value) in values {
            if column >= unknowns {
                return Err(MatrixError::VariableOutOfRange { column, unknowns });
            }
            let mut row = vec![BigRational::zero(); unknowns + 1];
            row[column] = BigRational::one();
            row[unknowns] = value.clone();
            system.rows.push(row);
        }
        system.solve_gaussian()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let Some((rhs, coefficients)) = row.split_last() else {
                continue;
            };
            for v in coefficients {
                write!(f, "{v} ")?;
            }
            writeln!(f, "| {rhs}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    fn int(n: i64) -> BigRational {
        ratio(n, 1)
    }

    #[test]
    fn test_two_by_two_scenario() {
        let mut m = Matrix::from_integers([[2, 1, 8], [1, 3, 13]]).unwrap();
        assert_eq!(m.solve_gaussian(), Ok(vec![ratio(11, 5), ratio(18, 5)]));
        assert_eq!(
            m.rows(),
            &[
                vec![int(1), int(0), ratio(11, 5)],
                vec![int(0), int(1), ratio(18, 5)],
            ]
        );
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(num_leading_zeros(&[int(0), int(0), int(3)]), 2);
        assert_eq!(num_leading_zeros(&[int(0), int(0)]), 2);
        assert_eq!(num_leading_zeros(&[]), 0);
    }

    #[test]
    fn test_non_echelon_row() {
        let m = Matrix::from_integers([[1, 2, 3], [0, 1, 1], [0, 4, 1]]).unwrap();
        assert_eq!(get_non_echelon_row(m.rows()), Some(2));

        let m = Matrix::from_integers([[1, 2, 3], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(get_non_echelon_row(m.rows()), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert_eq!(
            Matrix::from_integers(vec![vec![1, 2, 3], vec![4, 5]]),
            Err(MatrixError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Matrix::new(vec![vec![]]),
            Err(MatrixError::NoColumns)
        );
    }

    #[test]
    fn test_inconsistent_is_inspectable() {
        let mut m = Matrix::from_integers([[1, 1, 2], [2, 2, 5]]).unwrap();
        m.row_reduce();
        assert_eq!(m.inconsistent_row(), Some(1));
        assert_eq!(m.rows()[1], vec![int(0), int(0), int(1)]);
        assert_eq!(m.solve_reduced(), Err(MatrixError::Inconsistent { row: 1 }));
    }

    #[test]
    fn test_free_variables_and_solve_values() {
        let mut m = Matrix::from_integers([[1, 1, 0, 3], [0, 0, 1, 4]]).unwrap();
        let original = m.clone();
        m.row_reduce();
        assert_eq!(m.find_free(), BTreeSet::from([1]));
        assert!(matches!(
            m.solve_reduced(),
            Err(MatrixError::Underdetermined { .. })
        ));

        let values = BTreeMap::from([(1, int(1))]);
        assert_eq!(
            original.solve_values(&values),
            Ok(vec![int(2), int(1), int(4)])
        );
        assert_eq!(m.solve_values(&values), original.solve_values(&values));

        let out_of_range = BTreeMap::from([(3, int(1))]);
        assert_eq!(
            original.solve_values(&out_of_range),
            Err(MatrixError::VariableOutOfRange {
                column: 3,
                unknowns: 3
            })
        );
    }

    #[test]
    fn test_solve_values_conflict() {
        let m = Matrix::from_integers([[1, 1, 3]]).unwrap();
        let values = BTreeMap::from([(0, int(1)), (1, int(1))]);
        assert!(matches!(
            m.solve_values(&values),
            Err(MatrixError::Inconsistent { .. })
        ));
    }

    #[test]
    fn test_display() {
        let m = Matrix::new(vec![vec![int(2), ratio(1, 2), int(-3)]]).unwrap();
        assert_eq!(m.to_string(), "2 1/2 | -3\n");
    }

    fn system() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>)> {
        (1usize..=3).prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(-5i64..=5, n), n),
                prop::collection::vec(-10i64..=10, n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_gaussian_solution_satisfies_system((a, x) in system()) {
            let augmented: Vec<Vec<i64>> = a
                .iter()
                .map(|row| {
                    let b: i64 = row.iter().zip(&x).map(|(c, v)| c * v).sum();
                    row.iter().copied().chain([b]).collect()
                })
                .collect();
            let mut m = Matrix::from_integers(augmented.clone()).unwrap();

            match m.solve_gaussian() {
                Ok(solution) => {
                    for row in &augmented {
                        let (rhs, coefficients) = row.split_last().unwrap();
                        let dot = coefficients
                            .iter()
                            .zip(&solution)
                            .fold(BigRational::zero(), |acc, (&c, s)| acc + int(c) * s);
                        prop_assert_eq!(dot, int(*rhs));
                    }
                    let expected: Vec<BigRational> = x.iter().map(|&v| int(v)).collect();
                    prop_assert_eq!(solution, expected);
                }
                Err(err) => {
                    let underdetermined = matches!(err, MatrixError::Underdetermined { .. });
                    prop_assert!(underdetermined, "unexpected error: {}", err);
                }
            }
        }
    }
}
