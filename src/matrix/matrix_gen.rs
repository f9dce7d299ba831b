use itertools::Itertools;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub trait GenElement:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> GenElement for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
{
}

/// Row-major matrix; each row is its own vector so swapping two rows only swaps handles.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub lines: Vec<Vec<T>>,
}

impl<T: GenElement> MatrixGen<T> {
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            cols,
            lines: (0..rows).map(|_| vec![T::zero(); cols]).collect(),
        }
    }

    pub fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            cols: n,
            lines: (0..n)
                .map(|i| (0..n).map(|j| if i == j { T::one() } else { T::zero() }).collect())
                .collect(),
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.lines.len() {
            return Err(Error::InvalidOperation(format!(
                "row {} out of range for a matrix with {} rows",
                row,
                self.lines.len()
            )));
        }
        Ok(())
    }
}

impl<T: GenElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some((i, l)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(Error::MalformedInput {
                line: i + 1,
                reason: format!("expected {} columns, found {}", cols, l.len()),
            });
        }

        Ok(MatrixGen { cols, lines })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.lines.clone()
    }

    fn rows(&self) -> usize {
        self.lines.len()
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.lines[row][col].clone()
    }

    fn is_rref(&self) -> bool {
        let mut lead = None;

        for (i, row) in self.lines.iter().enumerate() {
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    // zero rows must all sit at the bottom
                    if self.lines[i + 1..]
                        .iter()
                        .any(|next_row| next_row.iter().any(|x| !x.is_zero()))
                    {
                        return false;
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if row[pivot_col] != T::one() {
                        return false;
                    }

                    for r in 0..self.lines.len() {
                        if r != i && !self.lines[r][pivot_col].is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    fn rank(&self) -> usize {
        self.lines
            .iter()
            .filter(|row| row.iter().any(|x| !x.is_zero()))
            .count()
    }

    fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row(a)?;
        self.check_row(b)?;
        self.lines.swap(a, b);
        Ok(())
    }

    fn scale_row(&mut self, row: usize, coefficient: &T) -> Result<()> {
        self.check_row(row)?;
        if coefficient.is_zero() {
            return Err(Error::InvalidOperation(format!(
                "cannot scale row {} by zero",
                row
            )));
        }

        for cell in self.lines[row].iter_mut() {
            *cell = cell.clone() * coefficient.clone();
        }
        Ok(())
    }

    fn add_scaled_row(&mut self, target: usize, source: usize, coefficient: &T) -> Result<()> {
        self.check_row(target)?;
        self.check_row(source)?;

        let source_row = self.lines[source].clone();
        for (cell, s) in self.lines[target].iter_mut().zip(source_row) {
            *cell = cell.clone() + coefficient.clone() * s;
        }
        Ok(())
    }
}

/// One row per line, cells separated by a single space.
impl<T: GenElement> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.lines.iter().map(|row| row.iter().join(" ")).join("\n")
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    fn frac_matrix(lines: &[&[&str]]) -> MatrixGen<Fraction> {
        MatrixGen::from_list(
            lines
                .iter()
                .map(|l| l.iter().map(|s| fr(s)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_list_rejects_ragged_rows() {
        let err = MatrixGen::<Fraction>::from_list(vec![
            vec![Fraction::from(1_i64), Fraction::from(2_i64)],
            vec![Fraction::from(3_i64)],
        ])
        .unwrap_err();

        match err {
            Error::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_row_operations() {
        let mut m = frac_matrix(&[&["2", "4"], &["1", "3"], &["0", "1/2"]]);

        m.swap_rows(0, 2).unwrap();
        assert_eq!(m, frac_matrix(&[&["0", "1/2"], &["1", "3"], &["2", "4"]]));

        m.scale_row(0, &fr("2")).unwrap();
        assert_eq!(m.lines[0], vec![fr("0"), fr("1")]);

        m.add_scaled_row(2, 1, &fr("-2")).unwrap();
        assert_eq!(m, frac_matrix(&[&["0", "1"], &["1", "3"], &["0", "-2"]]));

        m.add_scaled_row(1, 1, &fr("-1")).unwrap();
        assert_eq!(m.rank(), 2);
    }

    #[test]
    fn test_invalid_operations() {
        let mut m = frac_matrix(&[&["1", "2"], &["3", "4"]]);

        assert!(matches!(
            m.scale_row(0, &Fraction::from(0_i64)),
            Err(Error::InvalidOperation(_))
        ));
        assert!(matches!(m.swap_rows(0, 2), Err(Error::InvalidOperation(_))));
        assert!(matches!(
            m.add_scaled_row(5, 0, &Fraction::from(1_i64)),
            Err(Error::InvalidOperation(_))
        ));
        assert_eq!(m, frac_matrix(&[&["1", "2"], &["3", "4"]]));
    }

    #[test]
    fn test_is_rref() {
        assert!(MatrixGen::<Fraction>::identity(3).is_rref());
        assert!(frac_matrix(&[&["1", "0", "2"], &["0", "1", "1/3"], &["0", "0", "0"]]).is_rref());
        assert!(frac_matrix(&[&["0", "1"], &["0", "0"]]).is_rref());
        assert!(MatrixGen::<Fraction>::new(2, 3).is_rref());

        assert!(!frac_matrix(&[&["2", "0"], &["0", "1"]]).is_rref());
        assert!(!frac_matrix(&[&["1", "1"], &["0", "1"]]).is_rref());
        assert!(!frac_matrix(&[&["0", "0"], &["0", "1"]]).is_rref());
        assert!(!frac_matrix(&[&["0", "1"], &["1", "0"]]).is_rref());
    }

    #[test]
    fn test_display() {
        let m = frac_matrix(&[&["1", "-1/2"], &["6/3", "0"]]);
        assert_eq!(m.to_string(), "1 -1/2\n2 0");
    }
}
