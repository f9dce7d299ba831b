use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{GenElement, MatrixGen};

/// A single elementary row operation. Row indices are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation<T> {
    /// Exchange two rows; the smaller index always comes first.
    Swap(usize, usize),
    /// Multiply a row by a nonzero coefficient.
    Scale(usize, T),
    /// `target += coefficient * source`
    AddScaled(usize, usize, T),
}

impl<T: GenElement> Operation<T> {
    pub fn swap(a: usize, b: usize) -> Self {
        Operation::Swap(a.min(b), a.max(b))
    }

    pub fn apply(&self, matrix: &mut MatrixGen<T>) -> Result<()> {
        match self {
            Operation::Swap(a, b) => matrix.swap_rows(*a, *b),
            Operation::Scale(row, coefficient) => matrix.scale_row(*row, coefficient),
            Operation::AddScaled(target, source, coefficient) => {
                matrix.add_scaled_row(*target, *source, coefficient)
            }
        }
    }
}

/// An operation together with the matrix as it stood right after it was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub operation: Operation<T>,
    pub snapshot: MatrixGen<T>,
}

/// Full record of one elimination run: the untouched input followed by every step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<T> {
    pub initial: MatrixGen<T>,
    pub steps: Vec<Step<T>>,
}

impl<T: GenElement> Trace<T> {
    fn new(initial: MatrixGen<T>) -> Self {
        Trace {
            initial,
            steps: vec![],
        }
    }

    /// Snapshots in order, the first one carrying no operation.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&Operation<T>>, &MatrixGen<T>)> {
        std::iter::once((None, &self.initial)).chain(
            self.steps
                .iter()
                .map(|step| (Some(&step.operation), &step.snapshot)),
        )
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation<T>> {
        self.steps.iter().map(|step| &step.operation)
    }

    /// Last snapshot, or the input when nothing had to be done.
    pub fn result(&self) -> &MatrixGen<T> {
        self.steps
            .last()
            .map(|step| &step.snapshot)
            .unwrap_or(&self.initial)
    }

    /// Applies the recorded operations, in order, to `matrix`.
    pub fn replay(&self, matrix: &mut MatrixGen<T>) -> Result<()> {
        for operation in self.operations() {
            operation.apply(matrix)?;
        }
        Ok(())
    }

    fn record(&mut self, matrix: &mut MatrixGen<T>, operation: Operation<T>) -> Result<()> {
        operation.apply(matrix)?;
        trace!(?operation, "row operation applied");
        self.steps.push(Step {
            operation,
            snapshot: matrix.clone(),
        });
        Ok(())
    }
}

/// Brings `matrix` to reduced row echelon form in place with Gauss-Jordan elimination,
/// recording every row operation and the state after it.
///
/// Columns are scanned left to right. The pivot is the first nonzero entry at or below the
/// next free row; a column without one is skipped and keeps that row free. Once placed and
/// normalized to 1, the pivot clears its column in every other row, above and below.
pub fn reduce<T: GenElement>(matrix: &mut MatrixGen<T>) -> Result<Trace<T>> {
    let mut trace = Trace::new(matrix.clone());
    let rows = matrix.rows();
    let cols = matrix.cols();

    let mut pivot_col = 0;
    let mut pivot_row = 0;

    while pivot_col < cols {
        let found = (pivot_row..rows).find(|&r| !matrix.at(r, pivot_col).is_zero());

        let found = match found {
            Some(r) => r,
            None => {
                debug!(pivot_col, "no pivot in column");
                pivot_col += 1;
                continue;
            }
        };
        debug!(pivot_col, pivot_row, found, "pivot found");

        if found != pivot_row {
            trace.record(matrix, Operation::swap(found, pivot_row))?;
        }

        let coefficient = T::one() / matrix.at(pivot_row, pivot_col);
        if coefficient != T::one() {
            trace.record(matrix, Operation::Scale(pivot_row, coefficient))?;
        }

        for r in 0..rows {
            if r == pivot_row {
                continue;
            }

            let coefficient = -matrix.at(r, pivot_col);
            if !coefficient.is_zero() {
                trace.record(matrix, Operation::AddScaled(r, pivot_row, coefficient))?;
            }
        }

        pivot_col += 1;
        pivot_row += 1;
    }

    debug!(
        rows,
        cols,
        operations = trace.steps.len(),
        rank = matrix.rank(),
        "elimination finished"
    );
    Ok(trace)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
