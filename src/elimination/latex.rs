//! LaTeX rendering of an elimination trace.
//!
//! The document is a single `split` environment with one aligned line per matrix
//! snapshot and per row operation. Matrices use the `amatrix` environment, whose
//! argument is the column count minus one. Rows are numbered from 1 here only.

use itertools::Itertools;

use crate::elimination::engine::{Operation, Trace};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;

const HEADER: &str = "\\begin{equation}\n\\begin{split}\n";
const FOOTER: &str = "\\end{split}\n\\end{equation}";

pub fn render_trace(trace: &Trace<Fraction>) -> String {
    let mut latex = String::from(HEADER);
    for (operation, snapshot) in trace.entries() {
        if let Some(operation) = operation {
            latex += &render_operation(operation);
        }
        latex += &render_matrix(snapshot);
    }
    latex += FOOTER;
    latex
}

pub fn render_matrix(matrix: &MatrixGen<Fraction>) -> String {
    format!(
        "&\\begin{{amatrix}}{{{}}}\n{}\n\\end{{amatrix}}\\\\\n",
        matrix.cols() as isize - 1,
        matrix
            .lines
            .iter()
            .map(|row| row.iter().join(" & "))
            .join(" \\\\ ")
    )
}

pub fn render_operation(operation: &Operation<Fraction>) -> String {
    match operation {
        Operation::Swap(a, b) => format!(
            "&R_{}\\leftrightarrow R_{}\\\\\n",
            a.min(b) + 1,
            a.max(b) + 1
        ),
        Operation::Scale(row, coefficient) => format!(
            "&{}R_{}\\rightarrow R_{}\\\\\n",
            coefficient.latex(),
            row + 1,
            row + 1
        ),
        Operation::AddScaled(target, source, coefficient) => {
            let mut factor = String::from(if coefficient.is_positive() { "+" } else { "-" });
            let magnitude = coefficient.abs();
            if magnitude != 1_i64 {
                factor += &magnitude.latex();
            }
            format!(
                "&R_{}{}R_{}\\rightarrow R_{}\\\\\n",
                target + 1,
                factor,
                source + 1,
                target + 1
            )
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
