use std::fs;
use std::path::Path;

use tracing::info;

use crate::elimination::engine::{reduce, Trace};
use crate::elimination::latex::render_trace;
use crate::error::{Error, Result};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;

/// Parses a grid of integer and `numerator/denominator` literals, one matrix row per
/// non-empty line. A whitespace delimiter splits on any run of whitespace.
pub fn parse_matrix(text: &str, delimiter: char) -> Result<MatrixGen<Fraction>> {
    let mut lines: Vec<Vec<Fraction>> = vec![];
    let mut cols = None;

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = if delimiter.is_whitespace() {
            line.split_whitespace().collect()
        } else {
            line.split(delimiter).collect()
        };

        let row = cells
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                cell.parse::<Fraction>().map_err(|e| Error::MalformedInput {
                    line: line_no,
                    reason: format!("column {}: {}", c + 1, e),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        match cols {
            None => cols = Some(row.len()),
            Some(expected) if expected != row.len() => {
                return Err(Error::MalformedInput {
                    line: line_no,
                    reason: format!("expected {} columns, found {}", expected, row.len()),
                });
            }
            Some(_) => {}
        }
        lines.push(row);
    }

    if lines.is_empty() {
        return Err(Error::MalformedInput {
            line: 1,
            reason: "no matrix rows".into(),
        });
    }

    MatrixGen::from_list(lines)
}

pub fn read_matrix(path: &Path, delimiter: char) -> Result<MatrixGen<Fraction>> {
    let text = fs::read_to_string(path)?;
    let matrix = parse_matrix(&text, delimiter)?;
    info!(
        path = %path.display(),
        rows = matrix.rows(),
        cols = matrix.cols(),
        "matrix loaded"
    );
    Ok(matrix)
}

pub fn write_trace(path: &Path, trace: &Trace<Fraction>) -> Result<()> {
    let latex = render_trace(trace);
    fs::write(path, latex.trim())?;
    info!(
        path = %path.display(),
        steps = trace.steps.len(),
        "derivation written"
    );
    Ok(())
}

/// Reads `input`, reduces it and writes the derivation to `output`. Nothing is written
/// unless reading and elimination both succeed.
pub fn run(
    input: &Path,
    output: &Path,
    delimiter: char,
) -> Result<(MatrixGen<Fraction>, Trace<Fraction>)> {
    let mut matrix = read_matrix(input, delimiter)?;
    let trace = reduce(&mut matrix)?;
    write_trace(output, &trace)?;
    Ok((matrix, trace))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
