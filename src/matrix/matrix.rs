use crate::error::Result;

/// Dense matrix with the three elementary row operations used by the elimination engine.
///
/// Row indices are 0-based everywhere. Every operation keeps the matrix exact: entries are
/// only ever combined through the element type's own arithmetic.
pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;

    fn is_rref(&self) -> bool;
    /// Number of rows holding at least one nonzero entry.
    fn rank(&self) -> usize;

    fn swap_rows(&mut self, a: usize, b: usize) -> Result<()>;
    /// Fails with `InvalidOperation` when `coefficient` is zero.
    fn scale_row(&mut self, row: usize, coefficient: &T) -> Result<()>;
    /// `target += coefficient * source`
    fn add_scaled_row(&mut self, target: usize, source: usize, coefficient: &T) -> Result<()>;
}
