pub mod elimination {
    pub mod engine;
    pub mod latex;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}
pub mod rings {
    pub mod fraction;
}

pub mod error;
pub mod io;

pub use elimination::engine::{reduce, Operation, Step, Trace};
pub use error::{Error, Result};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_gen::MatrixGen;
pub use rings::fraction::Fraction;
