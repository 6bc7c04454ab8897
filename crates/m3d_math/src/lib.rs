#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::fmt::{Display, Formatter};

pub mod matrix;
mod number_traits;
pub mod vector;

pub type Result<T> = std::result::Result<T, MatrixError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    NotInvertible,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::NotInvertible => write!(f, "matrix is not invertible"),
        }
    }
}

impl std::error::Error for MatrixError {}
