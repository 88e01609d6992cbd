pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Dimension Mismatch: two vectors of different sizes ({left} and {right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Unsupported Dimension: available only for 3-dimensional vectors (got {left} and {right})")]
    UnsupportedDimension { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use ops::{add, cross_product, divide, dot_product, magnitude, multiply, subtract};
pub use utils::{cosine_similarity, euclidean_distance, normalize_vector};
pub use vector::Vector;
