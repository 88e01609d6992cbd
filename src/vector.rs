use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered sequence of `f64` components.
///
/// Any length is accepted, including zero. Operations that need operands of a
/// particular shape check it themselves and report a [`crate::VectorError`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub data: Array1<f64>,
}

impl Vector {
    pub fn new(data: Array1<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(data))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Contiguous view of the components, `None` if `data` is not in
    /// standard layout.
    pub fn as_slice(&self) -> Option<&[f64]> {
        self.data.as_slice()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Euclidean norm, `sqrt(x1^2 + ... + xN^2)`. Zero for the empty vector.
    pub fn magnitude(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|x| x * x).sum();
        sum.sqrt()
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::from_vec(data)
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self::new(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.data.to_vec()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}
