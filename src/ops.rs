//! Stateless vector arithmetic.
//!
//! Binary operations borrow both operands and return a freshly allocated
//! result. Shape problems are reported as [`VectorError`]; floating-point
//! edge cases (division by zero, overflow) are left to IEEE 754.

use crate::{vector::Vector, Result, VectorError};

fn ensure_same_dimension(op: &str, v1: &Vector, v2: &Vector) -> Result<()> {
    let (left, right) = (v1.dimension(), v2.dimension());
    if left != right {
        log::debug!("{op}: rejecting vectors of different sizes ({left} and {right})");
        return Err(VectorError::DimensionMismatch { left, right });
    }
    Ok(())
}

/// Magnitude = sqrt(x1^2 + x2^2 + ... + xN^2)
pub fn magnitude(v: &Vector) -> f64 {
    v.magnitude()
}

/// Add = v1 + v2 = [x1v1 + x1v2, ... xNv1 + xNv2]
pub fn add(v1: &Vector, v2: &Vector) -> Result<Vector> {
    ensure_same_dimension("add", v1, v2)?;
    Ok(Vector::new(&v1.data + &v2.data))
}

/// Subtract = v1 - v2 = [x1v1 - x1v2, ... xNv1 - xNv2]
pub fn subtract(v1: &Vector, v2: &Vector) -> Result<Vector> {
    ensure_same_dimension("subtract", v1, v2)?;
    Ok(Vector::new(&v1.data - &v2.data))
}

/// Multiply = v1 * v2 = [x1v1 * x1v2, ... xNv1 * xNv2]
pub fn multiply(v1: &Vector, v2: &Vector) -> Result<Vector> {
    ensure_same_dimension("multiply", v1, v2)?;
    Ok(Vector::new(&v1.data * &v2.data))
}

/// Divide = v1 / v2 = [x1v1 / x1v2, ... xNv1 / xNv2]
///
/// A zero divisor yields `inf`, `-inf` or `NaN` in that position.
pub fn divide(v1: &Vector, v2: &Vector) -> Result<Vector> {
    ensure_same_dimension("divide", v1, v2)?;
    Ok(Vector::new(&v1.data / &v2.data))
}

pub fn dot_product(v1: &Vector, v2: &Vector) -> Result<f64> {
    ensure_same_dimension("dot_product", v1, v2)?;
    Ok(v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum::<f64>())
}

/// Cross product, defined only for 3-dimensional vectors.
pub fn cross_product(v1: &Vector, v2: &Vector) -> Result<Vector> {
    let (left, right) = (v1.dimension(), v2.dimension());
    if left != 3 || right != 3 {
        log::debug!("cross_product: rejecting vectors of sizes {left} and {right}");
        return Err(VectorError::UnsupportedDimension { left, right });
    }

    let (a, b) = (&v1.data, &v2.data);
    Ok(Vector::from_vec(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]))
}
