use crate::ops::{dot_product, subtract};
use crate::{vector::Vector, Result};
use ndarray::Array1;

pub fn euclidean_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    Ok(subtract(v1, v2)?.magnitude())
}

/// Cosine of the angle between `v1` and `v2`, or 0.0 when either has zero
/// magnitude.
pub fn cosine_similarity(v1: &Vector, v2: &Vector) -> Result<f64> {
    let dot = dot_product(v1, v2)?;
    let norm1 = v1.magnitude();
    let norm2 = v2.magnitude();

    if norm1 == 0.0 || norm2 == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm1 * norm2))
    }
}

pub fn normalize_vector(vector: &Vector) -> Vector {
    let magnitude = vector.magnitude();
    if magnitude > 0.0 {
        Vector::new(&vector.data / magnitude)
    } else {
        vector.clone()
    }
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vector> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| {
            Vector::new(Array1::from_vec(
                (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect(),
            ))
        })
        .collect()
}
