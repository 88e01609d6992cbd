use vector_ops::{
    ops::{add, cross_product, divide, dot_product, multiply, subtract},
    utils::{cosine_similarity, generate_random_vectors, normalize_vector},
    vector::Vector,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("📐 Vector Operations Demo");
    println!("=========================\n");

    let v1 = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    let v2 = Vector::from_vec(vec![2.0, 3.0, 4.0]);
    println!("v1 = {}", v1.data);
    println!("v2 = {}\n", v2.data);

    println!("|v1|      = {:.4}", v1.magnitude());
    println!("v1 + v2   = {}", add(&v1, &v2)?.data);
    println!("v1 - v2   = {}", subtract(&v1, &v2)?.data);
    println!("v1 * v2   = {}", multiply(&v1, &v2)?.data);
    println!("v1 / v2   = {}", divide(&v1, &v2)?.data);
    println!("v1 . v2   = {}", dot_product(&v1, &v2)?);
    println!("v1 x v2   = {}", cross_product(&v1, &v2)?.data);

    // Mismatched shapes come back as errors, never partial results.
    println!("\n⚠️  Error handling...");
    let short = Vector::from_vec(vec![0.0, 0.0]);
    match add(&v1, &short) {
        Ok(v) => println!("  unexpected result {}", v.data),
        Err(err) => println!("  add: {err}"),
    }
    match cross_product(&short, &short) {
        Ok(v) => println!("  unexpected result {}", v.data),
        Err(err) => println!("  cross_product: {err}"),
    }

    println!("\n🎲 Random vectors...");
    let vectors = generate_random_vectors(128, 2);
    let (a, b) = (&vectors[0], &vectors[1]);
    println!("  cosine similarity: {:.4}", cosine_similarity(a, b)?);
    println!("  |normalize(a)|:    {:.4}", normalize_vector(a).magnitude());

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
