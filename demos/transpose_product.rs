// demos/transpose_product.rs
use matrot::matrix::{multiply_by_transpose, RowDisplay};

fn main() {
    let a = vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7, 8, 9],
    ];

    println!("Matrix A:");
    for row in &a {
        println!("{}", RowDisplay(row));
    }

    match multiply_by_transpose(&a) {
        Ok(p) => {
            println!("\nA * A^T:");
            for row in &p {
                println!("{}", RowDisplay(row));
            }
        }
        Err(e) => eprintln!("error: {}", e),
    }
}
