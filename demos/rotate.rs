// demos/rotate.rs
use matrot::rotate::{rotate_iterative, rotate_recursive};

fn main() {
    let tests = [
        ("hola", 0),
        ("hola", 1),
        ("hola", 2),
        ("hola", 3),
        ("hola", 4),
        ("hola", 5),
    ];
    for (w, k) in tests {
        let rotated = rotate_recursive(w, k);
        // the two strategies must always agree
        assert_eq!(rotated, rotate_iterative(w, k));
        println!("rotate_recursive(\"{}\", {}) = \"{}\"", w, k, rotated);
    }
}
