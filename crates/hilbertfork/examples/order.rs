//! Minimal example: build a low-order curve and walk its points.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // Order 1: the base cap refined once into a 16-point fork
    let path = hilbertfork::generate_curve(1)?;
    println!("order 1 has {} points", path.len());

    for (i, p) in path.iter().enumerate() {
        println!("{i:2}: ({:.3}, {:.3})", p.x, p.y);
    }

    // Orders that are negative or fractional are rejected up front
    assert!(hilbertfork::generate_curve(-1).is_err());
    assert!(hilbertfork::generate_curve(1.5).is_err());
    // snips-end: example

    Ok(())
}
