//! Example demonstrating the built-in textual renderers on a Bell state.
//! Run with `cargo run --example bell_mist`.

use mistkit::{DrawerRegistry, MistError, StateVector, check_normalization};

use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

fn main() -> Result<(), MistError> {
    println!("--- mistkit Example: Bell State Rendering ---");

    // Build (1/sqrt(2))(|00> + |11>) by hand.
    let amp = Complex::new(FRAC_1_SQRT_2, 0.0);
    let zero = Complex::new(0.0, 0.0);
    let bell = StateVector::new(vec![amp, zero, zero, amp], vec![2, 2])?;

    check_normalization(&bell, None)?;
    println!("\nThe state is normalized; rendering it three ways.");

    let registry = DrawerRegistry::new();

    // "repr" is the default format.
    println!("\nrepr:\n{}", registry.draw(&bell, None)?);

    // "text" lists every basis amplitude, zero or not.
    println!("\ntext:\n{}", registry.draw(&bell, Some("text"))?);

    // "mist" lists only the nonzero amplitudes; the glyph shape names the
    // subsystem (circle = q0, square = q1) and the fill carries the bit.
    println!("\nmist:\n{}", registry.draw(&bell, Some("mist"))?);

    Ok(())
}
