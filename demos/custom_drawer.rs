//! Example demonstrating caller-registered rendering backends and the
//! error surface for unknown format names.
//! Run with `cargo run --example custom_drawer`.

use mistkit::{DrawerRegistry, MistError, StateVector};

fn main() -> Result<(), MistError> {
    println!("--- mistkit Example: Registering a Custom Drawer ---");

    let state = StateVector::from_label("101")?;
    let mut registry = DrawerRegistry::new();

    // A real integration would register a plotting backend here; this
    // stand-in just summarizes the amplitude structure.
    registry.register(
        "sparsity",
        Box::new(|state: &StateVector| {
            let nonzero = state
                .amplitudes()
                .iter()
                .filter(|a| a.norm_sqr() > 0.0)
                .count();
            Ok(format!(
                "{} of {} amplitudes are nonzero",
                nonzero,
                state.dim()
            ))
        }),
    );

    println!("\nRegistered formats: {}", registry.formats().join(", "));
    println!("\nmist:     {}", registry.draw(&state, Some("mist"))?);
    println!("sparsity: {}", registry.draw(&state, Some("sparsity"))?);

    // Unregistered names fail with the valid choices enumerated.
    if let Err(e) = registry.draw(&state, Some("qsphere")) {
        println!("\nAsking for an unregistered backend fails:\n  {}", e);
    }

    Ok(())
}
