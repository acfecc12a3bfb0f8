// src/lib.rs

//! `mistkit` - misty state rendering for quantum state vectors
//!
//! This library turns complex-amplitude state vectors into a compact
//! Unicode glyph notation ("misty states"): every nonzero basis amplitude
//! becomes one entry whose pattern depicts the basis configuration, with
//! the glyph shape encoding the subsystem and the fill encoding the bit.
//! A small renderer registry dispatches between this notation, the other
//! built-in textual forms, and any backend the caller registers.

pub mod core;
pub mod render;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{MistError, StateVector};
pub use crate::render::{COEFFICIENT_DECIMALS, Drawer, DrawerRegistry, state_to_mist, state_to_text};
pub use crate::validation::{DEFAULT_NORM_TOLERANCE, check_normalization, is_normalized};

// Example 1: Rendering a Bell state
// Demonstrates building a state vector by hand and reading it back in
// misty notation, where each subsystem keeps its own glyph shape.
/// ```
/// use mistkit::{MistError, StateVector, state_to_mist};
/// use num_complex::Complex;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// // Bell state (1/sqrt(2))(|00> + |11>)
/// let a = Complex::new(FRAC_1_SQRT_2, 0.0);
/// let o = Complex::new(0.0, 0.0);
/// let bell = StateVector::from_amplitudes(vec![a, o, o, a])?;
///
/// // Subsystem 1 renders as a square, subsystem 0 as a circle; only the
/// // two nonzero amplitudes appear, in ascending index order.
/// assert_eq!(
///     state_to_mist(&bell)?,
///     "{+0.707106781+0j □○, +0.707106781+0j ■●}"
/// );
/// # Ok::<(), MistError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Dispatching through the registry
// Demonstrates the named-format surface: built-in formats, a
// caller-registered backend, and the error for an unknown name.
/// ```
/// use mistkit::{DrawerRegistry, MistError, StateVector};
///
/// let state = StateVector::from_label("10")?;
/// let mut registry = DrawerRegistry::new();
///
/// // Built-in misty rendering, selected by name (case-insensitive).
/// assert_eq!(registry.draw(&state, Some("MIST"))?, "{+1+0j ■○}");
///
/// // Callers attach their own backends under new names.
/// registry.register(
///     "dim",
///     Box::new(|state: &StateVector| Ok(format!("dimension {}", state.dim()))),
/// );
/// assert_eq!(registry.draw(&state, Some("dim"))?, "dimension 4");
///
/// // Unknown names fail with the valid choices enumerated.
/// let err = registry.draw(&state, Some("qsphere")).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "'qsphere' is not a valid output format. Please choose from: dim, mist, repr, text"
/// );
/// # Ok::<(), MistError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
