// src/validation/mod.rs

//! Provides functions to validate `StateVector` amplitudes.
//!
//! Rendering never requires a normalized state (the renderers print
//! whatever amplitudes they are given), so these checks are a caller-side
//! utility rather than a gate inside the rendering path.

use crate::core::{MistError, StateVector};

/// Default allowed deviation of the squared norm from 1.0.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0 (e.g., 1e-9). Defaults are available.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(MistError::InvalidState)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), MistError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.amplitudes().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(MistError::InvalidState {
            message: format!(
                "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// `true` iff `check_normalization` succeeds with the same tolerance.
pub fn is_normalized(state: &StateVector, tolerance: Option<f64>) -> bool {
    check_normalization(state, tolerance).is_ok()
}
