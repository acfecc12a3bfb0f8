// src/core/state.rs

use super::error::MistError;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A complex-amplitude description of a quantum system's superposition
/// over computational basis configurations.
///
/// The vector stores one amplitude per basis configuration, indexed
/// `0..dim`, where the binary (or mixed-radix) expansion of the index
/// addresses one assignment of values to the subsystems. Subsystem 0 is
/// the least-significant factor of the index, so the leftmost character
/// of a basis label such as `"010"` names the most-significant subsystem.
///
/// The type is a plain immutable value: renderers read it, nothing in
/// this crate mutates it after construction.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    /// The amplitude of each basis configuration, in ascending index order.
    amplitudes: Vec<Complex<f64>>,
    /// Dimension of each subsystem, least-significant tensor factor first.
    /// All entries are 2 for a register of qubits; other values are
    /// representable but cannot be rendered in misty notation.
    dims: Vec<usize>,
}

impl StateVector {
    /// Creates a state vector from explicit amplitudes and subsystem
    /// dimensions.
    ///
    /// # Errors
    /// `MistError::InvalidState` if any dimension is zero, if the product
    /// of the dimensions overflows `usize`, or if it does not match the
    /// number of amplitudes supplied.
    pub fn new(amplitudes: Vec<Complex<f64>>, dims: Vec<usize>) -> Result<Self, MistError> {
        if dims.contains(&0) {
            return Err(MistError::InvalidState {
                message: format!("subsystem dimensions must be at least 1, got {:?}", dims),
            });
        }
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| MistError::InvalidState {
                message: format!("state-space dimension overflows usize for dims {:?}", dims),
            })?;
        if amplitudes.len() != expected {
            return Err(MistError::InvalidState {
                message: format!(
                    "amplitude count {} does not match the dimension {} implied by dims {:?}",
                    amplitudes.len(),
                    expected,
                    dims
                ),
            });
        }
        Ok(Self { amplitudes, dims })
    }

    /// Creates an all-qubit state vector, inferring the qubit count from
    /// the amplitude count, which must be a nonzero power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, MistError> {
        let len = amplitudes.len();
        if len == 0 || !len.is_power_of_two() {
            return Err(MistError::InvalidState {
                message: format!("amplitude count {} is not a nonzero power of two", len),
            });
        }
        let num_qubits = len.trailing_zeros() as usize;
        Ok(Self {
            amplitudes,
            dims: vec![2; num_qubits],
        })
    }

    /// Creates a computational basis state from a bit-string label such as
    /// `"010"`: amplitude 1 at the encoded index, 0 elsewhere. The leftmost
    /// character of the label names the most-significant subsystem.
    ///
    /// # Errors
    /// `MistError::InvalidState` if the label contains characters other
    /// than `'0'` and `'1'`, or is too long for the index to fit in `usize`.
    pub fn from_label(label: &str) -> Result<Self, MistError> {
        let num_qubits = label.chars().count();
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| MistError::InvalidState {
                message: format!(
                    "basis label of {} positions exceeds the addressable state space",
                    num_qubits
                ),
            })?;

        let mut index = 0usize;
        for c in label.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(MistError::InvalidState {
                        message: format!(
                            "basis label may only contain '0' and '1', got {:?}",
                            label
                        ),
                    });
                }
            };
            index = (index << 1) | bit;
        }

        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            dims: vec![2; num_qubits],
        })
    }

    /// Per-subsystem dimensions, least-significant tensor factor first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of subsystems. Only a qubit count in the strict sense when
    /// every subsystem dimension is 2.
    pub fn num_qubits(&self) -> usize {
        self.dims.len()
    }

    /// Total dimension of the state space (the number of amplitudes).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// The amplitude of one basis configuration, or `None` when the index
    /// is out of range.
    pub fn amplitude(&self, index: usize) -> Option<Complex<f64>> {
        self.amplitudes.get(index).copied()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
            // Using Display for Complex which shows "re+imj" or similar
        }
        write!(f, "] dims={:?}", self.dims)
    }
}
