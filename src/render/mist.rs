// src/render/mist.rs

use crate::core::{MistError, StateVector, alphabet};
use num_complex::Complex;

/// Number of decimal places a coefficient is rounded to before it is
/// tested against zero and printed.
pub const COEFFICIENT_DECIMALS: u32 = 9;

/// Renders a state vector in misty state notation.
///
/// Every basis configuration with a nonzero rounded amplitude contributes
/// one `<coefficient> <pattern>` entry, in ascending index order. The
/// pattern depicts the configuration's bits with the glyph alphabet,
/// most-significant subsystem first, and the coefficient always carries
/// an explicit leading sign. Entries are joined with `", "` and the whole
/// listing is wrapped in braces, so the all-zero vector renders as `{}`.
///
/// A state with no subsystems at all is accepted: its single entry is
/// emitted with an empty pattern.
///
/// # Errors
/// `MistError::UnsupportedDimension` when any subsystem dimension is not
/// 2; the glyph alphabet has no symbols for wider positions.
///
/// # Example
/// ```
/// use mistkit::{StateVector, state_to_mist};
/// use num_complex::Complex;
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// // Bell state (1/sqrt(2))(|00> + |11>)
/// let a = Complex::new(FRAC_1_SQRT_2, 0.0);
/// let o = Complex::new(0.0, 0.0);
/// let bell = StateVector::from_amplitudes(vec![a, o, o, a])?;
///
/// assert_eq!(
///     state_to_mist(&bell)?,
///     "{+0.707106781+0j □○, +0.707106781+0j ■●}"
/// );
/// # Ok::<(), mistkit::MistError>(())
/// ```
pub fn state_to_mist(state: &StateVector) -> Result<String, MistError> {
    if state.dims().iter().any(|&d| d != 2) {
        return Err(MistError::UnsupportedDimension {
            dims: state.dims().to_vec(),
        });
    }

    let num_qubits = state.num_qubits();
    let mut mist = String::from("{");

    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        let rounded = Complex::new(round_coefficient(amplitude.re), round_coefficient(amplitude.im));

        // An amplitude counts as zero iff both rounded parts are zero.
        if rounded.re == 0.0 && rounded.im == 0.0 {
            continue;
        }

        if mist.len() > 1 {
            mist.push_str(", ");
        }

        mist.push_str(&signed_coefficient(rounded));
        mist.push(' ');
        // Most-significant subsystem first, as a basis label reads.
        for subsystem in (0..num_qubits).rev() {
            let bit = (index >> subsystem) & 1 == 1;
            mist.push(alphabet::glyph(subsystem, bit));
        }
    }

    mist.push('}');
    Ok(mist)
}

/// Round-half-to-even at `COEFFICIENT_DECIMALS` places.
fn round_coefficient(value: f64) -> f64 {
    let scale = 10f64.powi(COEFFICIENT_DECIMALS as i32);
    (value * scale).round_ties_even() / scale
}

/// Fixed-notation rendering of one rounded component with trailing zeros
/// trimmed, so 1.0 prints as "1" and 1e-8 as "0.00000001". Negative zero
/// keeps its sign and prints as "-0".
fn trim_component(value: f64) -> String {
    let mut text = format!("{:.*}", COEFFICIENT_DECIMALS as usize, value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Formats a rounded complex coefficient as `<re><sign><|im|>j`, omitting
/// the real part when it is positive zero (so `0+1j` prints as `1j`), and
/// prepending `+` unless the text already starts with `-`.
fn signed_coefficient(value: Complex<f64>) -> String {
    let imag_sign = if value.im.is_sign_negative() { '-' } else { '+' };
    let imag = trim_component(value.im.abs());

    let text = if value.re == 0.0 && !value.re.is_sign_negative() {
        format!("{}{}j", if imag_sign == '-' { "-" } else { "" }, imag)
    } else {
        format!("{}{}{}j", trim_component(value.re), imag_sign, imag)
    };

    if text.starts_with('-') {
        text
    } else {
        format!("+{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_round_coefficient_threshold() {
        assert_eq!(round_coefficient(1e-10), 0.0);
        assert_eq!(round_coefficient(-1e-10), 0.0);
        assert_eq!(round_coefficient(1e-8), 1e-8);
        assert_eq!(round_coefficient(0.123456789), 0.123456789);
        assert_eq!(round_coefficient(0.7071067811865476), 0.707106781);
    }

    #[test]
    fn test_trim_component() {
        assert_eq!(trim_component(1.0), "1");
        assert_eq!(trim_component(0.5), "0.5");
        assert_eq!(trim_component(0.707106781), "0.707106781");
        assert_eq!(trim_component(1e-8), "0.00000001");
        assert_eq!(trim_component(10.0), "10");
        assert_eq!(trim_component(-0.0), "-0");
    }

    #[test]
    fn test_signed_coefficient() {
        assert_eq!(signed_coefficient(c(1.0, 0.0)), "+1+0j");
        assert_eq!(signed_coefficient(c(-1.0, 0.0)), "-1+0j");
        assert_eq!(signed_coefficient(c(0.5, -0.25)), "+0.5-0.25j");
        // Pure-imaginary coefficients drop the zero real part.
        assert_eq!(signed_coefficient(c(0.0, 1.0)), "+1j");
        assert_eq!(signed_coefficient(c(0.0, -1.0)), "-1j");
        // Signed zeros survive rounding and stay visible.
        assert_eq!(signed_coefficient(c(-0.0, 1.0)), "-0+1j");
        assert_eq!(signed_coefficient(c(1.0, -0.0)), "+1-0j");
    }
}
