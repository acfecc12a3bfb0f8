// src/render/text.rs

use crate::core::{MistError, StateVector};

/// Renders every basis amplitude as one `|bits>: value` line, in
/// ascending index order. Unlike misty notation this lists zero
/// amplitudes too, which keeps small vectors easy to eyeball.
///
/// # Errors
/// `MistError::UnsupportedDimension` when any subsystem dimension is not
/// 2, since the labels are binary strings.
pub fn state_to_text(state: &StateVector) -> Result<String, MistError> {
    if state.dims().iter().any(|&d| d != 2) {
        return Err(MistError::UnsupportedDimension {
            dims: state.dims().to_vec(),
        });
    }

    let width = state.num_qubits();
    let mut text = String::new();
    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(&format!("|{:0width$b}>: {:.4}", index, amplitude));
    }
    Ok(text)
}
