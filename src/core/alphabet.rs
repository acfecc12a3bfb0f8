//! The misty glyph alphabet: symbol pairs depicting one subsystem's bit
//! value pictorially. The shape encodes which subsystem a character
//! belongs to, the fill (white vs. black) encodes the bit.

/// One (0-symbol, 1-symbol) pair per subsystem index. Subsystems beyond
/// the table wrap around modulo its length.
pub const GLYPH_PAIRS: [[char; 2]; 8] = [
    ['\u{25CB}', '\u{25CF}'], // q0 White/Black Circle
    ['\u{25A1}', '\u{25A0}'], // q1 White/Black Square
    ['\u{25AD}', '\u{25AC}'], // q2 White/Black Rectangle
    ['\u{25AF}', '\u{25AE}'], // q3 White/Black Vertical Rectangle
    ['\u{25C7}', '\u{25C6}'], // q4 White/Black Diamond
    ['\u{2727}', '\u{2726}'], // q5 White/Black Four-Pointed Star
    ['\u{25B5}', '\u{25B4}'], // q6 White/Black Up-Pointing Triangle
    ['\u{25BF}', '\u{25BE}'], // q7 White/Black Down-Pointing Small Triangle
];

/// The glyph depicting `bit` on subsystem `subsystem`.
pub fn glyph(subsystem: usize, bit: bool) -> char {
    let pair = GLYPH_PAIRS[subsystem % GLYPH_PAIRS.len()];
    if bit { pair[1] } else { pair[0] }
}

/// Reverse lookup: the bit value `glyph` depicts on `subsystem`, or
/// `None` when the character is not that subsystem's 0- or 1-symbol.
/// Decoding a rendered pattern character-by-character with this function
/// reconstructs the basis index the pattern was produced from.
pub fn bit_value(subsystem: usize, glyph: char) -> Option<bool> {
    let pair = GLYPH_PAIRS[subsystem % GLYPH_PAIRS.len()];
    if glyph == pair[0] {
        Some(false)
    } else if glyph == pair[1] {
        Some(true)
    } else {
        None
    }
}
