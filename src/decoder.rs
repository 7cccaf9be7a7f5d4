use crate::alphabet::Alphabet;

/// Apply a candidate key to ciphertext.
///
/// Uppercase letters map through the key; any other symbol (punctuation,
/// whitespace, digits, lowercase) passes through unchanged, so the full
/// original document can be decoded for display, not just the stripped
/// engine input.
pub fn decode(key: &Alphabet, text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                key.decode_letter(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}

pub fn decode_bytes(key: &Alphabet, text: &[u8]) -> Vec<u8> {
    text.iter()
        .map(|&c| {
            if c.is_ascii_uppercase() {
                key.decode_letter(c)
            } else {
                c
            }
        })
        .collect()
}
