//! Hex string codec for building and rendering byte buffers.
//!
//! Test fixtures for the pattern finder are most readable as spaced hex strings such as
//! `"dead beef 1234"`. This module decodes that notation into byte vectors and encodes
//! byte slices back into compact lowercase hex. ASCII whitespace is ignored on decode,
//! so fixtures can group bytes into words of any width without affecting the result.
//!
//! Decoding failures surface as [`crate::Error::OddHexLength`] or
//! [`crate::Error::InvalidHexDigit`]; encoding is infallible.

use crate::{Error, Result};

/// Decodes a hex string into bytes, ignoring ASCII whitespace.
///
/// Two hex digits encode one byte, most significant nibble first. Whitespace may appear
/// anywhere, including between the two digits of a byte.
///
/// # Arguments
///
/// * `hex` - The hex string to decode
///
/// # Returns
///
/// The decoded bytes, or [`crate::Error::OddHexLength`] when the digit count is odd, or
/// [`crate::Error::InvalidHexDigit`] when a non-digit, non-whitespace character occurs.
///
/// # Examples
///
/// ```rust
/// use byteprint::hex::from_hex;
///
/// let bytes = from_hex("dead beef 1234")?;
/// assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF, 0x12, 0x34]);
/// # Ok::<(), byteprint::Error>(())
/// ```
pub fn from_hex(hex: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let mut pending: Option<u8> = None;
    let mut digits = 0_usize;

    for (index, character) in hex.char_indices() {
        if character.is_ascii_whitespace() {
            continue;
        }

        let Some(nibble) = character.to_digit(16) else {
            return Err(Error::InvalidHexDigit { character, index });
        };

        digits += 1;
        match pending.take() {
            Some(high) => bytes.push((high << 4) | nibble as u8),
            None => pending = Some(nibble as u8),
        }
    }

    if pending.is_some() {
        return Err(Error::OddHexLength(digits));
    }

    Ok(bytes)
}

/// Encodes bytes as a compact lowercase hex string.
///
/// # Examples
///
/// ```rust
/// use byteprint::hex::to_hex;
///
/// assert_eq!(to_hex(&[0xDE, 0xAD, 0xBE, 0xEF]), "deadbeef");
/// ```
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0'));
        hex.push(char::from_digit(u32::from(byte & 0x0F), 16).unwrap_or('0'));
    }
    hex
}
