//! Nibble rotation of a single byte.

/// Rotates a byte by 4 bits, swapping its high and low nibble.
///
/// This models the effect of reversing the *hex string* representation of a byte
/// sequence: besides reversing the byte order, hex reversal swaps the two digits —
/// the two nibbles — within every byte. `0x34` becomes `0x43`.
///
/// Pure and total; rotating twice yields the original byte.
///
/// # Examples
///
/// ```rust
/// use byteprint::finder::rotate_nibbles;
///
/// assert_eq!(rotate_nibbles(0x34), 0x43);
/// assert_eq!(rotate_nibbles(rotate_nibbles(0xAB)), 0xAB);
/// ```
#[inline]
#[must_use]
pub fn rotate_nibbles(byte: u8) -> u8 {
    (byte >> 4) | (byte << 4)
}
