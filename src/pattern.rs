//! Result types of pattern detection.
//!
//! This module defines [`crate::pattern::BytePattern`], the value returned by a successful
//! detection run, and [`crate::pattern::Mutation`], the closed set of mechanical transforms
//! the detector can recognize. A reported pattern is a verifiable claim: applying the listed
//! mutations, in order, to the right-hand sequence reproduces the left-hand sequence exactly.
//! The inverse transforms live in [`crate::mutate`].

use std::fmt;

use strum::{EnumCount, EnumIter};

/// A structural relationship identified between two equal-length byte sequences.
///
/// Produced by [`crate::finder::PatternFinder::find`]. When the sequences are not
/// byte-for-byte equal, the pattern names the ordered list of accidental transforms
/// that would reconcile them — typically a reversed buffer, a reversed hex string,
/// or integers loaded with the wrong endianness.
///
/// # Examples
///
/// ```rust
/// use byteprint::{find, BytePattern, Mutation};
///
/// let lhs = [0xAB, 0x12, 0xCD, 0x34];
/// let rhs = [0x34, 0xCD, 0x12, 0xAB];
///
/// assert_eq!(find(&lhs, &lhs), Some(BytePattern::Identical));
/// assert_eq!(
///     find(&lhs, &rhs),
///     Some(BytePattern::SameIf(vec![Mutation::Reversed]))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytePattern {
    /// `LHS` and `RHS` byte sequences equal each other.
    Identical,

    /// `LHS` and `RHS` byte sequences would equal each other if the listed mutations
    /// were applied, in order, to `RHS`.
    SameIf(Vec<Mutation>),
}

impl fmt::Display for BytePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BytePattern::Identical => write!(f, "identical"),
            BytePattern::SameIf(mutations) => {
                write!(f, "sameIf([")?;
                for (index, mutation) in mutations.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", mutation)?;
                }
                write!(f, "])")
            }
        }
    }
}

/// A single mechanical transform that may have been applied to a byte sequence by accident.
///
/// This is a closed set: the detector recognizes whole-sequence reversal, hex-string
/// reversal (nibble rotation plus reversal), and per-width integer reordering or
/// endianness swaps. Each variant has an inverse in [`crate::mutate`], and every
/// variant is its own inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum Mutation {
    /// The sequence was reversed in its entirety, byte by byte.
    Reversed,

    /// The sequence was initialized from a hex string that was reversed beforehand.
    ///
    /// Reversing a hex string reverses the byte order *and* swaps the two nibbles
    /// within each byte, since each byte spans two hex digits.
    ReversedHex,

    /// The sequence was chunked into 16-bit words and the order of the words reversed,
    /// each word's internal byte order untouched.
    ReorderUInt16,

    /// The sequence was chunked into 32-bit words and the order of the words reversed,
    /// each word's internal byte order untouched.
    ReorderUInt32,

    /// The sequence was chunked into 64-bit words and the order of the words reversed,
    /// each word's internal byte order untouched.
    ReorderUInt64,

    /// The sequence was chunked into 16-bit words and each word's endianness swapped,
    /// the order of the words untouched.
    SwapEndianUInt16,

    /// The sequence was chunked into 32-bit words and each word's endianness swapped,
    /// the order of the words untouched.
    SwapEndianUInt32,

    /// The sequence was chunked into 64-bit words and each word's endianness swapped,
    /// the order of the words untouched.
    SwapEndianUInt64,
}

impl Mutation {
    /// The word size in bytes this mutation operates on, `None` for the whole-sequence
    /// mutations [`Mutation::Reversed`] and [`Mutation::ReversedHex`].
    #[must_use]
    pub fn word_size(&self) -> Option<usize> {
        match self {
            Mutation::Reversed | Mutation::ReversedHex => None,
            Mutation::ReorderUInt16 | Mutation::SwapEndianUInt16 => Some(2),
            Mutation::ReorderUInt32 | Mutation::SwapEndianUInt32 => Some(4),
            Mutation::ReorderUInt64 | Mutation::SwapEndianUInt64 => Some(8),
        }
    }

    /// The reorder mutation for a word of `byte_count` bytes.
    ///
    /// Only 2, 4 and 8 are meaningful word sizes, anything else is a defect in the
    /// detector itself.
    pub(crate) fn reorder(byte_count: usize) -> Self {
        match byte_count {
            2 => Mutation::ReorderUInt16,
            4 => Mutation::ReorderUInt32,
            8 => Mutation::ReorderUInt64,
            _ => unreachable!("invalid word size: {}", byte_count),
        }
    }

    /// The endianness-swap mutation for a word of `byte_count` bytes.
    pub(crate) fn swap_endian(byte_count: usize) -> Self {
        match byte_count {
            2 => Mutation::SwapEndianUInt16,
            4 => Mutation::SwapEndianUInt32,
            8 => Mutation::SwapEndianUInt64,
            _ => unreachable!("invalid word size: {}", byte_count),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mutation::Reversed => "reversed",
            Mutation::ReversedHex => "reversedHex",
            Mutation::ReorderUInt16 => "reorderUInt16",
            Mutation::ReorderUInt32 => "reorderUInt32",
            Mutation::ReorderUInt64 => "reorderUInt64",
            Mutation::SwapEndianUInt16 => "swapEndianUInt16",
            Mutation::SwapEndianUInt32 => "swapEndianUInt32",
            Mutation::SwapEndianUInt64 => "swapEndianUInt64",
        };
        write!(f, "{}", name)
    }
}
