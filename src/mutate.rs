//! Inverse transforms for the eight recognizable mutations.
//!
//! These helpers construct test fixtures and verify detector claims: every
//! [`crate::pattern::Mutation`] variant has a matching transform here, and every
//! transform is its own inverse. A reported [`crate::pattern::BytePattern::SameIf`]
//! can therefore be checked by applying its mutation list, in order, to the
//! right-hand sequence and comparing against the left-hand one.
//!
//! The whole-sequence transforms ([`reversed`], [`reversed_hex`]) are total; the
//! word-level transforms require the buffer length to be a multiple of the word
//! size and return [`crate::Error::NotWordAligned`] otherwise.
//!
//! # Usage Examples
//!
//! ```rust
//! use byteprint::{find, mutate, BytePattern};
//!
//! let lhs = [0xDE, 0xAD, 0xBE, 0xEF];
//! let rhs = mutate::swap_endian_u16(&lhs)?;
//!
//! // Verify the detector's claim by undoing the reported mutations.
//! let Some(BytePattern::SameIf(mutations)) = find(&lhs, &rhs) else {
//!     panic!("expected a pattern");
//! };
//! assert_eq!(mutate::apply_all(&mutations, &rhs)?, lhs);
//! # Ok::<(), byteprint::Error>(())
//! ```

use crate::{finder::rotate_nibbles, pattern::Mutation, Error, Result};

/// Reverses the sequence in its entirety, byte by byte.
#[must_use]
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Reverses the sequence as its hex string representation would be reversed:
/// byte order reversed and the two nibbles within every byte swapped.
#[must_use]
pub fn reversed_hex(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().map(|byte| rotate_nibbles(*byte)).collect()
}

/// Reverses the order of the sequence's 16-bit words, leaving each word's bytes untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 2.
pub fn reorder_u16(bytes: &[u8]) -> Result<Vec<u8>> {
    reorder_words(bytes, 2)
}

/// Reverses the order of the sequence's 32-bit words, leaving each word's bytes untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 4.
pub fn reorder_u32(bytes: &[u8]) -> Result<Vec<u8>> {
    reorder_words(bytes, 4)
}

/// Reverses the order of the sequence's 64-bit words, leaving each word's bytes untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 8.
pub fn reorder_u64(bytes: &[u8]) -> Result<Vec<u8>> {
    reorder_words(bytes, 8)
}

/// Swaps the endianness of each 16-bit word, leaving the word order untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 2.
pub fn swap_endian_u16(bytes: &[u8]) -> Result<Vec<u8>> {
    swap_endian_words(bytes, 2)
}

/// Swaps the endianness of each 32-bit word, leaving the word order untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 4.
pub fn swap_endian_u32(bytes: &[u8]) -> Result<Vec<u8>> {
    swap_endian_words(bytes, 4)
}

/// Swaps the endianness of each 64-bit word, leaving the word order untouched.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when the length is not a multiple of 8.
pub fn swap_endian_u64(bytes: &[u8]) -> Result<Vec<u8>> {
    swap_endian_words(bytes, 8)
}

/// Applies a list of mutations, in order, to a buffer.
///
/// # Errors
///
/// Returns [`Error::NotWordAligned`] when a word-level mutation meets a buffer whose
/// length is not a multiple of its word size.
pub fn apply_all(mutations: &[Mutation], bytes: &[u8]) -> Result<Vec<u8>> {
    let mut current = bytes.to_vec();
    for mutation in mutations {
        current = mutation.apply(&current)?;
    }
    Ok(current)
}

impl Mutation {
    /// Applies this mutation to a buffer, returning the transformed copy.
    ///
    /// Every mutation is its own inverse, so this both *performs* the accidental
    /// transform (fixture construction) and *undoes* it (pattern verification).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotWordAligned`] for a word-level mutation on a buffer whose
    /// length is not a multiple of the word size.
    pub fn apply(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Mutation::Reversed => Ok(reversed(bytes)),
            Mutation::ReversedHex => Ok(reversed_hex(bytes)),
            Mutation::ReorderUInt16 => reorder_u16(bytes),
            Mutation::ReorderUInt32 => reorder_u32(bytes),
            Mutation::ReorderUInt64 => reorder_u64(bytes),
            Mutation::SwapEndianUInt16 => swap_endian_u16(bytes),
            Mutation::SwapEndianUInt32 => swap_endian_u32(bytes),
            Mutation::SwapEndianUInt64 => swap_endian_u64(bytes),
        }
    }
}

fn check_alignment(bytes: &[u8], word: usize) -> Result<()> {
    if bytes.len() % word != 0 {
        return Err(Error::NotWordAligned {
            len: bytes.len(),
            word,
        });
    }
    Ok(())
}

fn reorder_words(bytes: &[u8], word: usize) -> Result<Vec<u8>> {
    check_alignment(bytes, word)?;
    Ok(bytes.chunks(word).rev().flatten().copied().collect())
}

fn swap_endian_words(bytes: &[u8], word: usize) -> Result<Vec<u8>> {
    check_alignment(bytes, word)?;
    Ok(bytes
        .chunks(word)
        .flat_map(|chunk| chunk.iter().rev())
        .copied()
        .collect())
}
