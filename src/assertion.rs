//! Test assertions that explain *why* two byte buffers differ.
//!
//! A plain `assert_eq!` on byte buffers reports "left != right" and leaves the real
//! question open: was the expected value built with the wrong endianness, or from a
//! reversed hex string? [`assert_bytes_eq`] runs the pattern finder on mismatching
//! buffers and panics with the detected pattern spelled out, turning a wall of hex
//! into "you swapped the endianness of your u32s".
//!
//! When a test deliberately works with "almost equal" data,
//! [`AssertOptions::pass_on_pattern`] accepts any recognized pattern and hands it
//! back to the caller instead of panicking.
//!
//! # Usage Examples
//!
//! ```rust,should_panic
//! use byteprint::assert_bytes_eq;
//!
//! let expected = [0xDE, 0xAD, 0xBE, 0xEF];
//! let actual = [0xEF, 0xBE, 0xAD, 0xDE];
//!
//! // Panics with: "...resemble each other according to byte pattern: sameIf([reversed])"
//! assert_bytes_eq!(expected, actual);
//! ```

use crate::{
    finder::PatternFinder,
    hex::to_hex,
    pattern::BytePattern,
};

/// Behavior switches for [`assert_bytes_eq_with`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AssertOptions {
    /// Pass the assertion when the buffers are not identical but a pattern explains
    /// the difference. Buffers with no recognizable relationship still fail.
    pub pass_on_pattern: bool,
}

impl AssertOptions {
    /// Options that tolerate any recognized pattern, failing only on unrelated buffers.
    #[must_use]
    pub fn tolerant() -> Self {
        Self {
            pass_on_pattern: true,
        }
    }
}

/// Asserts that two byte buffers are identical, explaining the difference when not.
///
/// Returns the detected pattern (always [`BytePattern::Identical`] with default
/// options, so the return value is mainly useful with
/// [`AssertOptions::pass_on_pattern`]).
///
/// # Panics
///
/// Panics when the buffers differ: with the detected [`BytePattern`] in the message
/// when one exists, or a plain mismatch message when the buffers are unrelated.
pub fn assert_bytes_eq(lhs: &[u8], rhs: &[u8]) -> BytePattern {
    assert_bytes_eq_with(lhs, rhs, AssertOptions::default())
}

/// Asserts byte-buffer equality with explicit [`AssertOptions`].
///
/// # Panics
///
/// Panics when the buffers have no recognizable relationship, or when they are
/// non-identical and `options.pass_on_pattern` is not set.
pub fn assert_bytes_eq_with(lhs: &[u8], rhs: &[u8], options: AssertOptions) -> BytePattern {
    let Some(pattern) = PatternFinder::new().find(lhs, rhs) else {
        panic!(
            "expected bytes in LHS to equal RHS, but they are different: \
             lhs: `{}`, rhs: `{}`",
            to_hex(lhs),
            to_hex(rhs)
        );
    };

    if pattern != BytePattern::Identical && !options.pass_on_pattern {
        panic!(
            "expected bytes in LHS to equal RHS, but they are not; however, they \
             resemble each other according to byte pattern: {}",
            pattern
        );
    }

    pattern
}

/// Asserts that two byte buffers are identical, explaining the difference when not.
///
/// Accepts anything convertible to a byte slice. An optional third argument passes
/// [`AssertOptions`] through to [`assert_bytes_eq_with`]. Evaluates to the detected
/// [`BytePattern`].
///
/// # Examples
///
/// ```rust
/// use byteprint::{assert_bytes_eq, assertion::AssertOptions, BytePattern};
///
/// assert_bytes_eq!([0xAB, 0xBA], [0xAB, 0xBA]);
///
/// let pattern = assert_bytes_eq!(
///     [0xDE, 0xAD],
///     [0xAD, 0xDE],
///     AssertOptions::tolerant()
/// );
/// assert_ne!(pattern, BytePattern::Identical);
/// ```
#[macro_export]
macro_rules! assert_bytes_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::assertion::assert_bytes_eq($lhs.as_ref(), $rhs.as_ref())
    };
    ($lhs:expr, $rhs:expr, $options:expr $(,)?) => {
        $crate::assertion::assert_bytes_eq_with($lhs.as_ref(), $rhs.as_ref(), $options)
    };
}
