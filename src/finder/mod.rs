//! Linear-time detection of mechanical byte-sequence mutations.
//!
//! This module is the core of the crate: a single-pass analysis that consumes two
//! equal-length byte sequences from both ends simultaneously and classifies how one
//! could have been derived from the other — reversed outright, reversed as a hex
//! string, or reinterpreted as 16/32/64-bit words that were reordered and/or
//! endianness-swapped.
//!
//! # Architecture
//!
//! The scan walks offsets from both ends toward the middle. Each step feeds
//!
//! - the running whole-sequence verdicts ([`crate::finder::bools`]) — identical,
//!   reversed, hex-reversed — each updated in O(1), and
//! - six dual-end word groups ([`crate::finder::group`]), one per word size per
//!   sequence, which buffer bytes per end ([`crate::finder::ends`]) and materialize
//!   big- and little-endian words as whole words complete, both for the raw bytes
//!   and for their nibble-rotated mirror ([`crate::finder::rotate`]).
//!
//! Classification after the pass is constant time: the boolean verdicts answer the
//! whole-sequence cases directly, and the word groups' final projections are compared
//! per width, widest first. Total cost is one O(n) traversal plus O(1) follow-up.
//!
//! # Key Components
//!
//! - [`crate::finder::PatternFinder`] - The detector; [`PatternFinder::find`] is its
//!   single operation
//! - [`crate::finder::find`] - Free-function shorthand for a one-off detection
//! - [`crate::finder::rotate_nibbles`] - The nibble rotation underlying the
//!   hex-reversal checks
//!
//! # Usage Examples
//!
//! ```rust
//! use byteprint::{find, BytePattern, Mutation};
//!
//! let lhs = [0xDE, 0xAD, 0xBE, 0xEF];
//! let rhs = [0xEF, 0xBE, 0xAD, 0xDE];
//! assert_eq!(
//!     find(&lhs, &rhs),
//!     Some(BytePattern::SameIf(vec![Mutation::Reversed]))
//! );
//! ```
//!
//! # Error Handling
//!
//! Detection has no error values: unequal lengths, odd lengths and unrecognized
//! relationships all return `None`. Violations of the detector's internal invariants
//! panic — a pattern-detection tool that can misreport silently is worthless.
//!
//! # Thread Safety
//!
//! [`PatternFinder::find`] is a pure function of its two inputs. All intermediate
//! state is allocated per call and discarded with the result, so independent calls
//! are safe from any number of threads.

mod bools;
mod ends;
mod group;
mod rotate;
mod word;

pub use rotate::rotate_nibbles;

use bools::QuickBools;
use group::WordGroup;

use crate::pattern::{BytePattern, Mutation};

/// All three word-size groups for one sequence.
#[derive(Default)]
struct WordGroups {
    u16_group: WordGroup<u16>,
    u32_group: WordGroup<u32>,
    u64_group: WordGroup<u64>,
}

impl WordGroups {
    fn consume(&mut self, lsb_byte: u8, msb_byte: u8) {
        self.u16_group.consume(lsb_byte, msb_byte);
        self.u32_group.consume(lsb_byte, msb_byte);
        self.u64_group.consume(lsb_byte, msb_byte);
    }
}

/// Working state of one detection run: the boolean verdicts plus both sequences'
/// word groups, fed four bytes per scan step.
#[derive(Default)]
struct Storage {
    bytes_handled: usize,
    bools: QuickBools,
    lhs: WordGroups,
    rhs: WordGroups,
}

impl Storage {
    fn update(&mut self, lhs_lsb: u8, lhs_msb: u8, rhs_lsb: u8, rhs_msb: u8) {
        self.bytes_handled += 2;
        self.bools.update(lhs_lsb, rhs_lsb, rhs_msb);
        self.lhs.consume(lhs_lsb, lhs_msb);
        self.rhs.consume(rhs_lsb, rhs_msb);
    }

    /// Word-level classification, widest first.
    ///
    /// A valid wide-word explanation subsumes any narrower one that would also match,
    /// so 64-bit words are tried before 32, and 32 before 16. Narrower widths are
    /// only reached when the wider group lacks full words or fails to match.
    fn same_if_rhs(&self) -> Option<Vec<Mutation>> {
        self.lhs
            .u64_group
            .same_if_rhs(&self.rhs.u64_group, self.bytes_handled)
            .or_else(|| {
                self.lhs
                    .u32_group
                    .same_if_rhs(&self.rhs.u32_group, self.bytes_handled)
            })
            .or_else(|| {
                self.lhs
                    .u16_group
                    .same_if_rhs(&self.rhs.u16_group, self.bytes_handled)
            })
    }
}

/// A linear-time byte pattern finder.
///
/// Discovers that two byte sequences which are not bit-for-bit identical differ by one
/// of a small set of mechanical transformations: during construction of one of them a
/// developer accidentally reversed the sequence, reversed its hex string, or loaded it
/// as fixed-width integers with the wrong endianness or order — or a combination.
///
/// The finder is stateless; every [`PatternFinder::find`] call allocates its own
/// working state and discards it with the result.
///
/// # Examples
///
/// ```rust
/// use byteprint::{hex::from_hex, BytePattern, Mutation, PatternFinder};
///
/// let finder = PatternFinder::new();
/// let lhs = from_hex("dead beef 1234")?;
/// let rhs = from_hex("1234 beef dead")?;
///
/// assert_eq!(
///     finder.find(&lhs, &rhs),
///     Some(BytePattern::SameIf(vec![Mutation::ReorderUInt16]))
/// );
/// # Ok::<(), byteprint::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternFinder;

impl PatternFinder {
    /// Creates a new finder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Detects the structural relationship between `lhs` and `rhs`.
    ///
    /// Returns [`BytePattern::Identical`] for equal sequences, a
    /// [`BytePattern::SameIf`] whose mutation list applied in order to `rhs`
    /// reproduces `lhs`, or `None` when the lengths differ, the length is odd,
    /// or no recognized relationship exists.
    ///
    /// Runs in one pass over the input plus constant-time classification.
    ///
    /// # Panics
    ///
    /// Panics if the detector's internal invariants are violated — a defect in the
    /// algorithm itself, never a property of the input.
    #[must_use]
    pub fn find(&self, lhs: &[u8], rhs: &[u8]) -> Option<BytePattern> {
        if lhs.len() != rhs.len() {
            return None;
        }
        // Pairing bytes from both ends requires an even length; odd lengths are
        // not supported.
        if lhs.len() % 2 != 0 {
            return None;
        }

        let mut storage = Storage::default();
        for offset in 0..lhs.len() / 2 {
            let mirror = lhs.len() - 1 - offset;
            storage.update(lhs[offset], lhs[mirror], rhs[offset], rhs[mirror]);
        }

        storage.bools.assert_consistent();

        if storage.bools.identical() {
            return Some(BytePattern::Identical);
        }
        if storage.bools.reversed() {
            return Some(BytePattern::SameIf(vec![Mutation::Reversed]));
        }
        if storage.bools.reversed_hex() {
            return Some(BytePattern::SameIf(vec![Mutation::ReversedHex]));
        }

        storage.same_if_rhs().map(BytePattern::SameIf)
    }
}

/// Detects the structural relationship between `lhs` and `rhs`.
///
/// Shorthand for [`PatternFinder::find`] on a fresh finder; see there for the
/// full contract.
///
/// # Examples
///
/// ```rust
/// use byteprint::{find, BytePattern};
///
/// assert_eq!(find(&[0xAB, 0xBA], &[0xAB, 0xBA]), Some(BytePattern::Identical));
/// assert_eq!(find(&[0xAB, 0xBA], &[0x01, 0x02]), None);
/// ```
#[must_use]
pub fn find(lhs: &[u8], rhs: &[u8]) -> Option<BytePattern> {
    PatternFinder::new().find(lhs, rhs)
}
