// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # byteprint
//!
//! Linear-time detection of accidental byte-order, endianness and nibble mutations
//! between two byte sequences.
//!
//! When an expected byte buffer doesn't match an actual one, the interesting question
//! is rarely *that* they differ but *why*. In practice mismatching buffers of equal
//! length usually differ by one of a handful of mechanical slips: the sequence was
//! reversed, it was built from a reversed hex string, or it was loaded as 16/32/64-bit
//! integers with the wrong endianness or word order. `byteprint` recognizes exactly
//! these relationships in a single pass over the input and reports them as a verifiable
//! [`BytePattern`] — "you reversed the byte order", "you loaded these as little-endian
//! u32s instead of big-endian".
//!
//! ## Features
//!
//! - **Single-pass detection** - One linear traversal from both ends at once, plus
//!   constant-time classification
//! - **Verifiable results** - Every reported mutation list reproduces LHS when applied
//!   to RHS; the inverse transforms ship in [`mutate`]
//! - **Widest-first word matching** - Data that is really endian-swapped u64s is
//!   reported as such, not as a u16-level coincidence
//! - **Test tooling** - [`assert_bytes_eq!`] fails with the detected pattern spelled
//!   out; [`hex`] decodes readable spaced fixtures
//!
//! ## Quick Start
//!
//! ```rust
//! use byteprint::{find, hex::from_hex, BytePattern, Mutation};
//!
//! let expected = from_hex("dead beef 1234 5678 abba 0912 deed fade")?;
//! let actual = from_hex("adde efbe 3412 7856 baab 1209 edde defa")?;
//!
//! assert_eq!(
//!     find(&expected, &actual),
//!     Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt16]))
//! );
//! # Ok::<(), byteprint::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `byteprint` is organized into a few focused modules:
//!
//! - [`finder`] - The single-pass detector, the core of the crate
//! - [`pattern`] - [`BytePattern`] and [`Mutation`], the detection results
//! - [`mutate`] - The inverse transforms, for fixtures and verification
//! - [`hex`] - Hex codec for readable byte fixtures
//! - [`assertion`] - `assert_eq!`-style helpers that explain byte mismatches
//! - [`prelude`] - Convenient re-exports of the common types
//!
//! ## Scope
//!
//! The detector handles equal, even-length buffers; unequal or odd lengths return
//! `None` rather than an error. Arbitrary byte permutations outside the closed
//! [`Mutation`] set are not recognized.
//!
//! ## Error Handling
//!
//! Detection itself never fails — all outcomes are ordinary values. The [`Error`]
//! type covers the surrounding tooling only: hex decoding and word-aligned mutation
//! application. Violations of the detector's internal invariants panic rather than
//! silently misreport.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use byteprint::prelude::*;
///
/// let pattern = find(&[0xDE, 0xAD], &[0xAD, 0xDE]);
/// assert_eq!(pattern, Some(BytePattern::SameIf(vec![Mutation::Reversed])));
/// ```
pub mod prelude;

/// Test assertions that explain why two byte buffers differ.
///
/// [`assertion::assert_bytes_eq`] and the [`assert_bytes_eq!`] macro run the pattern
/// finder on mismatching buffers and fail with a human-readable rendering of the
/// detected [`BytePattern`] instead of a bare inequality.
pub mod assertion;

/// The single-pass pattern detector.
///
/// [`finder::PatternFinder`] scans both sequences from both ends simultaneously,
/// tracking constant-time whole-sequence verdicts and per-width integer projections,
/// then classifies the relationship. See the module documentation for the algorithm.
pub mod finder;

/// Hex string codec for building and rendering byte buffers.
///
/// [`hex::from_hex`] accepts whitespace-grouped fixtures such as `"dead beef 1234"`;
/// [`hex::to_hex`] renders compact lowercase hex.
pub mod hex;

/// Inverse transforms for the eight recognizable mutations.
///
/// One transform per [`Mutation`] variant, each its own inverse: build fixtures by
/// applying a transform, verify a detected pattern by applying its mutation list.
pub mod mutate;

/// Result types of pattern detection.
///
/// [`pattern::BytePattern`] names the relationship between two sequences;
/// [`pattern::Mutation`] is the closed set of transforms the detector recognizes.
pub mod pattern;

/// `byteprint` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. Used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `byteprint` Error type
///
/// The main error type for the crate's fallible collaborators: hex decoding and
/// word-level mutation application. Pattern detection itself returns options,
/// not errors.
pub use error::Error;

/// Detection entry points.
///
/// [`find`] runs a one-off detection; [`PatternFinder`] is the reusable (stateless)
/// detector behind it.
pub use finder::{find, PatternFinder};

/// Detection results.
///
/// [`BytePattern`] is the reported relationship, [`Mutation`] a single recognized
/// transform within it.
pub use pattern::{BytePattern, Mutation};
