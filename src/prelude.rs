//! # byteprint Prelude
//!
//! This module re-exports the types and functions most code using the crate touches:
//! the detection entry points, the result types, the mutation transforms and the hex
//! codec. Import it with a glob to get going quickly:
//!
//! ```rust
//! use byteprint::prelude::*;
//!
//! let lhs = from_hex("dead beef").unwrap();
//! let rhs = from_hex("efbe adde").unwrap();
//! assert_eq!(
//!     find(&lhs, &rhs),
//!     Some(BytePattern::SameIf(vec![Mutation::Reversed]))
//! );
//! ```

pub use crate::{
    assertion::{assert_bytes_eq, assert_bytes_eq_with, AssertOptions},
    finder::{find, rotate_nibbles, PatternFinder},
    hex::{from_hex, to_hex},
    mutate,
    pattern::{BytePattern, Mutation},
    Error, Result,
};
