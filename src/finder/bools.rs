//! Constant-time running verdicts for the three whole-sequence relationships.

use super::rotate::rotate_nibbles;

/// Three booleans tracking whether the sequences are identical, reversed copies,
/// or hex-reversed copies of each other.
///
/// All start `true` and only ever fall to `false` as contradicting byte pairs are
/// observed. One update per pair is O(1); once all three have fallen the update is
/// a no-op. Each step observes three of the four available bytes, comparing the
/// `lhs` LSB-side byte against both ends of `rhs`.
#[derive(Debug)]
pub(crate) struct QuickBools {
    identical: bool,
    reversed: bool,
    reversed_hex: bool,
}

impl Default for QuickBools {
    fn default() -> Self {
        Self {
            identical: true,
            reversed: true,
            reversed_hex: true,
        }
    }
}

impl QuickBools {
    pub(crate) fn update(&mut self, lhs_lsb: u8, rhs_lsb: u8, rhs_msb: u8) {
        if !(self.identical || self.reversed || self.reversed_hex) {
            return;
        }
        self.identical &= lhs_lsb == rhs_lsb;
        self.reversed &= lhs_lsb == rhs_msb;
        self.reversed_hex &= lhs_lsb == rotate_nibbles(rhs_msb);
    }

    pub(crate) fn identical(&self) -> bool {
        self.identical
    }

    pub(crate) fn reversed(&self) -> bool {
        self.reversed
    }

    pub(crate) fn reversed_hex(&self) -> bool {
        self.reversed_hex
    }

    /// Panics when the end-of-scan state is internally inconsistent.
    ///
    /// Identity, reversal and hex-reversal are mutually exclusive for any sequence
    /// with at least two distinct byte values, so at most one verdict can survive a
    /// full scan. The one exception is degenerate constant-content input (for example
    /// all zeros), where every byte pair satisfies all three relations at once and
    /// all three survive. Exactly two surviving verdicts cannot happen for any input
    /// and means the update logic itself is broken — better to stop loudly than to
    /// report a wrong pattern.
    pub(crate) fn assert_consistent(&self) {
        match (self.identical, self.reversed, self.reversed_hex) {
            (true, true, false) | (true, false, true) | (false, true, true) => {
                panic!(
                    "inconsistent verdicts: identical: {}, reversed: {}, reversed_hex: {}",
                    self.identical, self.reversed, self.reversed_hex
                );
            }
            _ => {}
        }
    }
}
