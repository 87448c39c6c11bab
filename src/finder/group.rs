//! Dual-end word groups and the per-width classification of two sequences.
//!
//! A [`WordGroup`] pairs the LSB-end and MSB-end accumulators of one sequence for one
//! word size. After the scan it can assemble the complete word projection of the
//! sequence — LSB-end words, an optional middle word straddling the two scan
//! directions, then MSB-end words — in any combination of raw/rotated input and
//! big/little endianness. Comparing two groups' projections yields the mutation list
//! explaining how the right-hand sequence diverged from the left-hand one.

use super::{ends::EndAccumulator, word::WordIO};
use crate::pattern::Mutation;

/// LSB-end and MSB-end accumulators for one sequence at one word size.
pub(crate) struct WordGroup<I: WordIO> {
    lsb_end: EndAccumulator<I>,
    msb_end: EndAccumulator<I>,
}

impl<I: WordIO> Default for WordGroup<I> {
    fn default() -> Self {
        Self {
            lsb_end: EndAccumulator::new(false),
            msb_end: EndAccumulator::new(true),
        }
    }
}

impl<I: WordIO> WordGroup<I> {
    /// Feeds the next byte pair, one from each end of the sequence.
    pub(crate) fn consume(&mut self, lsb_byte: u8, msb_byte: u8) {
        self.lsb_end.consume(lsb_byte);
        self.msb_end.consume(msb_byte);
    }

    /// The complete word projection of the scanned sequence, in sequence order.
    ///
    /// Concatenates `[lsb_end_words..., middle?, msb_end_words...]`. The middle word
    /// exists only when the two ends' leftover buffers together fill exactly one word,
    /// which happens when the half-sequence length is not word-aligned. Returns `None`
    /// when either end produced no full word at all — too little data to assert a
    /// pattern at this width.
    pub(crate) fn assembled(&self, rotated: bool, big_endian: bool) -> Option<Vec<I>> {
        let lsb_words = self.lsb_end.list(rotated).words(big_endian);
        let msb_words = self.msb_end.list(rotated).words(big_endian);
        if lsb_words.is_empty() || msb_words.is_empty() {
            return None;
        }

        let mut assembled = Vec::with_capacity(lsb_words.len() + msb_words.len() + 1);
        assembled.extend(lsb_words.iter().copied());
        if let Some(middle) = self.middle_word(rotated, big_endian) {
            assembled.push(middle);
        }
        assembled.extend(msb_words.iter().copied());
        Some(assembled)
    }

    /// The word formed by the two ends' leftover bytes, if they complete exactly one word.
    fn middle_word(&self, rotated: bool, big_endian: bool) -> Option<I> {
        let lsb_leftover = self.lsb_end.list(rotated).leftover();
        let msb_leftover = self.msb_end.list(rotated).leftover();

        // Both ends consume the same byte count, so their leftovers match in size.
        debug_assert_eq!(lsb_leftover.len(), msb_leftover.len());
        if lsb_leftover.len() + msb_leftover.len() != I::BYTE_COUNT {
            return None;
        }

        let mut bytes = Vec::with_capacity(I::BYTE_COUNT);
        bytes.extend_from_slice(lsb_leftover);
        bytes.extend_from_slice(msb_leftover);
        let Ok(raw) = I::Bytes::try_from(bytes.as_slice()) else {
            unreachable!("middle buffer holds exactly one word");
        };
        Some(if big_endian {
            I::from_be_bytes(raw)
        } else {
            I::from_le_bytes(raw)
        })
    }

    /// Classifies the relationship between this (LHS) group and the RHS group.
    ///
    /// The branches are checked in a fixed order and the first match wins; later
    /// branches describe composites of earlier ones, so the order is load-bearing.
    /// Every match must account for all bytes the scan handled — a match built from
    /// fewer words than the input implies is a defect in the accumulators, not a
    /// property of the input, and panics.
    pub(crate) fn same_if_rhs(&self, rhs: &Self, bytes_handled: usize) -> Option<Vec<Mutation>> {
        let lhs_le = self.assembled(false, false);
        let lhs_be = self.assembled(false, true);
        let rhs_le = rhs.assembled(false, false);
        let rhs_be = rhs.assembled(false, true);
        let rhs_rotated_le = rhs.assembled(true, false);

        // RHS word order reversed, word contents untouched.
        if let (Some(lhs), Some(rhs)) = (&lhs_le, &rhs_le) {
            if lhs.iter().eq(rhs.iter().rev()) {
                assert_full_coverage::<I>(lhs.len(), bytes_handled);
                return Some(vec![Mutation::reorder(I::BYTE_COUNT)]);
            }
        }

        // Endianness swapped within each word, word order untouched.
        if let (Some(lhs), Some(rhs)) = (&lhs_be, &rhs_le) {
            if lhs == rhs {
                assert_full_coverage::<I>(lhs.len(), bytes_handled);
                return Some(vec![Mutation::swap_endian(I::BYTE_COUNT)]);
            }
        }
        if let (Some(lhs), Some(rhs)) = (&lhs_le, &rhs_be) {
            if lhs == rhs {
                assert_full_coverage::<I>(lhs.len(), bytes_handled);
                return Some(vec![Mutation::swap_endian(I::BYTE_COUNT)]);
            }
        }

        // Endianness swapped and word order reversed.
        if let (Some(lhs), Some(rhs)) = (&lhs_le, &rhs_be) {
            if lhs.iter().eq(rhs.iter().rev()) {
                assert_full_coverage::<I>(lhs.len(), bytes_handled);
                return Some(vec![
                    Mutation::swap_endian(I::BYTE_COUNT),
                    Mutation::reorder(I::BYTE_COUNT),
                ]);
            }
        }

        // Endianness swapped, word order reversed and hex-reversed: composes to a
        // pure nibble rotation of RHS, visible through its rotated projection.
        if let (Some(lhs), Some(rhs)) = (&lhs_le, &rhs_rotated_le) {
            if lhs == rhs {
                assert_full_coverage::<I>(lhs.len(), bytes_handled);
                return Some(vec![
                    Mutation::swap_endian(I::BYTE_COUNT),
                    Mutation::reorder(I::BYTE_COUNT),
                    Mutation::ReversedHex,
                ]);
            }
        }

        None
    }
}

/// Panics unless `words` words of this width cover every byte the scan handled.
fn assert_full_coverage<I: WordIO>(words: usize, bytes_handled: usize) {
    assert_eq!(
        words * I::BYTE_COUNT,
        bytes_handled,
        "{}-byte word match built from too few words",
        I::BYTE_COUNT
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feeds a whole sequence into a group the way the finder's scan does.
    fn scan<I: WordIO>(bytes: &[u8]) -> WordGroup<I> {
        assert_eq!(bytes.len() % 2, 0);
        let mut group = WordGroup::<I>::default();
        for offset in 0..bytes.len() / 2 {
            let mirror = bytes.len() - 1 - offset;
            group.consume(bytes[offset], bytes[mirror]);
        }
        group
    }

    #[test]
    fn assembled_without_middle_word() {
        let group = scan::<u16>(&[0xDE, 0xAD, 0xBE, 0xEF, 0x12, 0x34, 0x56, 0x78]);
        assert_eq!(
            group.assembled(false, true).unwrap(),
            [0xDEAD, 0xBEEF, 0x1234, 0x5678]
        );
        assert_eq!(
            group.assembled(false, false).unwrap(),
            [0xADDE, 0xEFBE, 0x3412, 0x7856]
        );
    }

    #[test]
    fn assembled_with_middle_word() {
        // Three u16 words: each end completes one word and leaves one byte over,
        // the two leftovers forming the middle word `be ef`.
        let group = scan::<u16>(&[0xDE, 0xAD, 0xBE, 0xEF, 0x12, 0x34]);
        assert_eq!(
            group.assembled(false, true).unwrap(),
            [0xDEAD, 0xBEEF, 0x1234]
        );
    }

    #[test]
    fn assembled_requires_full_words_at_both_ends() {
        // Six bytes give each end only three — no full u32 materializes.
        let group = scan::<u32>(&[0xDE, 0xAD, 0xBE, 0xEF, 0x12, 0x34]);
        assert_eq!(group.assembled(false, false), None);
        assert_eq!(group.assembled(false, true), None);
        assert_eq!(group.assembled(true, false), None);
    }

    #[test]
    fn classify_reordered_words() {
        let lhs = scan::<u16>(&[0xDE, 0xAD, 0xBE, 0xEF, 0x12, 0x34]);
        let rhs = scan::<u16>(&[0x12, 0x34, 0xBE, 0xEF, 0xDE, 0xAD]);
        assert_eq!(
            lhs.same_if_rhs(&rhs, 6),
            Some(vec![Mutation::ReorderUInt16])
        );
    }

    #[test]
    fn classify_endian_swapped_words() {
        let lhs = scan::<u16>(&[0xAB, 0x12, 0xCD, 0x34]);
        let rhs = scan::<u16>(&[0x12, 0xAB, 0x34, 0xCD]);
        assert_eq!(
            lhs.same_if_rhs(&rhs, 4),
            Some(vec![Mutation::SwapEndianUInt16])
        );
    }

    #[test]
    fn classify_unrelated_sequences() {
        let lhs = scan::<u16>(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let rhs = scan::<u16>(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(lhs.same_if_rhs(&rhs, 4), None);
    }
}
