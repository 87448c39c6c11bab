//! Per-end byte accumulators that materialize fixed-width words on the fly.
//!
//! The finder walks both sequences from both ends at once. Each end of each sequence
//! owns one [`EndAccumulator`] per word size, which buffers incoming bytes until a
//! whole word has arrived and then records that word in both big-endian and
//! little-endian form — once for the raw bytes and once for their nibble-rotated
//! counterparts. The growing word lists stay in natural left-to-right sequence order:
//! the LSB end appends while the MSB end prepends, so no reordering is needed when
//! the two halves are assembled later.

use std::collections::VecDeque;

use super::{rotate::rotate_nibbles, word::WordIO};

/// Growing list of words materialized from one end of a sequence, for one input
/// variant (raw or nibble-rotated).
///
/// Bytes are buffered until `I::BYTE_COUNT` of them have arrived, then the buffer is
/// interpreted as one word in both endiannesses and cleared. After consuming N bytes
/// the list holds exactly `N / I::BYTE_COUNT` words; leftovers stay buffered and
/// contribute nothing until topped up.
pub(crate) struct WordList<I: WordIO> {
    /// Prepend instead of append, keeping lists in sequence order for the MSB end.
    msb_end: bool,
    buffer: Vec<u8>,
    big_endian: VecDeque<I>,
    little_endian: VecDeque<I>,
}

impl<I: WordIO> WordList<I> {
    fn new(msb_end: bool) -> Self {
        Self {
            msb_end,
            buffer: Vec::with_capacity(I::BYTE_COUNT),
            big_endian: VecDeque::new(),
            little_endian: VecDeque::new(),
        }
    }

    fn consume(&mut self, byte: u8) {
        if self.msb_end {
            self.buffer.insert(0, byte);
        } else {
            self.buffer.push(byte);
        }

        if self.buffer.len() != I::BYTE_COUNT {
            return;
        }

        let Ok(raw) = I::Bytes::try_from(self.buffer.as_slice()) else {
            unreachable!("word buffer holds exactly one word");
        };
        let big = I::from_be_bytes(raw);
        let little = I::from_le_bytes(raw);
        self.buffer.clear();

        if self.msb_end {
            self.big_endian.push_front(big);
            self.little_endian.push_front(little);
        } else {
            self.big_endian.push_back(big);
            self.little_endian.push_back(little);
        }
    }

    /// Words materialized so far, in sequence order.
    pub(crate) fn words(&self, big_endian: bool) -> &VecDeque<I> {
        if big_endian {
            &self.big_endian
        } else {
            &self.little_endian
        }
    }

    /// Buffered bytes that have not yet filled a whole word, in sequence order.
    pub(crate) fn leftover(&self) -> &[u8] {
        &self.buffer
    }
}

/// Accumulator for one end of one sequence at one word size.
///
/// Tracks the raw byte stream and its nibble-rotated mirror side by side; the rotated
/// variant feeds the hex-reversal composite check.
pub(crate) struct EndAccumulator<I: WordIO> {
    non_rotated: WordList<I>,
    rotated: WordList<I>,
}

impl<I: WordIO> EndAccumulator<I> {
    pub(crate) fn new(msb_end: bool) -> Self {
        Self {
            non_rotated: WordList::new(msb_end),
            rotated: WordList::new(msb_end),
        }
    }

    pub(crate) fn consume(&mut self, byte: u8) {
        self.non_rotated.consume(byte);
        self.rotated.consume(rotate_nibbles(byte));
    }

    pub(crate) fn list(&self, rotated: bool) -> &WordList<I> {
        if rotated {
            &self.rotated
        } else {
            &self.non_rotated
        }
    }
}
