//! Trait abstraction over the fixed-width integer types the finder projects bytes into.
//!
//! The detector tracks candidate explanations at three word sizes (16, 32 and 64 bits)
//! with identical bookkeeping, so the accumulators are generic over a [`WordIO`] trait
//! rather than written out three times. The trait captures exactly the capabilities the
//! algorithm needs: the word size in bytes and endian-aware conversion from a fixed-size
//! byte array.

/// Trait for fixed-width unsigned integers the finder can materialize from raw bytes.
///
/// Implemented for `u16`, `u32` and `u64`. Each implementation defines a `Bytes`
/// associated type representing the fixed-size byte array for that word (`[u8; 2]`
/// for `u16` and so on), convertible from a byte slice of matching length.
pub(crate) trait WordIO: Sized + Copy + Eq {
    /// Byte array type holding exactly one word.
    type Bytes: Copy + for<'a> TryFrom<&'a [u8]>;

    /// Size of one word in bytes.
    const BYTE_COUNT: usize;

    /// Interpret the array as a little-endian word.
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Interpret the array as a big-endian word.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

impl WordIO for u16 {
    type Bytes = [u8; 2];

    const BYTE_COUNT: usize = 2;

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u16::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u16::from_be_bytes(bytes)
    }
}

impl WordIO for u32 {
    type Bytes = [u8; 4];

    const BYTE_COUNT: usize = 4;

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u32::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u32::from_be_bytes(bytes)
    }
}

impl WordIO for u64 {
    type Bytes = [u8; 8];

    const BYTE_COUNT: usize = 8;

    fn from_le_bytes(bytes: Self::Bytes) -> Self {
        u64::from_le_bytes(bytes)
    }

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u64::from_be_bytes(bytes)
    }
}
