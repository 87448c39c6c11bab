use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Pattern detection itself never fails — "no pattern found", unequal lengths and odd lengths
/// are all ordinary [`Option`] outcomes of [`crate::finder::PatternFinder::find`]. The error
/// cases below belong to the collaborators around the detector: the hex codec used to build
/// fixtures, and the mutation-application helpers that verify a reported pattern.
///
/// # Error Categories
///
/// ## Hex Decoding Errors
/// - [`Error::OddHexLength`] - Hex string holds an incomplete trailing digit
/// - [`Error::InvalidHexDigit`] - Character outside `[0-9a-fA-F]` and whitespace
///
/// ## Mutation Application Errors
/// - [`Error::NotWordAligned`] - Buffer length is not a multiple of the requested word size
///
/// # Examples
///
/// ```rust
/// use byteprint::{hex, Error};
///
/// match hex::from_hex("dead bee") {
///     Ok(bytes) => println!("decoded {} bytes", bytes.len()),
///     Err(Error::OddHexLength(digits)) => {
///         eprintln!("incomplete hex string, {} digits", digits);
///     }
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A hex string contained an odd number of hex digits.
    ///
    /// Two digits encode one byte, so the total digit count (whitespace excluded)
    /// must be even. The associated value is the number of digits that were found.
    #[error("Hex string holds an odd number of digits ({0}), two digits encode one byte")]
    OddHexLength(usize),

    /// A hex string contained a character that is neither a hex digit nor ASCII whitespace.
    ///
    /// # Fields
    ///
    /// * `character` - The offending character
    /// * `index` - Byte index of the character within the input string
    #[error("Invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit {
        /// The offending character
        character: char,
        /// Byte index of the character within the input string
        index: usize,
    },

    /// A word-level mutation was applied to a buffer whose length is not a multiple of
    /// the word size.
    ///
    /// Reordering or endianness-swapping a buffer as 16/32/64-bit integers requires the
    /// buffer to split into whole words.
    ///
    /// # Fields
    ///
    /// * `len` - Length of the buffer in bytes
    /// * `word` - Requested word size in bytes (2, 4 or 8)
    #[error("Buffer of {len} bytes does not split into whole {word}-byte words")]
    NotWordAligned {
        /// Length of the buffer in bytes
        len: usize,
        /// Requested word size in bytes (2, 4 or 8)
        word: usize,
    },
}
