//! Integration tests for end-to-end pattern detection.
//!
//! Each scenario feeds a pair of hex fixtures through the finder and, whenever a
//! mutation list is reported, verifies the claim by applying the list to RHS and
//! comparing against LHS — a reported pattern is a checkable statement, not a label.

use byteprint::{find, hex::from_hex, mutate, BytePattern, Mutation};

/// Runs the finder on two hex fixtures, checks the expected pattern, and verifies
/// any reported mutation list against the actual bytes.
fn expect_pattern(lhs_hex: &str, rhs_hex: &str, expected: Option<BytePattern>) {
    let lhs = from_hex(lhs_hex).unwrap();
    let rhs = from_hex(rhs_hex).unwrap();

    let found = find(&lhs, &rhs);
    assert_eq!(found, expected, "lhs: `{lhs_hex}`, rhs: `{rhs_hex}`");

    if let Some(BytePattern::SameIf(mutations)) = &found {
        let reconstructed = mutate::apply_all(mutations, &rhs).unwrap();
        assert_eq!(
            reconstructed, lhs,
            "reported mutations do not reproduce LHS from RHS"
        );
    }
}

#[test]
fn identical() {
    expect_pattern(
        "dead beef 1234 5678 abba 0912 deed fade",
        "dead beef 1234 5678 abba 0912 deed fade",
        Some(BytePattern::Identical),
    );
}

#[test]
fn reversed_short() {
    expect_pattern(
        "ab12 cd34",
        "34cd 12ab",
        Some(BytePattern::SameIf(vec![Mutation::Reversed])),
    );
}

#[test]
fn reversed() {
    expect_pattern(
        "dead beef 1234 5678 abba 0912 deed fade",
        "defa edde 1209 baab 7856 3412 efbe adde",
        Some(BytePattern::SameIf(vec![Mutation::Reversed])),
    );
}

#[test]
fn reversed_hex_short() {
    expect_pattern(
        "ab12 cd34",
        "43dc 21ba",
        Some(BytePattern::SameIf(vec![Mutation::ReversedHex])),
    );
}

#[test]
fn reversed_hex() {
    expect_pattern(
        "dead beef 1234 5678 abba 0912 deed fade",
        "edaf deed 2190 abba 8765 4321 feeb daed",
        Some(BytePattern::SameIf(vec![Mutation::ReversedHex])),
    );
}

#[test]
fn reorder_u16_even_word_count() {
    expect_pattern(
        "dead beef 1234 5678",
        "5678 1234 beef dead",
        Some(BytePattern::SameIf(vec![Mutation::ReorderUInt16])),
    );
}

#[test]
fn reorder_u16_odd_word_count() {
    // Three words: the middle one straddles the two scan directions.
    expect_pattern(
        "dead beef 1234",
        "1234 beef dead",
        Some(BytePattern::SameIf(vec![Mutation::ReorderUInt16])),
    );
}

#[test]
fn swap_endian_u16_short() {
    expect_pattern(
        "ab12 cd34",
        "12ab 34cd",
        Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt16])),
    );
}

#[test]
fn swap_endian_u16() {
    expect_pattern(
        "dead beef 1234 5678 abba 0912 deed fade",
        "adde efbe 3412 7856 baab 1209 edde defa",
        Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt16])),
    );
}

#[test]
fn swap_endian_u32() {
    expect_pattern(
        "deadbeef 12345678 abba0912 deedfade",
        "efbeadde 78563412 1209baab defaedde",
        Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt32])),
    );
}

#[test]
fn swap_endian_u64() {
    expect_pattern(
        "deadbeef12345678 abba0912deedfade",
        "78563412efbeadde defaedde1209baab",
        Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt64])),
    );
}

#[test]
fn composite_swap_reorder_reversed_hex() {
    // All three transforms at once; the fixed branch order must report exactly this
    // composite rather than letting a narrower match mask it.
    expect_pattern(
        "dead beef 1234",
        "edda ebfe 2143",
        Some(BytePattern::SameIf(vec![
            Mutation::SwapEndianUInt16,
            Mutation::ReorderUInt16,
            Mutation::ReversedHex,
        ])),
    );
}

#[test]
fn widest_word_explanation_wins() {
    // Both a u64 and a u16 endianness swap map lhs to rhs here (each u64 word is a
    // repeating two-byte pattern); the wider explanation must be reported.
    let lhs = from_hex("1122112211221122 3344334433443344").unwrap();
    let rhs_u64 = mutate::swap_endian_u64(&lhs).unwrap();
    let rhs_u16 = mutate::swap_endian_u16(&lhs).unwrap();
    assert_eq!(rhs_u64, rhs_u16);

    assert_eq!(
        find(&lhs, &rhs_u64),
        Some(BytePattern::SameIf(vec![Mutation::SwapEndianUInt64]))
    );
}

#[test]
fn odd_byte_count_of_both() {
    expect_pattern("deadbe", "deadbe", None);
}

#[test]
fn odd_byte_count_of_lhs() {
    expect_pattern("deadbe", "dead", None);
}

#[test]
fn odd_byte_count_of_rhs() {
    expect_pattern("dead", "deadbe", None);
}

#[test]
fn different_byte_counts() {
    expect_pattern("dead", "deadbeef", None);
}

#[test]
fn unrelated_buffers() {
    expect_pattern("dead beef", "0102 0304", None);
}

#[test]
fn reflexive_over_varied_content() {
    for length in [0_usize, 2, 8, 64, 256] {
        let buffer: Vec<u8> = (0..length).map(|index| (index * 37 + 11) as u8).collect();
        assert_eq!(
            find(&buffer, &buffer),
            Some(BytePattern::Identical),
            "length {length}"
        );
    }
}

#[test]
fn reversal_round_trip() {
    let lhs = from_hex("dead beef 1234 5678 abba 0912 deed fade").unwrap();
    let rhs = mutate::reversed(&lhs);
    assert_eq!(
        find(&lhs, &rhs),
        Some(BytePattern::SameIf(vec![Mutation::Reversed]))
    );
    assert_eq!(mutate::reversed(&rhs), lhs);
}

#[test]
fn endian_swap_round_trip_per_width() {
    // 64 bytes is a multiple of every word size; distinct non-palindromic words.
    let lhs: Vec<u8> = (0..64).map(|index| (index * 61 + 7) as u8).collect();

    let cases: [(fn(&[u8]) -> byteprint::Result<Vec<u8>>, Mutation); 3] = [
        (mutate::swap_endian_u64, Mutation::SwapEndianUInt64),
        (mutate::swap_endian_u32, Mutation::SwapEndianUInt32),
        (mutate::swap_endian_u16, Mutation::SwapEndianUInt16),
    ];

    for (transform, expected) in cases {
        let rhs = transform(&lhs).unwrap();
        let found = find(&lhs, &rhs);
        // Widest matching width wins; a u16 swap of unrelated content stays u16.
        match (&found, expected) {
            (Some(BytePattern::SameIf(mutations)), _) => {
                assert_eq!(mutate::apply_all(mutations, &rhs).unwrap(), lhs);
            }
            _ => panic!("expected a pattern for {expected}, found {found:?}"),
        }
    }
}

#[test]
fn reorder_round_trip_per_width() {
    let lhs: Vec<u8> = (0..48).map(|index| (index * 53 + 3) as u8).collect();

    let rhs = mutate::reorder_u64(&lhs).unwrap();
    assert_eq!(
        find(&lhs, &rhs),
        Some(BytePattern::SameIf(vec![Mutation::ReorderUInt64]))
    );

    let rhs = mutate::reorder_u32(&lhs).unwrap();
    assert_eq!(
        find(&lhs, &rhs),
        Some(BytePattern::SameIf(vec![Mutation::ReorderUInt32]))
    );

    let rhs = mutate::reorder_u16(&lhs).unwrap();
    assert_eq!(
        find(&lhs, &rhs),
        Some(BytePattern::SameIf(vec![Mutation::ReorderUInt16]))
    );
}

#[test]
fn swap_plus_reorder_composes_to_reversal() {
    // Swapping endianness within each word and reversing the word order is the same
    // as reversing the whole sequence, at any width; the cheaper whole-sequence
    // verdict answers first.
    let lhs: Vec<u8> = (0..32).map(|index| (index * 29 + 5) as u8).collect();
    let rhs = mutate::reorder_u32(&mutate::swap_endian_u32(&lhs).unwrap()).unwrap();
    assert_eq!(rhs, mutate::reversed(&lhs));

    assert_eq!(
        find(&lhs, &rhs),
        Some(BytePattern::SameIf(vec![Mutation::Reversed]))
    );
}
