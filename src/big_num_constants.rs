/// Bits in one base-2^64 digit.
pub const DIGIT_BITS: u64 = u64::BITS as u64;

pub const MAX_DIGIT: u64 = u64::MAX;

/// Digits a `BigInt` keeps inline before its storage moves to the heap.
pub const INLINE_DIGITS: usize = 4;

/// Largest count of decimal digits whose value always fits in a `u64`.
pub const DECIMAL_CHUNK_DIGITS: usize = 19;

/// `10^DECIMAL_CHUNK_DIGITS`
pub const DECIMAL_CHUNK_RADIX: u64 = 10_000_000_000_000_000_000;

pub const POWERS_OF_TEN: [u64; DECIMAL_CHUNK_DIGITS + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    DECIMAL_CHUNK_RADIX,
];
