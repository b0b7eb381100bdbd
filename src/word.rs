//! Single-digit primitives the multi-precision routines are built from.

use crate::big_num_constants::*;

/// `a + b + carry`, returning the low word and the carry out.
#[inline(always)]
pub fn add_carry(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, c1) = a.overflowing_add(b);
    let (sum, c2) = sum.overflowing_add(carry as u64);
    (sum, c1 || c2)
}

/// `a - b - borrow`, returning the low word and the borrow out.
#[inline(always)]
pub fn sub_borrow(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, b1) = a.overflowing_sub(b);
    let (diff, b2) = diff.overflowing_sub(borrow as u64);
    (diff, b1 || b2)
}

/// Full product `a * b` as `(low, high)`.
#[inline(always)]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128);
    (product as u64, (product >> DIGIT_BITS) as u64)
}

/// `a * b + acc + carry` as `(low, high)`. Never overflows 128 bits.
#[inline(always)]
pub fn mul_add(a: u64, b: u64, acc: u64, carry: u64) -> (u64, u64) {
    let (lo, hi) = mul_wide(a, b);
    let (lo, c1) = add_carry(lo, carry, false);
    let (lo, c2) = add_carry(lo, acc, false);
    (lo, hi + c1 as u64 + c2 as u64)
}

/// Divides the two-digit value `hi:lo` by `d`, returning `(quotient, remainder)`.
///
/// Requires `hi < d`, so the quotient fits in one digit.
#[inline(always)]
pub fn div_wide(hi: u64, lo: u64, d: u64) -> (u64, u64) {
    debug_assert!(hi < d);
    let n = ((hi as u128) << DIGIT_BITS) | (lo as u128);
    ((n / d as u128) as u64, (n % d as u128) as u64)
}

/// Quotient-digit estimate for long division.
///
/// When `hi >= d` the true quotient does not fit in a digit; the estimate is
/// clamped to `MAX_DIGIT` and corrected by the caller.
#[inline(always)]
pub fn estimate_quotient(hi: u64, lo: u64, d: u64) -> u64 {
    debug_assert!(d != 0);
    if hi >= d {
        MAX_DIGIT
    } else {
        div_wide(hi, lo, d).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_carry() {
        assert_eq!(add_carry(1, 2, false), (3, false));
        assert_eq!(add_carry(MAX_DIGIT, 1, false), (0, true));
        assert_eq!(add_carry(MAX_DIGIT, 0, true), (0, true));
        assert_eq!(add_carry(MAX_DIGIT, MAX_DIGIT, true), (MAX_DIGIT, true));
    }

    #[test]
    fn test_sub_borrow() {
        assert_eq!(sub_borrow(3, 2, false), (1, false));
        assert_eq!(sub_borrow(0, 1, false), (MAX_DIGIT, true));
        assert_eq!(sub_borrow(5, 5, true), (MAX_DIGIT, true));
        assert_eq!(sub_borrow(5, 4, true), (0, false));
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul_wide(MAX_DIGIT, MAX_DIGIT), (1, MAX_DIGIT - 1));
        assert_eq!(mul_wide(1 << 32, 1 << 32), (0, 1));
        // (2^64 - 1)^2 + 2 * (2^64 - 1) == 2^128 - 1
        assert_eq!(mul_add(MAX_DIGIT, MAX_DIGIT, MAX_DIGIT, MAX_DIGIT), (MAX_DIGIT, MAX_DIGIT));
    }

    #[test]
    fn test_div() {
        assert_eq!(div_wide(1, 0, 2), (1 << 63, 0));
        assert_eq!(div_wide(0, 17, 5), (3, 2));
        assert_eq!(estimate_quotient(7, 0, 7), MAX_DIGIT);
        assert_eq!(estimate_quotient(6, 0, 7), div_wide(6, 0, 7).0);
    }
}
