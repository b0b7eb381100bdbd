//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers over base-2^64 digits, with the
//!   full arithmetic, comparison, shift and bitwise operator suite. Bitwise operations
//!   behave as if BigInt were represented in two's-complement notation.
//! - [`DigitStorage`]: the small-buffer, copy-on-write digit sequence backing it.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod digit_storage;
mod error;
mod stream;
mod word;

pub use big_int::BigInt;
pub use digit_storage::DigitStorage;
pub use error::{ParseBigIntError, ReadBigIntError};

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::BigInt;

    fn big(val: &str) -> BigInt {
        val.parse().unwrap()
    }

    fn any_big_int() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), prop::collection::vec(any::<u64>(), 0..7))
            .prop_map(|(negative, digits)| BigInt::from_digits(negative, &digits))
    }

    #[test]
    fn it_works() {
        let a = big("123456789012345678901234567890");
        assert_eq!(a + big("1"), big("123456789012345678901234567891"));

        let a = big("1000000000000000000000");
        assert_eq!(&a / &a, BigInt::one());
        assert_eq!(&a % &a, BigInt::zero());

        assert_eq!(big("-17") % big("5"), big("-2"));
        assert_eq!(big("-17") / big("5"), big("-3"));
        assert!(!(BigInt::from(0) - BigInt::from(0)).sign());
        assert_eq!(big("255") & big("15"), big("15"));
        assert_eq!(big("-1") >> 100, big("-1"));
        assert_eq!(BigInt::from(1) << 128 >> 128, BigInt::from(1));
    }

    proptest! {
        #[test]
        fn prop_string_round_trip(x in any_big_int()) {
            let s = x.to_string();
            prop_assert_eq!(s.parse::<BigInt>().unwrap().to_string(), s);
        }

        #[test]
        fn prop_additive_identities(x in any_big_int()) {
            prop_assert!((&x - &x).is_zero());
            prop_assert!(!(&x - &x).sign());
            prop_assert!((&x * BigInt::zero()).is_zero());
            prop_assert!((&x + -&x).is_zero());
            prop_assert_eq!(!&x, -&x - BigInt::one());
        }

        #[test]
        fn prop_ring_laws(a in any_big_int(), b in any_big_int(), c in any_big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn prop_truncating_division(x in any_big_int(), y in any_big_int()) {
            prop_assume!(!y.is_zero());
            let q = &x / &y;
            let r = &x % &y;
            prop_assert_eq!(&q * &y + &r, x.clone());
            prop_assert!(r.abs() < y.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.sign(), x.sign());
            }
            prop_assert_eq!(x.div_rem(&y), (q, r));
        }

        #[test]
        fn prop_shift_round_trip(x in any_big_int(), k in 0u64..400) {
            prop_assert_eq!((&x << k) >> k, x.clone());
            prop_assert_eq!(&x << k, &x * (BigInt::one() << k));
        }

        #[test]
        fn prop_shr_floors(x in any_big_int(), k in 0u64..400) {
            let divisor = BigInt::one() << k;
            let (q, r) = x.div_rem(&divisor);
            let floor = if r.sign() { q - BigInt::one() } else { q };
            prop_assert_eq!(&x >> k, floor);
        }

        #[test]
        fn prop_bitwise_identities(a in any_big_int(), b in any_big_int()) {
            prop_assert_eq!(&a & &b, &b & &a);
            prop_assert!((&a ^ &a).is_zero());
            prop_assert_eq!(&a | BigInt::zero(), a.clone());
            prop_assert!((&a & !&a).is_zero());
            prop_assert_eq!(&a | !&a, BigInt::from(-1));
            prop_assert_eq!(&a ^ &b, (!&a & &b) | (&a & !&b));
            prop_assert_eq!(&a | &b, !(!&a & !&b));
        }

        #[test]
        fn prop_matches_i128(a in any::<i64>(), b in any::<i64>(), k in 0u64..60) {
            let (x, y) = (BigInt::from(a), BigInt::from(b));
            let (a, b) = (a as i128, b as i128);
            prop_assert_eq!((&x + &y).to_string(), (a + b).to_string());
            prop_assert_eq!((&x - &y).to_string(), (a - b).to_string());
            prop_assert_eq!((&x * &y).to_string(), (a * b).to_string());
            prop_assert_eq!((&x & &y).to_string(), (a & b).to_string());
            prop_assert_eq!((&x | &y).to_string(), (a | b).to_string());
            prop_assert_eq!((&x ^ &y).to_string(), (a ^ b).to_string());
            prop_assert_eq!((&x >> k).to_string(), (a >> k).to_string());
            prop_assert_eq!((&x << k).to_string(), (a << k).to_string());
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            if b != 0 {
                prop_assert_eq!((&x / &y).to_string(), (a / b).to_string());
                prop_assert_eq!((&x % &y).to_string(), (a % b).to_string());
            }
        }
    }
}
