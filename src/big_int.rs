//! # BigInt
//! Arbitrary-precision signed integers in sign-magnitude form over base-2^64 digits.
//! Bitwise operations behave as if BigInt were represented in infinite two's-complement notation.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a << 10 = {}", &a << 10);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Neg, Not,
};
use std::str::FromStr;

use log::trace;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::digit_storage::DigitStorage;
use crate::error::ParseBigIntError;
use crate::word::*;

type Digits = DigitStorage<u64, INLINE_DIGITS>;

/// Sign flag plus little-endian magnitude digits.
///
/// The magnitude never has a most significant zero digit unless it is the
/// single digit of zero, and zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Digits,
    negative: bool,
}

// 杂项辅助函数
fn trim(digits: &mut Digits) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

fn is_zero_magnitude(digits: &[u64]) -> bool {
    digits.len() == 1 && digits[0] == 0
}

/// Compares two trimmed magnitudes.
fn cmp_magnitude(a: &[u64], b: &[u64]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Adds one to a magnitude.
fn increment_magnitude(digits: &mut Digits) {
    for digit in digits.as_mut_slice() {
        let (sum, carry) = digit.overflowing_add(1);
        *digit = sum;
        if !carry {
            return;
        }
    }
    digits.push(1);
}

/// Subtracts one from a nonzero magnitude.
fn decrement_magnitude(digits: &mut Digits) {
    debug_assert!(!is_zero_magnitude(digits));
    for digit in digits.as_mut_slice() {
        let (diff, borrow) = digit.overflowing_sub(1);
        *digit = diff;
        if !borrow {
            break;
        }
    }
    trim(digits);
}

/// `a -= b` over the low `b.len()` digits of `a` and beyond, returning the final borrow.
fn sub_in_place(a: &mut [u64], b: &[u64]) -> bool {
    let mut borrow = false;
    for (i, digit) in a.iter_mut().enumerate() {
        if i >= b.len() && !borrow {
            break;
        }
        let (diff, out) = sub_borrow(*digit, b.get(i).copied().unwrap_or(0), borrow);
        *digit = diff;
        borrow = out;
    }
    borrow
}

/// Divides the magnitude in place by one digit and returns the remainder.
fn div_rem_word(digits: &mut Digits, divisor: u64) -> u64 {
    let mut rem = 0;
    for digit in digits.as_mut_slice().iter_mut().rev() {
        let (q, r) = div_wide(rem, *digit, divisor);
        *digit = q;
        rem = r;
    }
    trim(digits);
    rem
}

/// Shifts `src` left by `shift < 64` bits into a buffer one digit longer.
fn shl_bits(src: &[u64], shift: u32) -> Vec<u64> {
    let mut out = Vec::with_capacity(src.len() + 1);
    if shift == 0 {
        out.extend_from_slice(src);
        out.push(0);
    } else {
        let mut carry = 0;
        for &digit in src {
            out.push(digit << shift | carry);
            carry = digit >> (u64::BITS - shift);
        }
        out.push(carry);
    }
    out
}

/// Knuth-style long division of trimmed magnitudes, `|a| >= |b|` and `b.len() >= 2`.
///
/// The divisor is shifted until its top digit has the high bit set, which keeps
/// every quotient-digit estimate at most two above the true digit.
fn div_rem_magnitude(a: &[u64], b: &[u64]) -> (Digits, Digits) {
    let shift = b[b.len() - 1].leading_zeros();
    let mut v = shl_bits(b, shift);
    v.pop();
    let mut u = shl_bits(a, shift);

    let n = a.len();
    let m = v.len();
    let top = v[m - 1];
    let mut quotient = Digits::from_elem(n - m + 1, 0);
    let mut trial = vec![0u64; m + 1];

    for k in (0..=n - m).rev() {
        let mut qhat = estimate_quotient(u[k + m], u[k + m - 1], top);

        // trial = v * qhat
        let mut carry = 0;
        for (t, &digit) in trial.iter_mut().zip(&v) {
            let (lo, hi) = mul_add(digit, qhat, 0, carry);
            *t = lo;
            carry = hi;
        }
        trial[m] = carry;

        let window = &mut u[k..=k + m];
        while trial.iter().rev().cmp(window.iter().rev()) == Ordering::Greater {
            qhat -= 1;
            sub_in_place(&mut trial, &v);
        }
        let borrow = sub_in_place(window, &trial);
        debug_assert!(!borrow);
        quotient[k] = qhat;
    }

    let mut remainder = Digits::from_slice(&u[..m]);
    if shift != 0 {
        let rem = remainder.as_mut_slice();
        for i in 0..m {
            let high = rem.get(i + 1).copied().unwrap_or(0);
            rem[i] = rem[i] >> shift | high << (u64::BITS - shift);
        }
    }
    trim(&mut quotient);
    trim(&mut remainder);
    (quotient, remainder)
}

fn sign_fill(negative: bool) -> u64 {
    if negative {
        MAX_DIGIT
    } else {
        0
    }
}

// 实现构造
impl BigInt {
    fn from_word(word: u64, negative: bool) -> BigInt {
        BigInt {
            digits: Digits::from_elem(1, word),
            negative: negative && word != 0,
        }
    }

    /// Builds a value from little-endian base-2^64 digits. Extra high zero
    /// digits are trimmed and an empty slice is zero.
    pub fn from_digits(negative: bool, digits: &[u64]) -> BigInt {
        let digits = if digits.is_empty() {
            Digits::from_elem(1, 0)
        } else {
            Digits::from_slice(digits)
        };
        let mut value = BigInt { digits, negative };
        value.normalize();
        value
    }

    /// Little-endian base-2^64 digits of the magnitude.
    pub fn digits(&self) -> &[u64] {
        self.digits.as_slice()
    }

    /// `true` when the value is negative.
    pub fn sign(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        is_zero_magnitude(&self.digits)
    }

    pub fn abs(&self) -> BigInt {
        BigInt {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    /// Unary plus.
    pub fn pos(&self) -> BigInt {
        self.clone()
    }

    /// Assigns the sign, keeping zero non-negative.
    fn set_sign(&mut self, negative: bool) {
        self.negative = negative && !self.is_zero();
    }

    fn normalize(&mut self) {
        trim(&mut self.digits);
        self.set_sign(self.negative);
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::from_word(0, false)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::from_word(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::from_word((val as i64).unsigned_abs(), val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

impl From<u128> for BigInt {
    fn from(val: u128) -> Self {
        BigInt::from_digits(false, &[val as u64, (val >> DIGIT_BITS) as u64])
    }
}

impl From<i128> for BigInt {
    fn from(val: i128) -> Self {
        let mag = val.unsigned_abs();
        BigInt::from_digits(val < 0, &[mag as u64, (mag >> DIGIT_BITS) as u64])
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::default()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::from_word(1, false)
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|val| i64::try_from(val).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        match self.digits() {
            [word] if !self.negative => Some(*word),
            _ => None,
        }
    }

    fn to_i128(&self) -> Option<i128> {
        let mag = self.abs().to_u128()?;
        if self.negative {
            if mag <= 1 << 127 {
                Some((mag as i128).wrapping_neg())
            } else {
                None
            }
        } else {
            i128::try_from(mag).ok()
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative {
            return None;
        }
        match self.digits() {
            [lo] => Some(*lo as u128),
            [lo, hi] => Some((*hi as u128) << DIGIT_BITS | *lo as u128),
            _ => None,
        }
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}

// 实现打印
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_to_string())
    }
}

impl BigInt {
    /// Decimal digits of the magnitude, peeled off 19 at a time by short division.
    fn magnitude_to_string(&self) -> String {
        let mut magnitude = self.digits.clone();
        let mut groups = Vec::new();
        loop {
            groups.push(div_rem_word(&mut magnitude, DECIMAL_CHUNK_RADIX));
            if is_zero_magnitude(&magnitude) {
                break;
            }
        }

        let mut result = String::with_capacity(groups.len() * DECIMAL_CHUNK_DIGITS);
        let mut groups = groups.iter().rev();
        if let Some(leading) = groups.next() {
            result.push_str(&leading.to_string());
        }
        for group in groups {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_CHUNK_DIGITS));
        }
        result
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses an optional `+` or `-` followed by decimal digits.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let (negative, cursor) = match val.as_bytes()[0] {
            b'-' => (true, 1),
            b'+' => (false, 1),
            _ => (false, 0),
        };
        let digits = &val[cursor..];
        if digits.is_empty() {
            return Err(ParseBigIntError::MissingDigits);
        }
        if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit { index: cursor + index, found });
        }

        let mut value = BigInt::zero();
        for group in digits.as_bytes().chunks(DECIMAL_CHUNK_DIGITS) {
            let group_val = group
                .iter()
                .fold(0u64, |acc, &c| acc * 10 + (c - b'0') as u64);
            value *= &DECIMAL_POWERS[group.len()];
            value += BigInt::from(group_val);
        }
        value.set_sign(negative);
        Ok(value)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = ParseBigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

// 实现大小比较
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(self.digits(), other.digits()),
            (true, true) => cmp_magnitude(other.digits(), self.digits()),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// 实现加减法
impl BigInt {
    /// `|self| += |rhs|`, keeping the sign of `self`.
    fn add_magnitude(&mut self, rhs: &[u64]) {
        let len = self.digits.len().max(rhs.len());
        self.digits.resize(len);
        let mut carry = false;
        for (i, digit) in self.digits.as_mut_slice().iter_mut().enumerate() {
            if i >= rhs.len() && !carry {
                break;
            }
            let (sum, out) = add_carry(*digit, rhs.get(i).copied().unwrap_or(0), carry);
            *digit = sum;
            carry = out;
        }
        if carry {
            self.digits.push(1);
        }
        self.normalize();
    }

    /// `|self| - |rhs|` with the sign of `self`; the smaller magnitude is always
    /// subtracted from the larger and the sign flips when the roles swap.
    fn sub_magnitude(&mut self, rhs: &[u64]) {
        let swap = cmp_magnitude(self.digits(), rhs) == Ordering::Less;
        let len = self.digits.len().max(rhs.len());
        self.digits.resize(len);
        let mut borrow = false;
        for (i, digit) in self.digits.as_mut_slice().iter_mut().enumerate() {
            let other = rhs.get(i).copied().unwrap_or(0);
            let (left, right) = if swap { (other, *digit) } else { (*digit, other) };
            let (diff, out) = sub_borrow(left, right, borrow);
            *digit = diff;
            borrow = out;
        }
        debug_assert!(!borrow);
        if swap {
            self.negative = !self.negative;
        }
        self.normalize();
    }

    /// Prefix increment.
    pub fn inc(&mut self) -> &mut Self {
        *self += BigInt::one();
        self
    }

    /// Prefix decrement.
    pub fn dec(&mut self) -> &mut Self {
        *self -= BigInt::one();
        self
    }

    /// Postfix increment: returns the value before the increment.
    pub fn post_inc(&mut self) -> BigInt {
        let prev = self.clone();
        self.inc();
        prev
    }

    /// Postfix decrement: returns the value before the decrement.
    pub fn post_dec(&mut self) -> BigInt {
        let prev = self.clone();
        self.dec();
        prev
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            self.add_magnitude(rhs.digits());
        } else {
            self.sub_magnitude(rhs.digits());
        }
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            self.sub_magnitude(rhs.digits());
        } else {
            self.add_magnitude(rhs.digits());
        }
    }
}

// 实现乘法
impl BigInt {
    fn mul_word(&mut self, word: u64) {
        let mut carry = 0;
        for digit in self.digits.as_mut_slice() {
            let (lo, hi) = mul_add(*digit, word, 0, carry);
            *digit = lo;
            carry = hi;
        }
        if carry != 0 {
            self.digits.push(carry);
        }
    }

    /// Schoolbook product of two magnitudes.
    fn mul_magnitude(x: &[u64], y: &[u64]) -> Digits {
        let mut product = Digits::from_elem(x.len() + y.len(), 0);
        let out = product.as_mut_slice();
        for (i, &left) in x.iter().enumerate() {
            if left == 0 {
                continue;
            }
            let mut carry = 0;
            let mut j = 0;
            while j < y.len() || carry != 0 {
                let right = y.get(j).copied().unwrap_or(0);
                let (lo, hi) = mul_add(left, right, out[i + j], carry);
                out[i + j] = lo;
                carry = hi;
                j += 1;
            }
        }
        product
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        let negative = self.negative ^ rhs.negative;
        if let [word] = rhs.digits() {
            self.mul_word(*word);
        } else if let [word] = self.digits() {
            let word = *word;
            self.digits = rhs.digits.clone();
            self.mul_word(word);
        } else {
            self.digits = BigInt::mul_magnitude(self.digits(), rhs.digits());
        }
        self.negative = negative;
        self.normalize();
    }
}

// 实现除法与求余
impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of `self`, so `self == q * divisor + r`.
    ///
    /// # Panics
    /// If `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        if divisor.is_zero() {
            panic!("attempt to divide by zero");
        }
        if cmp_magnitude(self.digits(), divisor.digits()) == Ordering::Less {
            return (BigInt::zero(), self.clone());
        }

        let (quotient, remainder) = if let [word] = divisor.digits() {
            trace!(target: "big_int", "short division of {} digits", self.digits.len());
            let mut quotient = self.digits.clone();
            let rem = div_rem_word(&mut quotient, *word);
            (quotient, Digits::from_elem(1, rem))
        } else {
            trace!(
                target: "big_int",
                "long division of {} digits by {} digits",
                self.digits.len(),
                divisor.digits.len()
            );
            div_rem_magnitude(self.digits(), divisor.digits())
        };

        let mut quotient = BigInt {
            digits: quotient,
            negative: self.negative ^ divisor.negative,
        };
        quotient.normalize();
        let mut remainder = BigInt {
            digits: remainder,
            negative: self.negative,
        };
        remainder.normalize();
        (quotient, remainder)
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).0;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).1;
    }
}

// 实现左移
impl ShlAssign<u64> for BigInt {
    fn shl_assign(&mut self, n: u64) {
        if n == 0 || self.is_zero() {
            return;
        }
        let n_digits = (n / DIGIT_BITS) as usize;
        let n_bits = (n % DIGIT_BITS) as u32;

        let mut shifted = Digits::from_elem(n_digits, 0);
        if n_bits == 0 {
            shifted.extend(self.digits.iter().copied());
        } else {
            let mut carry = 0;
            for &digit in self.digits.iter() {
                shifted.push(digit << n_bits | carry);
                carry = digit >> (u64::BITS - n_bits);
            }
            if carry != 0 {
                shifted.push(carry);
            }
        }
        self.digits = shifted;
    }
}

// 实现右移
impl ShrAssign<u64> for BigInt {
    /// Arithmetic shift: negative values round toward negative infinity.
    fn shr_assign(&mut self, n: u64) {
        if n == 0 || self.is_zero() {
            return;
        }
        let negative = self.negative;
        // floor(-m / 2^n) == -(floor((m - 1) / 2^n) + 1)
        if negative {
            decrement_magnitude(&mut self.digits);
        }

        let n_digits = n / DIGIT_BITS;
        let n_bits = (n % DIGIT_BITS) as u32;
        if n_digits >= self.digits.len() as u64 {
            self.digits = Digits::from_elem(1, 0);
        } else {
            let src = &self.digits[n_digits as usize..];
            let mut shifted: Digits = if n_bits == 0 {
                Digits::from_slice(src)
            } else {
                (0..src.len())
                    .map(|i| {
                        let high = src.get(i + 1).copied().unwrap_or(0);
                        src[i] >> n_bits | high << (u64::BITS - n_bits)
                    })
                    .collect()
            };
            trim(&mut shifted);
            self.digits = shifted;
        }

        if negative {
            increment_magnitude(&mut self.digits);
        }
        self.negative = negative;
        self.normalize();
    }
}

// 实现位运算
impl BigInt {
    /// Two's-complement digits of the value, sign-extended to `len` digits.
    fn to_twos_complement(&self, len: usize) -> Digits {
        let mut digits = self.digits.clone();
        if self.negative {
            decrement_magnitude(&mut digits);
        }
        digits.resize(len);
        if self.negative {
            for digit in digits.as_mut_slice() {
                *digit = !*digit;
            }
        }
        digits
    }

    /// Applies `op` digit-wise to the infinite two's-complement forms of both
    /// operands and stores the decoded result.
    fn bitwise_assign<F: Fn(u64, u64) -> u64>(&mut self, rhs: &BigInt, op: F) {
        let len = self.digits.len().max(rhs.digits.len());
        let negative = op(sign_fill(self.negative), sign_fill(rhs.negative)) == MAX_DIGIT;
        let lhs = self.to_twos_complement(len);
        let rhs = rhs.to_twos_complement(len);

        let mut digits: Digits = lhs.iter().zip(rhs.iter()).map(|(&a, &b)| op(a, b)).collect();
        if negative {
            for digit in digits.as_mut_slice() {
                *digit = !*digit;
            }
            trim(&mut digits);
            increment_magnitude(&mut digits);
        }
        self.digits = digits;
        self.negative = negative;
        self.normalize();
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        self.bitwise_assign(rhs, |a, b| a & b);
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        self.bitwise_assign(rhs, |a, b| a | b);
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        self.bitwise_assign(rhs, |a, b| a ^ b);
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.set_sign(!self.negative);
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    /// `!x == -x - 1`
    fn not(self) -> Self::Output {
        let mut result = -self;
        result.dec();
        result
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

// 运算符转发: every operator is written once as `op_assign(&mut self, &BigInt)`
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            $imp_assign::$method_assign(self, &rhs);
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            $imp_assign::$method_assign(&mut self, rhs);
            self
        }
    }

    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(self, &rhs)
        }
    }

    impl $imp<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            $imp::$method(self.clone(), rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            $imp::$method(self.clone(), &rhs)
        }
    }
    )*
    };
}

forward_binop! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
}

macro_rules! forward_shift {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $imp<u64> for BigInt {
        type Output = BigInt;

        fn $method(mut self, n: u64) -> Self::Output {
            $imp_assign::$method_assign(&mut self, n);
            self
        }
    }

    impl $imp<u64> for &BigInt {
        type Output = BigInt;

        fn $method(self, n: u64) -> Self::Output {
            $imp::$method(self.clone(), n)
        }
    }
    )*
    };
}

forward_shift! {
    Shl, shl, ShlAssign, shl_assign;
    Shr, shr, ShrAssign, shr_assign;
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, val| acc + val)
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, val| acc * val)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, val| acc * val)
    }
}
