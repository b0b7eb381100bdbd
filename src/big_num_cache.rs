use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    /// `DECIMAL_POWERS[n] == 10^n` for every chunk length the decimal parser uses.
    pub static ref DECIMAL_POWERS: [BigInt; DECIMAL_CHUNK_DIGITS + 1] =
        POWERS_OF_TEN.map(BigInt::from);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_powers_match_table() {
        for (n, power) in DECIMAL_POWERS.iter().enumerate() {
            assert_eq!(power.to_string(), format!("1{}", "0".repeat(n)));
        }
    }
}
