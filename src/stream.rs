//! Whitespace-delimited token input, the counterpart of printing with `Display`.

use std::io::{self, BufRead};

use crate::BigInt;
use crate::error::ReadBigIntError;

impl BigInt {
    /// Skips leading ASCII whitespace, reads one token and parses it.
    ///
    /// The whitespace that ends the token is left in the reader.
    ///
    /// ```
    /// use big_integer::BigInt;
    ///
    /// let mut input = "  12 -340282366920938463463374607431768211456\n".as_bytes();
    /// assert_eq!(BigInt::read_from(&mut input).unwrap(), BigInt::from(12));
    /// assert_eq!(
    ///     BigInt::read_from(&mut input).unwrap().to_string(),
    ///     "-340282366920938463463374607431768211456"
    /// );
    /// assert!(BigInt::read_from(&mut input).is_err());
    /// ```
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<BigInt, ReadBigIntError> {
        let mut token = Vec::new();
        loop {
            let (consumed, done) = {
                let available = reader.fill_buf()?;
                if available.is_empty() {
                    break;
                }
                let mut consumed = 0;
                let mut done = false;
                for &byte in available {
                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            consumed += 1;
                            continue;
                        }
                        done = true;
                        break;
                    }
                    token.push(byte);
                    consumed += 1;
                }
                (consumed, done)
            };
            reader.consume(consumed);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input before an integer token",
            )
            .into());
        }
        Ok(String::from_utf8_lossy(&token).parse()?)
    }
}
