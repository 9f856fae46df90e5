use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::cs::error::{Error, Result};

/// An ordered sequence of bits, as produced by the encoder and consumed by the decoder.
///
/// Parses from and displays as a string of `'0'` and `'1'` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitstring {
    bits: BitVec<u8, Msb0>,
}

impl Bitstring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Removes and returns the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Appends every bit of `other` to the end of `self`.
    pub fn extend_from(&mut self, other: &Bitstring) {
        self.bits.extend_from_bitslice(other.bits.as_bitslice());
    }

    /// Iterates the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Returns `true` if `self` is a prefix of `other` (including equality).
    pub fn is_prefix_of(&self, other: &Bitstring) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl FromIterator<bool> for Bitstring {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Bitstring {
            bits: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Bitstring {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidBit { found, position }),
            })
            .collect()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let bits: Bitstring = "0110".parse().unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![false, true, true, false]);
        assert_eq!(bits.to_string(), "0110");
    }

    #[test]
    fn test_empty() {
        let bits: Bitstring = "".parse().unwrap();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    fn test_invalid_bit() {
        let err = "01x1".parse::<Bitstring>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBit {
                found: 'x',
                position: 2
            }
        ));
    }

    #[test]
    fn test_prefix() {
        let short: Bitstring = "01".parse().unwrap();
        let long: Bitstring = "011".parse().unwrap();
        let other: Bitstring = "10".parse().unwrap();
        assert!(short.is_prefix_of(&long));
        assert!(short.is_prefix_of(&short));
        assert!(!long.is_prefix_of(&short));
        assert!(!other.is_prefix_of(&long));
    }

    #[test]
    fn test_extend_and_pop() {
        let mut bits: Bitstring = "10".parse().unwrap();
        bits.extend_from(&"011".parse().unwrap());
        assert_eq!(bits.to_string(), "10011");
        assert_eq!(bits.pop(), Some(true));
        assert_eq!(bits.to_string(), "1001");
    }
}
