//! Growable bit sequence, most significant bit first
//!
//! This is the payload type exchanged with the QR symbol layer: data
//! codewords go in, data plus error correction codewords come out. The
//! length is tracked in bits and does not have to be a multiple of 8.

use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building a bit sequence from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsetError {
    #[error("Invalid character {ch:?} at position {position} in base-2 string")]
    InvalidBase2Char { ch: char, position: usize },
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Bitset {
    /// Bits in placement order (1 bit per module)
    bits: BitVec<u8, Msb0>,
}

impl Bitset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(num_bits),
        }
    }

    pub fn from_bools(values: &[bool]) -> Self {
        Self {
            bits: values.iter().copied().collect(),
        }
    }

    /// 8 bits per byte, most significant bit first
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bits: BitVec::from_slice(data),
        }
    }

    /// Parse a string of '0' and '1' characters. Whitespace is skipped.
    pub fn from_base2_str(s: &str) -> Result<Self, BitsetError> {
        let mut result = Self::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            match ch {
                '0' => result.append_bool(false),
                '1' => result.append_bool(true),
                c if c.is_whitespace() => {}
                c => return Err(BitsetError::InvalidBase2Char { ch: c, position }),
            }
        }
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bytes needed to hold every bit
    pub fn num_bytes(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    /// Value of the bit at `index`.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn at(&self, index: usize) -> bool {
        assert!(
            index < self.len(),
            "bit index {} out of range for length {}",
            index,
            self.len()
        );
        self.bits[index]
    }

    /// Up to 8 bits starting at `index`, right-aligned.
    ///
    /// When fewer than 8 bits remain the result only holds those bits, so
    /// a trailing partial byte reads as zero-padded at the high end.
    ///
    /// # Panics
    /// If `index >= len()`.
    pub fn byte_at(&self, index: usize) -> u8 {
        assert!(
            index < self.len(),
            "byte index {} out of range for length {}",
            index,
            self.len()
        );

        let end = (index + 8).min(self.len());
        self.bits[index..end]
            .iter()
            .by_vals()
            .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
    }

    pub fn append_bool(&mut self, value: bool) {
        self.bits.push(value);
    }

    pub fn append_bools(&mut self, values: &[bool]) {
        self.bits.extend(values.iter().copied());
    }

    /// Append the low `num_bits` bits of `value`, most significant first.
    ///
    /// # Panics
    /// If `num_bits > 8`.
    pub fn append_byte(&mut self, value: u8, num_bits: usize) {
        assert!(num_bits <= 8, "num_bits {} > 8", num_bits);
        self.bits
            .extend_from_bitslice(&value.view_bits::<Msb0>()[8 - num_bits..]);
    }

    /// Append the low `num_bits` bits of `value`, most significant first.
    ///
    /// # Panics
    /// If `num_bits > 32`.
    pub fn append_u32(&mut self, value: u32, num_bits: usize) {
        assert!(num_bits <= 32, "num_bits {} > 32", num_bits);
        self.bits
            .extend_from_bitslice(&value.view_bits::<Msb0>()[32 - num_bits..]);
    }

    pub fn append_bytes(&mut self, data: &[u8]) {
        self.bits.extend_from_bitslice(data.view_bits::<Msb0>());
    }

    pub fn append(&mut self, other: &Bitset) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    /// Bits `start..end` as a new sequence.
    ///
    /// # Panics
    /// If the range is out of bounds or reversed.
    pub fn substr(&self, start: usize, end: usize) -> Bitset {
        assert!(
            start <= end && end <= self.len(),
            "invalid range {}..{} for length {}",
            start,
            end,
            self.len()
        );
        Bitset {
            bits: self.bits[start..end].to_bitvec(),
        }
    }

    /// Packed bytes; a trailing partial byte is zero-padded at the low end
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.as_raw_slice().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitset({} bits: {})", self.len(), self)
    }
}

impl FromStr for Bitset {
    type Err = BitsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base2_str(s)
    }
}
