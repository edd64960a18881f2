//! Galois Field GF(2^8) arithmetic for QR Code Reed-Solomon encoding
//!
//! ## Field Polynomial
//!
//! QR Code 2005 (ISO/IEC 18004) fixes the primitive polynomial
//! **0x11D** (x⁸ + x⁴ + x³ + x² + 1). The primitive element a = 2 generates
//! every nonzero element, so multiplication and division reduce to addition
//! and subtraction of discrete logarithms.
//!
//! ## Tables
//!
//! The exponent table is stored twice over (512 entries) so that the sum of
//! two logarithms indexes it directly without a modulo. Both tables are built
//! once per process behind a `OnceLock` and are read-only afterwards.

use super::error::{RsError, RsResult};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// QR Code GF(2^8) primitive polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
const GF_GENERATOR: u32 = 0x11D;

/// Number of field elements
const FIELD_SIZE: usize = 256;

/// Order of the multiplicative group (period of the exponent table)
pub const GF_ORDER_MINUS_ONE: usize = FIELD_SIZE - 1;

/// Precomputed exponent and logarithm tables
pub struct GaloisTable {
    log: [u8; FIELD_SIZE],
    exp: [u8; 2 * FIELD_SIZE],
}

impl Default for GaloisTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GaloisTable {
    pub fn new() -> Self {
        let mut table = GaloisTable {
            log: [0; FIELD_SIZE],
            exp: [0; 2 * FIELD_SIZE],
        };
        table.build_tables();
        table
    }

    fn build_tables(&mut self) {
        let mut b = 1u32;

        for l in 0..GF_ORDER_MINUS_ONE {
            self.exp[l] = b as u8;
            self.log[b as usize] = l as u8;

            b <<= 1;
            if b & FIELD_SIZE as u32 != 0 {
                b ^= GF_GENERATOR;
            }
        }

        // Second copy lets log(a) + log(b) index without reduction
        for i in GF_ORDER_MINUS_ONE..self.exp.len() {
            self.exp[i] = self.exp[i - GF_ORDER_MINUS_ONE];
        }
    }

    /// a^exponent for any exponent (reduced mod 255)
    #[inline]
    pub fn exp(&self, exponent: usize) -> u8 {
        self.exp[exponent % GF_ORDER_MINUS_ONE]
    }

    /// Discrete logarithm of a nonzero element, `None` for zero
    #[inline]
    pub fn log(&self, value: u8) -> Option<u8> {
        if value == 0 {
            None
        } else {
            Some(self.log[value as usize])
        }
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    #[inline]
    pub fn div(&self, a: u8, b: u8) -> RsResult<u8> {
        if b == 0 {
            return Err(RsError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        // Adding the group order keeps the exponent non-negative
        let log_diff = self.log[a as usize] as usize + GF_ORDER_MINUS_ONE
            - self.log[b as usize] as usize;
        Ok(self.exp[log_diff])
    }
}

static GALOIS_TABLE: OnceLock<GaloisTable> = OnceLock::new();

/// Get the process-wide GF(2^8) tables
pub fn galois_table() -> &'static GaloisTable {
    GALOIS_TABLE.get_or_init(GaloisTable::new)
}

/// Field addition (XOR)
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    galois_table().mul(a, b)
}

#[inline]
pub fn gf_div(a: u8, b: u8) -> RsResult<u8> {
    galois_table().div(a, b)
}

/// a^exponent where a is the primitive element
#[inline]
pub fn gf_exp(exponent: usize) -> u8 {
    galois_table().exp(exponent)
}

/// GF(2^8) field element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gf256 {
    value: u8,
}

impl Gf256 {
    pub const ZERO: Gf256 = Gf256 { value: 0 };
    pub const ONE: Gf256 = Gf256 { value: 1 };

    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// a^exponent
    pub fn exp(exponent: usize) -> Self {
        Self::new(gf_exp(exponent))
    }

    /// Discrete logarithm, `None` for zero
    pub fn log(&self) -> Option<u8> {
        galois_table().log(self.value)
    }

    pub fn pow(&self, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::ONE;
        }
        match self.log() {
            None => Self::ZERO,
            Some(log_val) => Self::exp(log_val as usize * exponent as usize),
        }
    }

    pub fn checked_div(self, rhs: Self) -> RsResult<Self> {
        gf_div(self.value, rhs.value).map(Self::new)
    }

    /// Multiplicative inverse
    pub fn inverse(&self) -> RsResult<Self> {
        Self::ONE.checked_div(*self)
    }
}

// Addition (XOR in Galois fields)
impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(gf_add(self.value, rhs.value))
    }
}

impl AddAssign for Gf256 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(gf_add(self.value, rhs.value))
    }
}

impl SubAssign for Gf256 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(gf_mul(self.value, rhs.value))
    }
}

impl MulAssign for Gf256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Operator division panics on a zero divisor, like integer division.
/// Use [`Gf256::checked_div`] to get an error instead.
impl Div for Gf256 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(_) => panic!("Division by zero in Galois field"),
        }
    }
}

impl DivAssign for Gf256 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Gf256> for u8 {
    fn from(val: Gf256) -> Self {
        val.value
    }
}

impl std::fmt::Display for Gf256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
