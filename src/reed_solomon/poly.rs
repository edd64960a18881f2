//! Polynomials over GF(2^8)
//!
//! Coefficients are stored in ascending degree: `terms[i]` is the
//! coefficient of x^i. Every operation returns a new polynomial and leaves
//! its inputs untouched.

use super::error::{RsError, RsResult};
use super::galois::Gf256;
use crate::bitset::Bitset;
use log::trace;
use std::fmt;
use std::ops::{Add, Mul};

/// How coefficients are written by [`GfPoly::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyNotation {
    /// `29x^2 + 1x^0`
    Integer,
    /// `a^8x^2 + a^0x^0`
    Index,
}

/// Polynomial with GF(2^8) coefficients
#[derive(Debug, Clone, Default)]
pub struct GfPoly {
    terms: Vec<Gf256>,
}

impl GfPoly {
    /// The zero polynomial (no terms)
    pub fn zero() -> Self {
        Self::default()
    }

    /// Wrap raw coefficients, lowest degree first. No normalisation happens.
    pub fn from_terms(terms: Vec<Gf256>) -> Self {
        Self { terms }
    }

    /// Interpret bytes as coefficients, first byte highest degree.
    ///
    /// For n bytes the polynomial is data[0]*x^(n-1) + ... + data[n-1]*x^0.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            terms: data.iter().rev().map(|&b| Gf256::new(b)).collect(),
        }
    }

    /// Interpret a bit sequence as coefficients, 8 bits per term.
    ///
    /// A trailing partial byte still yields a term, with its bits
    /// right-aligned (zero-padded at the high end).
    pub fn from_bitset(data: &Bitset) -> Self {
        let num_total_bytes = data.num_bytes();
        let mut terms = vec![Gf256::ZERO; num_total_bytes];

        for (i, j) in (0..data.len()).step_by(8).enumerate() {
            terms[num_total_bytes - 1 - i] = Gf256::new(data.byte_at(j));
        }

        Self { terms }
    }

    /// coefficient * x^degree
    pub fn monomial(coefficient: Gf256, degree: usize) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }

        let mut terms = vec![Gf256::ZERO; degree + 1];
        terms[degree] = coefficient;
        Self { terms }
    }

    pub fn terms(&self) -> &[Gf256] {
        &self.terms
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True when every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.terms.iter().all(|t| t.is_zero())
    }

    /// Highest degree with a nonzero coefficient, `None` for zero
    pub fn degree(&self) -> Option<usize> {
        self.terms.iter().rposition(|t| !t.is_zero())
    }

    /// Coefficient of x^degree (zero beyond the stored terms)
    pub fn coefficient(&self, degree: usize) -> Gf256 {
        self.terms.get(degree).copied().unwrap_or(Gf256::ZERO)
    }

    /// Render as exactly `count` bytes, highest degree first.
    ///
    /// Terms are right-aligned: x^0 lands in the last byte and missing high
    /// terms become leading zero bytes.
    /// High-degree zero coefficients do not count towards the size.
    pub fn to_bytes(&self, count: usize) -> RsResult<Vec<u8>> {
        let terms = self.degree().map_or(0, |d| d + 1);
        if terms > count {
            return Err(RsError::TooManyTerms { terms, count });
        }

        let mut result = vec![0u8; count];
        for (slot, term) in result[count - terms..]
            .iter_mut()
            .zip(self.terms[..terms].iter().rev())
        {
            *slot = term.value();
        }
        Ok(result)
    }

    /// Drop high-degree zero coefficients
    pub fn normalized(mut self) -> Self {
        let len = self.degree().map_or(0, |d| d + 1);
        self.terms.truncate(len);
        self
    }

    /// self + other
    pub fn add(&self, other: &GfPoly) -> GfPoly {
        let num_terms = self.num_terms().max(other.num_terms());
        let terms = (0..num_terms)
            .map(|i| self.coefficient(i) + other.coefficient(i))
            .collect();

        GfPoly { terms }.normalized()
    }

    /// self * other
    pub fn multiply(&self, other: &GfPoly) -> GfPoly {
        let mut terms = vec![Gf256::ZERO; self.num_terms() + other.num_terms()];

        for (i, &a) in self.terms.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.terms.iter().enumerate() {
                if !b.is_zero() {
                    terms[i + j] += a * b;
                }
            }
        }

        GfPoly { terms }.normalized()
    }

    /// Remainder of self / denominator by polynomial long division
    pub fn remainder(&self, denominator: &GfPoly) -> RsResult<GfPoly> {
        if denominator.is_zero() {
            return Err(RsError::RemainderByZero);
        }

        let denominator = denominator.clone().normalized();
        let lead = denominator.leading();
        let mut remainder = self.clone().normalized();

        trace!(
            "remainder: {} terms / {} terms",
            remainder.num_terms(),
            denominator.num_terms()
        );

        // Each pass cancels the leading term, so the normalised length
        // strictly decreases
        while remainder.num_terms() >= denominator.num_terms() {
            let degree = remainder.num_terms() - denominator.num_terms();
            let coefficient = remainder.leading().checked_div(lead)?;

            let divisor = denominator.multiply(&GfPoly::monomial(coefficient, degree));
            remainder = remainder.add(&divisor);
        }

        Ok(remainder)
    }

    /// Value of the polynomial at `x` (Horner's method)
    pub fn evaluate(&self, x: Gf256) -> Gf256 {
        self.terms
            .iter()
            .rev()
            .fold(Gf256::ZERO, |acc, &t| acc * x + t)
    }

    /// Human-readable form, highest degree first; zero renders as "0"
    pub fn render(&self, notation: PolyNotation) -> String {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(i, t)| match (notation, t.log()) {
                (_, None) => None,
                (PolyNotation::Integer, Some(_)) => Some(format!("{}x^{}", t, i)),
                (PolyNotation::Index, Some(log)) => Some(format!("a^{}x^{}", log, i)),
            })
            .collect();

        if rendered.is_empty() {
            "0".to_string()
        } else {
            rendered.join(" + ")
        }
    }

    fn leading(&self) -> Gf256 {
        self.terms.last().copied().unwrap_or(Gf256::ZERO)
    }
}

/// Equality ignores high-degree zero coefficients
impl PartialEq for GfPoly {
    fn eq(&self, other: &Self) -> bool {
        let (shorter, longer) = if self.num_terms() > other.num_terms() {
            (other, self)
        } else {
            (self, other)
        };

        let common = shorter.num_terms();
        shorter.terms[..] == longer.terms[..common]
            && longer.terms[common..].iter().all(|t| t.is_zero())
    }
}

impl Eq for GfPoly {}

impl Add for &GfPoly {
    type Output = GfPoly;

    fn add(self, rhs: Self) -> GfPoly {
        GfPoly::add(self, rhs)
    }
}

impl Mul for &GfPoly {
    type Output = GfPoly;

    fn mul(self, rhs: Self) -> GfPoly {
        self.multiply(rhs)
    }
}

impl fmt::Display for GfPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(PolyNotation::Integer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(terms: &[u8]) -> GfPoly {
        GfPoly::from_terms(terms.iter().map(|&t| Gf256::new(t)).collect())
    }

    #[test]
    fn test_from_bytes_reverses_order() {
        let p = GfPoly::from_bytes(&[0x10, 0x20, 0x0C]);
        assert_eq!(p.terms(), poly(&[0x0C, 0x20, 0x10]).terms());
    }

    #[test]
    fn test_monomial() {
        let m = GfPoly::monomial(Gf256::new(7), 3);
        assert_eq!(m.num_terms(), 4);
        assert_eq!(m.coefficient(3), Gf256::new(7));
        assert_eq!(m.degree(), Some(3));
        assert!(GfPoly::monomial(Gf256::ZERO, 5).terms().is_empty());
    }

    #[test]
    fn test_to_bytes_pads_high_end() {
        let p = poly(&[1, 2]);
        assert_eq!(p.to_bytes(4).unwrap(), vec![0, 0, 2, 1]);
        assert_eq!(
            p.to_bytes(1),
            Err(RsError::TooManyTerms { terms: 2, count: 1 })
        );
        assert_eq!(GfPoly::zero().to_bytes(2).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_to_bytes_ignores_high_zero_terms() {
        assert_eq!(GfPoly::from_bytes(&[0, 0, 0]).to_bytes(1).unwrap(), vec![0]);
        assert_eq!(GfPoly::from_bytes(&[0, 0, 7]).to_bytes(2).unwrap(), vec![0, 7]);
        assert_eq!(
            GfPoly::from_bytes(&[0, 5, 7]).to_bytes(1),
            Err(RsError::TooManyTerms { terms: 2, count: 1 })
        );
    }

    #[test]
    fn test_normalized() {
        assert_eq!(poly(&[1, 0, 3, 0, 0]).normalized().num_terms(), 3);
        assert_eq!(poly(&[0, 0]).normalized().num_terms(), 0);
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(poly(&[1, 2]), poly(&[1, 2, 0, 0]));
        assert_ne!(poly(&[1, 2]), poly(&[1, 2, 3]));
        assert_eq!(poly(&[0, 0]), GfPoly::zero());
    }

    #[test]
    fn test_multiply_by_linear_factors() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let product = &poly(&[1, 1]) * &poly(&[2, 1]);
        assert_eq!(product.terms(), poly(&[2, 3, 1]).terms());
    }

    #[test]
    fn test_remainder_smaller_numerator() {
        let n = poly(&[5, 6]);
        let d = poly(&[1, 2, 3]);
        assert_eq!(n.remainder(&d).unwrap(), n);
    }

    #[test]
    fn test_remainder_by_zero() {
        assert_eq!(
            poly(&[1, 2]).remainder(&poly(&[0, 0])),
            Err(RsError::RemainderByZero)
        );
    }

    #[test]
    fn test_render() {
        let p = poly(&[1, 0, 29]);
        assert_eq!(p.render(PolyNotation::Integer), "29x^2 + 1x^0");
        assert_eq!(p.render(PolyNotation::Index), "a^8x^2 + a^0x^0");
        assert_eq!(GfPoly::zero().to_string(), "0");
    }

    #[test]
    fn test_evaluate() {
        // x^2 + 3x + 2 has roots 1 and 2
        let p = poly(&[2, 3, 1]);
        assert_eq!(p.evaluate(Gf256::new(1)), Gf256::ZERO);
        assert_eq!(p.evaluate(Gf256::new(2)), Gf256::ZERO);
        assert_eq!(p.evaluate(Gf256::ZERO), Gf256::new(2));
    }
}
