//! Reed-Solomon generator polynomials
//!
//! The generator of degree d is (x + a^0)(x + a^1)...(x + a^(d-1)). It
//! depends only on d, so results can be shared between encoders through
//! [`GeneratorCache`].

use super::error::{RsError, RsResult};
use super::galois::Gf256;
use super::poly::GfPoly;
use log::debug;
use rustc_hash::FxHashMap as HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// Smallest error correction byte count QR Code ever uses
pub const MIN_EC_BYTES: usize = 2;

/// Build the generator polynomial of the given degree
pub fn generator_poly(degree: usize) -> RsResult<GfPoly> {
    if degree < MIN_EC_BYTES {
        return Err(RsError::InvalidEcByteCount(degree));
    }

    let generator = (0..degree).fold(GfPoly::from_terms(vec![Gf256::ONE]), |acc, i| {
        let factor = GfPoly::from_terms(vec![Gf256::exp(i), Gf256::ONE]);
        acc.multiply(&factor)
    });

    Ok(generator)
}

/// Memo of generator polynomials keyed by degree
#[derive(Debug, Default)]
pub struct GeneratorCache {
    generators: RwLock<HashMap<usize, Arc<GfPoly>>>,
}

impl GeneratorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator of `degree`, built on first request
    pub fn get(&self, degree: usize) -> RsResult<Arc<GfPoly>> {
        // Entries are immutable once inserted, so a poisoned map is still valid
        if let Some(generator) = self
            .generators
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&degree)
        {
            return Ok(Arc::clone(generator));
        }

        debug!("Building generator polynomial of degree {}", degree);
        let generator = Arc::new(generator_poly(degree)?);

        let mut generators = self.generators.write().unwrap_or_else(|e| e.into_inner());
        Ok(Arc::clone(generators.entry(degree).or_insert(generator)))
    }

    pub fn len(&self) -> usize {
        self.generators
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GENERATOR_CACHE: OnceLock<GeneratorCache> = OnceLock::new();

/// Process-wide generator cache
pub fn generator_cache() -> &'static GeneratorCache {
    GENERATOR_CACHE.get_or_init(GeneratorCache::new)
}
