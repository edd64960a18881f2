//! Systematic Reed-Solomon encoding for QR Code 2005
//!
//! The data bytes are read as a polynomial D (first byte highest degree),
//! shifted up by the number of error correction bytes n, and divided by the
//! generator polynomial of degree n. The n remainder coefficients are the
//! error correction bytes.
//!
//! The algebraic codeword would be D·xⁿ + R. QR Code instead appends the
//! remainder bytes to an untouched copy of the input bits, which keeps any
//! leading zero bits and any unaligned tail exactly as supplied.

use super::error::RsResult;
use super::galois::Gf256;
use super::generator::{generator_cache, generator_poly};
use super::poly::GfPoly;
use crate::bitset::Bitset;
use crate::config::EncoderConfig;
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::sync::Arc;

/// Encoder for a fixed number of error correction bytes
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    num_ec_bytes: usize,
    generator: Arc<GfPoly>,
}

impl ReedSolomonEncoder {
    /// Create an encoder, sharing the generator through the global cache.
    ///
    /// ISO/IEC 18004 table 9 gives `num_ec_bytes`; e.g. a 1-L symbol uses 7.
    pub fn new(num_ec_bytes: usize) -> RsResult<Self> {
        Ok(Self {
            num_ec_bytes,
            generator: generator_cache().get(num_ec_bytes)?,
        })
    }

    /// Create an encoder honouring `config.cache_generators`
    pub fn with_config(num_ec_bytes: usize, config: &EncoderConfig) -> RsResult<Self> {
        if config.cache_generators {
            return Self::new(num_ec_bytes);
        }

        Ok(Self {
            num_ec_bytes,
            generator: Arc::new(generator_poly(num_ec_bytes)?),
        })
    }

    pub fn num_ec_bytes(&self) -> usize {
        self.num_ec_bytes
    }

    pub fn generator(&self) -> &GfPoly {
        &self.generator
    }

    /// The error correction bytes for `data`, highest degree first
    pub fn ec_bytes(&self, data: &Bitset) -> RsResult<Vec<u8>> {
        let shifted =
            GfPoly::from_bitset(data).multiply(&GfPoly::monomial(Gf256::ONE, self.num_ec_bytes));

        let remainder = shifted.remainder(&self.generator)?;
        trace!("remainder = {}", remainder);

        remainder.to_bytes(self.num_ec_bytes)
    }

    /// `data` followed by its error correction bytes
    pub fn encode(&self, data: &Bitset) -> RsResult<Bitset> {
        debug!(
            "Encoding {} data bits with {} EC bytes",
            data.len(),
            self.num_ec_bytes
        );

        let ec = self.ec_bytes(data)?;

        let mut result = Bitset::with_capacity(data.len() + ec.len() * 8);
        result.append(data);
        result.append_bytes(&ec);
        Ok(result)
    }
}

/// Encode `data` for QR Code 2005 with `num_ec_bytes` error correction bytes.
///
/// Fails with [`RsError::InvalidEcByteCount`](super::RsError::InvalidEcByteCount)
/// when fewer than 2 bytes are requested.
pub fn encode(data: &Bitset, num_ec_bytes: usize) -> RsResult<Bitset> {
    ReedSolomonEncoder::new(num_ec_bytes)?.encode(data)
}

/// Only the error correction bytes for `data`
pub fn ec_bytes(data: &Bitset, num_ec_bytes: usize) -> RsResult<Vec<u8>> {
    ReedSolomonEncoder::new(num_ec_bytes)?.ec_bytes(data)
}

/// Encode independent data blocks with the same error correction length.
///
/// Output order matches input order. Blocks run on a rayon pool sized by
/// `config` unless `config.parallel` is false.
pub fn encode_blocks(
    blocks: &[Bitset],
    num_ec_bytes: usize,
    config: &EncoderConfig,
) -> RsResult<Vec<Bitset>> {
    let encoder = ReedSolomonEncoder::with_config(num_ec_bytes, config)?;
    for_each_block(blocks, config, |b| encoder.encode(b))
}

/// Error correction bytes of independent data blocks, scheduled like
/// [`encode_blocks`]
pub fn ec_bytes_blocks(
    blocks: &[Bitset],
    num_ec_bytes: usize,
    config: &EncoderConfig,
) -> RsResult<Vec<Vec<u8>>> {
    let encoder = ReedSolomonEncoder::with_config(num_ec_bytes, config)?;
    for_each_block(blocks, config, |b| encoder.ec_bytes(b))
}

fn for_each_block<T, F>(blocks: &[Bitset], config: &EncoderConfig, op: F) -> RsResult<Vec<T>>
where
    T: Send,
    F: Fn(&Bitset) -> RsResult<T> + Sync,
{
    if !config.parallel || blocks.len() < 2 {
        return blocks.iter().map(&op).collect();
    }

    let threads = config.effective_threads();
    let run_all = || blocks.par_iter().map(&op).collect::<RsResult<Vec<T>>>();

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(run_all),
        Err(e) => {
            warn!(
                "Could not build pool with {} threads ({}), using global pool",
                threads, e
            );
            run_all()
        }
    }
}
