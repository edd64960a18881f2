//! Reed-Solomon Error Correction Module
//!
//! This module provides the systematic Reed-Solomon encoding QR Code 2005
//! (ISO/IEC 18004) uses for its error correction codewords.
//! QR Code uses Galois Field GF(2^8) with primitive polynomial 0x11D.
//!
//! Only encoding is implemented; decoding and error recovery live with QR
//! readers.

pub mod encoder;
pub mod error;
pub mod galois;
pub mod generator;
pub mod poly;

pub use encoder::*;
pub use error::*;
pub use galois::*;
pub use generator::*;
pub use poly::*;
