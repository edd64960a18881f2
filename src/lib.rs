//! Reed-Solomon error correction encoding for QR Code 2005.
//!
//! ```
//! use qrecc::{encode, Bitset};
//!
//! let data = Bitset::from_bytes(&[0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11,
//!                                 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11]);
//! let codeword = encode(&data, 10).unwrap();
//! assert_eq!(codeword.len(), data.len() + 10 * 8);
//! ```

pub mod args;
pub mod bitset;
pub mod config;
pub mod reed_solomon;

pub use args::parse_args;
pub use bitset::{Bitset, BitsetError};
pub use config::EncoderConfig;
pub use reed_solomon::{
    ec_bytes, ec_bytes_blocks, encode, encode_blocks, GfPoly, Gf256, ReedSolomonEncoder, RsError,
    RsResult,
};
