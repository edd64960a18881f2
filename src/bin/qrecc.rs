//! qrecc binary - compute QR Code error correction codewords
//!
//! Prints one lower-case hex line per data block: the data followed by its
//! error correction bytes (or only the latter with `--ec-only`).

use anyhow::{Context, Result};
use clap::ArgMatches;
use qrecc::{ec_bytes_blocks, encode_blocks, parse_args, Bitset, EncoderConfig};

fn hex_block(s: &str) -> Result<Bitset> {
    hex::decode(s.trim())
        .map(|bytes| Bitset::from_bytes(&bytes))
        .with_context(|| format!("Invalid hex data block {:?}", s))
}

fn input_blocks(matches: &ArgMatches) -> Result<Vec<Bitset>> {
    if let Some(bits) = matches.get_one::<String>("bits") {
        let block = Bitset::from_base2_str(bits).context("Invalid --bits value")?;
        return Ok(vec![block]);
    }

    if let Some(hex) = matches.get_one::<String>("hex") {
        return Ok(vec![hex_block(hex)?]);
    }

    let id = if matches.contains_id("blocks") {
        "blocks"
    } else {
        "data"
    };
    matches
        .get_many::<String>(id)
        .into_iter()
        .flatten()
        .map(|s| hex_block(s))
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = parse_args();

    let num_ec_bytes = *matches
        .get_one::<usize>("ec-bytes")
        .context("--ec-bytes is required")?;
    let config = EncoderConfig::from_args(&matches);
    let blocks = input_blocks(&matches)?;

    let lines: Vec<String> = if matches.get_flag("ec-only") {
        ec_bytes_blocks(&blocks, num_ec_bytes, &config)
            .context("Encoding failed")?
            .into_iter()
            .map(hex::encode)
            .collect()
    } else {
        encode_blocks(&blocks, num_ec_bytes, &config)
            .context("Encoding failed")?
            .iter()
            .map(|codeword| hex::encode(codeword.to_bytes()))
            .collect()
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
