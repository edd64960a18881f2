use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

pub fn build_command() -> Command {
    Command::new("qrecc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("QR Code 2005 Reed-Solomon error correction encoder")
        .arg(
            Arg::new("data")
                .help("Data codewords as hex; several values are encoded as separate blocks")
                .num_args(1..),
        )
        .arg(
            Arg::new("hex")
                .long("hex")
                .help("Data codewords of a single block as hex")
                .value_name("HEX"),
        )
        .arg(
            Arg::new("blocks")
                .long("blocks")
                .help("Several hex data blocks, each encoded separately")
                .value_name("HEX")
                .num_args(1..),
        )
        .arg(
            Arg::new("bits")
                .long("bits")
                .help("Data as a base-2 string (need not be a whole number of bytes)")
                .value_name("BITS"),
        )
        .group(
            ArgGroup::new("input")
                .args(["data", "hex", "blocks", "bits"])
                .required(true)
                .multiple(false),
        )
        .arg(
            Arg::new("ec-bytes")
                .short('n')
                .long("ec-bytes")
                .help("Number of error correction bytes (ISO/IEC 18004 table 9)")
                .value_name("COUNT")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("ec-only")
                .long("ec-only")
                .help("Print only the error correction bytes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of threads for multi-block encoding (0 = auto)")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Encode blocks sequentially")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_command().get_matches()
}
