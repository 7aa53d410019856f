use clap::{Parser, Subcommand, ValueEnum};
use pleiades_core::{Compression, RecordShape, DEFAULT_DATA_URL};

/// CLI arguments for pleiades-cli
#[derive(Debug, Parser)]
#[command(
    name = "pleiades",
    version,
    about = "CLI for retrieving and inspecting the Pleiades gazetteer dump"
)]
pub struct CliArgs {
    /// Path or URL of the dump (.json or .json.gz)
    #[arg(
        short = 'i',
        long = "input",
        global = true,
        env = "PLEIADES_INPUT",
        default_value = DEFAULT_DATA_URL
    )]
    pub input: String,

    /// How to decompress the input
    #[arg(long, global = true, value_enum, default_value_t = CompressionArg::Auto)]
    pub compression: CompressionArg,

    /// Overall download time limit in seconds (default: none)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip records that fail to map instead of aborting
    #[arg(long, global = true)]
    pub skip_invalid: bool,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the mapped corpus
    Stats,

    /// Print mapped records as JSON lines
    Dump {
        #[arg(long, value_enum, default_value_t = ShapeArg::Curated)]
        shape: ShapeArg,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one place by id as pretty JSON
    Show {
        /// Record id (e.g. 423025)
        id: String,

        #[arg(long, value_enum, default_value_t = ShapeArg::Full)]
        shape: ShapeArg,
    },

    /// Search places by title or attested/romanized name
    Search {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShapeArg {
    Full,
    Curated,
}

impl From<ShapeArg> for RecordShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Full => RecordShape::Full,
            ShapeArg::Curated => RecordShape::Curated,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompressionArg {
    Auto,
    Gzip,
    None,
}

impl From<CompressionArg> for Compression {
    fn from(c: CompressionArg) -> Self {
        match c {
            CompressionArg::Auto => Compression::Auto,
            CompressionArg::Gzip => Compression::Gzip,
            CompressionArg::None => Compression::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_optional() {
        let args = CliArgs::try_parse_from(["pleiades", "stats"]).unwrap();
        assert_eq!(args.timeout, None);

        let args = CliArgs::try_parse_from(["pleiades", "--timeout", "600", "stats"]).unwrap();
        assert_eq!(args.timeout, Some(600));
    }

    #[test]
    fn dump_defaults_to_curated() {
        let args = CliArgs::try_parse_from(["pleiades", "dump", "--limit", "3"]).unwrap();
        match args.command {
            Commands::Dump { shape, limit } => {
                assert!(matches!(shape, ShapeArg::Curated));
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
