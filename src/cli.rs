//! Command-line interface definitions and parsing.

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// lnk - Decode Windows Shell Link (.lnk) files
#[derive(Parser, Debug)]
#[command(name = "lnk")]
#[command(about = "lnk - Windows Shell Link (.lnk) decoder", version)]
#[command(long_about = "Decodes the shell link header, link flags, file attributes, FILETIME timestamps, \
hotkey, LinkTargetIDList and LinkInfo of a .lnk file and writes the result as JSON.")]
pub struct Args {
    /// Shortcut file to decode
    pub input_file: Option<PathBuf>,

    /// Output file (use "-" for stdout, default: stdout)
    #[arg(long)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::JsonPretty)]
    pub format: OutputFormat,

    /// On a decode failure, still write the fields decoded before the failure
    #[arg(long)]
    pub partial: bool,

    /// Enable debug logging (RUST_LOG takes precedence). Read before the
    /// logger is installed, so it does not carry over into `Config`.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parsed and validated CLI configuration
#[derive(Debug)]
pub struct Config {
    pub input_file: PathBuf,
    pub output: Option<String>,
    pub format: OutputFormat,
    pub partial: bool,
}

impl Config {
    /// Parse and validate CLI arguments into a configuration
    pub fn from_args(args: Args) -> Result<Self> {
        let input_file = args
            .input_file
            .ok_or_else(|| Error::InvalidInput("Input file path required".to_string()))?;

        if input_file.is_dir() {
            return Err(Error::InvalidInput(format!("{} is a directory", input_file.display())));
        }

        let has_lnk_extension = input_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("lnk"))
            .unwrap_or(false);
        if !has_lnk_extension {
            log::warn!("{} does not have a .lnk extension, decoding anyway", input_file.display());
        }

        Ok(Config {
            input_file,
            output: args.output,
            format: args.format,
            partial: args.partial,
        })
    }
}
