//! Output of decoded records for programmatic consumption.

use crate::error::Result;
use crate::types::ShortcutRecord;
use std::io::{BufWriter, Write};

/// Supported output formats
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

/// Handles output formatting and writing
pub struct OutputWriter;

impl OutputWriter {
    /// Write one record in the specified format, followed by a newline
    pub fn write_record(
        record: &ShortcutRecord,
        format: OutputFormat,
        mut writer: Box<dyn Write>,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => serde_json::to_writer(&mut writer, record),
            OutputFormat::JsonPretty => serde_json::to_writer_pretty(&mut writer, record),
        }
        .map_err(std::io::Error::from)?;

        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Create appropriate writer based on output option
pub fn create_writer(output_file: Option<&str>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match output_file {
        Some(path) if path != "-" => Box::new(BufWriter::new(std::fs::File::create(path)?)),
        _ => Box::new(std::io::stdout()),
    };

    Ok(writer)
}
