//! Main application logic and orchestration.

use crate::{
    cli::Config,
    cursor::{ByteSource, StreamCursor},
    error::Result,
    lnk_parser::decode_partial,
    output::{create_writer, OutputWriter},
    types::ShortcutRecord,
};
use std::fs::File;
use std::io::BufReader;

/// Main application runner
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Decode the configured file and write the record
    pub fn run(self) -> Result<()> {
        let record = self.decode_input()?;
        let writer = create_writer(self.config.output.as_deref())?;
        OutputWriter::write_record(&record, self.config.format, writer)
    }

    fn decode_input(&self) -> Result<ShortcutRecord> {
        let file = File::open(&self.config.input_file)?;
        let mut cursor = StreamCursor::new(BufReader::new(file));

        match decode_partial(&mut cursor) {
            Ok(record) => {
                log::debug!(
                    "Decoded {} ({} bytes consumed)",
                    self.config.input_file.display(),
                    cursor.position()
                );
                Ok(record)
            }
            Err(partial) if self.config.partial => {
                log::warn!(
                    "{}: {} (writing partial record)",
                    self.config.input_file.display(),
                    partial.error
                );
                Ok(partial.record)
            }
            Err(partial) => Err(partial.error),
        }
    }
}
