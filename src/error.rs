//! Error types and handling for shell link decoding.

use crate::types::ShortcutRecord;
use std::fmt;

/// Custom error type for LNK decoding
#[derive(Debug)]
pub enum Error {
    /// The byte source ran out before a read could be satisfied
    Truncated {
        /// Stream offset at which the failed read started
        offset: u64,
        /// Number of bytes the read asked for
        wanted: usize,
        /// Number of bytes that were actually left
        available: usize,
    },
    /// Header size field was not 0x4C
    InvalidHeaderSize(u32),
    /// Link CLSID did not match 00021401-0000-0000-C000-000000000046
    InvalidClsid([u8; 16]),
    /// A must-be-zero bit or field was set
    ReservedBitSet {
        field: &'static str,
        value: u32,
    },
    /// Hotkey key code outside the accepted ranges
    InvalidHotKey(u8),
    /// I/O failure reported by the underlying reader
    Io(std::io::Error),
    /// Invalid command-line input
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Truncated { offset, wanted, available } => write!(
                f,
                "Truncated input at offset {}: needed {} bytes, {} available",
                offset, wanted, available
            ),
            Error::InvalidHeaderSize(size) => write!(
                f,
                "Invalid LNK header size: expected 0x4C (76), got 0x{:X} ({})",
                size, size
            ),
            Error::InvalidClsid(clsid) => {
                write!(f, "Invalid Shell Link CLSID: {}", crate::types::format_clsid(clsid))
            }
            Error::ReservedBitSet { field, value } => {
                write!(f, "Reserved bits set in {}: 0x{:08X}", field, value)
            }
            Error::InvalidHotKey(key) => write!(f, "Invalid hotkey key code: 0x{:02X}", key),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A failed decode together with everything decoded before the failure.
///
/// Fields of `record` populated after the failing stage keep their default
/// values. Nothing past the point of failure should be trusted.
#[derive(Debug)]
pub struct PartialDecode {
    pub error: Error,
    pub record: ShortcutRecord,
}

impl PartialDecode {
    /// Drop the partial record and keep the error
    pub fn into_error(self) -> Error {
        self.error
    }
}

impl fmt::Display for PartialDecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for PartialDecode {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<PartialDecode> for Error {
    fn from(partial: PartialDecode) -> Self {
        partial.error
    }
}
