//! # lnk - Windows Shell Link Decoder
//!
//! Decodes Windows shortcut (`.lnk`) files into a [`ShortcutRecord`] without any
//! dependency on the host operating system.
//!
//! ## Features
//!
//! - ShellLinkHeader validation (header size, CLSID, reserved bits and fields)
//! - LinkFlags and FileAttributes expanded into named booleans
//! - FILETIME timestamps converted to `chrono::DateTime<Utc>` at full 100ns precision
//! - HotKey decoding and rendering (`Ctrl+Alt+F9`)
//! - LinkTargetIDList kept as an opaque byte blob
//! - LinkInfo with VolumeID, volume label and local base path
//!
//! ## Example
//!
//! ```no_run
//! use lnk::{decode, StreamCursor};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("target.lnk")?;
//! let record = decode(&mut StreamCursor::new(BufReader::new(file)))?;
//! println!("{:?} {}", record.local_base_path(), record.hot_key);
//! # Ok::<(), lnk::Error>(())
//! ```
//!
//! Decoding is single pass and stateless, so separate inputs can be decoded
//! concurrently without coordination.

pub mod app;
pub mod cli;
pub mod cursor;
pub mod datetime;
pub mod error;
pub mod flags;
pub mod lnk_parser;
pub mod output;
pub mod types;

pub use cursor::{ByteSource, Section, StreamCursor};
pub use error::{Error, PartialDecode, Result};
pub use flags::{FileAttributes, LinkFlags};
pub use lnk_parser::{decode, decode_bytes, decode_partial, LnkParser};
pub use types::{DriveType, HotKey, LinkInfo, ShortcutRecord, ShowCommand, VolumeId};
