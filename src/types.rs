//! Core data types for decoded shell links.

use crate::flags::{FileAttributes, HotKeyModifiers, LinkFlags};
use chrono::{DateTime, Utc};
use encoding::all::WINDOWS_1252;
use encoding::{DecoderTrap, Encoding};
use serde::Serialize;
use std::fmt;

/// Shell link header size (0x0000004C)
pub const HEADER_SIZE: u32 = 0x0000_004C;

/// 00021401-0000-0000-C000-000000000046 in on-disk byte order
pub const LINK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/// A decoded `.lnk` file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShortcutRecord {
    /// Header size (always 0x4C once decoded)
    pub header_size: u32,
    /// Link class identifier, on-disk byte order
    pub link_clsid: [u8; 16],
    pub link_flags: LinkFlags,
    pub file_attributes: FileAttributes,
    /// Target creation time
    pub creation_time: DateTime<Utc>,
    /// Target last access time
    pub access_time: DateTime<Utc>,
    /// Target last write time
    pub write_time: DateTime<Utc>,
    /// Low 32 bits of the target size
    pub file_size: u32,
    pub icon_index: i32,
    /// Raw show command, not normalized
    pub show_command: u32,
    pub hot_key: HotKey,
    /// Raw LinkTargetIDList bytes, without the length prefix
    pub id_list: Option<Vec<u8>>,
    pub link_info: Option<LinkInfo>,
}

impl ShortcutRecord {
    /// Window state a launcher should use. Unknown raw values behave as normal.
    pub fn effective_show_command(&self) -> ShowCommand {
        ShowCommand::from_raw(self.show_command)
    }

    /// Local base path of the target, when LinkInfo carries one
    pub fn local_base_path(&self) -> Option<&str> {
        self.link_info.as_ref()?.local_base_path.as_deref()
    }

    /// Volume label of the target drive, when LinkInfo carries one
    pub fn volume_label(&self) -> Option<&str> {
        self.link_info
            .as_ref()?
            .volume_id
            .as_ref()
            .map(|volume| volume.volume_label.as_str())
    }
}

/// Expected window state of the launched application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShowCommand {
    /// SW_SHOWNORMAL (1)
    Normal,
    /// SW_SHOWMAXIMIZED (3)
    Maximized,
    /// SW_SHOWMINNOACTIVE (7)
    MinNoActive,
}

impl ShowCommand {
    pub const SW_SHOWNORMAL: u32 = 1;
    pub const SW_SHOWMAXIMIZED: u32 = 3;
    pub const SW_SHOWMINNOACTIVE: u32 = 7;

    pub fn from_raw(value: u32) -> Self {
        match value {
            Self::SW_SHOWMAXIMIZED => ShowCommand::Maximized,
            Self::SW_SHOWMINNOACTIVE => ShowCommand::MinNoActive,
            _ => ShowCommand::Normal,
        }
    }
}

/// Keystroke that activates the link target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HotKey {
    /// Virtual key code (low byte)
    pub key: u8,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl HotKey {
    /// Build from the raw low (key) and high (modifier) bytes
    pub fn from_bytes(key: u8, modifiers: u8) -> Self {
        let modifiers = HotKeyModifiers::from_bits_truncate(modifiers);
        Self {
            key,
            shift: modifiers.contains(HotKeyModifiers::SHIFT),
            ctrl: modifiers.contains(HotKeyModifiers::CONTROL),
            alt: modifiers.contains(HotKeyModifiers::ALT),
        }
    }

    /// Whether a key code is one a shell link may carry: 0-9, A-Z, F1-F24,
    /// NUM LOCK or SCROLL LOCK
    pub fn is_valid_key(key: u8) -> bool {
        matches!(key, 0x30..=0x39 | 0x41..=0x5A | 0x70..=0x87 | 0x90 | 0x91)
    }

    /// Name of the key without modifiers
    pub fn key_name(&self) -> String {
        match self.key {
            0x70..=0x87 => format!("F{}", self.key - 0x6F),
            0x90 => "NumLock".to_string(),
            0x91 => "ScrollLock".to_string(),
            key => char::from(key).to_string(),
        }
    }
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(&self.key_name())
    }
}

/// LinkInfo structure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkInfo {
    /// Total size of the LinkInfo structure
    pub size: u32,
    /// LinkInfo header size, gates the Unicode offsets
    pub header_size: u32,
    pub volume_id_and_local_base_path: bool,
    pub common_network_relative_link_and_path_suffix: bool,
    pub volume_id_offset: u32,
    pub local_base_path_offset: u32,
    pub common_network_relative_link_offset: u32,
    pub common_path_suffix_offset: u32,
    /// Present when the header is larger than 28 bytes
    pub local_base_path_offset_unicode: Option<u32>,
    /// Present when the header is larger than 32 bytes
    pub common_path_suffix_offset_unicode: Option<u32>,
    pub volume_id: Option<VolumeId>,
    /// Local base path decoded as Windows-1252
    pub local_base_path: Option<String>,
    /// Local base path exactly as stored, without the terminator
    pub local_base_path_bytes: Option<Vec<u8>>,
}

/// VolumeID structure
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolumeId {
    pub size: u32,
    /// Raw drive type, see [`DriveType`]
    pub drive_type: u32,
    pub drive_serial_number: u32,
    pub volume_label_offset: u32,
    /// Present when the label offset is larger than 16
    pub volume_label_offset_unicode: Option<u32>,
    /// Volume label decoded as Windows-1252
    pub volume_label: String,
    /// Volume label exactly as stored, without the terminator
    pub volume_label_bytes: Vec<u8>,
}

impl VolumeId {
    pub fn drive_kind(&self) -> DriveType {
        DriveType::from_raw(self.drive_type)
    }
}

/// Type of drive the link target is stored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DriveType {
    Unknown,
    NoRootDir,
    Removable,
    Fixed,
    Remote,
    CdRom,
    RamDisk,
}

impl DriveType {
    pub fn from_raw(value: u32) -> Self {
        match value {
            1 => DriveType::NoRootDir,
            2 => DriveType::Removable,
            3 => DriveType::Fixed,
            4 => DriveType::Remote,
            5 => DriveType::CdRom,
            6 => DriveType::RamDisk,
            _ => DriveType::Unknown,
        }
    }
}

/// Decode a code page string as Windows-1252.
///
/// Strings written under any other code page come out as mojibake, so the
/// record keeps the raw bytes next to this view.
pub fn decode_code_page(bytes: &[u8]) -> String {
    WINDOWS_1252
        .decode(bytes, DecoderTrap::Replace)
        .unwrap_or_else(|err| err.into_owned())
}

/// Format an on-disk CLSID as `00021401-0000-0000-C000-000000000046`
pub fn format_clsid(clsid: &[u8; 16]) -> String {
    format!(
        "{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
        clsid[3], clsid[2], clsid[1], clsid[0],
        clsid[5], clsid[4],
        clsid[7], clsid[6],
        clsid[8], clsid[9],
        clsid[10], clsid[11], clsid[12], clsid[13], clsid[14], clsid[15]
    )
}
