//! Windows LNK (Shell Link) file decoder
//!
//! Decodes the fixed 76-byte ShellLinkHeader and the two optional structures
//! that follow it, the LinkTargetIDList and the LinkInfo. The input is read
//! strictly front to back through a [`ByteSource`].
//!
//! ```text
//! SHELL_LINK = SHELL_LINK_HEADER [LINKTARGET_IDLIST] [LINKINFO] ...
//! ```
//!
//! StringData and ExtraData, which follow LinkInfo, are left unread.

use crate::cursor::{ByteSource, Section, StreamCursor};
use crate::datetime::filetime_to_datetime;
use crate::error::{Error, PartialDecode, Result};
use crate::flags::{FileAttributes, LinkFlags, LinkInfoFlags};
use crate::types::{
    decode_code_page, HotKey, LinkInfo, ShortcutRecord, VolumeId, HEADER_SIZE, LINK_CLSID,
};

/// Decode a shell link from `source`.
///
/// `source` must be positioned at the first byte of the file. On success it has
/// been advanced past the last structure decoded; on failure its position is
/// unspecified.
pub fn decode<S: ByteSource + ?Sized>(source: &mut S) -> Result<ShortcutRecord> {
    LnkParser::new().parse(source)
}

/// Decode a shell link, keeping whatever was decoded if a stage fails.
///
/// The record inside [`PartialDecode`] is complete up to the failing field and
/// default-valued after it.
pub fn decode_partial<S: ByteSource + ?Sized>(
    source: &mut S,
) -> std::result::Result<ShortcutRecord, PartialDecode> {
    LnkParser::new().parse_partial(source)
}

/// Decode a shell link held in memory
pub fn decode_bytes(data: &[u8]) -> Result<ShortcutRecord> {
    LnkParser::new().parse_lnk_data(data)
}

/// LNK file parser
///
/// Holds no state between calls; one parser can decode any number of inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LnkParser;

impl LnkParser {
    /// Create new LNK parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a shell link from a byte source
    pub fn parse<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<ShortcutRecord> {
        self.parse_partial(source).map_err(PartialDecode::into_error)
    }

    /// Parse LNK file data held in memory
    pub fn parse_lnk_data(&self, data: &[u8]) -> Result<ShortcutRecord> {
        self.parse(&mut StreamCursor::new(data))
    }

    /// Parse a shell link, returning the partial record alongside any error
    pub fn parse_partial<S: ByteSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> std::result::Result<ShortcutRecord, PartialDecode> {
        let mut record = ShortcutRecord::default();
        match self.parse_into(source, &mut record) {
            Ok(()) => Ok(record),
            Err(error) => {
                log::debug!("LNK decode stopped at offset {}: {}", source.position(), error);
                Err(PartialDecode { error, record })
            }
        }
    }

    fn parse_into<S: ByteSource + ?Sized>(&self, source: &mut S, record: &mut ShortcutRecord) -> Result<()> {
        self.parse_header(source, record)?;

        if record.link_flags.has_target_id_list {
            record.id_list = Some(self.parse_id_list(source)?);
        }

        if record.link_flags.has_link_info {
            // Fields are filled in place so a failure inside LinkInfo still
            // leaves its leading fields visible
            let link_info = record.link_info.insert(LinkInfo::default());
            self.parse_link_info(source, link_info)?;
        }

        Ok(())
    }

    /// Parse the 76-byte shell link header
    fn parse_header<S: ByteSource + ?Sized>(&self, source: &mut S, record: &mut ShortcutRecord) -> Result<()> {
        let header_size = source.read_u32()?;
        if header_size != HEADER_SIZE {
            return Err(Error::InvalidHeaderSize(header_size));
        }
        record.header_size = header_size;

        let link_clsid = source.read_guid()?;
        if link_clsid != LINK_CLSID {
            return Err(Error::InvalidClsid(link_clsid));
        }
        record.link_clsid = link_clsid;

        record.link_flags = LinkFlags::from_bits(source.read_u32()?);

        let file_attributes = source.read_u32()?;
        record.file_attributes = FileAttributes::from_bits(file_attributes);
        if file_attributes & FileAttributes::RESERVED_MASK != 0 {
            return Err(Error::ReservedBitSet {
                field: "FileAttributes",
                value: file_attributes & FileAttributes::RESERVED_MASK,
            });
        }

        record.creation_time = filetime_to_datetime(source.read_u64()?);
        record.access_time = filetime_to_datetime(source.read_u64()?);
        record.write_time = filetime_to_datetime(source.read_u64()?);
        record.file_size = source.read_u32()?;
        record.icon_index = source.read_i32()?;
        record.show_command = source.read_u32()?;

        let key = source.read_u8()?;
        let modifiers = source.read_u8()?;
        record.hot_key = HotKey::from_bytes(key, modifiers);
        if !HotKey::is_valid_key(key) {
            return Err(Error::InvalidHotKey(key));
        }

        let reserved1 = source.read_u16()?;
        check_reserved("Reserved1", u32::from(reserved1))?;
        check_reserved("Reserved2", source.read_u32()?)?;
        check_reserved("Reserved3", source.read_u32()?)?;

        log::trace!(
            "LNK header: flags {:?}, attributes {:?}",
            record.link_flags.set_names(),
            record.file_attributes.set_names()
        );
        Ok(())
    }

    /// Parse the LinkTargetIDList, keeping the item IDs as opaque bytes
    fn parse_id_list<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Vec<u8>> {
        let size = source.read_u16()?;
        log::trace!("LinkTargetIDList: {} bytes at offset {}", size, source.position());
        source.read_bytes(usize::from(size))
    }

    /// Parse the LinkInfo section
    fn parse_link_info<S: ByteSource + ?Sized>(&self, source: &mut S, link_info: &mut LinkInfo) -> Result<()> {
        let mut section = Section::new();

        link_info.size = section.read_u32(source)?;
        link_info.header_size = section.read_u32(source)?;
        section.declare(link_info.header_size);

        let flags = LinkInfoFlags::from_bits_truncate(section.read_u32(source)?);
        link_info.volume_id_and_local_base_path =
            flags.contains(LinkInfoFlags::VOLUME_ID_AND_LOCAL_BASE_PATH);
        link_info.common_network_relative_link_and_path_suffix =
            flags.contains(LinkInfoFlags::COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX);

        link_info.volume_id_offset = section.read_u32(source)?;
        link_info.local_base_path_offset = section.read_u32(source)?;
        link_info.common_network_relative_link_offset = section.read_u32(source)?;
        link_info.common_path_suffix_offset = section.read_u32(source)?;

        // Header sizes above 28 and 32 add the Unicode offsets
        link_info.local_base_path_offset_unicode = section.read_u32_if_declared(source)?;
        link_info.common_path_suffix_offset_unicode = section.read_u32_if_declared(source)?;
        log::trace!(
            "LinkInfo header: read {} bytes of a declared {}",
            section.consumed(),
            section.declared()
        );

        if link_info.volume_id_and_local_base_path {
            let volume_id = link_info.volume_id.insert(VolumeId::default());
            self.parse_volume_id(source, volume_id)?;

            let path = source.read_until_nul()?;
            link_info.local_base_path = Some(decode_code_page(&path));
            link_info.local_base_path_bytes = Some(path);
        }

        // The CommonNetworkRelativeLink branch is not decoded
        if link_info.common_network_relative_link_and_path_suffix {
            log::debug!("LinkInfo has a CommonNetworkRelativeLink, leaving it unread");
        }

        Ok(())
    }

    /// Parse a VolumeID structure and the volume label that follows its header
    fn parse_volume_id<S: ByteSource + ?Sized>(&self, source: &mut S, volume_id: &mut VolumeId) -> Result<()> {
        let mut section = Section::new();

        volume_id.size = section.read_u32(source)?;
        volume_id.drive_type = section.read_u32(source)?;
        volume_id.drive_serial_number = section.read_u32(source)?;
        volume_id.volume_label_offset = section.read_u32(source)?;

        // The label offset marks the end of the VolumeID header
        section.declare(volume_id.volume_label_offset);
        volume_id.volume_label_offset_unicode = section.read_u32_if_declared(source)?;
        log::trace!(
            "VolumeID header: read {} bytes, label at offset {}",
            section.consumed(),
            section.declared()
        );

        let label = source.read_until_nul()?;
        volume_id.volume_label = decode_code_page(&label);
        volume_id.volume_label_bytes = label;
        Ok(())
    }
}

fn check_reserved(field: &'static str, value: u32) -> Result<()> {
    if value != 0 {
        return Err(Error::ReservedBitSet { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DriveType;
    use chrono::{DateTime, Datelike, Utc};

    const HAS_TARGET_ID_LIST: u32 = 0x01;
    const HAS_LINK_INFO: u32 = 0x02;

    /// Builds synthetic shell link bytes
    struct LnkBuilder {
        link_flags: u32,
        file_attributes: u32,
        times: [u64; 3],
        hot_key: [u8; 2],
        reserved: (u16, u32, u32),
        id_list: Vec<u8>,
        link_info: Vec<u8>,
    }

    impl LnkBuilder {
        fn new() -> Self {
            Self {
                link_flags: 0,
                file_attributes: 0x20,
                times: [125911584000000000, 116444736000000000, 133000000000000000],
                hot_key: [0x41, 0x02],
                reserved: (0, 0, 0),
                id_list: Vec::new(),
                link_info: Vec::new(),
            }
        }

        fn id_list(mut self, bytes: &[u8]) -> Self {
            self.link_flags |= HAS_TARGET_ID_LIST;
            self.id_list = bytes.to_vec();
            self
        }

        fn link_info(mut self, bytes: Vec<u8>) -> Self {
            self.link_flags |= HAS_LINK_INFO;
            self.link_info = bytes;
            self
        }

        fn header(&self) -> Vec<u8> {
            let mut data = Vec::new();
            data.extend_from_slice(&HEADER_SIZE.to_le_bytes());
            data.extend_from_slice(&LINK_CLSID);
            data.extend_from_slice(&self.link_flags.to_le_bytes());
            data.extend_from_slice(&self.file_attributes.to_le_bytes());
            for time in self.times {
                data.extend_from_slice(&time.to_le_bytes());
            }
            data.extend_from_slice(&4096u32.to_le_bytes());
            data.extend_from_slice(&(-3i32).to_le_bytes());
            data.extend_from_slice(&7u32.to_le_bytes());
            data.extend_from_slice(&self.hot_key);
            data.extend_from_slice(&self.reserved.0.to_le_bytes());
            data.extend_from_slice(&self.reserved.1.to_le_bytes());
            data.extend_from_slice(&self.reserved.2.to_le_bytes());
            data
        }

        fn build(&self) -> Vec<u8> {
            let mut data = self.header();
            if self.link_flags & HAS_TARGET_ID_LIST != 0 {
                data.extend_from_slice(&(self.id_list.len() as u16).to_le_bytes());
                data.extend_from_slice(&self.id_list);
            }
            if self.link_flags & HAS_LINK_INFO != 0 {
                data.extend_from_slice(&self.link_info);
            }
            data
        }
    }

    /// LinkInfo with a VolumeID, a label and a local base path
    fn local_link_info(header_size: u32, label_offset: u32) -> Vec<u8> {
        link_info_with_strings(header_size, label_offset, b"OS\0", b"C:\\Windows\\notepad.exe\0")
    }

    /// LinkInfo with a VolumeID whose NUL-terminated label and path are given verbatim
    fn link_info_with_strings(header_size: u32, label_offset: u32, label: &[u8], path: &[u8]) -> Vec<u8> {
        let mut header = Vec::new();
        let extra_offsets = match header_size {
            0..=28 => 0,
            29..=32 => 1,
            _ => 2,
        };
        let volume_id_offset = 28 + 4 * extra_offsets;

        let mut volume = Vec::new();
        volume.extend_from_slice(&0x11u32.to_le_bytes());
        volume.extend_from_slice(&3u32.to_le_bytes());
        volume.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());
        volume.extend_from_slice(&label_offset.to_le_bytes());
        if label_offset > 16 {
            volume.extend_from_slice(&0x14u32.to_le_bytes());
        }
        volume.extend_from_slice(label);
        let total = volume_id_offset + volume.len() as u32 + path.len() as u32;

        header.extend_from_slice(&total.to_le_bytes());
        header.extend_from_slice(&header_size.to_le_bytes());
        header.extend_from_slice(&1u32.to_le_bytes());
        header.extend_from_slice(&volume_id_offset.to_le_bytes());
        header.extend_from_slice(&(volume_id_offset + volume.len() as u32).to_le_bytes());
        header.extend_from_slice(&0u32.to_le_bytes());
        header.extend_from_slice(&(total - 1).to_le_bytes());
        for i in 0..extra_offsets {
            header.extend_from_slice(&(0x100 + i).to_le_bytes());
        }
        header.extend_from_slice(&volume);
        header.extend_from_slice(path);
        header
    }

    /// LinkInfo without any sub-structure
    fn bare_link_info(header_size: u32, flags: u32) -> Vec<u8> {
        let mut data = Vec::new();
        for value in [header_size, header_size, flags, 0, 0, 0, 0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data
    }

    #[test]
    fn test_decode_header_only() {
        let data = LnkBuilder::new().build();
        assert_eq!(data.len(), 76);

        let record = decode_bytes(&data).unwrap();
        assert_eq!(record.header_size, 76);
        assert_eq!(record.link_clsid, LINK_CLSID);
        assert!(record.file_attributes.archive);
        assert!(!record.link_flags.has_target_id_list);
        assert_eq!(record.creation_time.year(), 2000);
        assert_eq!(record.access_time, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(record.file_size, 4096);
        assert_eq!(record.icon_index, -3);
        assert_eq!(record.show_command, 7);
        assert_eq!(record.hot_key.to_string(), "Ctrl+A");
        assert!(record.id_list.is_none());
        assert!(record.link_info.is_none());
    }

    #[test]
    fn test_cursor_consumes_exactly_the_header() {
        let mut data = LnkBuilder::new().build();
        data.extend_from_slice(b"trailing");
        let mut cursor = StreamCursor::new(&data[..]);

        decode(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 76);
        assert_eq!(cursor.read_bytes(8).unwrap(), b"trailing");
    }

    #[test]
    fn test_invalid_header_size() {
        for size in [0u32, 0x4B, 0x4D, u32::MAX] {
            let mut data = LnkBuilder::new().build();
            data[..4].copy_from_slice(&size.to_le_bytes());
            match decode_bytes(&data) {
                Err(Error::InvalidHeaderSize(found)) => assert_eq!(found, size),
                other => panic!("expected InvalidHeaderSize, got {:?}", other),
            }
        }

        // Nothing after the size field matters
        let mut data = 0x50u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[0xFF; 4]);
        assert!(matches!(decode_bytes(&data), Err(Error::InvalidHeaderSize(0x50))));
    }

    #[test]
    fn test_invalid_clsid_any_byte() {
        for index in 4..20 {
            let mut data = LnkBuilder::new().build();
            data[index] ^= 0x01;
            assert!(
                matches!(decode_bytes(&data), Err(Error::InvalidClsid(_))),
                "CLSID byte {} not checked",
                index - 4
            );
        }
    }

    #[test]
    fn test_reserved_file_attribute_bits() {
        for bit in [3, 6] {
            let mut builder = LnkBuilder::new();
            builder.file_attributes |= 1 << bit;
            match decode_bytes(&builder.build()) {
                Err(Error::ReservedBitSet { field, value }) => {
                    assert_eq!(field, "FileAttributes");
                    assert_eq!(value, 1 << bit);
                }
                other => panic!("expected ReservedBitSet, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_reserved_header_fields() {
        let cases = [(1u16, 0u32, 0u32, "Reserved1"), (0, 1, 0, "Reserved2"), (0, 0, 0x8000_0000, "Reserved3")];
        for (r1, r2, r3, expected) in cases {
            let mut builder = LnkBuilder::new();
            builder.reserved = (r1, r2, r3);
            match decode_bytes(&builder.build()) {
                Err(Error::ReservedBitSet { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected ReservedBitSet, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unused_link_flag_bits_accepted() {
        let mut builder = LnkBuilder::new();
        builder.link_flags = (1 << 11) | (1 << 16);
        let record = decode_bytes(&builder.build()).unwrap();
        assert!(record.link_flags.set_names().is_empty());
    }

    #[test]
    fn test_hotkey_validation() {
        let mut builder = LnkBuilder::new();
        builder.hot_key = [0x78, 0x00];
        assert_eq!(decode_bytes(&builder.build()).unwrap().hot_key.to_string(), "F9");

        builder.hot_key = [0x41, 0x01];
        assert_eq!(decode_bytes(&builder.build()).unwrap().hot_key.to_string(), "Shift+A");

        builder.hot_key = [0x29, 0x00];
        assert!(matches!(decode_bytes(&builder.build()), Err(Error::InvalidHotKey(0x29))));
    }

    #[test]
    fn test_target_id_list_is_opaque() {
        let blob = [0x14, 0x00, 0x1F, 0x50, 0xE0, 0x4F, 0xD0, 0x20, 0x00, 0x00];
        let data = LnkBuilder::new().id_list(&blob).build();

        let record = decode_bytes(&data).unwrap();
        assert!(record.link_flags.has_target_id_list);
        assert_eq!(record.id_list.as_deref(), Some(&blob[..]));
    }

    #[test]
    fn test_target_id_list_longer_than_input() {
        let mut data = LnkBuilder::new().id_list(&[0xAA; 8]).build();
        data[76..78].copy_from_slice(&64u16.to_le_bytes());

        match decode_bytes(&data) {
            Err(Error::Truncated { offset, wanted, available }) => {
                assert_eq!(offset, 78);
                assert_eq!(wanted, 64);
                assert_eq!(available, 8);
            }
            other => panic!("expected Truncated, got {:?}", other),
        }
    }

    #[test]
    fn test_no_id_list_goes_straight_to_link_info() {
        let data = LnkBuilder::new().link_info(bare_link_info(28, 0)).build();
        let mut cursor = StreamCursor::new(&data[..]);

        let record = decode(&mut cursor).unwrap();
        assert!(record.id_list.is_none());
        let link_info = record.link_info.unwrap();
        assert_eq!(link_info.header_size, 28);
        assert_eq!(cursor.position(), 76 + 28);
    }

    #[test]
    fn test_link_info_with_volume_id() {
        let data = LnkBuilder::new().id_list(&[1, 2, 3, 4]).link_info(local_link_info(0x1C, 0x10)).build();
        let mut cursor = StreamCursor::new(&data[..]);

        let record = decode(&mut cursor).unwrap();
        assert!(cursor.is_exhausted().unwrap());

        let link_info = record.link_info.as_ref().unwrap();
        assert!(link_info.volume_id_and_local_base_path);
        assert!(!link_info.common_network_relative_link_and_path_suffix);
        assert_eq!(link_info.volume_id_offset, 28);
        assert_eq!(link_info.local_base_path_offset_unicode, None);
        assert_eq!(link_info.common_path_suffix_offset_unicode, None);

        let volume_id = link_info.volume_id.as_ref().unwrap();
        assert_eq!(volume_id.drive_kind(), DriveType::Fixed);
        assert_eq!(volume_id.drive_serial_number, 0xDEADBEEF);
        assert_eq!(volume_id.volume_label_offset_unicode, None);
        assert_eq!(record.volume_label(), Some("OS"));
        assert_eq!(record.local_base_path(), Some("C:\\Windows\\notepad.exe"));
    }

    #[test]
    fn test_code_page_strings_keep_raw_bytes() {
        let label: [u8; 4] = [0xE9, 0x74, 0xE9, 0x00];
        let path: [u8; 8] = [b'C', b':', b'\\', b'c', b'a', b'f', 0xE9, 0x00];
        let data = LnkBuilder::new().link_info(link_info_with_strings(0x1C, 0x10, &label, &path)).build();

        let link_info = decode_bytes(&data).unwrap().link_info.unwrap();
        assert_eq!(link_info.local_base_path_bytes.as_deref(), Some(&path[..7]));
        assert_eq!(link_info.local_base_path.as_deref(), Some("C:\\caf\u{e9}"));

        let volume_id = link_info.volume_id.unwrap();
        assert_eq!(volume_id.volume_label_bytes, &label[..3]);
        assert_eq!(volume_id.volume_label, "\u{e9}t\u{e9}");
    }

    #[test]
    fn test_link_info_header_size_30_reads_one_unicode_offset() {
        let data = LnkBuilder::new().link_info(local_link_info(30, 0x10)).build();
        let record = decode_bytes(&data).unwrap();

        let link_info = record.link_info.unwrap();
        assert_eq!(link_info.local_base_path_offset_unicode, Some(0x100));
        assert_eq!(link_info.common_path_suffix_offset_unicode, None);
        assert_eq!(link_info.local_base_path.as_deref(), Some("C:\\Windows\\notepad.exe"));
    }

    #[test]
    fn test_link_info_header_size_36_reads_both_unicode_offsets() {
        let data = LnkBuilder::new().link_info(local_link_info(0x24, 0x14)).build();
        let record = decode_bytes(&data).unwrap();

        let link_info = record.link_info.unwrap();
        assert_eq!(link_info.local_base_path_offset_unicode, Some(0x100));
        assert_eq!(link_info.common_path_suffix_offset_unicode, Some(0x101));

        let volume_id = link_info.volume_id.unwrap();
        assert_eq!(volume_id.volume_label_offset_unicode, Some(0x14));
        assert_eq!(volume_id.volume_label, "OS");
    }

    #[test]
    fn test_link_info_without_volume_reads_no_strings() {
        let data = LnkBuilder::new().link_info(bare_link_info(28, 0)).build();
        let record = decode_bytes(&data).unwrap();

        let link_info = record.link_info.as_ref().unwrap();
        assert!(!link_info.volume_id_and_local_base_path);
        assert!(link_info.volume_id.is_none());
        assert!(link_info.local_base_path.is_none());
        assert_eq!(record.volume_label(), None);
        assert_eq!(record.local_base_path(), None);
    }

    #[test]
    fn test_network_link_info_leaves_strings_unread() {
        let mut data = LnkBuilder::new().link_info(bare_link_info(28, 0x02)).build();
        data.extend_from_slice(b"\\\\server\\share\0");
        let mut cursor = StreamCursor::new(&data[..]);

        let record = decode(&mut cursor).unwrap();
        let link_info = record.link_info.unwrap();
        assert!(link_info.common_network_relative_link_and_path_suffix);
        assert!(link_info.local_base_path.is_none());
        assert_eq!(cursor.position(), 76 + 28);
    }

    #[test]
    fn test_truncation_at_every_offset() {
        let data = LnkBuilder::new()
            .id_list(&[0x10, 0x20, 0x30])
            .link_info(local_link_info(0x24, 0x14))
            .build();
        assert!(decode_bytes(&data).is_ok());

        for end in 0..data.len() {
            match decode_bytes(&data[..end]) {
                Err(Error::Truncated { .. }) => {}
                other => panic!("truncation at {} gave {:?}", end, other),
            }
        }
    }

    #[test]
    fn test_partial_record_on_failure() {
        let mut builder = LnkBuilder::new();
        builder.hot_key = [0x00, 0x00];
        let data = builder.build();

        let partial = decode_partial(&mut StreamCursor::new(&data[..])).unwrap_err();
        assert!(matches!(partial.error, Error::InvalidHotKey(0)));
        assert_eq!(partial.record.header_size, 76);
        assert_eq!(partial.record.file_size, 4096);
        assert_eq!(partial.record.show_command, 7);
        assert!(partial.record.link_info.is_none());
    }

    #[test]
    fn test_partial_link_info_keeps_leading_fields() {
        let data = LnkBuilder::new().link_info(local_link_info(0x1C, 0x10)).build();
        let cut = &data[..data.len() - 5];

        let partial = decode_partial(&mut StreamCursor::new(cut)).unwrap_err();
        assert!(matches!(partial.error, Error::Truncated { .. }));
        let link_info = partial.record.link_info.unwrap();
        assert_eq!(link_info.header_size, 0x1C);
        assert_eq!(link_info.volume_id.unwrap().volume_label, "OS");
        assert!(link_info.local_base_path.is_none());
    }

    #[test]
    fn test_decode_is_deterministic() {
        let data = LnkBuilder::new()
            .id_list(&[9, 8, 7])
            .link_info(local_link_info(30, 0x10))
            .build();
        assert_eq!(decode_bytes(&data).unwrap(), decode_bytes(&data).unwrap());
    }

    #[test]
    fn test_parser_reused_across_inputs() {
        let parser = LnkParser::new();
        let plain = LnkBuilder::new().build();
        let linked = LnkBuilder::new().link_info(local_link_info(0x1C, 0x10)).build();

        assert!(parser.parse_lnk_data(&linked).unwrap().link_info.is_some());
        assert!(parser.parse_lnk_data(&plain).unwrap().link_info.is_none());
        assert_eq!(parser.parse(&mut StreamCursor::new(&linked[..])).unwrap(), decode_bytes(&linked).unwrap());
        assert!(parser.parse_lnk_data(&[]).is_err());
    }

    #[test]
    fn test_trait_object_source() {
        let data = LnkBuilder::new().build();
        let mut cursor = StreamCursor::new(&data[..]);
        let source: &mut dyn ByteSource = &mut cursor;
        assert!(decode(source).is_ok());
    }
}
