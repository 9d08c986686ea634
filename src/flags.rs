//! Bit-flag words of the shell link header and LinkInfo structure.
//!
//! `LinkFlags` and `FileAttributes` are expanded into structs of named booleans.
//! Both are generated from a single ordered (bit, name) table so every flag is
//! derived the same way.

use bitflags::bitflags;
use serde::Serialize;

macro_rules! named_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $bit:literal => $field:ident,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: bool,
            )*
        }

        impl $name {
            /// (bit position, flag name) pairs in ascending bit order
            pub const BITS: &'static [(u32, &'static str)] = &[
                $(($bit, stringify!($field)),)*
            ];

            /// Expand a raw flag word. Bits without a name are ignored.
            pub fn from_bits(word: u32) -> Self {
                Self {
                    $($field: word & (1u32 << $bit) != 0,)*
                }
            }

            /// Every named flag with its current value, in bit order
            pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
                [$((stringify!($field), self.$field),)*].into_iter()
            }

            /// Names of the flags that are set
            pub fn set_names(&self) -> Vec<&'static str> {
                self.iter().filter(|(_, set)| *set).map(|(name, _)| name).collect()
            }
        }
    };
}

named_flags! {
    /// LinkFlags: which optional structures follow the header and how the link behaves
    pub struct LinkFlags {
        /// A LinkTargetIDList follows the header
        0 => has_target_id_list,
        /// A LinkInfo structure follows
        1 => has_link_info,
        2 => has_name,
        3 => has_relative_path,
        4 => has_working_dir,
        5 => has_arguments,
        6 => has_icon_location,
        /// StringData is UTF-16 rather than the system code page
        7 => is_unicode,
        8 => force_no_link_info,
        9 => has_exp_string,
        10 => run_in_separate_process,
        12 => has_darwin_id,
        13 => run_as_user,
        14 => has_exp_icon,
        15 => no_pidl_alias,
        17 => run_with_shim_layer,
        18 => force_no_link_track,
        19 => enable_target_metadata,
        20 => disable_link_path_tracking,
        21 => disable_known_folder_tracking,
        22 => disable_known_folder_alias,
        23 => allow_link_to_link,
        24 => unalias_on_save,
        25 => prefer_environment_path,
        26 => keep_local_id_list_for_unc_target,
    }
}

named_flags! {
    /// FILE_ATTRIBUTE_* flags of the link target
    pub struct FileAttributes {
        0 => read_only,
        1 => hidden,
        2 => system,
        4 => directory,
        5 => archive,
        7 => normal,
        8 => temporary,
        9 => sparse_file,
        10 => reparse_point,
        11 => compressed,
        12 => offline,
        13 => not_content_indexed,
        14 => encrypted,
    }
}

impl FileAttributes {
    /// Bits 3 and 6 must be zero
    pub const RESERVED_MASK: u32 = 0x0000_0048;
}

bitflags! {
    /// LinkInfo flags word
    pub struct LinkInfoFlags: u32 {
        const VOLUME_ID_AND_LOCAL_BASE_PATH                = 0x0000_0001;
        const COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX = 0x0000_0002;
    }
}

bitflags! {
    /// HotKey high byte
    pub struct HotKeyModifiers: u8 {
        const SHIFT   = 0x01;
        const CONTROL = 0x02;
        const ALT     = 0x04;
    }
}
