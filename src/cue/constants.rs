/// File magic, spells "CUE0" when read as little-endian bytes on disk.
pub const CUE_MAGIC: u32 = 0x43554530;

/// Current (and only) format version.
pub const CUE_VERSION: u16 = 0;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 64;

/// Size of one cue record in bytes, as written by this tool.
pub const RECORD_SIZE: usize = 64;

/// Width of the zero-padded effect file name field.
pub const EFFECT_FILE_LEN: usize = 20;

/// Width of the effect parameter byte array.
pub const PARAMS_LEN: usize = 16;

/// Largest value representable in the 12-bit group value field.
pub const GROUP_VALUE_MAX: u32 = 0x0FFF;

/// `num_cues` is a uint16 in the header.
pub const MAX_CUES: usize = u16::MAX as usize;
