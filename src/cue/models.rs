use crate::cue::constants::{
    CUE_MAGIC, CUE_VERSION, EFFECT_FILE_LEN, PARAMS_LEN, RECORD_SIZE,
};
use crate::cue::error::{CueError, CueResult};
use crate::cue::spatial::Spatial;
use binrw::{BinRead, BinWrite};

/// File header, 64 bytes on disk.
#[derive(Debug, Clone, BinRead, BinWrite)]
#[brw(little)]
pub struct CueHeader {
    /// "CUE0"
    pub magic: u32,

    /// Format version
    pub version: u16,

    /// Number of cue records following the header
    pub num_cues: u16,

    /// Size of one record at authoring time
    pub record_size: u16,

    /// Reserved for future use, zero
    #[br(count = 54)]
    pub reserved: Vec<u8>,
}

impl CueHeader {
    pub fn new(num_cues: u16) -> Self {
        Self {
            magic: CUE_MAGIC,
            version: CUE_VERSION,
            num_cues,
            record_size: RECORD_SIZE as u16,
            reserved: vec![0u8; 54],
        }
    }
}

/// One cue record, 64 bytes on disk.
///
/// Field widths and order match the controller's `cue_entry` struct; the
/// type, mode and flag fields stay raw bytes here so a dump of a file
/// written by a newer tool still decodes.
#[derive(Debug, Clone, BinRead, BinWrite)]
#[brw(little)]
pub struct CueRecord {
    pub cue_type: u8,
    pub channel: u8,
    pub group: u16,
    pub start_ms: u32,
    pub duration_ms: u32,
    pub spatial_delay: f32,
    pub spatial_param1: f32,
    pub spatial_param2: f32,
    pub spatial_angle: u16,
    pub spatial_mode: u8,
    pub flags: u8,

    /// Effect file path, UTF-8, zero padded
    #[br(count = 20)]
    pub effect_file: Vec<u8>,

    /// Effect-specific parameter bytes
    #[br(count = 16)]
    pub params: Vec<u8>,
}

/// Cue type, first byte of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueType {
    Stop = 0,
    Effect = 1,
    Fill = 2,
    Blackout = 3,
    Global = 4,
}

impl CueType {
    pub fn from_name(name: &str) -> CueResult<Self> {
        match name {
            "stop" => Ok(CueType::Stop),
            "effect" => Ok(CueType::Effect),
            "fill" => Ok(CueType::Fill),
            "blackout" => Ok(CueType::Blackout),
            "global" => Ok(CueType::Global),
            _ => Err(CueError::UnknownCueType(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CueType::Stop => "stop",
            CueType::Effect => "effect",
            CueType::Fill => "fill",
            CueType::Blackout => "blackout",
            CueType::Global => "global",
        }
    }

    /// Decode-side lookup; dump output renders unknown codes as `?N`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CueType::Stop),
            1 => Some(CueType::Effect),
            2 => Some(CueType::Fill),
            3 => Some(CueType::Blackout),
            4 => Some(CueType::Global),
            _ => None,
        }
    }
}

/// A fully validated cue, every field resolved to its binary value.
#[derive(Debug, Clone)]
pub struct CueSpec {
    pub cue_type: CueType,
    pub channel: u8,
    pub group: u16,
    pub start_ms: u32,
    pub duration_ms: u32,
    pub spatial: Spatial,
    pub flags: u8,
    pub effect_file: String,
    pub params: [u8; PARAMS_LEN],
}

impl CueSpec {
    /// Lays the spec out as a binary record, truncating and zero-padding
    /// the effect file name to its fixed field width.
    pub fn to_record(&self) -> CueRecord {
        let mut effect_file = self.effect_file.as_bytes().to_vec();
        effect_file.truncate(EFFECT_FILE_LEN);
        effect_file.resize(EFFECT_FILE_LEN, 0);

        CueRecord {
            cue_type: self.cue_type as u8,
            channel: self.channel,
            group: self.group,
            start_ms: self.start_ms,
            duration_ms: self.duration_ms,
            spatial_delay: self.spatial.delay,
            spatial_param1: self.spatial.param1,
            spatial_param2: self.spatial.param2,
            spatial_angle: self.spatial.angle,
            spatial_mode: self.spatial.mode as u8,
            flags: self.flags,
            effect_file,
            params: self.params.to_vec(),
        }
    }
}
