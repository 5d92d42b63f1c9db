use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yaml::Error),

    #[error(transparent)]
    BinRwError(#[from] binrw::Error),

    #[error("document must have a top-level 'cues' list")]
    MissingCueList,

    #[error("'cues' must be a non-empty list")]
    EmptyCueList,

    #[error("error in cue #{index}: {source}")]
    Compile {
        index: usize,
        source: Box<CueError>,
    },

    #[error("unknown cue type: {0:?} (valid: stop, effect, fill, blackout, global)")]
    UnknownCueType(String),

    #[error(
        "unknown spatial mode: {0:?} (valid: none, radial_config, radial_absolute, \
         radial_relative, dir_config, dir_absolute, dir_relative)"
    )]
    UnknownSpatialMode(String),

    #[error("unknown flag: {0:?} (valid: fire_forget, loop, blend_add)")]
    UnknownFlag(String),

    #[error("group value too large (max 0xFFF): {0:#x}")]
    GroupValueTooLarge(u32),

    #[error("channel out of range (0-255): {0}")]
    ChannelRange(i64),

    #[error("cannot parse time: {0:?}")]
    TimeParse(String),

    #[error("cannot parse group: {0:?}")]
    GroupParse(String),

    #[error("too many cues for a single file (max 65535): {0}")]
    TooManyCues(usize),

    #[error("file too small for header ({0} bytes, need 64)")]
    TruncatedHeader(usize),

    #[error("bad magic {found:#010X} (expected 0x43554530)")]
    BadMagic { found: u32 },
}

impl CueError {
    /// Tags a per-cue failure with the cue's index in the source list.
    pub fn in_cue(self, index: usize) -> Self {
        CueError::Compile {
            index,
            source: Box::new(self),
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;
