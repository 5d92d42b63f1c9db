use crate::cue::constants::MAX_CUES;
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueHeader, CueSpec};
use binrw::BinWrite;
use std::io::Cursor;

/// Serializes a set of compiled cues into a complete `.cue` file image.
///
/// Records are stable-sorted by start time before writing, so cues with
/// the same start keep their authoring order.
pub fn encode_cue_file(specs: &[CueSpec]) -> CueResult<Vec<u8>> {
    if specs.is_empty() {
        return Err(CueError::EmptyCueList);
    }
    if specs.len() > MAX_CUES {
        return Err(CueError::TooManyCues(specs.len()));
    }

    let mut sorted: Vec<&CueSpec> = specs.iter().collect();
    sorted.sort_by_key(|spec| spec.start_ms);

    let mut cursor = Cursor::new(Vec::new());
    CueHeader::new(sorted.len() as u16).write(&mut cursor)?;
    for spec in sorted {
        spec.to_record().write(&mut cursor)?;
    }

    Ok(cursor.into_inner())
}
