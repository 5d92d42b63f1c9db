use crate::commands::{BuildCommand, DumpCommand};
use crate::cue::compiler::compile_cue;
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::CueSpec;
use crate::cue::reader::dump_cue_data;
use crate::cue::writer::encode_cue_file;
use log::debug;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::io;

pub mod compiler;
pub mod constants;
pub mod error;
pub mod flags;
pub mod group;
pub mod models;
pub mod reader;
pub mod spatial;
pub mod time;
pub mod writer;

/// Top-level show description envelope; individual cues stay untyped
/// until the compiler resolves each field.
#[derive(Debug, Deserialize)]
struct ShowDocument {
    #[serde(default)]
    cues: Option<Value>,
}

/// Compiles a YAML show description and writes the binary cue file.
///
/// No output file is written unless every cue compiles.
pub fn build_cue_file(cmd: &BuildCommand) -> CueResult<()> {
    debug!("Reading show description: {:?}", cmd.input);
    let text = fs::read_to_string(&cmd.input)?;

    let specs = compile_document(&text)?;
    let data = encode_cue_file(&specs)?;

    let out_path = cmd
        .output
        .clone()
        .unwrap_or_else(|| cmd.input.with_extension("cue"));

    debug!("Writing cue file: {:?}", out_path);
    fs::write(&out_path, &data)?;

    println!(
        "Wrote {} cues to {} ({} bytes)",
        specs.len(),
        out_path.display(),
        data.len()
    );
    Ok(())
}

/// Dumps a binary cue file to stdout as a human-readable table.
pub fn dump_cue_file(cmd: &DumpCommand) -> CueResult<()> {
    debug!("Reading cue file: {:?}", cmd.input);
    let data = fs::read(&cmd.input)?;

    let stdout = io::stdout();
    dump_cue_data(&data, &mut stdout.lock())
}

/// Parses the document envelope and compiles every cue, tagging any
/// failure with the offending cue's index.
fn compile_document(text: &str) -> CueResult<Vec<CueSpec>> {
    let value: Value = serde_yaml::from_str(text)?;
    let doc: ShowDocument =
        serde_yaml::from_value(value).map_err(|_| CueError::MissingCueList)?;

    let cues = doc.cues.ok_or(CueError::MissingCueList)?;
    let list = cues.as_sequence().ok_or(CueError::MissingCueList)?;
    if list.is_empty() {
        return Err(CueError::EmptyCueList);
    }

    list.iter()
        .enumerate()
        .map(|(index, cue)| compile_cue(cue).map_err(|err| err.in_cue(index)))
        .collect()
}
