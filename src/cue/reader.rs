use crate::cue::constants::{CUE_MAGIC, HEADER_SIZE, RECORD_SIZE};
use crate::cue::error::{CueError, CueResult};
use crate::cue::flags::format_flags;
use crate::cue::group::format_group;
use crate::cue::models::{CueHeader, CueRecord, CueType};
use crate::cue::spatial::format_spatial;
use crate::cue::time::format_time;
use binrw::BinRead;
use log::warn;
use std::io::{Cursor, Write};

/// Parses and validates the file header.
pub fn parse_header(data: &[u8]) -> CueResult<CueHeader> {
    if data.len() < HEADER_SIZE {
        return Err(CueError::TruncatedHeader(data.len()));
    }

    let header = CueHeader::read(&mut Cursor::new(data))?;
    if header.magic != CUE_MAGIC {
        return Err(CueError::BadMagic {
            found: header.magic,
        });
    }
    Ok(header)
}

/// Decodes a cue file image and renders it as a human-readable table.
///
/// A buffer shorter than the header claims is tolerated: every record
/// that fully fits is printed, then a truncation marker for the rest.
pub fn dump_cue_data(data: &[u8], out: &mut impl Write) -> CueResult<()> {
    let header = parse_header(data)?;

    writeln!(out, "Magic:       {:#010X} (CUE0)", header.magic)?;
    writeln!(out, "Version:     {}", header.version)?;
    writeln!(out, "Num cues:    {}", header.num_cues)?;
    writeln!(out, "Record size: {}", header.record_size)?;
    writeln!(out)?;

    let expected_size = HEADER_SIZE + header.num_cues as usize * header.record_size as usize;
    if data.len() < expected_size {
        warn!("file is {} bytes, expected {}", data.len(), expected_size);
    }

    writeln!(
        out,
        "{:>3}  {:>10}  {:<8}  {:>2}  {:<14}  {:<16}  {:<20}  {:<20}  {}",
        "#", "Time", "Type", "Ch", "Group", "Spatial", "Flags", "Effect", "Params"
    )?;
    writeln!(out, "{}", "-".repeat(120))?;

    let mut cursor = Cursor::new(data);
    for i in 0..header.num_cues as usize {
        let offset = HEADER_SIZE + i * header.record_size as usize;
        if offset + RECORD_SIZE > data.len() {
            writeln!(out, "  (truncated at entry {i})")?;
            break;
        }

        cursor.set_position(offset as u64);
        let record = CueRecord::read(&mut cursor)?;
        writeln!(out, "{}", format_record_row(i, &record))?;
    }

    Ok(())
}

fn format_record_row(index: usize, record: &CueRecord) -> String {
    let mut time_str = format_time(record.start_ms);
    if record.duration_ms != 0 {
        time_str.push('+');
        time_str.push_str(&format_time(record.duration_ms));
    }

    let type_str = match CueType::from_code(record.cue_type) {
        Some(t) => t.name().to_string(),
        None => format!("?{}", record.cue_type),
    };

    let spatial_str = format_spatial(
        record.spatial_mode,
        record.spatial_delay,
        record.spatial_param1,
        record.spatial_param2,
        record.spatial_angle,
    );

    format!(
        "{:>3}  {:>10}  {:<8}  {:>2}  {:<14}  {:<16}  {:<20}  {:<20}  {}",
        index,
        time_str,
        type_str,
        record.channel,
        format_group(record.group),
        spatial_str,
        format_flags(record.flags),
        format_effect_file(&record.effect_file),
        format_params(&record.params),
    )
}

/// Trailing NUL padding stripped, lossy UTF-8, `-` when empty.
fn format_effect_file(raw: &[u8]) -> String {
    let end = raw
        .iter()
        .rposition(|&b| b != 0)
        .map(|pos| pos + 1)
        .unwrap_or(0);
    let name = String::from_utf8_lossy(&raw[..end]);
    if name.is_empty() {
        "-".to_string()
    } else {
        name.into_owned()
    }
}

/// Trailing zeros trimmed for display, `-` when all zero.
fn format_params(params: &[u8]) -> String {
    let end = params
        .iter()
        .rposition(|&b| b != 0)
        .map(|pos| pos + 1)
        .unwrap_or(0);
    if end == 0 {
        return "-".to_string();
    }
    params[..end]
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::cue::models::{CueSpec, CueType};
    use crate::cue::spatial::{Spatial, SpatialMode};
    use crate::cue::writer::encode_cue_file;
    use crate::cue::writer::tests::spec_at;

    fn dump_to_string(data: &[u8]) -> CueResult<String> {
        let mut out = Vec::new();
        dump_cue_data(data, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(matches!(
            parse_header(&[0u8; 10]),
            Err(CueError::TruncatedHeader(10))
        ));
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut data = encode_cue_file(&[spec_at(0)]).unwrap();
        data[0] = 0xFF;
        assert!(matches!(
            parse_header(&data),
            Err(CueError::BadMagic { .. })
        ));
    }

    #[test]
    fn test_dump_round_trip() {
        let spec = CueSpec {
            cue_type: CueType::Effect,
            channel: 2,
            group: 0x1005,
            start_ms: 90000,
            duration_ms: 500,
            spatial: Spatial {
                mode: SpatialMode::DirAbsolute,
                delay: 0.0,
                param1: 0.0,
                param2: 0.0,
                angle: 90,
            },
            flags: 0x03,
            effect_file: "/shows/fire.wasm".to_string(),
            params: [0; 16],
        };

        let data = encode_cue_file(&[spec]).unwrap();
        let text = dump_to_string(&data).unwrap();

        assert!(text.contains("Num cues:    1"));
        assert!(text.contains("1m30s+500ms"));
        assert!(text.contains("effect"));
        assert!(text.contains("cone:5"));
        assert!(text.contains("dir_absolute a=90"));
        assert!(text.contains("fire_forget,loop"));
        assert!(text.contains("/shows/fire.wasm"));
    }

    #[test]
    fn test_decoded_records_keep_sorted_order() {
        let data = encode_cue_file(&[spec_at(9000), spec_at(100), spec_at(4000)]).unwrap();

        let mut starts = Vec::new();
        let mut cursor = Cursor::new(data.as_slice());
        for i in 0..3 {
            cursor.set_position((HEADER_SIZE + i * RECORD_SIZE) as u64);
            starts.push(CueRecord::read(&mut cursor).unwrap().start_ms);
        }
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_truncated_file_decodes_partial_records() {
        let specs: Vec<CueSpec> = (0..5).map(|i| spec_at(i * 1000)).collect();
        let data = encode_cue_file(&specs).unwrap();

        // Header still claims 5 records, only 2 fully present
        let cut = &data[..HEADER_SIZE + 2 * RECORD_SIZE + 10];
        let text = dump_to_string(cut).unwrap();

        assert!(text.contains("Num cues:    5"));
        assert!(text.lines().any(|l| l.trim_start().starts_with("0  ")));
        assert!(text.lines().any(|l| l.trim_start().starts_with("1  ")));
        assert!(text.contains("(truncated at entry 2)"));
        assert!(!text.lines().any(|l| l.trim_start().starts_with("3  ")));
    }

    #[test]
    fn test_unknown_type_and_mode_render_as_codes() {
        let mut data = encode_cue_file(&[spec_at(0)]).unwrap();
        data[HEADER_SIZE] = 9; // cue_type
        data[HEADER_SIZE + 26] = 7; // spatial_mode
        let text = dump_to_string(&data).unwrap();
        assert!(text.contains("?9"));
        assert!(text.contains("?7"));
    }

    #[test]
    fn test_empty_fields_render_dashes() {
        let data = encode_cue_file(&[spec_at(0)]).unwrap();
        let text = dump_to_string(&data).unwrap();
        let row = text
            .lines()
            .find(|l| l.trim_start().starts_with("0 "))
            .unwrap();
        // group "all", spatial/flags/effect/params all "-"
        assert!(row.contains("all"));
        assert!(row.matches(" - ").count() >= 3);
    }
}
