use crate::cue::constants::PARAMS_LEN;
use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{CueSpec, CueType};
use crate::cue::spatial::parse_spatial;
use crate::cue::time::parse_time;
use crate::cue::{flags, group};
use serde_yaml::Value;

/// Compiles one raw cue mapping into a fully validated [`CueSpec`].
///
/// Pure function of its input; the caller tags failures with the cue's
/// index in the source document.
pub fn compile_cue(cue: &Value) -> CueResult<CueSpec> {
    let type_name = cue
        .get("type")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let cue_type = CueType::from_name(&type_name)?;

    let channel = match cue.get("channel").and_then(Value::as_i64) {
        Some(n) => u8::try_from(n).map_err(|_| CueError::ChannelRange(n))?,
        None => 0,
    };

    let group = group::parse_group(cue.get("group"))?;
    let start_ms = match cue.get("time") {
        Some(v) => parse_time(v)?,
        None => 0,
    };
    let duration_ms = match cue.get("duration") {
        Some(v) => parse_time(v)?,
        None => 0,
    };

    let spatial = parse_spatial(cue.get("spatial"))?;
    let flags = flags::parse_flags(cue.get("flags"))?;

    let effect_file = cue
        .get("file")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let params = build_params(cue_type, cue);

    Ok(CueSpec {
        cue_type,
        channel,
        group,
        start_ms,
        duration_ms,
        spatial,
        flags,
        effect_file,
        params,
    })
}

/// Fill cues take their color triple; everything else takes an explicit
/// `params` list. Values are masked to a byte, extras silently dropped.
fn build_params(cue_type: CueType, cue: &Value) -> [u8; PARAMS_LEN] {
    let mut params = [0u8; PARAMS_LEN];

    if cue_type == CueType::Fill {
        if let Some(color) = cue.get("color").and_then(Value::as_sequence) {
            if color.len() >= 3 {
                for (slot, component) in params.iter_mut().zip(color.iter().take(3)) {
                    *slot = byte_value(component);
                }
            }
        }
    } else if let Some(list) = cue.get("params").and_then(Value::as_sequence) {
        for (slot, entry) in params.iter_mut().zip(list.iter().take(PARAMS_LEN)) {
            *slot = byte_value(entry);
        }
    }

    params
}

fn byte_value(value: &Value) -> u8 {
    let n = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
        .unwrap_or(0);
    (n & 0xFF) as u8
}
