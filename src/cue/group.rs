use crate::cue::constants::GROUP_VALUE_MAX;
use crate::cue::error::{CueError, CueResult};
use serde_yaml::Value;

/// Targeting mode nibbles for the high 4 bits of the group field.
const GROUP_PREFIXES: [(&str, u16); 6] = [
    ("cone:", 0x1000),
    ("group:", 0x2000),
    ("mask:", 0x3000),
    ("not_cone:", 0x4000),
    ("not_group:", 0x5000),
    ("not_mask:", 0x6000),
];

/// Parses a group targeting value into its 16-bit wire form.
///
/// Accepts:
///     absent / "all"      -> 0x0000
///     "cone:5"            -> 0x1000 | 5
///     "group:2"           -> 0x2000 | 2
///     "mask:0x00F"        -> 0x3000 | 0x00F
///     "not_cone:5"        -> 0x4000 | 5
///     "not_group:2"       -> 0x5000 | 2
///     "not_mask:0x00F"    -> 0x6000 | 0x00F
///     integer             -> raw pre-encoded value
pub fn parse_group(value: Option<&Value>) -> CueResult<u16> {
    let Some(value) = value else {
        return Ok(0);
    };
    if value.is_null() {
        return Ok(0);
    }

    if let Some(n) = value.as_i64() {
        return Ok((n & 0xFFFF) as u16);
    }

    let raw = value
        .as_str()
        .ok_or_else(|| CueError::GroupParse(format!("{value:?}")))?;
    let s = raw.trim().to_ascii_lowercase();

    if s == "all" {
        return Ok(0);
    }

    for (prefix, mode_bits) in GROUP_PREFIXES {
        if let Some(num_str) = s.strip_prefix(prefix) {
            let num = parse_int_literal(num_str)
                .ok_or_else(|| CueError::GroupParse(raw.to_string()))?;
            if num > GROUP_VALUE_MAX {
                return Err(CueError::GroupValueTooLarge(num));
            }
            return Ok(mode_bits | num as u16);
        }
    }

    Err(CueError::GroupParse(raw.to_string()))
}

/// Decimal or `0x`-prefixed hex integer literal.
fn parse_int_literal(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).ok()
    } else {
        s.parse::<u32>().ok()
    }
}

/// Renders a 16-bit group field back into targeting notation.
pub fn format_group(group: u16) -> String {
    let mode = group >> 12;
    let value = group & GROUP_VALUE_MAX as u16;
    match mode {
        0 => "all".to_string(),
        1 => format!("cone:{value}"),
        2 => format!("group:{value}"),
        3 => format!("mask:0x{value:03X}"),
        4 => format!("not_cone:{value}"),
        5 => format!("not_group:{value}"),
        6 => format!("not_mask:0x{value:03X}"),
        _ => format!("0x{group:04X}"),
    }
}
