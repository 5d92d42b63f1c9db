use crate::cue::error::{CueError, CueResult};
use serde_yaml::Value;

pub const FLAG_FIRE_FORGET: u8 = 0x01;
pub const FLAG_LOOP: u8 = 0x02;
pub const FLAG_BLEND_ADD: u8 = 0x04;

const FLAG_NAMES: [(&str, u8); 3] = [
    ("fire_forget", FLAG_FIRE_FORGET),
    ("loop", FLAG_LOOP),
    ("blend_add", FLAG_BLEND_ADD),
];

/// Parses the optional `flags` list of a cue into its bitmask.
pub fn parse_flags(value: Option<&Value>) -> CueResult<u8> {
    let Some(value) = value else {
        return Ok(0);
    };
    if value.is_null() {
        return Ok(0);
    }

    let list = value
        .as_sequence()
        .ok_or_else(|| CueError::UnknownFlag(format!("{value:?}")))?;

    let mut result = 0u8;
    for entry in list {
        let name = entry
            .as_str()
            .map(|s| s.trim().to_ascii_lowercase())
            .ok_or_else(|| CueError::UnknownFlag(format!("{entry:?}")))?;
        let bit = FLAG_NAMES
            .iter()
            .find(|(flag, _)| *flag == name)
            .map(|(_, bit)| *bit)
            .ok_or(CueError::UnknownFlag(name))?;
        result |= bit;
    }
    Ok(result)
}

/// Renders a flag bitmask as comma-joined names, `-` when empty.
pub fn format_flags(flags: u8) -> String {
    let active: Vec<&str> = FLAG_NAMES
        .iter()
        .filter(|(_, bit)| flags & bit != 0)
        .map(|(name, _)| *name)
        .collect();
    if active.is_empty() {
        "-".to_string()
    } else {
        active.join(",")
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn parse_list(names: &[&str]) -> CueResult<u8> {
        let list = Value::Sequence(
            names
                .iter()
                .map(|n| Value::String(n.to_string()))
                .collect(),
        );
        parse_flags(Some(&list))
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(parse_flags(None).unwrap(), 0);
        assert_eq!(parse_flags(Some(&Value::Null)).unwrap(), 0);
        assert_eq!(parse_list(&[]).unwrap(), 0);
    }

    #[test]
    fn test_bit_values() {
        assert_eq!(parse_list(&["fire_forget"]).unwrap(), 0x01);
        assert_eq!(parse_list(&["loop"]).unwrap(), 0x02);
        assert_eq!(parse_list(&["blend_add"]).unwrap(), 0x04);
        assert_eq!(parse_list(&["fire_forget", "blend_add"]).unwrap(), 0x05);
        assert_eq!(parse_list(&["loop", "LOOP"]).unwrap(), 0x02);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_list(&["Fire_Forget", " LOOP "]).unwrap(), 0x03);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(matches!(
            parse_list(&["loop", "bogus"]),
            Err(CueError::UnknownFlag(name)) if name == "bogus"
        ));
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(format_flags(0), "-");
        assert_eq!(format_flags(0x02), "loop");
        assert_eq!(format_flags(0x07), "fire_forget,loop,blend_add");
    }
}
