use crate::cue::error::{CueError, CueResult};
use serde_yaml::Value;

/// Spatial behavior selector, third-to-last byte of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpatialMode {
    #[default]
    None = 0,
    RadialConfig = 1,
    RadialAbsolute = 2,
    RadialRelative = 3,
    DirConfig = 4,
    DirAbsolute = 5,
    DirRelative = 6,
}

impl SpatialMode {
    pub fn from_name(name: &str) -> CueResult<Self> {
        match name {
            "none" => Ok(SpatialMode::None),
            "radial_config" => Ok(SpatialMode::RadialConfig),
            "radial_absolute" => Ok(SpatialMode::RadialAbsolute),
            "radial_relative" => Ok(SpatialMode::RadialRelative),
            "dir_config" => Ok(SpatialMode::DirConfig),
            "dir_absolute" => Ok(SpatialMode::DirAbsolute),
            "dir_relative" => Ok(SpatialMode::DirRelative),
            _ => Err(CueError::UnknownSpatialMode(name.to_string())),
        }
    }

    /// Decode-side lookup; dump output renders unknown codes as `?N`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SpatialMode::None),
            1 => Some(SpatialMode::RadialConfig),
            2 => Some(SpatialMode::RadialAbsolute),
            3 => Some(SpatialMode::RadialRelative),
            4 => Some(SpatialMode::DirConfig),
            5 => Some(SpatialMode::DirAbsolute),
            6 => Some(SpatialMode::DirRelative),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpatialMode::None => "none",
            SpatialMode::RadialConfig => "radial_config",
            SpatialMode::RadialAbsolute => "radial_absolute",
            SpatialMode::RadialRelative => "radial_relative",
            SpatialMode::DirConfig => "dir_config",
            SpatialMode::DirAbsolute => "dir_absolute",
            SpatialMode::DirRelative => "dir_relative",
        }
    }
}

/// Spatial parameter block of one cue.
///
/// `delay` is ms per meter; `param1`/`param2` carry lat/lon or local
/// north/east meters depending on mode; `angle` is a compass bearing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spatial {
    pub mode: SpatialMode,
    pub delay: f32,
    pub param1: f32,
    pub param2: f32,
    pub angle: u16,
}

/// Parses the optional `spatial` mapping of a cue.
pub fn parse_spatial(value: Option<&Value>) -> CueResult<Spatial> {
    let Some(value) = value else {
        return Ok(Spatial::default());
    };
    if value.is_null() {
        return Ok(Spatial::default());
    }

    let mode = match value.get("mode") {
        Some(mode) => {
            let name = mode
                .as_str()
                .map(|s| s.trim().to_ascii_lowercase())
                .unwrap_or_else(|| format!("{mode:?}"));
            SpatialMode::from_name(&name)?
        }
        None => SpatialMode::None,
    };

    Ok(Spatial {
        mode,
        delay: float_field(value, "delay"),
        param1: float_field(value, "param1"),
        param2: float_field(value, "param2"),
        angle: value
            .get("angle")
            .and_then(Value::as_f64)
            .map(|f| f.trunc() as u16)
            .unwrap_or(0),
    })
}

fn float_field(value: &Value, key: &str) -> f32 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0) as f32
}

/// Renders the spatial block for the dump table, `-` when inactive.
pub fn format_spatial(mode: u8, delay: f32, param1: f32, param2: f32, angle: u16) -> String {
    if mode == 0 {
        return "-".to_string();
    }

    let name = match SpatialMode::from_code(mode) {
        Some(m) => m.name().to_string(),
        None => format!("?{mode}"),
    };

    let mut parts = vec![name];
    if delay != 0.0 {
        parts.push(format!("d={delay:.1}"));
    }
    if param1 != 0.0 || param2 != 0.0 {
        parts.push(format!("p=({param1:.2},{param2:.2})"));
    }
    if angle != 0 {
        parts.push(format!("a={angle}"));
    }
    parts.join(" ")
}
