use crate::cue::error::{CueError, CueResult};
use serde_yaml::Value;

/// Parses a human-readable time value into integer milliseconds.
///
/// Accepts:
///     "500ms"         ->  500
///     "1.5s"          -> 1500
///     "1s500ms"       -> 1500
///     "1m30s"         -> 90000
///     "2m"            -> 120000
///     1500   (int)    -> 1500
///     1.5    (float)  -> 1  (truncated, bare numbers are ms)
pub fn parse_time(value: &Value) -> CueResult<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).map_err(|_| CueError::TimeParse(format!("{n}")));
    }
    if let Some(f) = value.as_f64() {
        if f < 0.0 {
            return Err(CueError::TimeParse(format!("{f}")));
        }
        return Ok(f.trunc() as u32);
    }

    let raw = value
        .as_str()
        .ok_or_else(|| CueError::TimeParse(format!("{value:?}")))?;
    let s = raw.trim().to_ascii_lowercase();

    if let Some(ms) = parse_composite(&s) {
        return Ok(ms);
    }

    // Bare integer string, already milliseconds
    if let Ok(ms) = s.parse::<u32>() {
        return Ok(ms);
    }

    Err(CueError::TimeParse(raw.to_string()))
}

/// Ordered optional-segment matcher for `<N>m <N[.N]>s <N>ms`.
///
/// Each segment is optional but at least one must match and the whole
/// input must be consumed; segments may be separated by whitespace.
fn parse_composite(s: &str) -> Option<u32> {
    let b = s.as_bytes();
    let mut pos = 0;
    let mut matched = false;
    let mut total = 0.0f64;

    // minutes: digits then 'm' not followed by 's'
    if let Some((digits, after)) = scan_digits(b, pos) {
        let unit = skip_spaces(b, after);
        if unit < b.len() && b[unit] == b'm' && b.get(unit + 1) != Some(&b's') {
            total += digits.parse::<f64>().ok()? * 60_000.0;
            pos = unit + 1;
            matched = true;
        }
    }

    // seconds: digits with optional fraction, then 's'
    let start = skip_spaces(b, pos);
    if let Some((digits, after)) = scan_number(b, start) {
        let unit = skip_spaces(b, after);
        if unit < b.len() && b[unit] == b's' {
            total += digits.parse::<f64>().ok()? * 1_000.0;
            pos = unit + 1;
            matched = true;
        }
    }

    // milliseconds: digits then 'ms'
    let start = skip_spaces(b, pos);
    if let Some((digits, after)) = scan_digits(b, start) {
        let unit = skip_spaces(b, after);
        if unit + 1 < b.len() && b[unit] == b'm' && b[unit + 1] == b's' {
            total += digits.parse::<f64>().ok()?;
            pos = unit + 2;
            matched = true;
        }
    }

    if matched && pos == b.len() {
        Some(total.trunc() as u32)
    } else {
        None
    }
}

fn skip_spaces(b: &[u8], mut pos: usize) -> usize {
    while pos < b.len() && b[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn scan_digits(b: &[u8], start: usize) -> Option<(&str, usize)> {
    let mut end = start;
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }
    Some((std::str::from_utf8(&b[start..end]).ok()?, end))
}

fn scan_number(b: &[u8], start: usize) -> Option<(&str, usize)> {
    let (_, mut end) = scan_digits(b, start)?;
    if end < b.len() && b[end] == b'.' {
        let (_, frac_end) = scan_digits(b, end + 1)?;
        end = frac_end;
    }
    Some((std::str::from_utf8(&b[start..end]).ok()?, end))
}

/// Formats milliseconds back into the compact notation used by `dump`.
pub fn format_time(ms: u32) -> String {
    if ms == 0 {
        return "0s".to_string();
    }

    let mut rest = ms;
    let mut out = String::new();
    if rest >= 60_000 {
        out.push_str(&format!("{}m", rest / 60_000));
        rest %= 60_000;
    }
    if rest >= 1_000 {
        let secs = rest / 1_000;
        let rem = rest % 1_000;
        if rem != 0 {
            out.push_str(&format!("{secs}s{rem}ms"));
        } else {
            out.push_str(&format!("{secs}s"));
        }
    } else if rest > 0 {
        out.push_str(&format!("{rest}ms"));
    }
    out
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn parse_str(s: &str) -> CueResult<u32> {
        parse_time(&Value::String(s.to_string()))
    }

    #[test]
    fn test_composite_segments() {
        assert_eq!(parse_str("500ms").unwrap(), 500);
        assert_eq!(parse_str("1.5s").unwrap(), 1500);
        assert_eq!(parse_str("1s500ms").unwrap(), 1500);
        assert_eq!(parse_str("1m30s").unwrap(), 90000);
        assert_eq!(parse_str("2m").unwrap(), 120000);
        assert_eq!(parse_str("1m30s250ms").unwrap(), 90250);
    }

    #[test]
    fn test_whitespace_and_case() {
        assert_eq!(parse_str(" 1m 30s ").unwrap(), 90000);
        assert_eq!(parse_str("500 ms").unwrap(), 500);
        assert_eq!(parse_str("1M30S").unwrap(), 90000);
    }

    #[test]
    fn test_bare_numbers() {
        assert_eq!(parse_str("1500").unwrap(), 1500);
        assert_eq!(parse_time(&Value::from(1500u64)).unwrap(), 1500);
        // Bare fractional numbers are truncated, not scaled
        assert_eq!(parse_time(&Value::from(1.5f64)).unwrap(), 1);
    }

    #[test]
    fn test_fractional_seconds_truncate() {
        assert_eq!(parse_str("0.0015s").unwrap(), 1);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_str("abc").is_err());
        assert!(parse_str("30s1m").is_err()); // out of order
        assert!(parse_str("1h").is_err());
        assert!(parse_str("").is_err());
        assert!(parse_time(&Value::from(-1i64)).is_err());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0s");
        assert_eq!(format_time(500), "500ms");
        assert_eq!(format_time(1500), "1s500ms");
        assert_eq!(format_time(90000), "1m30s");
        assert_eq!(format_time(120000), "2m");
        assert_eq!(format_time(90250), "1m30s250ms");
    }

    #[test]
    fn test_round_trip_through_notation() {
        for ms in [0u32, 1, 999, 1000, 59999, 60000, 90250, 3_600_000] {
            assert_eq!(parse_str(&format_time(ms)).unwrap(), ms);
        }
    }
}
