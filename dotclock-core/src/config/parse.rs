//! Minimal TOML reader for `clock.toml`
//!
//! Handles only the subset the clock configuration needs. It does NOT
//! support general TOML.
//!
//! Supported features:
//! - `[section]` headers (`tick`, `buttons`, `display`, `sensor`)
//! - `key = value` pairs with non-negative integer values
//! - `_` digit separators (`10_000`)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Missing keys keep their defaults. The result is validated before it is
//! returned.

use heapless::String;

use super::types::{ClockConfig, ConfigError};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (1-based line number)
    InvalidSection(usize),
    /// Key not known in its section
    UnknownKey(usize),
    /// Value is not an integer or does not fit the field
    InvalidValue(usize),
    /// Line is neither a header nor `key = value`
    Syntax(usize),
    /// Values parsed but do not work together
    Invalid(ConfigError),
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Tick,
    Buttons,
    Display,
    Sensor,
}

/// Parse TOML text into a validated [`ClockConfig`]
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ParseError::InvalidSection(line_no));
            }
            section = parse_section_header(&line[1..line.len() - 1])
                .ok_or(ParseError::InvalidSection(line_no))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::Syntax(line_no))?;
        apply_value(&mut config, section, key, value, line_no)?;
    }

    config.validate().map_err(ParseError::Invalid)?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_section_header(header: &str) -> Option<Section> {
    match header.trim() {
        "tick" => Some(Section::Tick),
        "buttons" => Some(Section::Buttons),
        "display" => Some(Section::Display),
        "sensor" => Some(Section::Sensor),
        _ => None,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Longest integer literal accepted, separators included
const MAX_INT_LEN: usize = 24;

/// Parse a non-negative decimal integer, allowing single `_` between digits
fn parse_int<T: core::str::FromStr>(value: &str, line_no: usize) -> Result<T, ParseError> {
    let invalid = ParseError::InvalidValue(line_no);

    let bytes = value.as_bytes();
    let separators_ok = !value.starts_with('_')
        && !value.ends_with('_')
        && !bytes.windows(2).any(|pair| pair == b"__");
    if !separators_ok || !bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') {
        return Err(invalid);
    }

    let mut digits: String<MAX_INT_LEN> = String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| invalid)?;
    }
    digits.parse().map_err(|_| invalid)
}

fn apply_value(
    config: &mut ClockConfig,
    section: Section,
    key: &str,
    value: &str,
    line_no: usize,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Tick, "sub_ticks_per_second") => {
            config.tick.sub_ticks_per_second = parse_int(value, line_no)?
        }
        (Section::Tick, "blink_phase_bit") => {
            config.tick.blink_phase_bit = parse_int(value, line_no)?
        }

        (Section::Buttons, "debounce_samples") => {
            config.buttons.debounce_samples = parse_int(value, line_no)?
        }
        (Section::Buttons, "hold_max") => config.buttons.hold_max = parse_int(value, line_no)?,
        (Section::Buttons, "long_press_threshold") => {
            config.buttons.long_press_threshold = parse_int(value, line_no)?
        }
        (Section::Buttons, "repeat_threshold") => {
            config.buttons.repeat_threshold = parse_int(value, line_no)?
        }
        (Section::Buttons, "repeat_reload") => {
            config.buttons.repeat_reload = parse_int(value, line_no)?
        }

        (Section::Display, "brightness") => {
            config.display.brightness = parse_int(value, line_no)?
        }
        (Section::Display, "ready_spin_limit") => {
            config.display.ready_spin_limit = parse_int(value, line_no)?
        }

        (Section::Sensor, "settle_seconds") => {
            config.sensor.settle_seconds = parse_int(value, line_no)?
        }
        (Section::Sensor, "half_period_ns") => {
            config.sensor.half_period_ns = parse_int(value, line_no)?
        }

        _ => return Err(ParseError::UnknownKey(line_no)),
    }
    Ok(())
}
