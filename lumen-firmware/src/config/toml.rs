//! Simple TOML parser for link configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! the link configuration. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys

use heapless::String as HString;

use lumen_core::config::{LinkConfig, MAX_NAME_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is not a key = value pair
    InvalidLine,
    /// Key is not known in its section
    UnknownKey,
    /// Invalid value type or range
    InvalidValue,
    /// String longer than its field
    TooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timing,
    Sensor,
    Led,
    Ui,
    Bluetooth,
}

/// Parse TOML configuration into LinkConfig
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<LinkConfig, ParseError> {
    let mut config = LinkConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse section header content (without brackets)
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "timing" => Ok(Section::Timing),
        "sensor" => Ok(Section::Sensor),
        "led" => Ok(Section::Led),
        "ui" => Ok(Section::Ui),
        "bluetooth" => Ok(Section::Bluetooth),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a key-value pair to the config
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut LinkConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Timing => match key {
            "dot_ms" => config.timing.dot_ms = parse_int(value)?,
            "dash_ms" => config.timing.dash_ms = parse_int(value)?,
            "letter_pause_ms" => config.timing.letter_pause_ms = parse_int(value)?,
            "word_pause_ms" => config.timing.word_pause_ms = parse_int(value)?,
            "timeout_ms" => config.timing.timeout_ms = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Sensor => match key {
            "cutoff" => config.sensor.cutoff = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Led => match key {
            "active_low" => config.led.active_low = parse_bool(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Ui => match key {
            "scroll_interval_ms" => config.ui.scroll_interval_ms = parse_int(value)?,
            "hold_time_ms" => config.ui.hold_time_ms = parse_int(value)?,
            "preview_len" => config.ui.preview_len = parse_int(value)?,
            "summary_hold_ms" => config.ui.summary_hold_ms = parse_int(value)?,
            "ready_refresh_ms" => config.ui.ready_refresh_ms = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Bluetooth => match key {
            "name" => {
                let name = parse_string(value)?;
                config.bluetooth.name =
                    HString::<MAX_NAME_LEN>::try_from(name).map_err(|_| ParseError::TooLong)?;
            }
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Root => return Err(ParseError::UnknownKey),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = parse_config(include_str!("../../link.toml")).unwrap();
        assert_eq!(config, LinkConfig::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_overrides_and_defaults() {
        let config = parse_config(
            r#"
[timing]
dot_ms = 100   # faster link

[bluetooth]
name = "Desk #2"
"#,
        )
        .unwrap();
        assert_eq!(config.timing.dot_ms, 100);
        assert_eq!(config.timing.dash_ms, 450);
        assert_eq!(config.bluetooth.name.as_str(), "Desk #2");
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("ui"), Ok(Section::Ui));
        assert_eq!(parse_section_header(" led "), Ok(Section::Led));
        assert_eq!(parse_section_header("stepper"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse_config("[led]\nactive_low = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[sensor]\ncutoff = -1"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[bluetooth]\nname = LiFi"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[bluetooth]\nname = \"A name far too long\""),
            Err(ParseError::TooLong)
        );
    }

    #[test]
    fn test_rejects_unknown_keys_and_lines() {
        assert_eq!(parse_config("[ui]\nrpm_step = 5"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("dot_ms = 5"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[timing]\ndot_ms"), Err(ParseError::InvalidLine));
    }
}
