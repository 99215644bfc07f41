//! Build script for lumen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates link.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate link.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=link.toml");

    let config_path = Path::new("link.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read link.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in link.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_timing(&config, &mut errors);
    validate_sensor(&config, &mut errors);
    validate_ui(&config, &mut errors);
    validate_bluetooth(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid link configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=link.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a non-negative integer key, recording an error for anything else
fn int(section: &toml::Value, name: &str, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    match section.get(key) {
        None => None,
        Some(toml::Value::Integer(v)) if *v >= 0 => Some(*v),
        Some(_) => {
            errors.push(format!("[{}] {} must be a non-negative integer", name, key));
            None
        }
    }
}

/// Validate that timing values classify back to what is sent
fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(timing) = config.get("timing") else {
        return;
    };
    // Missing keys fall back to the standard timing
    let dot = int(timing, "timing", "dot_ms", errors).unwrap_or(150);
    let dash = int(timing, "timing", "dash_ms", errors).unwrap_or(450);
    let letter = int(timing, "timing", "letter_pause_ms", errors).unwrap_or(450);
    let word = int(timing, "timing", "word_pause_ms", errors).unwrap_or(1050);
    let timeout = int(timing, "timing", "timeout_ms", errors).unwrap_or(2500);

    if dot == 0 {
        errors.push("[timing] dot_ms must be greater than 0".into());
    }
    if dash <= dot {
        errors.push("[timing] dash_ms must be longer than dot_ms".into());
    }
    if letter <= dot {
        errors.push("[timing] letter_pause_ms must be longer than dot_ms".into());
    }
    if word <= letter {
        errors.push("[timing] word_pause_ms must be longer than letter_pause_ms".into());
    }
    if timeout <= letter + word {
        errors.push("[timing] timeout_ms must exceed letter_pause_ms + word_pause_ms".into());
    }
}

fn validate_sensor(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(sensor) = config.get("sensor") else {
        return;
    };
    if let Some(cutoff) = int(sensor, "sensor", "cutoff", errors) {
        if cutoff > 4095 {
            errors.push("[sensor] cutoff must be 0-4095".into());
        }
    }
}

fn validate_ui(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(ui) = config.get("ui") else {
        return;
    };
    if int(ui, "ui", "scroll_interval_ms", errors) == Some(0) {
        errors.push("[ui] scroll_interval_ms must be greater than 0".into());
    }
    if int(ui, "ui", "hold_time_ms", errors) == Some(0) {
        errors.push("[ui] hold_time_ms must be greater than 0".into());
    }
    if let Some(preview) = int(ui, "ui", "preview_len", errors) {
        if preview > 10 {
            errors.push("[ui] preview_len must be 0-10".into());
        }
    }
    int(ui, "ui", "summary_hold_ms", errors);
    int(ui, "ui", "ready_refresh_ms", errors);
}

fn validate_bluetooth(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(bt) = config.get("bluetooth") else {
        return;
    };
    match bt.get("name") {
        None => {}
        Some(toml::Value::String(name)) if !name.is_empty() && name.len() <= 16 => {}
        Some(_) => errors.push("[bluetooth] name must be a string of 1-16 characters".into()),
    }
}
