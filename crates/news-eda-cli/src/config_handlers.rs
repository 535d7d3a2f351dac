//! Handler functions for config CLI commands.
//!
//! Implements the `config` subcommands (`path`, `show`, `get`, `init`) over
//! [`EdaConfig`], plus the TOML dotted-key helpers they rely on.

use std::io::Write;
use std::path::PathBuf;

use news_eda::config::{EdaConfig, PROJECT_NAME};
use news_eda::{Error, Result};

use crate::cli::ConfigAction;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand, writing its output to `out`.
pub fn handle_config_command<W: Write>(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => cmd_config_show(config_path, out),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key, out),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let path = EdaConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show<W: Write>(config_path: Option<&str>, out: &mut W) -> Result<()> {
    let config = EdaConfig::load(config_path)?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Get a configuration value by dotted key.
pub fn cmd_config_get<W: Write>(config_path: Option<&str>, key: &str, out: &mut W) -> Result<()> {
    let config = EdaConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_toml_value(val))?;
            Ok(())
        }
        None => Err(Error::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init<W: Write>(file: Option<&str>, force: bool, out: &mut W) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => EdaConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = EdaConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::info!(path = %path.display(), "Wrote default config");
    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(items) => {
            let items: Vec<String> = items.iter().map(format_toml_value).collect();
            format!("[{}]", items.join(", "))
        }
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
