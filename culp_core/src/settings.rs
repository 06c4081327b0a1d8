//! # Settings
//!
//! Calculator settings stored as human-readable JSON. Every field has a
//! default, so a settings file only needs the keys it changes:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "display": { "fraction_denominator": 8 },
//!   "default_foot_unit": "YD"
//! }
//! ```
//!
//! Saves are atomic: write to `.tmp`, sync, rename.
//!
//! ## Example
//!
//! ```rust,no_run
//! use culp_core::settings::{load_settings, save_settings, Settings};
//! use std::path::Path;
//!
//! let path = Path::new("culp.json");
//! save_settings(&Settings::default(), path)?;
//! let settings = load_settings(path)?;
//! assert_eq!(settings.display.fraction_denominator, 16);
//! # Ok::<(), culp_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::display::DisplayFormat;
use crate::errors::{CalcError, CalcResult};
use crate::units::{FootUnit, InchUnit};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Largest accepted rounding denominator
pub const MAX_DENOMINATOR: u32 = 64;

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Readout formatting
    pub display: DisplayFormat,

    /// Unit of the blue field on start and after all-clear
    pub default_foot_unit: FootUnit,

    /// Unit of the green field on start and after all-clear
    pub default_inch_unit: InchUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: SCHEMA_VERSION.to_string(),
            display: DisplayFormat::default(),
            default_foot_unit: FootUnit::Ft,
            default_inch_unit: InchUnit::In,
        }
    }
}

impl Settings {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> CalcResult<()> {
        let denom = self.display.fraction_denominator;
        if !(2..=MAX_DENOMINATOR).contains(&denom) || !denom.is_power_of_two() {
            return Err(CalcError::invalid_input(
                "display.fraction_denominator",
                denom.to_string(),
                format!("Must be a power of two between 2 and {}", MAX_DENOMINATOR),
            ));
        }
        if self.display.max_number_len == 0 {
            return Err(CalcError::invalid_input(
                "display.max_number_len",
                "0",
                "Must be at least 1",
            ));
        }
        if !(1..=17).contains(&self.display.fallback_precision) {
            return Err(CalcError::invalid_input(
                "display.fallback_precision",
                self.display.fallback_precision.to_string(),
                "Must be between 1 and 17 significant digits",
            ));
        }
        if self.display.error_token.trim().is_empty() {
            return Err(CalcError::invalid_input(
                "display.error_token",
                self.display.error_token.clone(),
                "Must not be blank",
            ));
        }
        if is_finite_number(&self.display.error_token) {
            return Err(CalcError::invalid_input(
                "display.error_token",
                self.display.error_token.clone(),
                "Must not read as a number",
            ));
        }
        Ok(())
    }
}

/// An error token that parses as a number would be reseeded as a real value.
fn is_finite_number(text: &str) -> bool {
    text.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Save settings with atomic write semantics.
pub fn save_settings(settings: &Settings, path: &Path) -> CalcResult<()> {
    settings.validate()?;
    let json = serde_json::to_string_pretty(settings)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load and validate settings from a file.
///
/// # Returns
///
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidInput)` - A value is out of range
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_settings(path: &Path) -> CalcResult<Settings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: Settings =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&settings.version)?;
    settings.validate()?;

    info!(path = %path.display(), version = %settings.version, "settings loaded");
    Ok(settings)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
