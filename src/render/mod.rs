//! Page rendering: formatting helpers, the HTML page builder and output writers.
//!
//! Helpers here are pure and deterministic; the same ship list always
//! renders to the same bytes.

pub mod page;

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::defaults::ORIGINAL_SIZE_SEGMENT;
use crate::derive::ShipRecord;
use crate::types::{Egg, Ship};

pub use crate::catalog::mission_fuels;
pub use crate::types::seconds_to_duration;
pub use page::render_index;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build page: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("mkdir -p {} failed: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {} for writing: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize ship records: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Icon Paths
// ============================================================================

/// Full URL of an icon on the asset CDN.
///
/// A `size` of 0 or less selects the original-resolution directory.
pub fn icon_url(base_url: &str, relpath: &str, size: i32) -> String {
    let base = base_url.trim_end_matches('/');
    if size <= 0 {
        format!("{base}/{ORIGINAL_SIZE_SEGMENT}/{relpath}")
    } else {
        format!("{base}/{size}/{relpath}")
    }
}

pub fn ship_icon_path(ship: Ship) -> String {
    format!("egginc/{}", ship.icon_filename())
}

pub fn egg_icon_path(egg: Egg) -> String {
    format!("egginc/{}", egg.icon_filename())
}

// ============================================================================
// Number / Duration Formatting
// ============================================================================

/// Game-style magnitude suffixes, smallest first.
const UNITS: [(f64, &str); 8] = [
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
    (1e15, "q"),
    (1e18, "Q"),
    (1e21, "s"),
    (1e24, "S"),
];

/// Trim trailing zeros, and possibly the decimal point.
fn trim_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Compact number with a magnitude suffix, e.g. `2e6` → `2M`, `1.5e12` → `1.5T`.
///
/// At most three decimals are kept and trailing zeros are dropped.
pub fn numfmt_whole(x: f64) -> String {
    let (scaled, suffix) = UNITS
        .iter()
        .rev()
        .find(|(magnitude, _)| x.abs() >= *magnitude)
        .map_or((x, ""), |(magnitude, suffix)| (x / magnitude, *suffix));
    let digits = format!("{scaled:.3}");
    format!("{}{suffix}", trim_trailing_zeros(&digits))
}

/// Human-readable duration in whole units, e.g. `1d2h3m4s`.
///
/// Sub-second remainders are truncated and zero components are omitted.
pub fn format_duration_whole(d: Duration) -> String {
    let total = d.as_secs();
    if total == 0 {
        return "0s".to_string();
    }
    let parts = [
        (total / 86_400, 'd'),
        (total % 86_400 / 3_600, 'h'),
        (total % 3_600 / 60, 'm'),
        (total % 60, 's'),
    ];
    parts
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{n}{unit}"))
        .collect()
}

// ============================================================================
// Output
// ============================================================================

/// Create `path`'s parent directory if needed, then write `contents` to it.
fn write_output(path: &Path, contents: &[u8]) -> Result<(), RenderError> {
    use std::io::Write;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let mut file = std::fs::File::create(path).map_err(|source| RenderError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Write the rendered page, creating its parent directory first.
pub fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    write_output(path, html.as_bytes())?;
    info!(path = %path.display(), bytes = html.len(), "Wrote mission list page");
    Ok(())
}

/// Write the derived ship records as pretty-printed JSON.
pub fn write_json(path: &Path, ships: &[ShipRecord]) -> Result<(), RenderError> {
    let json = serde_json::to_string_pretty(ships)?;
    write_output(path, json.as_bytes())?;
    info!(path = %path.display(), ships = ships.len(), "Wrote ship records JSON");
    Ok(())
}
