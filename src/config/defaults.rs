//! System-wide default constants.
//!
//! Centralises the magic numbers used by the loader, derivation engine and
//! renderer.

use std::time::Duration;

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MISSION_LIST_CONFIG";

/// Config file looked up in the current working directory.
pub const LOCAL_CONFIG_FILE: &str = "mission_list.toml";

/// Bundled mission parameters used when no config file is found.
pub const BUNDLED_CONFIG: &str = include_str!("../../config/mission_list.toml");

// ============================================================================
// Output
// ============================================================================

/// Where the rendered page lands, relative to the working directory.
pub const OUTPUT_PATH: &str = "src/index.html";

/// Asset CDN serving the game's icon set.
pub const ASSET_BASE_URL: &str = "https://eggincassets.tcl.sh";

/// Icon size segment meaning "original resolution".
pub const ORIGINAL_SIZE_SEGMENT: &str = "orig";

/// Ship icon size on the page (px).
pub const SHIP_ICON_SIZE: i32 = 64;

/// Egg icon size next to fuel amounts (px).
pub const EGG_ICON_SIZE: i32 = 32;

// ============================================================================
// Derivation
// ============================================================================

/// Concurrent mission slots for a standard player.
pub const STD_CONCURRENCY: u32 = 1;

/// Concurrent mission slots with the pro permit.
pub const PRO_CONCURRENCY: u32 = 3;

/// Approximate time to unlock the Chicken Nine: three 20-minute runs.
///
/// Ignores the two tutorial missions that precede the first short ones.
pub const CHICKEN_ONE_TIME_TO_ADVANCE: Duration = Duration::from_secs(3 * 20 * 60);
