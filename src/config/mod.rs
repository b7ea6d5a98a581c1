//! Mission List Configuration Module
//!
//! Supplies the ordered per-ship mission parameters plus output and asset
//! settings, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `--config <PATH>` passed on the command line
//! 2. `MISSION_LIST_CONFIG` environment variable (path to TOML file)
//! 3. `mission_list.toml` in the current working directory
//! 4. Bundled defaults (`config/mission_list.toml`, embedded at compile time)
//!
//! Unlike a long-running service, this tool runs as a build step: a config
//! file that was asked for but cannot be read or validated is an error, never
//! a silent fallback to the bundled data.
//!
//! ## Usage
//!
//! ```ignore
//! let (config, source) = MissionListConfig::load(args.config.as_deref())?;
//! info!(%source, ships = config.ships.len(), "Config loaded");
//! ```

mod mission_config;
pub mod defaults;
pub mod validation;

pub use mission_config::*;
