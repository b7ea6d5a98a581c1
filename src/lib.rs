//! Mission List: static mission page generator
//!
//! Builds the companion-site page listing every spaceship's missions,
//! fuel costs and time-to-advance figures.
//!
//! ## Architecture
//!
//! - **Config**: ordered per-ship mission durations, output and asset settings (TOML)
//! - **Catalog**: fixed game tables (sensor tiers, launches-to-advance, fuel costs)
//! - **Derive**: launches, time-to-advance and cumulative totals per ship
//! - **Render**: formatting helpers and the HTML page builder
//!
//! Data flows one way: config → derive → render → file.

pub mod catalog;
pub mod config;
pub mod derive;
pub mod render;
pub mod types;

// Re-export configuration
pub use config::{ConfigError, ConfigSource, MissionListConfig};

// Re-export commonly used types
pub use types::{DurationType, Egg, Fuel, MissionDuration, Ship, ShipParameters};

// Re-export pipeline stages
pub use derive::{derive_ships, DeriveError, ShipRecord};
pub use render::{render_index, write_page, RenderError};
