//! Core domain types shared by the config loader, derivation engine and renderer.
//!
//! Enum variants serialize with the game API's SCREAMING_SNAKE_CASE
//! identifiers, so config files can be written against the same names the
//! API dumps use.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Convert a (possibly fractional) seconds value from the game config to a `Duration`.
///
/// Negative, NaN or overflowing inputs collapse to zero. Use
/// `Duration::try_from_secs_f64` directly where a bad value must be an error.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

// ============================================================================
// Spaceships
// ============================================================================

/// Spaceship variant, in game progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ship {
    ChickenOne,
    ChickenNine,
    ChickenHeavy,
    Bcr,
    /// Displayed in game as "Quintillion Chicken".
    MilleniumChicken,
    /// Displayed in game as "Cornish-Hen Corvette".
    CorellihenCorvette,
    Galeggtica,
    /// Displayed in game as "Defihent".
    Chickfiant,
    Voyegger,
    Henerprise,
}

impl Ship {
    /// All variants in progression order.
    pub const ALL: [Ship; 10] = [
        Ship::ChickenOne,
        Ship::ChickenNine,
        Ship::ChickenHeavy,
        Ship::Bcr,
        Ship::MilleniumChicken,
        Ship::CorellihenCorvette,
        Ship::Galeggtica,
        Ship::Chickfiant,
        Ship::Voyegger,
        Ship::Henerprise,
    ];

    /// In-game display name.
    pub const fn name(self) -> &'static str {
        match self {
            Ship::ChickenOne => "Chicken One",
            Ship::ChickenNine => "Chicken Nine",
            Ship::ChickenHeavy => "Chicken Heavy",
            Ship::Bcr => "BCR",
            Ship::MilleniumChicken => "Quintillion Chicken",
            Ship::CorellihenCorvette => "Cornish-Hen Corvette",
            Ship::Galeggtica => "Galeggtica",
            Ship::Chickfiant => "Defihent",
            Ship::Voyegger => "Voyegger",
            Ship::Henerprise => "Henerprise",
        }
    }

    /// Icon filename under the `egginc/` asset directory.
    pub const fn icon_filename(self) -> &'static str {
        match self {
            Ship::ChickenOne => "afx_ship_chicken_1.png",
            Ship::ChickenNine => "afx_ship_chicken_9.png",
            Ship::ChickenHeavy => "afx_ship_chicken_heavy.png",
            Ship::Bcr => "afx_ship_bcr.png",
            Ship::MilleniumChicken => "afx_ship_millenium_chicken.png",
            Ship::CorellihenCorvette => "afx_ship_corellihen_corvette.png",
            Ship::Galeggtica => "afx_ship_galeggtica.png",
            Ship::Chickfiant => "afx_ship_defihent.png",
            Ship::Voyegger => "afx_ship_voyegger.png",
            Ship::Henerprise => "afx_ship_henerprise.png",
        }
    }
}

impl std::fmt::Display for Ship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Mission Durations
// ============================================================================

/// Mission duration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationType {
    Tutorial,
    Short,
    Long,
    Epic,
}

impl DurationType {
    pub const fn name(self) -> &'static str {
        match self {
            DurationType::Tutorial => "Tutorial",
            DurationType::Short => "Short",
            DurationType::Long => "Standard",
            DurationType::Epic => "Extended",
        }
    }

    /// CSS class used by the page stylesheet.
    pub const fn css_class(self) -> &'static str {
        match self {
            DurationType::Tutorial => "tutorial",
            DurationType::Short => "short",
            DurationType::Long => "long",
            DurationType::Epic => "epic",
        }
    }
}

impl std::fmt::Display for DurationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One (duration type, seconds) entry of a ship's mission parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionDuration {
    pub duration_type: DurationType,
    /// Mission length in seconds, as published by the game config.
    pub seconds: f64,
}

/// Mission parameters for a single ship, as supplied by the config loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipParameters {
    pub ship: Ship,
    /// Ordered duration entries; not every ship has all four types.
    #[serde(default)]
    pub durations: Vec<MissionDuration>,
}

impl ShipParameters {
    /// Seconds for the given duration type, if the ship has that mission.
    pub fn seconds_for(&self, duration_type: DurationType) -> Option<f64> {
        self.durations
            .iter()
            .find(|d| d.duration_type == duration_type)
            .map(|d| d.seconds)
    }
}

// ============================================================================
// Fuel
// ============================================================================

/// Egg types consumed as mission fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Egg {
    RocketFuel,
    Superfood,
    Fusion,
    Graviton,
    Antimatter,
    Dilithium,
    Tachyon,
    DarkMatter,
}

impl Egg {
    pub const fn name(self) -> &'static str {
        match self {
            Egg::RocketFuel => "Rocket Fuel",
            Egg::Superfood => "Superfood",
            Egg::Fusion => "Fusion",
            Egg::Graviton => "Graviton",
            Egg::Antimatter => "Antimatter",
            Egg::Dilithium => "Dilithium",
            Egg::Tachyon => "Tachyon",
            Egg::DarkMatter => "Dark Matter",
        }
    }

    /// Icon filename under the `egginc/` asset directory.
    pub const fn icon_filename(self) -> &'static str {
        match self {
            Egg::RocketFuel => "egg_rocketfuel.png",
            Egg::Superfood => "egg_superfood.png",
            Egg::Fusion => "egg_fusion.png",
            Egg::Graviton => "egg_graviton.png",
            Egg::Antimatter => "egg_antimatter.png",
            Egg::Dilithium => "egg_dilithium.png",
            Egg::Tachyon => "egg_tachyon.png",
            Egg::DarkMatter => "egg_darkmatter.png",
        }
    }
}

impl std::fmt::Display for Egg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single fuel requirement: `amount` eggs of type `egg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fuel {
    pub egg: Egg,
    pub amount: f64,
}
