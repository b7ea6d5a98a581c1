//! Fixed game-balance tables: sensor tiers, launches-to-advance and mission fuel costs.
//!
//! These values are transcribed from the game and are not derivable from the
//! mission config. Edit them only when the game itself changes.

use crate::types::{DurationType, Egg, Fuel, Ship};
use DurationType::{Epic, Long, Short, Tutorial};
use Egg::{Antimatter, DarkMatter, Dilithium, Fusion, Graviton, RocketFuel, Superfood, Tachyon};

// ============================================================================
// Per-Ship Lookups
// ============================================================================

/// Sensor tier label for a ship.
pub fn sensors(ship: Ship) -> &'static str {
    match ship {
        Ship::ChickenOne | Ship::ChickenNine => "Basic",
        Ship::ChickenHeavy | Ship::Bcr => "Intermediate",
        Ship::MilleniumChicken | Ship::CorellihenCorvette | Ship::Galeggtica => "Advanced",
        Ship::Chickfiant | Ship::Voyegger => "Cutting Edge",
        Ship::Henerprise => "Next Generation",
    }
}

/// Number of launches required before the next ship unlocks.
///
/// The Henerprise has no successor, so it maps to 0.
pub fn launches_to_advance(ship: Ship) -> u32 {
    match ship {
        Ship::ChickenOne => 4,
        Ship::ChickenNine => 6,
        Ship::ChickenHeavy => 12,
        Ship::Bcr => 15,
        Ship::MilleniumChicken => 18,
        Ship::CorellihenCorvette => 21,
        Ship::Galeggtica => 24,
        Ship::Chickfiant => 27,
        Ship::Voyegger => 30,
        Ship::Henerprise => 0,
    }
}

// ============================================================================
// Fuel Table
// ============================================================================

const fn fuel(egg: Egg, amount: f64) -> Fuel {
    Fuel { egg, amount }
}

type ShipFuels = (Ship, &'static [(DurationType, &'static [Fuel])]);

/// Hand-typed from the in-game launch screens. Order within each list is
/// the order the game displays them.
static FUELS: &[ShipFuels] = &[
    (
        Ship::ChickenOne,
        &[
            (Tutorial, &[fuel(RocketFuel, 1e5)]),
            (Short, &[fuel(RocketFuel, 2e6)]),
            (Long, &[fuel(RocketFuel, 3e6)]),
            (Epic, &[fuel(RocketFuel, 10e6)]),
        ],
    ),
    (
        Ship::ChickenNine,
        &[
            (Short, &[fuel(RocketFuel, 10e6)]),
            (Long, &[fuel(RocketFuel, 15e6)]),
            (Epic, &[fuel(RocketFuel, 25e6)]),
        ],
    ),
    (
        Ship::ChickenHeavy,
        &[
            (Short, &[fuel(RocketFuel, 100e6)]),
            (Long, &[fuel(RocketFuel, 50e6), fuel(Fusion, 5e6)]),
            (Epic, &[fuel(RocketFuel, 75e6), fuel(Fusion, 25e6)]),
        ],
    ),
    (
        Ship::Bcr,
        &[
            (Short, &[fuel(RocketFuel, 250e6), fuel(Fusion, 50e6)]),
            (Long, &[fuel(RocketFuel, 400e6), fuel(Fusion, 75e6)]),
            (
                Epic,
                &[fuel(Superfood, 5e6), fuel(RocketFuel, 300e6), fuel(Fusion, 100e6)],
            ),
        ],
    ),
    (
        Ship::MilleniumChicken,
        &[
            (Short, &[fuel(Fusion, 5e9), fuel(Graviton, 1e9)]),
            (Long, &[fuel(Fusion, 7e9), fuel(Graviton, 5e9)]),
            (
                Epic,
                &[fuel(Superfood, 10e6), fuel(Fusion, 10e9), fuel(Graviton, 15e9)],
            ),
        ],
    ),
    (
        Ship::CorellihenCorvette,
        &[
            (Short, &[fuel(Fusion, 15e9), fuel(Graviton, 2e9)]),
            (Long, &[fuel(Fusion, 20e9), fuel(Graviton, 3e9)]),
            (
                Epic,
                &[fuel(Superfood, 500e6), fuel(Fusion, 25e9), fuel(Graviton, 5e9)],
            ),
        ],
    ),
    (
        Ship::Galeggtica,
        &[
            (Short, &[fuel(Fusion, 50e9), fuel(Graviton, 10e9)]),
            (Long, &[fuel(Fusion, 75e9), fuel(Graviton, 25e9)]),
            (
                Epic,
                &[fuel(Fusion, 100e9), fuel(Graviton, 50e9), fuel(Antimatter, 1e9)],
            ),
        ],
    ),
    (
        Ship::Chickfiant,
        &[
            (Short, &[fuel(Dilithium, 200e9), fuel(Antimatter, 50e9)]),
            (Long, &[fuel(Dilithium, 250e9), fuel(Antimatter, 150e9)]),
            (
                Epic,
                &[fuel(Tachyon, 25e9), fuel(Dilithium, 250e9), fuel(Antimatter, 250e9)],
            ),
        ],
    ),
    (
        Ship::Voyegger,
        &[
            (Short, &[fuel(Dilithium, 1e12), fuel(Antimatter, 1e12)]),
            (Long, &[fuel(Dilithium, 1.5e12), fuel(Antimatter, 1.5e12)]),
            (
                Epic,
                &[fuel(Tachyon, 100e9), fuel(Dilithium, 2e12), fuel(Antimatter, 2e12)],
            ),
        ],
    ),
    (
        Ship::Henerprise,
        &[
            (Short, &[fuel(Dilithium, 2e12), fuel(Antimatter, 2e12)]),
            (
                Long,
                &[fuel(Dilithium, 3e12), fuel(Antimatter, 3e12), fuel(DarkMatter, 3e12)],
            ),
            (
                Epic,
                &[
                    fuel(Tachyon, 1e12),
                    fuel(Dilithium, 3e12),
                    fuel(Antimatter, 3e12),
                    fuel(DarkMatter, 3e12),
                ],
            ),
        ],
    ),
];

/// Fuel cost of launching `ship` on a `duration_type` mission.
///
/// Pairs missing from the table yield an empty slice.
pub fn mission_fuels(ship: Ship, duration_type: DurationType) -> &'static [Fuel] {
    FUELS
        .iter()
        .find(|(s, _)| *s == ship)
        .and_then(|(_, by_duration)| by_duration.iter().find(|(d, _)| *d == duration_type))
        .map(|(_, fuels)| *fuels)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_ship_has_sensor_tier() {
        for ship in Ship::ALL {
            assert!(!sensors(ship).is_empty(), "{ship} has no sensor tier");
        }
        assert_eq!(sensors(Ship::Henerprise), "Next Generation");
        assert_eq!(sensors(Ship::Galeggtica), "Advanced");
    }

    #[test]
    fn test_launches_increase_along_progression() {
        let counts: Vec<u32> = Ship::ALL[..9].iter().map(|&s| launches_to_advance(s)).collect();
        assert_eq!(counts, vec![4, 6, 12, 15, 18, 21, 24, 27, 30]);
        assert_eq!(launches_to_advance(Ship::Henerprise), 0);
    }

    #[test]
    fn test_fuel_table_covers_every_ship() {
        assert_eq!(FUELS.len(), Ship::ALL.len());
        for ship in Ship::ALL {
            for dt in [Short, Long, Epic] {
                assert!(!mission_fuels(ship, dt).is_empty(), "{ship} {dt} missing fuel");
            }
        }
    }

    #[test]
    fn test_missing_pair_is_empty() {
        assert!(mission_fuels(Ship::ChickenNine, Tutorial).is_empty());
        assert!(mission_fuels(Ship::Henerprise, Tutorial).is_empty());
    }

    #[test]
    fn test_fuel_order_preserved() {
        let epic = mission_fuels(Ship::Henerprise, Epic);
        let eggs: Vec<Egg> = epic.iter().map(|f| f.egg).collect();
        assert_eq!(eggs, vec![Tachyon, Dilithium, Antimatter, DarkMatter]);
        assert_eq!(epic[3].amount, 3e12);
    }

    /// Every cell of the fuel table, one row per (ship, mission length).
    /// Cells not listed here must be empty.
    const EXPECTED_FUELS: &[(Ship, DurationType, &[(Egg, f64)])] = &[
        (Ship::ChickenOne, Tutorial, &[(RocketFuel, 1e5)]),
        (Ship::ChickenOne, Short, &[(RocketFuel, 2e6)]),
        (Ship::ChickenOne, Long, &[(RocketFuel, 3e6)]),
        (Ship::ChickenOne, Epic, &[(RocketFuel, 10e6)]),
        (Ship::ChickenNine, Short, &[(RocketFuel, 10e6)]),
        (Ship::ChickenNine, Long, &[(RocketFuel, 15e6)]),
        (Ship::ChickenNine, Epic, &[(RocketFuel, 25e6)]),
        (Ship::ChickenHeavy, Short, &[(RocketFuel, 100e6)]),
        (Ship::ChickenHeavy, Long, &[(RocketFuel, 50e6), (Fusion, 5e6)]),
        (Ship::ChickenHeavy, Epic, &[(RocketFuel, 75e6), (Fusion, 25e6)]),
        (Ship::Bcr, Short, &[(RocketFuel, 250e6), (Fusion, 50e6)]),
        (Ship::Bcr, Long, &[(RocketFuel, 400e6), (Fusion, 75e6)]),
        (Ship::Bcr, Epic, &[(Superfood, 5e6), (RocketFuel, 300e6), (Fusion, 100e6)]),
        (Ship::MilleniumChicken, Short, &[(Fusion, 5e9), (Graviton, 1e9)]),
        (Ship::MilleniumChicken, Long, &[(Fusion, 7e9), (Graviton, 5e9)]),
        (Ship::MilleniumChicken, Epic, &[(Superfood, 10e6), (Fusion, 10e9), (Graviton, 15e9)]),
        (Ship::CorellihenCorvette, Short, &[(Fusion, 15e9), (Graviton, 2e9)]),
        (Ship::CorellihenCorvette, Long, &[(Fusion, 20e9), (Graviton, 3e9)]),
        (Ship::CorellihenCorvette, Epic, &[(Superfood, 500e6), (Fusion, 25e9), (Graviton, 5e9)]),
        (Ship::Galeggtica, Short, &[(Fusion, 50e9), (Graviton, 10e9)]),
        (Ship::Galeggtica, Long, &[(Fusion, 75e9), (Graviton, 25e9)]),
        (Ship::Galeggtica, Epic, &[(Fusion, 100e9), (Graviton, 50e9), (Antimatter, 1e9)]),
        (Ship::Chickfiant, Short, &[(Dilithium, 200e9), (Antimatter, 50e9)]),
        (Ship::Chickfiant, Long, &[(Dilithium, 250e9), (Antimatter, 150e9)]),
        (Ship::Chickfiant, Epic, &[(Tachyon, 25e9), (Dilithium, 250e9), (Antimatter, 250e9)]),
        (Ship::Voyegger, Short, &[(Dilithium, 1e12), (Antimatter, 1e12)]),
        (Ship::Voyegger, Long, &[(Dilithium, 1.5e12), (Antimatter, 1.5e12)]),
        (Ship::Voyegger, Epic, &[(Tachyon, 100e9), (Dilithium, 2e12), (Antimatter, 2e12)]),
        (Ship::Henerprise, Short, &[(Dilithium, 2e12), (Antimatter, 2e12)]),
        (Ship::Henerprise, Long, &[(Dilithium, 3e12), (Antimatter, 3e12), (DarkMatter, 3e12)]),
        (
            Ship::Henerprise,
            Epic,
            &[(Tachyon, 1e12), (Dilithium, 3e12), (Antimatter, 3e12), (DarkMatter, 3e12)],
        ),
    ];

    #[test]
    fn test_full_fuel_table() {
        for ship in Ship::ALL {
            for dt in [Tutorial, Short, Long, Epic] {
                let expected: Vec<Fuel> = EXPECTED_FUELS
                    .iter()
                    .find(|(s, d, _)| *s == ship && *d == dt)
                    .map(|(_, _, fuels)| fuels.iter().map(|&(egg, amount)| fuel(egg, amount)).collect())
                    .unwrap_or_default();
                assert_eq!(mission_fuels(ship, dt), expected.as_slice(), "{ship} {dt}");
            }
        }
        let cells: usize = FUELS.iter().map(|(_, by_duration)| by_duration.len()).sum();
        assert_eq!(cells, EXPECTED_FUELS.len());
    }

    #[test]
    fn test_spot_check_values() {
        assert_eq!(mission_fuels(Ship::ChickenOne, Tutorial), &[fuel(RocketFuel, 1e5)]);
        assert_eq!(
            mission_fuels(Ship::Bcr, Epic),
            &[fuel(Superfood, 5e6), fuel(RocketFuel, 300e6), fuel(Fusion, 100e6)]
        );
        assert_eq!(
            mission_fuels(Ship::Voyegger, Long),
            &[fuel(Dilithium, 1.5e12), fuel(Antimatter, 1.5e12)]
        );
    }
}
