//! Derivation engine: per-ship launches, time-to-advance and cumulative totals.
//!
//! Ships are processed strictly in config order. A single running total is
//! threaded through the loop, so reordering the input changes the
//! cumulative columns.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::catalog;
use crate::config::defaults::{CHICKEN_ONE_TIME_TO_ADVANCE, PRO_CONCURRENCY, STD_CONCURRENCY};
use crate::types::{seconds_to_duration, DurationType, Ship, ShipParameters};

/// A ship's mission parameters plus every value the page displays for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipRecord {
    #[serde(flatten)]
    pub params: ShipParameters,
    pub sensors: &'static str,
    pub launches_to_advance: u32,
    pub time_to_advance_std: Duration,
    pub time_to_advance_pro: Duration,
    pub cumulative_time_to_advance_std: Duration,
    pub cumulative_time_to_advance_pro: Duration,
}

impl ShipRecord {
    pub const fn ship(&self) -> Ship {
        self.params.ship
    }
}

#[derive(Debug, Error)]
pub enum DeriveError {
    /// The config is missing data the page cannot do without.
    #[error("short mission not found for ship {ship}")]
    MissingShortDuration { ship: Ship },

    #[error("short mission for ship {ship} has unusable length {seconds}s")]
    InvalidSeconds { ship: Ship, seconds: f64 },

    #[error("time to advance for ship {ship} is zero")]
    ZeroTimeToAdvance { ship: Ship },

    #[error("time to advance overflowed at ship {ship}")]
    DurationOverflow { ship: Ship },
}

/// Time spent flying `launches` SHORT missions of `seconds` each.
fn short_missions_time(ship: Ship, seconds: f64, launches: u32) -> Result<Duration, DeriveError> {
    let short = Duration::try_from_secs_f64(seconds)
        .map_err(|_| DeriveError::InvalidSeconds { ship, seconds })?;
    short
        .checked_mul(launches)
        .ok_or(DeriveError::DurationOverflow { ship })
}

/// Derive display records for every ship, in input order.
///
/// Fails on the first ship that needs a SHORT mission entry and has none,
/// or whose time to advance is zero or does not fit in a `Duration`.
pub fn derive_ships(ships: &[ShipParameters]) -> Result<Vec<ShipRecord>, DeriveError> {
    let mut records = Vec::with_capacity(ships.len());
    let mut cumulative = Duration::ZERO;

    for params in ships {
        let ship = params.ship;
        let launches = catalog::launches_to_advance(ship);

        let time_to_advance = match ship {
            // Approximation: ignores the 2 tutorial + 2 short mission opening.
            // Resets the running total rather than adding to it.
            Ship::ChickenOne => {
                cumulative = CHICKEN_ONE_TIME_TO_ADVANCE;
                CHICKEN_ONE_TIME_TO_ADVANCE
            }
            // Nothing to advance to; the cumulative column is not shown for it.
            // Any ship after it starts accumulating from zero again.
            Ship::Henerprise => {
                cumulative = Duration::ZERO;
                params
                    .seconds_for(DurationType::Short)
                    .map_or(Duration::ZERO, |s| seconds_to_duration(s) * launches)
            }
            _ => {
                let short = params
                    .seconds_for(DurationType::Short)
                    .ok_or(DeriveError::MissingShortDuration { ship })?;
                let tta = short_missions_time(ship, short, launches)?;
                if tta.is_zero() {
                    return Err(DeriveError::ZeroTimeToAdvance { ship });
                }
                cumulative = cumulative
                    .checked_add(tta)
                    .ok_or(DeriveError::DurationOverflow { ship })?;
                tta
            }
        };

        debug!(
            %ship,
            launches,
            time_to_advance_secs = time_to_advance.as_secs(),
            cumulative_secs = cumulative.as_secs(),
            "Derived ship record"
        );

        records.push(ShipRecord {
            params: params.clone(),
            sensors: catalog::sensors(ship),
            launches_to_advance: launches,
            time_to_advance_std: time_to_advance / STD_CONCURRENCY,
            time_to_advance_pro: time_to_advance / PRO_CONCURRENCY,
            cumulative_time_to_advance_std: cumulative / STD_CONCURRENCY,
            cumulative_time_to_advance_pro: cumulative / PRO_CONCURRENCY,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MissionDuration;

    fn params(ship: Ship, short_secs: Option<f64>) -> ShipParameters {
        let mut durations = Vec::new();
        if let Some(seconds) = short_secs {
            durations.push(MissionDuration { duration_type: DurationType::Short, seconds });
        }
        durations.push(MissionDuration { duration_type: DurationType::Epic, seconds: 86400.0 });
        ShipParameters { ship, durations }
    }

    #[test]
    fn test_regular_ship_uses_short_duration() {
        let records = derive_ships(&[params(Ship::ChickenHeavy, Some(2700.0))]).expect("derive");
        let r = &records[0];
        assert_eq!(r.launches_to_advance, 12);
        assert_eq!(r.time_to_advance_std, Duration::from_secs(12 * 2700));
        assert_eq!(r.time_to_advance_pro, Duration::from_secs(12 * 2700 / 3));
        assert_eq!(r.cumulative_time_to_advance_std, r.time_to_advance_std);
        assert_eq!(r.sensors, "Intermediate");
    }

    #[test]
    fn test_chicken_one_overrides_cumulative() {
        let records = derive_ships(&[
            params(Ship::ChickenNine, Some(1800.0)),
            params(Ship::ChickenOne, Some(99999.0)),
        ])
        .expect("derive");
        let one = &records[1];
        assert_eq!(one.time_to_advance_std, Duration::from_secs(3600));
        assert_eq!(one.cumulative_time_to_advance_std, Duration::from_secs(3600));
        assert_eq!(one.cumulative_time_to_advance_pro, Duration::from_secs(1200));
    }

    #[test]
    fn test_chicken_one_without_short_is_fine() {
        let records = derive_ships(&[params(Ship::ChickenOne, None)]).expect("derive");
        assert_eq!(records[0].time_to_advance_std, Duration::from_secs(3600));
    }

    #[test]
    fn test_henerprise_zeroes_cumulative_and_later_ships_restart() {
        let records = derive_ships(&[
            params(Ship::Voyegger, Some(43200.0)),
            params(Ship::Henerprise, Some(86400.0)),
            params(Ship::Bcr, Some(5400.0)),
        ])
        .expect("derive");
        assert_eq!(records[1].launches_to_advance, 0);
        assert_eq!(records[1].time_to_advance_std, Duration::ZERO);
        assert_eq!(records[1].cumulative_time_to_advance_std, Duration::ZERO);
        assert_eq!(records[2].cumulative_time_to_advance_std, Duration::from_secs(15 * 5400));
    }

    #[test]
    fn test_henerprise_without_short_is_fine() {
        let records = derive_ships(&[params(Ship::Henerprise, None)]).expect("derive");
        assert_eq!(records[0].time_to_advance_std, Duration::ZERO);
    }

    #[test]
    fn test_missing_short_is_error() {
        let err = derive_ships(&[
            params(Ship::ChickenOne, None),
            params(Ship::Galeggtica, None),
        ])
        .expect_err("missing short must fail");
        assert!(matches!(err, DeriveError::MissingShortDuration { ship: Ship::Galeggtica }));
        assert_eq!(err.to_string(), "short mission not found for ship Galeggtica");
    }

    #[test]
    fn test_oversized_short_mission_is_overflow_error() {
        // Fits in a Duration on its own, but not once multiplied by 30 launches
        let err = derive_ships(&[params(Ship::Voyegger, Some(1e18))]).expect_err("must fail");
        assert!(matches!(err, DeriveError::DurationOverflow { ship: Ship::Voyegger }));
    }

    #[test]
    fn test_unrepresentable_short_mission_is_error() {
        let err = derive_ships(&[params(Ship::Voyegger, Some(1e20))]).expect_err("must fail");
        assert!(matches!(err, DeriveError::InvalidSeconds { ship: Ship::Voyegger, .. }));
    }

    #[test]
    fn test_cumulative_overflow_is_error() {
        // Each ship fits on its own, the running total does not
        let big = u64::MAX as f64 / 40.0;
        let err = derive_ships(&[params(Ship::Voyegger, Some(big)), params(Ship::Chickfiant, Some(big))])
            .expect_err("must fail");
        assert!(matches!(err, DeriveError::DurationOverflow { ship: Ship::Chickfiant }));
    }

    #[test]
    fn test_zero_time_to_advance_is_error() {
        // Rounds to zero nanoseconds
        let err = derive_ships(&[params(Ship::Bcr, Some(1e-12))]).expect_err("must fail");
        assert!(matches!(err, DeriveError::ZeroTimeToAdvance { ship: Ship::Bcr }));
        assert_eq!(err.to_string(), "time to advance for ship BCR is zero");
    }

    #[test]
    fn test_pro_division_truncates() {
        // 6 * 1000.0000001s does not divide evenly by 3 at nanosecond precision
        let records = derive_ships(&[params(Ship::ChickenNine, Some(1000.000_000_1))]).expect("derive");
        let r = &records[0];
        assert_eq!(r.time_to_advance_pro, r.time_to_advance_std / 3);
        assert!(r.time_to_advance_pro * 3 <= r.time_to_advance_std);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_ships(&[]).expect("derive").is_empty());
    }
}
