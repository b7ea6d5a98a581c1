//! Config validation: unknown-key detection with Levenshtein suggestions
//! and ship list consistency checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;
use std::time::Duration;

use crate::types::Ship;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `MissionListConfig`.
///
/// Array-of-tables entries contribute their keys without an index, so
/// `[[ships.durations]]` fields appear as `ships.durations.<field>`.
/// Any new field added to the config structs must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [output]
        "output",
        "output.path",
        // [assets]
        "assets",
        "assets.base_url",
        "assets.ship_icon_size",
        "assets.egg_icon_size",
        // [[ships]]
        "ships",
        "ships.ship",
        "ships.durations",
        "ships.durations.duration_type",
        "ships.durations.seconds",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`. Tables inside arrays are walked under the
/// array's own path, and each distinct path is reported once.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(value, prefix, &mut keys);
    keys
}

fn collect_keys(value: &toml::Value, prefix: &str, keys: &mut Vec<String>) {
    match value {
        toml::Value::Table(table) => {
            for (k, v) in table {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                if !keys.contains(&path) {
                    keys.push(path.clone());
                }
                collect_keys(v, &path, keys);
            }
        }
        toml::Value::Array(items) => {
            for item in items {
                if item.is_table() {
                    collect_keys(item, prefix, keys);
                }
            }
        }
        _ => {}
    }
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties resolve to the lexicographically smallest key so the suggestion is
/// stable across runs.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns. Parse errors are left
/// for the serde pass to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| {
            let suggestion = suggest_correction(&key, &known);
            let message = format!("Unknown config key '{key}'");
            ValidationWarning {
                field: key,
                message,
                suggestion,
            }
        })
        .collect()
}

// ============================================================================
// Ship List Validation
// ============================================================================

/// Validate the ship list on a parsed config.
///
/// Returns (errors, warnings). Errors are values the derivation cannot work
/// with; warnings are legal but probably unintended.
pub fn validate_ship_list(
    config: &super::MissionListConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_ships: HashSet<Ship> = HashSet::new();

    for (index, params) in config.ships.iter().enumerate() {
        let ship = params.ship;

        if !seen_ships.insert(ship) {
            warnings.push(ValidationWarning {
                field: format!("ships[{index}].ship"),
                message: format!(
                    "{ship} is listed more than once; cumulative times will count it twice"
                ),
                suggestion: None,
            });
        }

        let mut seen_types = HashSet::new();
        for d in &params.durations {
            let representable = Duration::try_from_secs_f64(d.seconds).is_ok_and(|t| !t.is_zero());
            if !representable {
                errors.push(format!(
                    "{ship} {} mission: seconds must be positive and at most {} (got {})",
                    d.duration_type,
                    Duration::MAX.as_secs(),
                    d.seconds
                ));
            }
            if !seen_types.insert(d.duration_type) {
                errors.push(format!(
                    "{ship} lists the {} mission more than once",
                    d.duration_type
                ));
            }
        }
    }

    if config.ships.is_empty() {
        warnings.push(ValidationWarning {
            field: "ships".to_string(),
            message: "No ships configured; the page will be empty".to_string(),
            suggestion: None,
        });
    }

    (errors, warnings)
}
