//! Category Pool
//!
//! Merges the selected presets into a deduplicated candidate pool and draws
//! random, not-yet-used entries from it. Labels are compared by their
//! normalized form: trimmed and lowercased (Unicode case folding covers the
//! German umlauts; there are no de-DE special cases beyond it).

use std::collections::HashSet;

use crate::models::Preset;

/// Normalized comparison key for a category label.
///
/// Whitespace-only labels normalize to the empty key, which never counts as
/// used.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Insert the normalized form of `value` into `used`
pub fn add_normalized(used: &mut HashSet<String>, value: &str) {
    used.insert(normalize(value));
}

/// Normalized keys of all non-empty columns, optionally skipping one index
pub fn unique_used(columns: &[String], exclude_index: Option<usize>) -> HashSet<String> {
    let mut used = HashSet::new();

    for (index, column) in columns.iter().enumerate() {
        if exclude_index == Some(index) {
            continue;
        }

        let normalized = normalize(column);
        if !normalized.is_empty() {
            used.insert(normalized);
        }
    }

    used
}

/// Flatten the selected presets into a deduplicated candidate pool.
///
/// Presets are walked in catalog order, not selection order, so the result is
/// stable for a given selection. The first-declared spelling wins on
/// duplicates.
pub fn columns_from_presets(selected_preset_ids: &[String], presets: &[Preset]) -> Vec<String> {
    let selected: HashSet<&str> = selected_preset_ids.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for preset in presets {
        if !selected.contains(preset.id.as_str()) {
            continue;
        }

        for column in &preset.columns {
            let normalized = normalize(column);
            if normalized.is_empty() || seen.contains(&normalized) {
                continue;
            }

            seen.insert(normalized);
            result.push(column.clone());
        }
    }

    result
}

/// Source of uniform random indices, injectable so tests stay deterministic
pub trait RandomSource {
    /// Uniform index in `[0, len)`; only called with `len > 0`
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Browser randomness via `Math.random`
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (js_sys::Math::random() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

/// Draw a random pool entry whose normalized key is not in `used`
pub fn pick_random_from_available<'pool>(
    available_columns: &'pool [String],
    used: &HashSet<String>,
    rng: &mut dyn RandomSource,
) -> Option<&'pool str> {
    let available: Vec<&str> = available_columns
        .iter()
        .map(String::as_str)
        .filter(|entry| !used.contains(&normalize(entry)))
        .collect();

    if available.is_empty() {
        return None;
    }

    Some(available[rng.pick_index(available.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed index sequence
    pub struct SeqRandom(pub Vec<usize>);

    impl RandomSource for SeqRandom {
        fn pick_index(&mut self, len: usize) -> usize {
            if self.0.is_empty() {
                return 0;
            }
            self.0.remove(0).min(len - 1)
        }
    }

    fn preset(id: &str, columns: &[&str]) -> Preset {
        Preset {
            id: id.to_string(),
            name: id.to_uppercase(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize(" Tier "), "tier");
        assert_eq!(normalize("TIER"), "tier");
        assert_eq!(normalize("  Äpfel  "), "äpfel");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for value in [" Tier ", "GEWÄSSER", "Süßigkeit", ""] {
            let once = normalize(value);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn unique_used_collects_normalized_keys_and_skips_excluded_index() {
        let columns = owned(&[" Tier ", "tier", "Film", ""]);

        let used = unique_used(&columns, None);
        assert_eq!(used.len(), 2);
        assert!(used.contains("tier"));
        assert!(used.contains("film"));

        let used_without_film = unique_used(&columns, Some(2));
        assert_eq!(used_without_film.len(), 1);
        assert!(used_without_film.contains("tier"));
    }

    #[test]
    fn pool_follows_catalog_order_not_selection_order() {
        let presets = vec![
            preset("a", &["Tier", " Film ", ""]),
            preset("b", &["tier", "Beruf"]),
            preset("c", &["Land"]),
        ];

        let pool = columns_from_presets(&owned(&["b", "a"]), &presets);

        assert_eq!(pool, owned(&["Tier", " Film ", "Beruf"]));
    }

    #[test]
    fn pool_is_empty_without_selection() {
        let presets = vec![preset("a", &["Tier"])];
        assert!(columns_from_presets(&[], &presets).is_empty());
    }

    #[test]
    fn pick_returns_none_when_everything_is_used() {
        let pool = owned(&["Tier"]);
        let used = HashSet::from(["tier".to_string()]);

        let picked = pick_random_from_available(&pool, &used, &mut SeqRandom(vec![0]));
        assert_eq!(picked, None);
    }

    #[test]
    fn pick_draws_from_unused_entries_only() {
        let pool = owned(&["Tier", "Film", "Land"]);
        let used = HashSet::from(["tier".to_string()]);

        let picked = pick_random_from_available(&pool, &used, &mut SeqRandom(vec![1]));
        assert_eq!(picked, Some("Land"));
    }
}
