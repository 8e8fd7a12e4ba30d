//! Column State Operations
//!
//! Pure transformations of the column list. Every operation is a silent
//! no-op when it would violate an invariant: locked prefix while classic
//! mode is on, max column count, exhausted category pool.

use crate::catalog::{DEFAULT_CLASSIC_COLUMNS, FIXED_COLUMNS, MAX_COLUMN_COUNT, RANDOM_COLUMN_COUNT};
use crate::categories::{add_normalized, pick_random_from_available, unique_used, RandomSource};

/// Whether the column at `index` is locked against edits
pub fn is_locked(index: usize, enforce_classic: bool) -> bool {
    enforce_classic && index < FIXED_COLUMNS.len()
}

/// Columns for a fresh session without shared state
pub fn initial_columns(enforce_classic: bool) -> Vec<String> {
    if !enforce_classic {
        return vec![String::new(); 4];
    }

    DEFAULT_CLASSIC_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Display labels: trimmed text, or a numbered placeholder when empty
pub fn visible_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let trimmed = column.trim();
            if trimmed.is_empty() {
                format!("Kategorie {}", index + 1)
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

/// Replace one column verbatim (no trimming at edit time)
pub fn set_column(columns: &mut [String], index: usize, value: String, enforce_classic: bool) {
    if index >= columns.len() || is_locked(index, enforce_classic) {
        return;
    }

    columns[index] = value;
}

/// Append one empty column, bounded by `MAX_COLUMN_COUNT`
pub fn add_column(columns: &mut Vec<String>) {
    if columns.len() >= MAX_COLUMN_COUNT {
        return;
    }

    columns.push(String::new());
}

/// Remove one column, keeping at least one (possibly empty) column
pub fn delete_column(columns: &mut Vec<String>, index: usize, enforce_classic: bool) {
    if index >= columns.len() || is_locked(index, enforce_classic) {
        return;
    }

    columns.remove(index);
    if columns.is_empty() {
        columns.push(String::new());
    }
}

/// Replace one column with a random pool entry not used by any other column.
///
/// The used-set excludes the target index, so the column may coincidentally
/// redraw its current value. Exhausted pool leaves the column unchanged.
pub fn reroll_column(
    columns: &mut [String],
    index: usize,
    enforce_classic: bool,
    pool: &[String],
    rng: &mut dyn RandomSource,
) {
    if index >= columns.len() || is_locked(index, enforce_classic) {
        return;
    }

    let used = unique_used(columns, Some(index));
    if let Some(entry) = pick_random_from_available(pool, &used, rng) {
        columns[index] = entry.to_string();
    }
}

/// Rebuild the column list with random unique pool entries.
///
/// Grows the list to at least `RANDOM_COLUMN_COUNT`. Classic mode seeds the
/// fixed labels first; once the pool runs dry the remaining slots get
/// numbered placeholders.
pub fn random_fill(
    columns: &mut Vec<String>,
    enforce_classic: bool,
    pool: &[String],
    rng: &mut dyn RandomSource,
) {
    if pool.is_empty() {
        return;
    }

    let target_count = columns.len().max(RANDOM_COLUMN_COUNT);
    let mut next_columns = vec![String::new(); target_count];
    let mut used = std::collections::HashSet::new();

    let start_index = if enforce_classic {
        for (index, column) in FIXED_COLUMNS.iter().enumerate() {
            next_columns[index] = column.to_string();
            add_normalized(&mut used, column);
        }
        FIXED_COLUMNS.len()
    } else {
        0
    };

    for index in start_index..target_count {
        match pick_random_from_available(pool, &used, rng) {
            Some(entry) => {
                next_columns[index] = entry.to_string();
                add_normalized(&mut used, entry);
            }
            None => {
                let fallback = format!("Kategorie {}", index + 1);
                add_normalized(&mut used, &fallback);
                next_columns[index] = fallback;
            }
        }
    }

    *columns = next_columns;
}

/// Force the fixed label prefix, growing the list if needed
pub fn apply_classic(columns: &mut Vec<String>) {
    while columns.len() < FIXED_COLUMNS.len() {
        columns.push(String::new());
    }

    for (index, column) in FIXED_COLUMNS.iter().enumerate() {
        columns[index] = column.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::normalize;
    use std::collections::HashSet;

    /// Replays a fixed index sequence, then sticks to 0
    struct SeqRandom(Vec<usize>);

    impl RandomSource for SeqRandom {
        fn pick_index(&mut self, len: usize) -> usize {
            if self.0.is_empty() {
                return 0;
            }
            self.0.remove(0).min(len - 1)
        }
    }

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn initial_columns_match_mode() {
        assert_eq!(
            initial_columns(true),
            DEFAULT_CLASSIC_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        );
        assert_eq!(initial_columns(false), owned(&["", "", "", ""]));
    }

    #[test]
    fn visible_columns_fall_back_to_placeholders() {
        let labels = visible_columns(&owned(&[" Tier ", "", "  "]));
        assert_eq!(labels, owned(&["Tier", "Kategorie 2", "Kategorie 3"]));
    }

    #[test]
    fn set_column_replaces_verbatim() {
        let mut columns = owned(&["", ""]);
        set_column(&mut columns, 1, "  Tier  ".to_string(), false);
        assert_eq!(columns[1], "  Tier  ");
    }

    #[test]
    fn locked_prefix_rejects_edit_delete_and_reroll() {
        let initial = owned(&["Stadt", "Land", "Fluss", "Tier"]);
        let pool = owned(&["Film", "Beruf"]);

        for index in 0..3 {
            let mut columns = initial.clone();
            set_column(&mut columns, index, "Hack".to_string(), true);
            assert_eq!(columns, initial);

            let mut columns = initial.clone();
            delete_column(&mut columns, index, true);
            assert_eq!(columns, initial);

            let mut columns = initial.clone();
            reroll_column(&mut columns, index, true, &pool, &mut SeqRandom(vec![0]));
            assert_eq!(columns, initial);
        }
    }

    #[test]
    fn add_column_respects_max_count() {
        let mut columns = owned(&[""]);
        for _ in 0..20 {
            add_column(&mut columns);
        }
        assert_eq!(columns.len(), MAX_COLUMN_COUNT);

        add_column(&mut columns);
        assert_eq!(columns.len(), MAX_COLUMN_COUNT);
    }

    #[test]
    fn delete_column_restores_minimum_width() {
        let mut columns = owned(&["Tier"]);
        delete_column(&mut columns, 0, false);
        assert_eq!(columns, owned(&[""]));
    }

    #[test]
    fn reroll_never_collides_with_other_columns() {
        let pool = owned(&["Tier", "Film", "Land", "Beruf"]);

        for seed in 0..4 {
            let mut columns = owned(&["Tier", "Film", ""]);
            reroll_column(&mut columns, 2, false, &pool, &mut SeqRandom(vec![seed]));

            let rolled = normalize(&columns[2]);
            assert!(!rolled.is_empty());
            assert_ne!(rolled, "tier");
            assert_ne!(rolled, "film");
        }
    }

    #[test]
    fn reroll_with_exhausted_pool_keeps_prior_value() {
        let pool = owned(&["Tier", "Film"]);
        let mut columns = owned(&["Tier", "Film", "Land"]);

        reroll_column(&mut columns, 2, false, &pool, &mut SeqRandom(vec![0]));
        assert_eq!(columns[2], "Land");
    }

    #[test]
    fn reroll_with_empty_pool_is_a_no_op() {
        let mut columns = owned(&["Tier", ""]);
        reroll_column(&mut columns, 1, false, &[], &mut SeqRandom(vec![0]));
        assert_eq!(columns, owned(&["Tier", ""]));
    }

    #[test]
    fn random_fill_grows_to_minimum_width() {
        let pool = owned(&["Tier", "Film", "Land"]);
        let mut columns = owned(&["", "", "", "", ""]);

        random_fill(&mut columns, false, &pool, &mut SeqRandom(vec![]));

        assert_eq!(columns.len(), RANDOM_COLUMN_COUNT);
        assert!(columns.iter().all(|column| !column.trim().is_empty()));
    }

    #[test]
    fn random_fill_keeps_wider_lists() {
        let pool = owned(&["Tier", "Film", "Land"]);
        let mut columns = vec![String::new(); 10];

        random_fill(&mut columns, false, &pool, &mut SeqRandom(vec![]));

        assert_eq!(columns.len(), 10);
        assert!(columns.iter().all(|column| !column.trim().is_empty()));
    }

    #[test]
    fn random_fill_produces_unique_columns() {
        let pool = owned(&[
            "Tier", "Film", "Land", "Beruf", "Pflanze", "Essen", "Farbe", "Name", "Buch", "Lied",
        ]);
        let mut columns = vec![String::new(); 8];

        random_fill(&mut columns, false, &pool, &mut SeqRandom(vec![2, 0, 1, 3, 0, 2, 1, 0]));

        let keys: HashSet<String> = columns.iter().map(|c| normalize(c)).collect();
        assert_eq!(keys.len(), columns.len());
    }

    #[test]
    fn random_fill_seeds_fixed_labels_in_classic_mode() {
        let pool = owned(&["Tier", "Film", "Stadt", "Land", "Beruf", "Essen", "Name"]);
        let mut columns = owned(&["Stadt", "Land", "Fluss", ""]);

        random_fill(&mut columns, true, &pool, &mut SeqRandom(vec![0, 0, 0, 0, 0]));

        assert_eq!(columns.len(), RANDOM_COLUMN_COUNT);
        assert_eq!(&columns[..3], &owned(&["Stadt", "Land", "Fluss"])[..]);

        // fixed labels never reappear in the random tail
        for column in &columns[3..] {
            let key = normalize(column);
            assert_ne!(key, "stadt");
            assert_ne!(key, "land");
            assert_ne!(key, "fluss");
        }
    }

    #[test]
    fn random_fill_falls_back_to_placeholders_when_pool_runs_dry() {
        let pool = owned(&["Tier", "Film"]);
        let mut columns = vec![String::new(); 4];

        random_fill(&mut columns, false, &pool, &mut SeqRandom(vec![0, 0]));

        assert_eq!(columns.len(), RANDOM_COLUMN_COUNT);
        assert!(columns[..2].iter().all(|c| !c.starts_with("Kategorie")));
        for (index, column) in columns.iter().enumerate().skip(2) {
            assert_eq!(column, &format!("Kategorie {}", index + 1));
        }
    }

    #[test]
    fn random_fill_with_empty_pool_is_a_no_op() {
        let mut columns = owned(&["Tier", ""]);
        random_fill(&mut columns, false, &[], &mut SeqRandom(vec![0]));
        assert_eq!(columns, owned(&["Tier", ""]));
    }

    #[test]
    fn apply_classic_grows_and_overwrites_prefix() {
        let mut columns = owned(&["Film"]);
        apply_classic(&mut columns);
        assert_eq!(columns, owned(&["Stadt", "Land", "Fluss"]));

        let mut columns = owned(&["a", "b", "c", "d"]);
        apply_classic(&mut columns);
        assert_eq!(columns, owned(&["Stadt", "Land", "Fluss", "d"]));
    }
}
