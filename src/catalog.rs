//! Preset & Theme Catalog
//!
//! Static game data: the fixed classic columns, the preset catalog embedded
//! as JSON, and the available sheet themes. Presets are parsed once at
//! startup and never change afterwards.

use std::sync::OnceLock;

use crate::models::{Preset, Theme};

/// Labels forced onto the first columns while classic mode is on
pub const FIXED_COLUMNS: [&str; 3] = ["Stadt", "Land", "Fluss"];

/// Minimum column count produced by a random fill
pub const RANDOM_COLUMN_COUNT: usize = 8;

/// Hard upper bound on the column list
pub const MAX_COLUMN_COUNT: usize = 12;

/// Per-column character cap applied to shared state on load
pub const MAX_COLUMN_LENGTH: usize = 80;

/// Body rows rendered on the preview sheet
pub const PREVIEW_ROWS: usize = 13;

/// Characters of the optional letter bar below the sheet table
pub const LETTER_BAR_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Column labels used when classic mode starts without shared state
pub const DEFAULT_CLASSIC_COLUMNS: [&str; 8] = [
    "Stadt", "Land", "Fluss", "Tier", "Beruf", "Pflanze", "Essen", "Sportart",
];

pub const THEMES: [Theme; 4] = [
    Theme {
        id: "classic",
        name: "Kariert",
        paper_class: "theme-classic",
    },
    Theme {
        id: "sunny",
        name: "Notizblock",
        paper_class: "theme-sunny",
    },
    Theme {
        id: "mint",
        name: "Skizzenblatt",
        paper_class: "theme-mint",
    },
    Theme {
        id: "kids",
        name: "Kinder",
        paper_class: "theme-kids",
    },
];

pub const DEFAULT_THEME: Theme = THEMES[0];

/// Embedded preset definitions, in filename order
const PRESET_SOURCES: [&str; 6] = [
    include_str!("presets/essen-trinken.json"),
    include_str!("presets/kinder.json"),
    include_str!("presets/klassiker.json"),
    include_str!("presets/natur.json"),
    include_str!("presets/unterhaltung.json"),
    include_str!("presets/wissen.json"),
];

static PRESETS: OnceLock<Vec<Preset>> = OnceLock::new();

/// The preset catalog in declaration order
pub fn presets() -> &'static [Preset] {
    PRESETS.get_or_init(|| {
        PRESET_SOURCES
            .iter()
            .map(|source| serde_json::from_str(source).expect("embedded preset must parse"))
            .collect()
    })
}

/// All preset ids, the default selection for a fresh session
pub fn default_selected_preset_ids() -> Vec<String> {
    presets().iter().map(|preset| preset.id.clone()).collect()
}

/// Look up a theme by id, falling back to the default theme
pub fn theme_by_id(theme_id: &str) -> Theme {
    THEMES
        .iter()
        .copied()
        .find(|theme| theme.id == theme_id)
        .unwrap_or(DEFAULT_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_parse_with_unique_ids() {
        let catalog = presets();
        assert_eq!(catalog.len(), PRESET_SOURCES.len());

        for (index, preset) in catalog.iter().enumerate() {
            assert!(!preset.name.is_empty());
            assert!(!preset.columns.is_empty());
            assert!(
                catalog[..index].iter().all(|other| other.id != preset.id),
                "duplicate preset id {}",
                preset.id
            );
        }
    }

    #[test]
    fn classic_columns_start_with_fixed_labels() {
        assert_eq!(&DEFAULT_CLASSIC_COLUMNS[..3], &FIXED_COLUMNS[..]);
    }

    #[test]
    fn theme_lookup_falls_back_to_default() {
        assert_eq!(theme_by_id("kids").id, "kids");
        assert_eq!(theme_by_id("does-not-exist").id, DEFAULT_THEME.id);
    }
}
