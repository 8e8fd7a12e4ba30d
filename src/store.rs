//! Sheet State Store
//!
//! The single owner of the editable session state, held in a Leptos
//! reactive store. Initial state comes from the share URL when present and
//! valid, otherwise from defaults; everything read from the URL is
//! sanitized field by field before it becomes state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{self, DEFAULT_THEME, MAX_COLUMN_COUNT, MAX_COLUMN_LENGTH};
use crate::columns;
use crate::models::PreviewOptions;
use crate::share::{read_share_state, SharePayload};

/// Everything the share payload reproduces
#[derive(Clone, Debug, Store)]
pub struct SheetState {
    pub theme_id: String,
    pub columns: Vec<String>,
    pub enforce_classic: bool,
    pub selected_preset_ids: Vec<String>,
    pub preview_options: PreviewOptions,
}

impl Default for SheetState {
    fn default() -> Self {
        Self {
            theme_id: DEFAULT_THEME.id.to_string(),
            columns: columns::initial_columns(true),
            enforce_classic: true,
            selected_preset_ids: catalog::default_selected_preset_ids(),
            preview_options: PreviewOptions::default(),
        }
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

impl SheetState {
    /// Seed state from a URL, falling back to defaults on any decode failure
    pub fn from_href(href: &str) -> Self {
        read_share_state(href).map(Self::from_share).unwrap_or_default()
    }

    /// Sanitize a decoded payload into valid state.
    ///
    /// Unknown theme and preset ids are dropped, duplicate preset ids keep
    /// their first occurrence, column entries are capped in length and
    /// count, and classic mode re-enforces the fixed prefix.
    pub fn from_share(shared: SharePayload) -> Self {
        let theme_id = match shared.t {
            Some(id) if catalog::THEMES.iter().any(|theme| theme.id == id) => id,
            _ => DEFAULT_THEME.id.to_string(),
        };

        let enforce_classic = shared.ec.unwrap_or(true);

        let mut sheet_columns: Vec<String> = shared
            .c
            .unwrap_or_default()
            .iter()
            .take(MAX_COLUMN_COUNT)
            .map(|column| truncate_chars(column, MAX_COLUMN_LENGTH))
            .collect();

        if sheet_columns.is_empty() {
            sheet_columns = columns::initial_columns(enforce_classic);
        }

        if enforce_classic {
            columns::apply_classic(&mut sheet_columns);
        }

        // Missing `p` means "never chosen", so every preset stays active;
        // an explicit empty list stays empty.
        let selected_preset_ids = match shared.p {
            Some(ids) => {
                let mut selected: Vec<String> = Vec::new();
                for id in ids {
                    let known = catalog::presets().iter().any(|preset| preset.id == id);
                    if known && !selected.contains(&id) {
                        selected.push(id);
                    }
                }
                selected
            }
            None => catalog::default_selected_preset_ids(),
        };

        Self {
            theme_id,
            columns: sheet_columns,
            enforce_classic,
            selected_preset_ids,
            preview_options: shared.po.unwrap_or_default(),
        }
    }

    /// Read-only snapshot for the share codec
    pub fn share_payload(&self) -> SharePayload {
        SharePayload {
            t: Some(self.theme_id.clone()),
            c: Some(self.columns.clone()),
            ec: Some(self.enforce_classic),
            p: Some(self.selected_preset_ids.clone()),
            po: Some(self.preview_options),
        }
    }
}

/// Type alias for the store
pub type SheetStore = Store<SheetState>;

/// Get the sheet store from context
pub fn use_sheet_store() -> SheetStore {
    expect_context::<SheetStore>()
}
