//! Sheet Models
//!
//! Data structures for the category sheet: presets, themes, preview options.

use serde::{Deserialize, Serialize};

/// A named set of category labels the user can opt into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    /// Display name shown in the preset selector
    pub name: String,
    /// Category labels in declared order
    pub columns: Vec<String>,
}

/// A paper background the sheet can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    /// Display name shown in the theme select
    pub name: &'static str,
    /// CSS class applied to the sheet
    pub paper_class: &'static str,
}

/// Toggles for the preview sheet layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOptions {
    pub show_date_line: bool,
    pub show_letter_column: bool,
    pub show_letter_bar: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            show_date_line: true,
            show_letter_column: false,
            show_letter_bar: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_options_default() {
        let options = PreviewOptions::default();
        assert!(options.show_date_line);
        assert!(!options.show_letter_column);
        assert!(!options.show_letter_bar);
    }

    #[test]
    fn preview_options_serialize_as_camel_case() {
        let json = serde_json::to_string(&PreviewOptions::default()).unwrap();
        assert_eq!(
            json,
            r#"{"showDateLine":true,"showLetterColumn":false,"showLetterBar":false}"#
        );
    }
}
