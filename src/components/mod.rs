//! UI Components
//!
//! Leptos components for the generator page.

mod column_row;
mod columns_editor;
mod controls_panel;
mod footer;
mod hero_section;
mod preset_selector;
mod preview_panel;
mod share_notification;

pub use controls_panel::ControlsPanel;
pub use footer::Footer;
pub use hero_section::HeroSection;
pub use preview_panel::PreviewPanel;
pub use share_notification::ShareNotification;
