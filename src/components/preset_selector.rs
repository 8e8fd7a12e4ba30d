//! Preset Selector Component
//!
//! Checkbox grid over the preset catalog with Alle/Keine bulk actions.

use leptos::prelude::*;

use crate::catalog;
use crate::context::AppContext;
use crate::store::{use_sheet_store, SheetStateStoreFields};

#[component]
pub fn PresetSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_sheet_store();

    view! {
        <fieldset class="preset-selector">
            <legend class="field-label preset-legend">
                <span>"Kategorien-Auswahl"</span>
                <span class="preset-actions">
                    <button
                        type="button"
                        class="subtle-action-btn"
                        on:click=move |_| ctx.select_all_presets()
                    >
                        "Alle"
                    </button>
                    <span aria-hidden="true">"/"</span>
                    <button
                        type="button"
                        class="subtle-action-btn"
                        on:click=move |_| ctx.select_no_presets()
                    >
                        "Keine"
                    </button>
                </span>
            </legend>
            <div class="preset-grid">
                {catalog::presets()
                    .iter()
                    .map(|preset| {
                        let preset_id = preset.id.clone();
                        let toggle_id = preset.id.clone();
                        view! {
                            <label class="preset-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        store
                                            .selected_preset_ids()
                                            .get()
                                            .iter()
                                            .any(|id| *id == preset_id)
                                    }
                                    on:change=move |ev| {
                                        ctx.toggle_preset(&toggle_id, event_target_checked(&ev))
                                    }
                                />
                                <span>{preset.name.clone()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
