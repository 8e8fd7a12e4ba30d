//! Controls Panel Component
//!
//! Theme select, classic-mode toggle, preset selection and the column
//! editor with its random-fill / add-column actions.

use leptos::prelude::*;

use super::columns_editor::ColumnsEditor;
use super::preset_selector::PresetSelector;
use crate::catalog::{MAX_COLUMN_COUNT, THEMES};
use crate::context::AppContext;
use crate::store::{use_sheet_store, SheetStateStoreFields};

#[component]
pub fn ControlsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_sheet_store();

    view! {
        <section class="panel controls-panel">
            <div class="control-row">
                <label class="field-label" for="theme-select">
                    "Hintergrund"
                </label>
                <select
                    id="theme-select"
                    prop:value=move || store.theme_id().get()
                    on:change=move |ev| ctx.set_theme(event_target_value(&ev))
                >
                    {THEMES
                        .iter()
                        .map(|theme| {
                            let theme = *theme;
                            view! {
                                <option
                                    value=theme.id
                                    selected=move || store.theme_id().get() == theme.id
                                >
                                    {theme.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="control-row checkbox-row">
                <input
                    id="classic-toggle"
                    type="checkbox"
                    prop:checked=move || store.enforce_classic().get()
                    on:change=move |ev| ctx.toggle_classic(event_target_checked(&ev))
                />
                <label for="classic-toggle">"Stadt, Land, Fluss Kategorien erzwingen"</label>
            </div>

            <PresetSelector />

            <div class="button-row">
                {move || {
                    ctx.has_active_presets()
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="paper-btn"
                                    on:click=move |_| ctx.random_fill()
                                >
                                    "Zufällige Kategorien wählen"
                                </button>
                            }
                        })
                }}
                {move || {
                    (store.columns().get().len() < MAX_COLUMN_COUNT)
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="paper-btn paper-btn-secondary"
                                    on:click=move |_| ctx.add_column()
                                >
                                    "+ Spalte hinzufügen"
                                </button>
                            }
                        })
                }}
            </div>

            {move || {
                (!ctx.has_active_presets())
                    .then(|| {
                        view! {
                            <p class="preset-hint">
                                "Wähle mindestens eine Kategorie aus, um Zufallsfunktionen zu verwenden."
                            </p>
                        }
                    })
            }}

            <ColumnsEditor />
        </section>
    }
}
