//! Column Row Component
//!
//! One editable column: index chip, text input, reroll and delete buttons.
//! Rows on the locked prefix render disabled while classic mode is on.

use leptos::prelude::*;

use crate::catalog::FIXED_COLUMNS;
use crate::context::AppContext;
use crate::store::{use_sheet_store, SheetStateStoreFields};

const REROLL_ICON: &str = r##"<svg viewBox="0 0 24 24" aria-hidden="true" focusable="false"><path d="M12 5a7 7 0 0 1 6.6 4.7h-2.6l3.6 3.9 3.4-3.9h-2A10 10 0 0 0 2 12h2a8 8 0 0 1 8-7Zm-7.6 9.3h2.6L3.4 10.4 0 14.3h2A10 10 0 0 0 22 12h-2a8 8 0 0 1-15.6 2.3Z" /></svg>"##;

#[component]
pub fn ColumnRow(index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_sheet_store();

    let value = Memo::new(move |_| {
        store
            .columns()
            .get()
            .get(index)
            .cloned()
            .unwrap_or_default()
    });
    let is_fixed = move || store.enforce_classic().get() && index < FIXED_COLUMNS.len();
    let show_reroll = move || !ctx.category_pool.get().is_empty();

    view! {
        <div class="column-row">
            <span class="index-chip">{index + 1}</span>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| ctx.edit_column(index, event_target_value(&ev))
                disabled=is_fixed
                placeholder=format!("Kategorie {}", index + 1)
            />
            {move || {
                if show_reroll() {
                    view! {
                        <button
                            type="button"
                            class="icon-btn"
                            on:click=move |_| ctx.reroll_column(index)
                            disabled=is_fixed
                            aria-label=format!("Spalte {} neu würfeln", index + 1)
                            title="Neu würfeln"
                            inner_html=REROLL_ICON
                        ></button>
                    }
                        .into_any()
                } else {
                    view! { <span aria-hidden="true" class="icon-btn-placeholder"></span> }
                        .into_any()
                }
            }}
            <button
                type="button"
                class="icon-btn danger-btn"
                on:click=move |_| ctx.delete_column(index)
                disabled=is_fixed
                aria-label=format!("Spalte {} löschen", index + 1)
                title="Löschen"
            >
                "X"
            </button>
        </div>
    }
}
