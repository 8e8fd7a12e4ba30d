//! Columns Editor Component

use leptos::prelude::*;

use super::column_row::ColumnRow;
use crate::store::{use_sheet_store, SheetStateStoreFields};

/// The list of editable column rows
#[component]
pub fn ColumnsEditor() -> impl IntoView {
    let store = use_sheet_store();

    view! {
        <div class="columns-editor" aria-label="Spaltenliste">
            <For
                each=move || 0..store.columns().get().len()
                key=|index| *index
                children=move |index| {
                    view! { <ColumnRow index=index /> }
                }
            />
        </div>
    }
}
