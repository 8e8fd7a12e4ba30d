//! Preview Panel Component
//!
//! Live preview of the printable sheet plus the share / PDF / print
//! actions and the display option toggles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog::{self, LETTER_BAR_CHARACTERS, PREVIEW_ROWS};
use crate::columns::visible_columns;
use crate::context::AppContext;
use crate::export;
use crate::store::{use_sheet_store, SheetStateStoreFields};

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_sheet_store();

    let visible = Memo::new(move |_| visible_columns(&store.columns().get()));
    let options = move || store.preview_options().get();
    let sheet_class = move || {
        let paper_class = catalog::theme_by_id(&store.theme_id().get()).paper_class;
        if options().show_letter_bar {
            format!("sheet {paper_class} sheet-with-letter-bar")
        } else {
            format!("sheet {paper_class}")
        }
    };

    // print is pointless on phones, hide it there
    let is_mobile = browser::is_narrow_viewport();

    let download_pdf = move |_| {
        spawn_local(async {
            if let Err(err) = export::download_sheet_pdf().await {
                web_sys::console::log_1(&format!("[PDF] export failed: {err}").into());
            }
        });
    };

    view! {
        <section class="panel preview-panel">
            <div class="preview-header">
                <h2>"Vorschau"</h2>
                <div class="preview-actions">
                    <button
                        type="button"
                        class="paper-btn paper-btn-secondary"
                        on:click=move |_| ctx.share()
                    >
                        "Teilen"
                    </button>
                    <button
                        type="button"
                        class="paper-btn paper-btn-secondary"
                        on:click=download_pdf
                    >
                        "PDF herunterladen"
                    </button>
                    {(!is_mobile)
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="paper-btn"
                                    on:click=move |_| browser::trigger_print()
                                >
                                    "Drucken"
                                </button>
                            }
                        })}
                </div>
            </div>

            <fieldset class="preview-options" aria-label="Vorschauoptionen">
                <legend class="preview-options-title">"Anzeigeoptionen"</legend>

                <label class="preview-option">
                    <input
                        type="checkbox"
                        prop:checked=move || options().show_date_line
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_preview_options(|options| options.show_date_line = checked);
                        }
                    />
                    "Datumslinie anzeigen"
                </label>

                <label class="preview-option">
                    <input
                        type="checkbox"
                        prop:checked=move || options().show_letter_column
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_preview_options(|options| options.show_letter_column = checked);
                        }
                    />
                    "Erste Spalte für Buchstaben"
                </label>

                <label class="preview-option">
                    <input
                        type="checkbox"
                        prop:checked=move || options().show_letter_bar
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            ctx.update_preview_options(|options| options.show_letter_bar = checked);
                        }
                    />
                    "Buchstabenleiste anzeigen"
                </label>
            </fieldset>

            <div class="preview-scroll">
                <div class="sheet-frame">
                    <div class="sheet-scale">
                        <article class=sheet_class>
                            <header class="sheet-title-row">
                                <h3>"Stadt-Land-Fluss"</h3>
                                <div class="sheet-meta">
                                    <span>"Name: ________________"</span>
                                    {move || {
                                        options()
                                            .show_date_line
                                            .then(|| view! { <span>"Datum: ________________"</span> })
                                    }}
                                </div>
                            </header>

                            <div class="sheet-table-wrap">
                                <table>
                                    <thead>
                                        <tr>
                                            {move || {
                                                options()
                                                    .show_letter_column
                                                    .then(|| {
                                                        view! {
                                                            <th
                                                                class="letter-column"
                                                                aria-label="Buchstaben-Spalte"
                                                            ></th>
                                                        }
                                                    })
                                            }}
                                            {move || {
                                                visible
                                                    .get()
                                                    .into_iter()
                                                    .map(|column| view! { <th>{column}</th> })
                                                    .collect_view()
                                            }}
                                            <th class="points-column">"Punkte"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {move || {
                                            let column_count = visible.get().len();
                                            let show_letters = options().show_letter_column;
                                            (0..PREVIEW_ROWS)
                                                .map(|row_index| {
                                                    view! {
                                                        <tr>
                                                            {show_letters
                                                                .then(|| {
                                                                    view! {
                                                                        <td
                                                                            class="letter-column"
                                                                            aria-label=format!(
                                                                                "Buchstabe Runde {}",
                                                                                row_index + 1,
                                                                            )
                                                                        ></td>
                                                                    }
                                                                })}
                                                            {(0..column_count)
                                                                .map(|_| view! { <td></td> })
                                                                .collect_view()}
                                                            <td class="points-column"></td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </div>

                            {move || {
                                options()
                                    .show_letter_bar
                                    .then(|| {
                                        view! {
                                            <div class="sheet-letter-bar" aria-label="Buchstabenleiste">
                                                {LETTER_BAR_CHARACTERS
                                                    .chars()
                                                    .map(|letter| {
                                                        view! { <span>{letter.to_string()}</span> }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                            }}
                        </article>
                    </div>
                </div>
            </div>
        </section>
    }
}
