//! Application Context
//!
//! App-wide handles provided via the Leptos context API: the sheet store,
//! the derived category pool, and the share notification. The methods on
//! `AppContext` are the only mutators of sheet state; every mutation also
//! invalidates a previously generated share link.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog;
use crate::categories::{columns_from_presets, JsRandom};
use crate::columns;
use crate::models::PreviewOptions;
use crate::share::create_share_url;
use crate::store::{SheetState, SheetStateStoreFields, SheetStore};

/// How long a share notification stays visible
const SHARE_NOTICE_MS: u32 = 5_000;

/// Feedback shown after a share action
#[derive(Clone, Debug, PartialEq)]
pub struct ShareNotice {
    pub message: String,
    pub url: String,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: SheetStore,
    /// Deduplicated candidate pool built from the selected presets
    pub category_pool: Memo<Vec<String>>,
    share_notice: RwSignal<Option<ShareNotice>>,
    /// Bumped on every mutation; cancels pending auto-dismiss timers
    notice_epoch: RwSignal<u64>,
}

impl AppContext {
    pub fn new(store: SheetStore) -> Self {
        let category_pool = Memo::new(move |_| {
            columns_from_presets(&store.selected_preset_ids().get(), catalog::presets())
        });

        Self {
            store,
            category_pool,
            share_notice: RwSignal::new(None),
            notice_epoch: RwSignal::new(0),
        }
    }

    pub fn has_active_presets(&self) -> bool {
        !self.category_pool.get().is_empty()
    }

    // ========================
    // Share Notification
    // ========================

    pub fn current_notice(&self) -> Option<ShareNotice> {
        self.share_notice.get()
    }

    /// Drop the notification and cancel its pending auto-dismiss
    pub fn clear_share_notice(&self) {
        self.notice_epoch.update(|epoch| *epoch += 1);
        if self.share_notice.get_untracked().is_some() {
            self.share_notice.set(None);
        }
    }

    fn show_notice(&self, notice: ShareNotice) {
        let epoch = self.notice_epoch.get_untracked() + 1;
        self.notice_epoch.set(epoch);
        self.share_notice.set(Some(notice));

        let context = *self;
        spawn_local(async move {
            TimeoutFuture::new(SHARE_NOTICE_MS).await;
            // a newer notice or a mutation supersedes this timer
            if context.notice_epoch.get_untracked() == epoch {
                context.share_notice.set(None);
            }
        });
    }

    // ========================
    // Sheet Mutations
    // ========================

    pub fn set_theme(&self, theme_id: String) {
        self.store.theme_id().set(theme_id);
        self.clear_share_notice();
    }

    pub fn toggle_classic(&self, checked: bool) {
        self.store.enforce_classic().set(checked);
        if checked {
            columns::apply_classic(&mut self.store.columns().write());
        }
        self.clear_share_notice();
    }

    pub fn toggle_preset(&self, preset_id: &str, checked: bool) {
        {
            let selected_field = self.store.selected_preset_ids();
            let mut selected = selected_field.write();
            if checked {
                if !selected.iter().any(|id| id == preset_id) {
                    selected.push(preset_id.to_string());
                }
            } else {
                selected.retain(|id| id != preset_id);
            }
        }
        self.clear_share_notice();
    }

    pub fn select_all_presets(&self) {
        self.store
            .selected_preset_ids()
            .set(catalog::default_selected_preset_ids());
        self.clear_share_notice();
    }

    pub fn select_no_presets(&self) {
        self.store.selected_preset_ids().set(Vec::new());
        self.clear_share_notice();
    }

    pub fn edit_column(&self, index: usize, value: String) {
        let classic = self.store.enforce_classic().get_untracked();
        columns::set_column(&mut self.store.columns().write(), index, value, classic);
        self.clear_share_notice();
    }

    pub fn add_column(&self) {
        columns::add_column(&mut self.store.columns().write());
        self.clear_share_notice();
    }

    pub fn delete_column(&self, index: usize) {
        let classic = self.store.enforce_classic().get_untracked();
        columns::delete_column(&mut self.store.columns().write(), index, classic);
        self.clear_share_notice();
    }

    pub fn reroll_column(&self, index: usize) {
        let pool = self.category_pool.get_untracked();
        if pool.is_empty() {
            return;
        }

        let classic = self.store.enforce_classic().get_untracked();
        columns::reroll_column(
            &mut self.store.columns().write(),
            index,
            classic,
            &pool,
            &mut JsRandom,
        );
        self.clear_share_notice();
    }

    pub fn random_fill(&self) {
        let pool = self.category_pool.get_untracked();
        if pool.is_empty() {
            return;
        }

        let classic = self.store.enforce_classic().get_untracked();
        columns::random_fill(
            &mut self.store.columns().write(),
            classic,
            &pool,
            &mut JsRandom,
        );
        self.clear_share_notice();
    }

    pub fn update_preview_options(&self, mutate: impl FnOnce(&mut PreviewOptions)) {
        mutate(&mut self.store.preview_options().write());
        self.clear_share_notice();
    }

    // ========================
    // Share Flow
    // ========================

    /// Build the share URL, move it into the address bar, try the clipboard,
    /// and show a notification either way
    pub fn share(&self) {
        let context = *self;

        spawn_local(async move {
            let Some(href) = browser::current_href() else {
                return;
            };

            let share_url = create_share_url(&href, &context.snapshot().share_payload());
            browser::replace_history_url(&share_url);

            let message = match browser::copy_to_clipboard(&share_url).await {
                Ok(()) => "Link wurde in die Zwischenablage kopiert.",
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("[SHARE] clipboard unavailable: {err}").into(),
                    );
                    "Link erzeugt."
                }
            };

            context.show_notice(ShareNotice {
                message: message.to_string(),
                url: share_url,
            });
        });
    }

    fn snapshot(&self) -> SheetState {
        SheetState {
            theme_id: self.store.theme_id().get_untracked(),
            columns: self.store.columns().get_untracked(),
            enforce_classic: self.store.enforce_classic().get_untracked(),
            selected_preset_ids: self.store.selected_preset_ids().get_untracked(),
            preview_options: self.store.preview_options().get_untracked(),
        }
    }
}
