//! Share Notification Component
//!
//! Transient banner shown after a share action; dismissal is driven by the
//! app context.

use leptos::prelude::*;

use crate::context::ShareNotice;

#[component]
pub fn ShareNotification(notice: ShareNotice) -> impl IntoView {
    view! {
        <div class="share-notification" role="status" aria-live="polite">
            <span>{notice.message}</span>
            <a href=notice.url target="_blank" rel="noreferrer">
                "Link öffnen"
            </a>
        </div>
    }
}
