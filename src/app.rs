//! Zettel Generator App
//!
//! Main application component: seeds the store from the share URL (or
//! defaults), provides store and context, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::{ControlsPanel, Footer, HeroSection, PreviewPanel, ShareNotification};
use crate::context::AppContext;
use crate::store::SheetState;

const HERO_DESCRIPTION: &str = "Stelle deine Kategorien zusammen, wähle ein Thema und drucke \
                                deinen Block als A4-Seite im Querformat aus.";

#[component]
pub fn App() -> impl IntoView {
    let initial_state = browser::current_href()
        .map(|href| SheetState::from_href(&href))
        .unwrap_or_default();

    let store = Store::new(initial_state);
    let ctx = AppContext::new(store);

    // Provide store and context to all children
    provide_context(store);
    provide_context(ctx);

    view! {
        <main class="app-shell">
            {move || {
                ctx.current_notice().map(|notice| view! { <ShareNotification notice=notice /> })
            }}

            <HeroSection description=HERO_DESCRIPTION />

            <ControlsPanel />

            <PreviewPanel />

            <Footer />
        </main>
    }
}
