//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer" aria-label="App-Version">
            <small>{format!("Version {}", env!("CARGO_PKG_VERSION"))}</small>
        </footer>
    }
}
