//! Hero Section Component

use leptos::prelude::*;

#[component]
pub fn HeroSection(description: &'static str) -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Stadt-Land-Fluss Zettel Generator"</h1>
            <p>{description}</p>
        </header>
    }
}
