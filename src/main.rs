#![allow(warnings)]
//! Stadt-Land-Fluss Zettel Generator Entry Point

mod app;
mod browser;
mod catalog;
mod categories;
mod columns;
mod components;
mod context;
mod export;
mod models;
mod share;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
