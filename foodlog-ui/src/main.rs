//! Food Log Widget
//!
//! Browser frontend for the food-log service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Date picker with previous/next day navigation
//! - Entries logged on the selected day
//! - Daily total, with progress towards nutrition targets
//! - Quick add ("apple 150")
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the food-log API over HTTP; the model, input
//! parsing and endpoint paths are shared with the `foodlog` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
