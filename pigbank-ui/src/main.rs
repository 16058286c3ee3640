//! Pigbank
//!
//! Expense tracker front-end built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Route resolution uses the `pigbank` route table in history
//! mode; shared state lives in Leptos context as one signal per slice.

use leptos::*;
use wasm_bindgen::JsCast;

mod app;
mod components;
mod pages;
mod routing;
mod state;

/// Id of the host element the app mounts into
const MOUNT_ID: &str = "app";

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Startup failures abort before anything is mounted
    let routing = match routing::Routing::new(routing::BASE_URL) {
        Ok(routing) => routing,
        Err(e) => {
            web_sys::console::error_1(&format!("Route configuration error: {e}").into());
            return;
        }
    };

    let Some(root) = document()
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        web_sys::console::error_1(&format!("Mount target not found: #{MOUNT_ID}").into());
        return;
    };

    mount_to(root, move || view! { <app::App routing=routing /> });
}
