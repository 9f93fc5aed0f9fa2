//! # verdictvault-ui
//!
//! Leptos + WASM frontend for VerdictVault, a legal-document
//! question-answering service. Users upload PDF contracts and case files,
//! trigger parsing and indexing, ask natural-language questions answered by
//! the backend's retrieval pipeline, and inspect citation provenance. Admins
//! get a usage/cost/latency dashboard.
//!
//! The crate contains pages, components, application state, the session
//! store, and the REST API client. All of the heavy lifting (PDF parsing,
//! embeddings, retrieval, answer generation) happens server-side; this crate
//! is the browser half of the conversation.
//!
//! Browser-only code is gated behind the `csr` feature so the crate also
//! compiles natively for unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
