//! GWAS Header Standardizer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads GWAS summary files to the
//! standardization API and shows, for each file, a preview of its rows and
//! how its columns map onto the standard header.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  StandardizerPage (owns UploadState)                        │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadZone ──on_files──▶ upload_files ──▶ API          │
//! │  ├── LoadingNotice / ErrorBanner                            │
//! │  └── FileResultCard × N (one per uploaded file)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - API payload types (FileResult, Cell, ColumnMatch)
//! - [`selection`] - Which dropped files may be uploaded
//! - [`controller`] - Upload lifecycle state
//! - [`view_model`] - Display strings for result cards
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod selection;
pub mod services;
pub mod types;
pub mod view_model;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use controller::{Phase, UploadState, UploadTicket};
pub use error::{UploadError, UploadResult};
pub use types::{Cell, ColumnMapping, ColumnMatch, FileResult};

pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting {} (API: {})", APP_TITLE, api_base_url());

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=StandardizerPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn StandardizerPage() -> impl IntoView {
    let state = create_rw_signal(UploadState::default());

    let on_files = Callback::new(move |files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        let Some(ticket) = state.try_update(UploadState::begin) else {
            return;
        };

        let names: Vec<String> = files.iter().map(|f| f.name()).collect();
        log::info!("Uploading {} file(s): {}", files.len(), names.join(", "));

        spawn_local(async move {
            let outcome = upload_files(&files, api_base_url()).await;
            match &outcome {
                Ok(results) => log::info!("Received {} file result(s)", results.len()),
                Err(e) => log::error!("Upload failed: {}", e),
            }
            state.update(|s| {
                s.finish(ticket, outcome);
            });
        });
    });

    view! {
        <div class="container">
            <Hero/>

            <div class="upload-row">
                <UploadZone on_files=on_files/>
            </div>

            <Show
                when=move || state.with(UploadState::phase) == Phase::Loading
                fallback=|| view! { }
            >
                <LoadingNotice/>
            </Show>

            {move || state.with(|s| match (s.phase(), s.error()) {
                (Phase::Failed, Some(message)) => {
                    Some(view! { <ErrorBanner message=message.to_string()/> })
                }
                _ => None,
            })}

            <div class="results">
                {move || state.with(|s| {
                    s.results()
                        .iter()
                        .cloned()
                        .map(|result| view! { <FileResultCard result=result/> })
                        .collect_view()
                })}
            </div>
        </div>
    }
}
