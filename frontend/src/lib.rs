//! Upload CSV - Frontend Rust/Leptos Application
//!
//! A WebAssembly page with a single widget: pick or drop a CSV file, send
//! it to a processing endpoint, and download the file that comes back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title)                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CsvUploadWidget                                             │
//! │  ├── selection surface (picker, drag & drop, remove)        │
//! │  ├── validation (type, size)           -> validation.rs     │
//! │  └── transfer (POST, save as file)     -> services/         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint and limits
//! - [`types`] - Selected file, upload state, error outcomes
//! - [`validation`] - File type and size checks
//! - [`state`] - Widget-local state transitions
//! - [`components`] - UI components
//! - [`services`] - Upload and download

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    CandidateFile, SelectedFile, UploadState,
    // Errors
    UploadError, UploadResult,
};

// State
pub use state::WidgetState;

// Validation
pub use validation::validate_file;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and the panic hook, then mount [`App`] on `<body>`.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header title=APP_NAME/>

        <main class="container">
            <CsvUploadWidget/>
        </main>

        <Footer app_name=APP_NAME/>
    }
}
