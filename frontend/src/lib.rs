//! CloudSnap - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for hosting images on the iByte CDN and keeping
//! a local history of uploaded assets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (API link, clear history)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DropZone (file picker, status, error)                  │
//! │  ├── HistoryList (ResultCard per asset)                     │
//! │  └── ApiDocs (cURL snippet)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                 │
//!                 ▼
//!        UploadController ──▶ CdnUploader (multipart POST)
//!                 └─────────▶ HistoryStore (localStorage)
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadResult, UploadStatus, AppError)
//! - [`controller`] - Upload state machine and history ownership
//! - [`context`] - Controller shared with the components
//! - [`components`] - UI components (Header, DropZone, HistoryList, etc.)
//! - [`services`] - Browser services (upload, storage, clipboard)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod context;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // History
    UploadResult,
    // Status
    UploadStatus,
    // API
    ApiResponse, ApiResult,
    // Errors
    AppError, AppResult,
};

// Orchestration
pub use controller::{Submission, Ticket, UploadController, UploadState};
pub use context::{AppController, UploadContext};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the application. Called by the trunk binary.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 CloudSnap - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single owner of upload status and history
    provide_context(UploadContext::new());

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <DropZone/>
            <HistoryList/>
            <ApiDocs/>
        </div>

        <Footer/>
    }
}
