//! UI Components for the CloudSnap application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand, API link and history reset
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DropZone`] - Image drop zone with file picker
//! - [`HistoryList`] - Uploaded assets, newest first
//! - [`ResultCard`] - One asset with copy/open actions
//! - [`ApiDocs`] - cURL snippet and endpoint facts

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::services::clipboard::copy_to_clipboard;
use crate::COPY_FEEDBACK_MS;

mod header;
mod hero;
mod drop_zone;
mod history_list;
mod result_card;
mod api_docs;
mod footer;

pub use header::*;
pub use hero::*;
pub use drop_zone::*;
pub use history_list::*;
pub use result_card::*;
pub use api_docs::*;
pub use footer::*;

/// Copy `text` and raise `copied` for [`COPY_FEEDBACK_MS`].
fn copy_with_feedback(text: String, copied: WriteSignal<bool>) {
    spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => {
                copied.set(true);
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                copied.set(false);
            }
            Err(e) => log::warn!("⚠️ {}", e),
        }
    });
}
