//! Bridge between the [`UploadController`] and Leptos.
//!
//! The controller is created once in `<App/>` and shared through context.
//! Its snapshots are mirrored into a signal the components read from.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{File, FileList};

use crate::config::SUCCESS_RESET_MS;
use crate::controller::{Submission, UploadController, UploadState};
use crate::services::storage::BrowserStore;
use crate::services::upload::{retain_images, CdnUploader};

/// Controller wired to the real CDN and browser storage.
pub type AppController = UploadController<CdnUploader, BrowserStore>;

#[derive(Clone)]
pub struct UploadContext {
    controller: Rc<AppController>,
    /// Latest controller snapshot
    pub state: ReadSignal<UploadState>,
}

impl UploadContext {
    /// Build the controller, restore the history and start mirroring state.
    pub fn new() -> Self {
        let controller = Rc::new(UploadController::new(
            CdnUploader::default(),
            BrowserStore::open(),
        ));
        let (state, set_state) = create_signal(controller.state());
        controller.subscribe(move |snapshot| set_state.set(snapshot));

        log::info!("📂 {} asset(s) in history", controller.history().len());

        Self { controller, state }
    }

    /// Upload the image files among `files`. Non-images are dropped.
    pub fn upload(&self, files: Vec<File>) {
        let total = files.len();
        let files = retain_images(files);
        if files.len() < total {
            log::warn!("⚠️ Skipped {} non-image file(s)", total - files.len());
        }
        if files.is_empty() {
            return;
        }

        let controller = self.controller.clone();
        spawn_local(async move {
            if let Submission::Uploaded(ticket) = controller.submit(files).await {
                TimeoutFuture::new(SUCCESS_RESET_MS).await;
                controller.settle(ticket);
            }
        });
    }

    pub fn clear_history(&self) {
        self.controller.clear_history();
    }
}

/// Collect a `FileList` into owned handles.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
