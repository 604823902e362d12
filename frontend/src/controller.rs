//! Upload orchestration.
//!
//! [`UploadController`] owns the upload status, the current error text and
//! the history list. The presentation layer reads snapshots through
//! [`UploadController::state`] and never mutates them directly.
//!
//! ```text
//!            submit            upload ok              SUCCESS_RESET_MS
//!   Idle ──────────▶ Uploading ─────────▶ Success ───────────────────▶ Idle
//!     ▲                  │
//!     │    submit        │ upload failed / file too large
//!     └──────────── Error ◀┘
//! ```
//!
//! Each submission takes a [`Ticket`]. Only the latest ticket may change
//! state; results of earlier, overlapping submissions are dropped.
//!
//! Every state change is pushed to the observer registered with
//! [`UploadController::subscribe`].

use std::cell::{Cell, RefCell};

use crate::config::MAX_FILE_SIZE;
use crate::services::storage::{HistoryStore, KeyValueStore};
use crate::services::upload::{UploadFile, Uploader};
use crate::types::{AppError, UploadResult, UploadStatus};

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Snapshot of the controller state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub status: UploadStatus,
    /// Newest first
    pub history: Vec<UploadResult>,
    /// Message of the last failure, cleared on the next submission
    pub error: Option<String>,
}

/// How a call to [`UploadController::submit`] ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// No files were given; nothing happened.
    Empty,
    /// Files were uploaded and added to the history. Pass the ticket to
    /// [`UploadController::settle`] once the success notice has been shown.
    Uploaded(Ticket),
    /// The upload failed; the state holds the error message.
    Failed(AppError),
    /// A newer submission started meanwhile; this result was discarded.
    Superseded,
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct UploadController<U, S> {
    uploader: U,
    store: HistoryStore<S>,
    state: RefCell<UploadState>,
    generation: Cell<u64>,
    clock: fn() -> i64,
    observer: RefCell<Option<Box<dyn Fn(UploadState)>>>,
}

impl<U: Uploader, S: KeyValueStore> UploadController<U, S> {
    /// Create a controller, restoring the history from `store`.
    pub fn new(uploader: U, store: S) -> Self {
        let store = HistoryStore::new(store);
        let history = store.load();

        Self {
            uploader,
            store,
            state: RefCell::new(UploadState {
                history,
                ..UploadState::default()
            }),
            generation: Cell::new(0),
            clock: now_millis,
            observer: RefCell::new(None),
        }
    }

    /// Replace the time source used to stamp new records.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Receive a snapshot after every state change. Replaces any previous
    /// observer.
    pub fn subscribe(&self, observer: impl Fn(UploadState) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> UploadStatus {
        self.state.borrow().status
    }

    pub fn history(&self) -> Vec<UploadResult> {
        self.state.borrow().history.clone()
    }

    /// Upload `files` and record the results.
    ///
    /// `files` must already be filtered to images.
    pub async fn submit(&self, files: Vec<U::File>) -> Submission {
        if files.is_empty() {
            log::debug!("Ignoring empty submission");
            return Submission::Empty;
        }

        let ticket = self.begin();

        if let Some(file) = files.iter().find(|f| f.size() > MAX_FILE_SIZE) {
            let error = AppError::FileTooLarge {
                name: file.name(),
                size: file.size(),
            };
            log::warn!("⚠️ {}", error);
            self.fail(&error);
            return Submission::Failed(error);
        }

        let outcome = self.uploader.upload(&files).await;

        if !self.is_current(ticket) {
            log::info!("⏭️ Discarding result of superseded upload {:?}", ticket);
            return Submission::Superseded;
        }

        match outcome {
            Ok(urls) if urls.len() == files.len() => {
                self.complete(&files, urls);
                Submission::Uploaded(ticket)
            }
            Ok(urls) => {
                log::error!("❌ Got {} URL(s) for {} file(s)", urls.len(), files.len());
                let error = AppError::InvalidResponse;
                self.fail(&error);
                Submission::Failed(error)
            }
            Err(error) => {
                log::error!("❌ {}", error);
                self.fail(&error);
                Submission::Failed(error)
            }
        }
    }

    /// Return to idle after a success, unless another submission has
    /// started since. Returns whether the status changed.
    pub fn settle(&self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        {
            let mut state = self.state.borrow_mut();
            if state.status != UploadStatus::Success {
                return false;
            }
            state.status = UploadStatus::Idle;
        }
        self.notify();
        true
    }

    /// Forget every uploaded asset. The upload status is left alone.
    pub fn clear_history(&self) {
        self.state.borrow_mut().history.clear();

        if let Err(e) = self.store.clear() {
            log::error!("❌ Failed to clear stored history: {}", e);
        }
        log::info!("🗑️ History cleared");
        self.notify();
    }

    fn begin(&self) -> Ticket {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        {
            let mut state = self.state.borrow_mut();
            state.status = UploadStatus::Uploading;
            state.error = None;
        }
        self.notify();

        Ticket(generation)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.get() == ticket.0
    }

    fn complete(&self, files: &[U::File], urls: Vec<String>) {
        let timestamp = (self.clock)();
        let mut history: Vec<UploadResult> = files
            .iter()
            .zip(urls)
            .map(|(file, url)| UploadResult {
                url,
                name: file.name(),
                size: file.size(),
                timestamp,
            })
            .collect();

        {
            let mut state = self.state.borrow_mut();
            history.append(&mut state.history);
            state.history = history;
            state.status = UploadStatus::Success;

            if let Err(e) = self.store.save(&state.history) {
                log::error!("❌ Failed to persist history: {}", e);
            }
        }
        log::info!("✅ Uploaded {} image(s)", files.len());
        self.notify();
    }

    fn fail(&self, error: &AppError) {
        {
            let mut state = self.state.borrow_mut();
            state.status = UploadStatus::Error;
            state.error = Some(error.user_message());
        }
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.state();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(snapshot);
        }
    }
}
