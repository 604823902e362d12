//! Application configuration.
//!
//! Centralized configuration for the CloudSnap frontend.
//! Values are compiled in; the CDN endpoint and shard are fixed by the
//! upload API contract.

/// CDN upload endpoint.
///
/// Receives `multipart/form-data` POST requests.
pub const UPLOAD_ENDPOINT: &str = "https://cfig.ibytecdn.org/upload";

/// Value of the `server` form field.
///
/// Selects the upload node, constant across requests.
pub const UPLOAD_SERVER: &str = "server_1";

/// Form field name under which every image is attached.
pub const IMAGES_FIELD: &str = "images[]";

/// Form field name of the shard selector.
pub const SERVER_FIELD: &str = "server";

/// localStorage key holding the upload history.
pub const HISTORY_KEY: &str = "cs_history_v5";

/// Maximum file size accepted for upload (in bytes).
///
/// 25 MB limit, checked before the request is sent.
pub const MAX_FILE_SIZE: u64 = 25 * 1024 * 1024;

/// Delay before the status goes back to idle after a successful upload.
pub const SUCCESS_RESET_MS: u32 = 1_500;

/// How long a "copied" confirmation stays visible.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Application name, used for the page title and header.
pub const APP_NAME: &str = "CloudSnap";
