//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **History Types** - Uploaded assets kept in local storage
//! - **Status Types** - Upload lifecycle
//! - **API Types** - CDN response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MAX_FILE_SIZE;

// =============================================================================
// History Types
// =============================================================================

/// A single uploaded asset.
///
/// Persisted as part of the history list; never modified once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Hosted location returned by the CDN
    pub url: String,
    /// Original file name
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Upload time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl UploadResult {
    /// Size formatted in megabytes, e.g. `"1.00 MB"`.
    pub fn size_mb(&self) -> String {
        format_megabytes(self.size)
    }
}

/// Format a byte count as megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

// =============================================================================
// Status Types
// =============================================================================

/// Upload lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Waiting for files
    #[default]
    Idle,
    /// Request in flight
    Uploading,
    /// Last upload succeeded
    Success,
    /// Last upload failed
    Error,
}

impl UploadStatus {
    /// Whether new submissions should be blocked in the UI.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "status-idle",
            UploadStatus::Uploading => "status-uploading",
            UploadStatus::Success => "status-success",
            UploadStatus::Error => "status-error",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// One entry of the CDN `results` array.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResult {
    /// Hosted URL
    pub url: String,
}

/// Response from the CDN upload endpoint.
///
/// `results` is aligned by position with the submitted files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<ApiResult>,
}

/// Error body returned by the CDN on failure.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Fallback text when the server gives no usable message.
pub const GENERIC_UPLOAD_ERROR: &str = "Failed to upload images. Please try again.";

/// Text shown when a 2xx body does not match [`ApiResponse`].
pub const INVALID_RESPONSE_ERROR: &str = "Invalid response format from server";

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Upload request failed (network or non-2xx).
    Upload(String),
    /// Success status but unusable body.
    InvalidResponse,
    /// File rejected before upload.
    FileTooLarge { name: String, size: u64 },
    /// Local storage failure.
    Storage(String),
    /// Clipboard access failed.
    Clipboard(String),
}

impl AppError {
    /// Message displayed to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Upload(msg) if msg.trim().is_empty() => GENERIC_UPLOAD_ERROR.to_string(),
            AppError::Upload(msg) => msg.clone(),
            AppError::InvalidResponse => INVALID_RESPONSE_ERROR.to_string(),
            AppError::FileTooLarge { name, size } => format!(
                "{} is too large ({}), the limit is {}",
                name,
                format_megabytes(*size),
                format_megabytes(MAX_FILE_SIZE)
            ),
            AppError::Storage(msg) => format!("Storage unavailable: {}", msg),
            AppError::Clipboard(msg) => format!("Could not copy: {}", msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::InvalidResponse => write!(f, "Upload error: {}", INVALID_RESPONSE_ERROR),
            AppError::FileTooLarge { name, size } => {
                write!(f, "Validation error: {} is {} bytes", name, size)
            }
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_entry_json_shape() {
        let entry = UploadResult {
            url: "https://cdn/x/a.png".into(),
            name: "a.png".into(),
            size: 1_048_576,
            timestamp: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["url"], "https://cdn/x/a.png");
        assert_eq!(value["name"], "a.png");
        assert_eq!(value["size"], 1_048_576);
        assert_eq!(value["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_history_entry_requires_all_fields() {
        let json = r#"{"url":"https://cdn/x/a.png","name":"a.png","size":12}"#;
        assert!(serde_json::from_str::<UploadResult>(json).is_err());
    }

    #[test]
    fn test_size_mb() {
        let entry = UploadResult {
            url: String::new(),
            name: String::new(),
            size: 2_097_152,
            timestamp: 0,
        };
        assert_eq!(entry.size_mb(), "2.00 MB");
        assert_eq!(format_megabytes(1_572_864), "1.50 MB");
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::Upload("node unavailable".into()).user_message(),
            "node unavailable"
        );
        assert_eq!(AppError::Upload("  ".into()).user_message(), GENERIC_UPLOAD_ERROR);
        assert_eq!(AppError::InvalidResponse.user_message(), INVALID_RESPONSE_ERROR);

        let too_large = AppError::FileTooLarge {
            name: "huge.png".into(),
            size: 30 * 1024 * 1024,
        };
        let msg = too_large.user_message();
        assert!(msg.contains("huge.png"));
        assert!(msg.contains("25.00 MB"));
    }

    #[test]
    fn test_status_css_classes_are_distinct() {
        let classes = [
            UploadStatus::Idle.css_class(),
            UploadStatus::Uploading.css_class(),
            UploadStatus::Success.css_class(),
            UploadStatus::Error.css_class(),
        ];
        assert_eq!(classes[1], "status-uploading");
        for (i, class) in classes.iter().enumerate() {
            assert!(class.starts_with("status-"));
            assert!(!classes[i + 1..].contains(class));
        }
    }

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(UploadStatus::default(), UploadStatus::Idle);
        assert!(UploadStatus::Uploading.is_busy());
        assert!(!UploadStatus::Error.is_busy());
    }
}
