//! Browser services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - Multipart image upload to the CDN
//! - [`storage`] - localStorage persistence of the upload history
//! - [`clipboard`] - `navigator.clipboard` access

pub mod upload;
pub mod storage;
pub mod clipboard;

pub use upload::*;
pub use storage::*;
pub use clipboard::*;
