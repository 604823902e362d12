//! Image upload to the CDN.
//!
//! All files go out in a single `multipart/form-data` POST. The CDN answers
//! with one URL per file, in submission order; there is no other
//! correlation between files and results.

use gloo_net::http::Request;
use web_sys::{Blob, File, FormData};

use crate::config::{IMAGES_FIELD, SERVER_FIELD, UPLOAD_ENDPOINT, UPLOAD_SERVER};
use crate::types::{ApiErrorBody, ApiResponse, AppError, AppResult, GENERIC_UPLOAD_ERROR};

/// A file handle that can be uploaded.
pub trait UploadFile {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    fn mime_type(&self) -> String;
}

impl UploadFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        Blob::type_(self)
    }
}

/// Sends a batch of files and returns their hosted URLs, same length and
/// same order as `files`.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    type File: UploadFile;

    async fn upload(&self, files: &[Self::File]) -> AppResult<Vec<String>>;
}

/// Browser uploader targeting the CDN endpoint.
#[derive(Clone, Debug)]
pub struct CdnUploader {
    endpoint: String,
    server: String,
}

impl Default for CdnUploader {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT, UPLOAD_SERVER)
    }
}

impl CdnUploader {
    pub fn new(endpoint: &str, server: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            server: server.to_string(),
        }
    }

    fn build_form(&self, files: &[File]) -> Result<FormData, String> {
        let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;

        for file in files {
            form_data
                .append_with_blob_and_filename(IMAGES_FIELD, file, &File::name(file))
                .map_err(|e| format!("Failed to append {}: {:?}", File::name(file), e))?;
        }

        form_data
            .append_with_str(SERVER_FIELD, &self.server)
            .map_err(|e| format!("Failed to append server field: {:?}", e))?;

        Ok(form_data)
    }
}

impl Uploader for CdnUploader {
    type File = File;

    async fn upload(&self, files: &[File]) -> AppResult<Vec<String>> {
        let form_data = self.build_form(files).map_err(|e| {
            log::error!("❌ {}", e);
            AppError::Upload(GENERIC_UPLOAD_ERROR.to_string())
        })?;

        log::info!("📤 Uploading {} image(s) to {}", files.len(), self.endpoint);

        let request = Request::post(&self.endpoint).body(form_data).map_err(|e| {
            log::error!("❌ Failed to build request: {}", e);
            AppError::Upload(GENERIC_UPLOAD_ERROR.to_string())
        })?;

        let response = request.send().await.map_err(|e| {
            log::error!("❌ HTTP request failed: {}", e);
            AppError::Upload(GENERIC_UPLOAD_ERROR.to_string())
        })?;

        let body = response.text().await.unwrap_or_default();

        if !response.ok() {
            log::error!("❌ Server error ({}): {}", response.status(), body);
        }

        map_response(response.ok(), &body, files.len())
    }
}

/// Turn an HTTP outcome into URLs or an error.
///
/// `ok` is whether the status was 2xx. Failed requests carry the body's
/// message when it has one.
pub fn map_response(ok: bool, body: &str, expected: usize) -> AppResult<Vec<String>> {
    if !ok {
        return Err(AppError::Upload(failure_message(body)));
    }

    parse_upload_response(body, expected)
}

/// Map a successful response body to URLs.
///
/// Fails with [`AppError::InvalidResponse`] when `results` is missing,
/// malformed, or does not hold exactly `expected` entries.
pub fn parse_upload_response(body: &str, expected: usize) -> AppResult<Vec<String>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("❌ Failed to parse response: {}", e);
        AppError::InvalidResponse
    })?;

    if response.results.len() != expected {
        log::error!(
            "❌ Server returned {} result(s) for {} file(s)",
            response.results.len(),
            expected
        );
        return Err(AppError::InvalidResponse);
    }

    Ok(response.results.into_iter().map(|r| r.url).collect())
}

/// User-facing message for a failed request: the body's `message` if it
/// has one, the generic text otherwise.
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_UPLOAD_ERROR.to_string())
}

/// Whether a MIME type denotes an image.
pub fn is_image(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

/// Keep only image files, preserving order.
pub fn retain_images<F: UploadFile>(files: Vec<F>) -> Vec<F> {
    files.into_iter().filter(|f| is_image(&f.mime_type())).collect()
}

/// cURL equivalent of an upload, shown in the API panel.
pub fn curl_snippet(endpoint: &str, server: &str) -> String {
    format!(
        "curl -X POST \"{}\" \\\n  -F \"{}=@photo.jpg\" \\\n  -F \"{}={}\"",
        endpoint, IMAGES_FIELD, SERVER_FIELD, server
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INVALID_RESPONSE_ERROR;

    struct FakeFile {
        name: &'static str,
        mime: &'static str,
    }

    impl UploadFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            0
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    #[test]
    fn test_response_maps_urls_in_order() {
        let body = r#"{"results":[{"url":"https://cdn/x/a.png"},{"url":"https://cdn/x/b.jpg"}]}"#;
        let urls = parse_upload_response(body, 2).unwrap();
        assert_eq!(urls, vec!["https://cdn/x/a.png", "https://cdn/x/b.jpg"]);
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let body = r#"{"status":"ok","results":[{"url":"https://cdn/x/a.png","id":7}]}"#;
        assert_eq!(parse_upload_response(body, 1).unwrap(), vec!["https://cdn/x/a.png"]);
    }

    #[test]
    fn test_response_without_results_is_invalid() {
        for body in [r#"{"data":[]}"#, r#"{"results":"nope"}"#, r#"{"results":[{}]}"#, "<html>"] {
            let err = parse_upload_response(body, 1).unwrap_err();
            assert_eq!(err, AppError::InvalidResponse, "body = {}", body);
            assert_eq!(err.user_message(), INVALID_RESPONSE_ERROR);
        }
    }

    #[test]
    fn test_response_length_mismatch_is_invalid() {
        let body = r#"{"results":[{"url":"https://cdn/x/a.png"}]}"#;
        assert_eq!(parse_upload_response(body, 2), Err(AppError::InvalidResponse));
    }

    #[test]
    fn test_server_error_uses_body_message() {
        let result = map_response(false, r#"{"message":"node unavailable"}"#, 2);
        assert_eq!(result, Err(AppError::Upload("node unavailable".into())));
        assert_eq!(result.unwrap_err().user_message(), "node unavailable");
    }

    #[test]
    fn test_server_error_without_message_is_generic() {
        let result = map_response(false, "<html>502 Bad Gateway</html>", 1);
        assert_eq!(result, Err(AppError::Upload(GENERIC_UPLOAD_ERROR.into())));
    }

    #[test]
    fn test_error_status_wins_over_valid_body() {
        let body = r#"{"results":[{"url":"https://cdn/x/a.png"}]}"#;
        assert!(matches!(map_response(false, body, 1), Err(AppError::Upload(_))));
        assert_eq!(map_response(true, body, 1).unwrap(), vec!["https://cdn/x/a.png"]);
    }

    #[test]
    fn test_failure_message_prefers_server_message() {
        assert_eq!(failure_message(r#"{"message":"node unavailable"}"#), "node unavailable");
    }

    #[test]
    fn test_failure_message_falls_back_to_generic() {
        let bodies = [
            "",
            "Bad Gateway",
            r#"{"error":"x"}"#,
            r#"{"message":""}"#,
            r#"{"message":42}"#,
        ];
        for body in bodies {
            assert_eq!(failure_message(body), GENERIC_UPLOAD_ERROR, "body = {}", body);
        }
    }

    #[test]
    fn test_retain_images() {
        let files = vec![
            FakeFile { name: "a.png", mime: "image/png" },
            FakeFile { name: "notes.txt", mime: "text/plain" },
            FakeFile { name: "b.webp", mime: "image/webp" },
            FakeFile { name: "blob", mime: "" },
        ];
        let kept: Vec<String> = retain_images(files).iter().map(|f| f.name()).collect();
        assert_eq!(kept, vec!["a.png", "b.webp"]);
    }

    #[test]
    fn test_curl_snippet() {
        let snippet = curl_snippet(UPLOAD_ENDPOINT, UPLOAD_SERVER);
        assert!(snippet.starts_with("curl -X POST \"https://cfig.ibytecdn.org/upload\""));
        assert!(snippet.contains("-F \"images[]=@photo.jpg\""));
        assert!(snippet.contains("-F \"server=server_1\""));
    }
}
