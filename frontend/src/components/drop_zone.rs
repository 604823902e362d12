//! Image drop zone with file picker fallback.
//!
//! Dropped or selected files are filtered to images and handed to the
//! [`UploadContext`]. The zone ignores clicks while an upload is running.

use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::context::files_from_list;
use crate::{UploadContext, UploadStatus, MAX_FILE_SIZE};

/// Classes of the drop target for a status and drag state.
fn zone_class(status: UploadStatus, dragging: bool) -> String {
    let mut class = format!("upload-section {}", status.css_class());
    if dragging {
        class.push_str(" dragging");
    }
    if status.is_busy() {
        class.push_str(" busy");
    }
    class
}

#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = expect_context::<UploadContext>();
    let state = ctx.state;
    let (is_dragging, set_is_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let is_uploading = move || state.with(|s| s.status.is_busy());
    let is_success = move || state.with(|s| s.status == UploadStatus::Success);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drop = {
        let ctx = ctx.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragging.set(false);
            if is_uploading() {
                return;
            }
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                ctx.upload(files_from_list(&files));
            }
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            ctx.upload(files_from_list(&files));
        }
        // Reset so picking the same file again fires `change`
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if is_uploading() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let hint = format!("PNG, JPG, WebP up to {} MB", MAX_FILE_SIZE / 1024 / 1024);

    view! {
        <div class="uploader">
            <div
                class=move || zone_class(state.with(|s| s.status), is_dragging.get())
                id="uploadZone"
                on:dragover=on_drag_over
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
                on:click=trigger_file_input
            >
                <input
                    type="file"
                    id="fileInput"
                    node_ref=file_input
                    accept="image/*"
                    multiple=true
                    style="display:none"
                    on:change=on_file_change
                />

                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drop images here"</div>
                <div class="upload-hint">{hint}</div>

                <Show
                    when=is_uploading
                    fallback=|| view! { }
                >
                    <div class="upload-overlay">
                        <div class="spinner"></div>
                        <span>"Uploading..."</span>
                    </div>
                </Show>

                <Show
                    when=is_success
                    fallback=|| view! { }
                >
                    <div class="upload-overlay success">"✅ Uploaded"</div>
                </Show>
            </div>

            {move || {
                state.with(|s| s.error.clone()).map(|error| view! {
                    <div class="error-message">"⚠️ " {error}</div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_class_tracks_status() {
        assert_eq!(zone_class(UploadStatus::Idle, false), "upload-section status-idle");
        assert_eq!(
            zone_class(UploadStatus::Uploading, false),
            "upload-section status-uploading busy"
        );
        assert_eq!(
            zone_class(UploadStatus::Error, true),
            "upload-section status-error dragging"
        );
    }
}
