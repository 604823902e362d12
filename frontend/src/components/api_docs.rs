//! Developer panel describing the upload API.

use leptos::*;

use super::copy_with_feedback;
use crate::services::upload::curl_snippet;
use crate::types::format_megabytes;
use crate::{IMAGES_FIELD, MAX_FILE_SIZE, UPLOAD_ENDPOINT, UPLOAD_SERVER};

#[component]
pub fn ApiDocs() -> impl IntoView {
    let (copied, set_copied) = create_signal(false);
    let snippet = curl_snippet(UPLOAD_ENDPOINT, UPLOAD_SERVER);

    let copy_snippet = {
        let snippet = snippet.clone();
        move |_| copy_with_feedback(snippet.clone(), set_copied)
    };

    let facts = [
        ("HTTP Protocol", "POST".to_string()),
        ("Asset Key", IMAGES_FIELD.to_string()),
        ("Node Size", format_megabytes(MAX_FILE_SIZE)),
        ("Global TTL", "Infinity".to_string()),
    ];

    view! {
        <div class="api-docs" id="docs">
            <div class="api-intro">
                <span class="api-kicker">"Developer Core"</span>
                <h2>"Powerful API Infrastructure"</h2>
                <p>
                    "The same endpoint the dashboard uses. "
                    "Send one or more images in a single multipart request."
                </p>
            </div>

            <div class="api-code">
                <div class="api-code-header">
                    <button class="api-copy" on:click=copy_snippet>
                        {move || if copied.get() { "✓ Copied to clipboard" } else { "Copy cURL" }}
                    </button>
                </div>
                <pre><code>{snippet}</code></pre>
            </div>

            <div class="api-facts">
                {facts
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="api-fact">
                            <p class="api-fact-label">{label}</p>
                            <p class="api-fact-value">{value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
