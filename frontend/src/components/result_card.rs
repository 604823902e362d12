//! A single uploaded asset with copy and open actions.

use leptos::*;

use super::copy_with_feedback;
use crate::UploadResult;

#[component]
pub fn ResultCard(result: UploadResult) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let url = result.url.clone();
    let copy_link = move |_| copy_with_feedback(url.clone(), set_copied);

    view! {
        <div class="result-card">
            <div class="result-thumb">
                <img src=result.url.clone() alt="preview" loading="lazy"/>
            </div>

            <div class="result-info">
                <h4 class="result-name" title=result.name.clone()>{result.name.clone()}</h4>
                <span class="result-size">{result.size_mb()}</span>
            </div>

            <div class="result-actions">
                <button
                    class="btn btn-copy"
                    class:copied=move || copied.get()
                    on:click=copy_link
                >
                    {move || if copied.get() { "✓ Copied" } else { "Copy link" }}
                </button>
                <a
                    class="btn btn-open"
                    href=result.url.clone()
                    target="_blank"
                    rel="noreferrer"
                    title="Open in new tab"
                >
                    "↗"
                </a>
            </div>
        </div>
    }
}
