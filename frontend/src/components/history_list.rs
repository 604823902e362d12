//! Upload history list, newest first.

use leptos::*;

use super::ResultCard;
use crate::{UploadContext, UploadResult};

/// Identity of a history entry for list diffing.
///
/// Independent of position, so prepending a batch leaves existing rows
/// in place.
fn history_key(item: &UploadResult) -> (i64, String, String) {
    (item.timestamp, item.url.clone(), item.name.clone())
}

#[component]
pub fn HistoryList() -> impl IntoView {
    let state = expect_context::<UploadContext>().state;
    let has_items = move || state.with(|s| !s.history.is_empty());

    view! {
        <Show
            when=has_items
            fallback=|| view! { }
        >
            <div class="history">
                <div class="history-header">
                    <span class="history-title">"Upload history"</span>
                    <span class="history-count">{move || state.with(|s| s.history.len())}</span>
                </div>
                <For
                    each=move || state.with(|s| s.history.clone())
                    key=history_key
                    children=move |item| view! { <ResultCard result=item/> }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, timestamp: i64) -> UploadResult {
        UploadResult {
            url: format!("https://cdn/x/{}", name),
            name: name.to_string(),
            size: 1,
            timestamp,
        }
    }

    #[test]
    fn test_keys_survive_prepend() {
        let before = vec![entry("a.png", 10), entry("b.png", 10)];
        let mut after = vec![entry("c.png", 20)];
        after.extend(before.iter().cloned());

        let old_keys: Vec<_> = before.iter().map(history_key).collect();
        let new_keys: Vec<_> = after[1..].iter().map(history_key).collect();
        assert_eq!(old_keys, new_keys);
    }

    #[test]
    fn test_batch_entries_have_distinct_keys() {
        let batch = [entry("a.png", 10), entry("b.png", 10), entry("a.png", 20)];
        let keys: Vec<_> = batch.iter().map(history_key).collect();
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[0], keys[2]);
    }
}
