use leptos::*;

use crate::{UploadContext, APP_NAME};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<UploadContext>();
    let state = ctx.state;

    // Clearing is irreversible, ask first
    let on_clear = move |_| {
        let confirmed = window()
            .confirm_with_message("Clear the whole upload history?")
            .unwrap_or(false);

        if confirmed {
            ctx.clear_history();
        } else {
            log::debug!("Clear history cancelled");
        }
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <a href="#docs" class="header-link">"API"</a>
                <span class="header-divider"></span>
                <button
                    class="header-link header-clear"
                    on:click=on_clear
                    disabled=move || state.with(|s| s.history.is_empty())
                >
                    "Clear"
                </button>
            </div>
        </header>
    }
}
