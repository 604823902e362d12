//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload & " <span class="accent">"Snap."</span></h1>
            <p class="subtitle">
                "Fast, secure and free image hosting. "
                "Drop your pictures and get shareable links instantly."
            </p>
        </div>
    }
}
