//! Full-screen indicator shown while the session is being restored.

use leptos::prelude::*;

/// The only thing the shell renders before the startup refresh settles.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">"Restoring your session..."</p>
        </div>
    }
}
