//! Catch-all page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__title">"404"</h1>
            <p>"There is nothing at this address."</p>
            <a class="btn" href="/">"Back home"</a>
        </div>
    }
}
