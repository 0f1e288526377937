//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Landing page with a short pitch and an entry point that depends on the
/// session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Phonebook"</h1>
            <p class="home-page__pitch">
                "Keep every number that matters in one place, on every device."
            </p>
            <Show
                when=move || session.get().is_logged_in
                fallback=|| view! {
                    <p class="home-page__cta">
                        <a class="btn btn--primary" href="/login">"Log in"</a>
                        <a class="btn" href="/registration">"Create an account"</a>
                    </p>
                }
            >
                <p class="home-page__cta">
                    <a class="btn btn--primary" href="/contacts">"Go to your contacts"</a>
                </p>
            </Show>
        </div>
    }
}
