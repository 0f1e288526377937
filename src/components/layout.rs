//! Page chrome: header with navigation and the main content area.

use leptos::prelude::*;

use crate::components::navigation::{AuthNav, Navigation, UserMenu};
use crate::state::session::SessionState;

/// Shared layout wrapping every routed page. The right side of the header
/// switches between auth links and the user menu with the session.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="layout">
            <header class="layout__header">
                <Navigation/>
                <Show when=move || session.get().is_logged_in fallback=|| view! { <AuthNav/> }>
                    <UserMenu/>
                </Show>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
