//! Contact list filter input.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Search input filtering the visible contacts by name or number.
#[component]
pub fn SearchBox() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <label class="search-box">
            "Find contacts"
            <input
                class="search-box__input"
                type="text"
                placeholder="Search by name or number..."
                prop:value=move || ui.get().filter
                on:input=move |ev| ui.update(|u| u.set_filter(event_target_value(&ev)))
            />
        </label>
    }
}
