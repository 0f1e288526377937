//! Filtered contact list with per-item edit and delete actions.

use leptos::prelude::*;

use crate::net::types::Contact;
use crate::state::contacts::{self, ContactsState};
use crate::state::ui::UiState;

/// Contacts matching the active filter, or an empty/loading hint.
#[component]
pub fn ContactList() -> impl IntoView {
    let state = expect_context::<RwSignal<ContactsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <ul class="contact-list">
            {move || {
                let snapshot = state.get();
                let visible = contacts::filtered(&snapshot.items, &ui.get().filter);
                if visible.is_empty() {
                    let hint = if snapshot.loading {
                        "Loading contacts..."
                    } else if snapshot.items.is_empty() {
                        "No contacts yet. Add your first one above."
                    } else {
                        "No contacts match your search."
                    };
                    return view! { <li class="contact-list__empty">{hint}</li> }.into_any();
                }
                visible
                    .into_iter()
                    .map(|contact| view! { <ContactItem contact=contact/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </ul>
    }
}

/// A single row: details plus edit/delete buttons that open the dialogs.
#[component]
fn ContactItem(contact: Contact) -> impl IntoView {
    let state = expect_context::<RwSignal<ContactsState>>();

    let on_edit = {
        let contact = contact.clone();
        move |_| state.update(|c| c.open_edit(contact.clone()))
    };
    let on_delete = {
        let contact = contact.clone();
        move |_| state.update(|c| c.open_delete(contact.clone()))
    };

    view! {
        <li class="contact-item">
            <div class="contact-item__details">
                <span class="contact-item__name">{contact.name.clone()}</span>
                <span class="contact-item__number">{contact.number.clone()}</span>
            </div>
            <div class="contact-item__actions">
                <button class="btn" on:click=on_edit>"Edit"</button>
                <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
