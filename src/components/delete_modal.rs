//! Confirmation dialog for deleting a contact.

use leptos::prelude::*;

use crate::net::contacts_flow;
use crate::state::contacts::ContactsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Asks before a contact is removed. Mounted inside a `Show` gated on
/// `delete_open`; the selection is fixed at open time.
#[component]
pub fn DeleteModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contacts = expect_context::<RwSignal<ContactsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let target = contacts.get_untracked().current.unwrap_or_default();
    let id = target.id;
    let prompt = format!("Delete {} from your contacts?", target.name);

    let on_confirm = move |_| {
        contacts_flow::spawn_delete_contact(session, contacts, ui, id.clone());
    };
    let on_cancel = move |_| contacts.update(ContactsState::close_delete);

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{prompt}</h2>
                <p class="dialog__hint">"This cannot be undone."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>"Cancel"</button>
                    <button
                        class="btn btn--danger"
                        on:click=on_confirm
                        disabled=move || contacts.get().loading
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
