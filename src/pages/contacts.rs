//! Contacts page: add form, search, the list, and the dialogs.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::contact_list::ContactList;
use crate::components::delete_modal::DeleteModal;
use crate::components::edit_modal::EditModal;
use crate::components::search_box::SearchBox;
use crate::net::contacts_flow;
use crate::state::contacts::ContactsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// The private contacts page. Only mounted behind the authenticated
/// guard, so a bearer token is always available here.
#[component]
pub fn ContactsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contacts = expect_context::<RwSignal<ContactsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Load the list once on mount; the flow ignores duplicate triggers.
    Effect::new(move || {
        contacts_flow::spawn_fetch_contacts(session, contacts, ui);
    });

    view! {
        <div class="contacts-page">
            <h1 class="contacts-page__title">"Your contacts"</h1>
            <ContactForm/>
            <SearchBox/>
            <ContactList/>

            <Show when=move || contacts.get().edit_open>
                <EditModal/>
            </Show>
            <Show when=move || contacts.get().delete_open>
                <DeleteModal/>
            </Show>
        </div>
    }
}
