//! Root application component: shared state, startup refresh, and the
//! shell.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Guard;
use crate::components::layout::Layout;
use crate::components::loading::LoadingScreen;
use crate::components::toaster::Toaster;
use crate::net::auth_flow;
use crate::pages::{
    contacts::ContactsPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage,
};
use crate::state::contacts::ContactsState;
use crate::state::session::{SessionState, ShellPhase};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts, kicks off the startup session
/// refresh, and runs the shell state machine: only the loading screen is
/// rendered until the refresh settles, so no guard ever evaluates a
/// half-restored session. Once `Ready`, the full route tree mounts and
/// stays mounted; later login/logout cycles never bring the loading
/// screen back.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let contacts = RwSignal::new(ContactsState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(contacts);
    provide_context(ui);

    // Runs exactly once per application lifetime.
    auth_flow::spawn_session_refresh(session);

    let phase = RwSignal::new(ShellPhase::Restoring);
    Effect::new(move || {
        let settled = !session.get().is_refreshing;
        phase.update(|p| *p = p.advance(settled));
    });

    view! {
        <Title text="Phonebook"/>

        <Show
            when=move || phase.get() == ShellPhase::Ready
            fallback=|| view! { <LoadingScreen/> }
        >
            <Router>
                <Layout>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route
                            path=StaticSegment("registration")
                            view=|| view! {
                                <Guard require_authenticated=false redirect_to="/contacts">
                                    <RegisterPage/>
                                </Guard>
                            }
                        />
                        <Route
                            path=StaticSegment("login")
                            view=|| view! {
                                <Guard require_authenticated=false redirect_to="/contacts">
                                    <LoginPage/>
                                </Guard>
                            }
                        />
                        <Route
                            path=StaticSegment("contacts")
                            view=|| view! {
                                <Guard require_authenticated=true redirect_to="/login">
                                    <ContactsPage/>
                                </Guard>
                            }
                        />
                    </Routes>
                </Layout>
            </Router>
            <Toaster/>
        </Show>
    }
}
