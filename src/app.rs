//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::guard::{HOME_PATH, RequireAdmin, RequireAuth};
use crate::components::nav_bar::NavBar;
use crate::net::api::ApiClient;
use crate::pages::{
    admin::AdminPage, ask::AskPage, document::DocumentPage, history::HistoryPage,
    login::LoginPage, upload::UploadPage,
};
use crate::state::session::SessionStore;

/// Root application component.
///
/// Builds the session store and API client once at mount and provides both
/// through context, so pages and components receive them by injection rather
/// than reaching for globals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "csr")]
    let session = SessionStore::browser();
    #[cfg(not(feature = "csr"))]
    let session = SessionStore::in_memory();

    provide_context(session.clone());
    provide_context(ApiClient::new(session));

    view! {
        <Title text="VerdictVault"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("ask") view=AskPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=(StaticSegment("document"), ParamSegment("id")) view=DocumentPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=AdminShell>
                    <Route path=StaticSegment("") view=AdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Layout for routes any authenticated user may see.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <NavBar/>
            <main class="page">
                <Outlet/>
            </main>
        </RequireAuth>
    }
}

/// Layout for the admin-only dashboard.
#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <RequireAdmin>
            <NavBar/>
            <main class="page">
                <Outlet/>
            </main>
        </RequireAdmin>
    }
}
