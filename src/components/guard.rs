//! Route guards gating protected views on session state.
//!
//! Guards are pure functions of the session store, evaluated synchronously
//! at render time and re-evaluated on every navigation. A redirect is
//! emitted before any protected child renders, so gated pages never flash
//! or fire authenticated requests without a token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{LOGIN_PATH, SessionStore};

/// Default landing page for authenticated users.
pub const HOME_PATH: &str = "/upload";

/// Outcome of a guard check for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect(&'static str),
}

/// Any authenticated user may pass; everyone else goes to the login page.
pub fn require_auth(session: &SessionStore) -> Gate {
    if session.is_authenticated() {
        Gate::Allow
    } else {
        Gate::Redirect(LOGIN_PATH)
    }
}

/// Admins may pass; authenticated non-admins land on the default page, and
/// the signed-out go to login.
pub fn require_admin(session: &SessionStore) -> Gate {
    if !session.is_authenticated() {
        return Gate::Redirect(LOGIN_PATH);
    }
    if session.is_admin() {
        Gate::Allow
    } else {
        Gate::Redirect(HOME_PATH)
    }
}

/// Renders children only for authenticated sessions.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || match require_auth(&session) {
        Gate::Allow => children().into_any(),
        Gate::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Renders children only for admin sessions.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || match require_admin(&session) {
        Gate::Allow => children().into_any(),
        Gate::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
