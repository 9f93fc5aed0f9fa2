//! Top navigation bar for authenticated views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{LOGIN_PATH, SessionStore};

/// Brand, section links, current user, and logout. Only rendered inside the
/// authenticated shell, so the session is expected to be present; a missing
/// profile just leaves the greeting blank.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let name = session.user().map(|u| u.name).unwrap_or_default();
    let admin = session.is_admin();

    let on_logout = move |_| {
        session.clear();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/upload" class="nav-bar__brand">"VerdictVault"</a>
            <div class="nav-bar__links">
                <a href="/upload" class="nav-bar__link">"Upload"</a>
                <a href="/ask" class="nav-bar__link">"Ask"</a>
                <a href="/history" class="nav-bar__link">"History"</a>
                <Show when=move || admin>
                    <a href="/admin" class="nav-bar__link">"Admin"</a>
                </Show>
            </div>
            <div class="nav-bar__user">
                <span class="nav-bar__welcome">{format!("Welcome, {name}")}</span>
                <button class="btn btn--outline" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
