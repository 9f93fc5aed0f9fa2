//! Login page: email/password form against `POST /api/auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::HOME_PATH;
use crate::net::api::ApiClient;
use crate::net::types::LoginRequest;

/// Sign-in form. A successful login persists the session and lands on the
/// upload page; failures show the backend's detail message when it sent one.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let credentials = LoginRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return;
        }

        pending.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&credentials).await {
                Ok(resp) => {
                    let (token, user) = resp.into_user();
                    api.session().set_session(&token, &user);
                    pending.set(false);
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    pending.set(false);
                    error.set(Some(
                        err.user_message("Login failed. Please check your credentials."),
                    ));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__brand">"VerdictVault"</h1>
            <p class="login-page__tagline">"Legal document question answering"</p>

            <form class="login-page__form card" on:submit=on_submit>
                <label class="field">
                    "Email"
                    <input
                        class="field__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Password"
                    <input
                        class="field__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
                {move || error.get().map(|message| view! {
                    <div class="alert alert--error">{message}</div>
                })}
            </form>
        </div>
    }
}
