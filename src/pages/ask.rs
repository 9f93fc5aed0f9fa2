//! Ask page: question form and answer rendering.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::answer_view::AnswerView;
use crate::net::api::ApiClient;
use crate::net::types::{AnswerRequest, AnswerResponse};
use crate::state::remote::RemoteData;

/// Model choices offered in the form. "default" omits the field so the
/// backend picks its configured model.
const MODELS: [&str; 4] = ["default", "gpt-4o-mini", "gpt-4o", "gpt-3.5-turbo"];

/// Question form with retrieval knobs (`k`, `max_context_tokens`, model) and
/// the answer below it. A `?q=` query parameter pre-fills the question, which
/// is how History's re-run lands here.
#[component]
pub fn AskPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let initial_query = use_query_map().get_untracked().get("q").unwrap_or_default();

    let query = RwSignal::new(initial_query);
    let k = RwSignal::new(5u32);
    let max_context_tokens = RwSignal::new(2000u32);
    let model = RwSignal::new("default".to_owned());
    let answer = RwSignal::new(RemoteData::<AnswerResponse>::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let question = query.get().trim().to_owned();
        if question.is_empty() || answer.with(RemoteData::is_loading) {
            return;
        }

        let request = AnswerRequest {
            query: question,
            k: k.get(),
            max_context_tokens: max_context_tokens.get(),
            model: Some(model.get()).filter(|m| m.as_str() != "default"),
        };
        answer.set(RemoteData::Loading);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.ask(&request).await {
                Ok(resp) => answer.set(RemoteData::Ready(resp)),
                Err(err) => answer.set(RemoteData::Failed(
                    err.user_message("Failed to get answer. Please try again."),
                )),
            }
        });
    };

    view! {
        <div class="ask-page">
            <header class="page__header">
                <h1>"Ask Legal Questions"</h1>
                <p class="page__subtitle">
                    "Get answers grounded in your uploaded legal documents"
                </p>
            </header>

            <form class="card ask-page__form" on:submit=on_submit>
                <label class="field">
                    "Your Question"
                    <textarea
                        class="field__input ask-page__query"
                        rows="4"
                        placeholder="Ask a legal question based on your uploaded documents..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="ask-page__knobs">
                    <label class="field">
                        "Number of Sources (k)"
                        <input
                            class="field__input"
                            type="number"
                            min="1"
                            max="20"
                            prop:value=move || k.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    k.set(value);
                                }
                            }
                        />
                    </label>
                    <label class="field">
                        "Max Context Tokens"
                        <input
                            class="field__input"
                            type="number"
                            min="100"
                            max="8000"
                            prop:value=move || max_context_tokens.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    max_context_tokens.set(value);
                                }
                            }
                        />
                    </label>
                    <label class="field">
                        "Model"
                        <select
                            class="field__input"
                            prop:value=move || model.get()
                            on:change=move |ev| model.set(event_target_value(&ev))
                        >
                            {MODELS
                                .into_iter()
                                .map(|m| view! { <option value=m>{m}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || {
                        answer.with(RemoteData::is_loading) || query.get().trim().is_empty()
                    }
                >
                    {move || {
                        if answer.with(RemoteData::is_loading) {
                            "Getting Answer..."
                        } else {
                            "Ask Question"
                        }
                    }}
                </button>
            </form>

            {move || match answer.get() {
                RemoteData::Idle | RemoteData::Loading => ().into_any(),
                RemoteData::Failed(message) => {
                    view! { <div class="alert alert--error">{message}</div> }.into_any()
                }
                RemoteData::Ready(resp) => view! { <AnswerView answer=resp/> }.into_any(),
            }}
        </div>
    }
}
