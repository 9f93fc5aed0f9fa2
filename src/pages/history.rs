//! History page: the caller's past queries with their cost/latency stats.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::QueryLog;
use crate::util::format::{format_cost, format_timestamp};

/// Query history table, fetched on mount. Each row can re-run its query by
/// navigating to the ask page with the question pre-filled.
#[component]
pub fn HistoryPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let history = LocalResource::new(move || {
        let api = api.clone();
        async move { api.history().await }
    });

    view! {
        <div class="history-page">
            <header class="page__header">
                <h1>"Query History"</h1>
                <p class="page__subtitle">
                    "Your recent questions and their performance metrics"
                </p>
            </header>

            <section class="card">
                <Suspense fallback=move || view! { <p class="page__loading">"Loading history..."</p> }>
                    {move || {
                        let navigate = navigate.clone();
                        history.get().map(|result| match result {
                            Err(err) => view! {
                                <div class="alert alert--error">
                                    {err.user_message("Failed to load history")}
                                </div>
                            }
                            .into_any(),
                            Ok(page) if page.items.is_empty() => view! {
                                <p class="page__empty">"No query history found"</p>
                            }
                            .into_any(),
                            Ok(page) => history_table(page.items, navigate.clone()).into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

fn history_table(
    items: Vec<QueryLog>,
    navigate: impl Fn(&str, NavigateOptions) + Clone + 'static,
) -> impl IntoView {
    let rows = items
        .into_iter()
        .map(|item| {
            let rerun_target = format!("/ask?q={}", urlencoding::encode(&item.query));
            let nav = navigate.clone();
            view! {
                <tr>
                    <td>{format_timestamp(&item.created_at)}</td>
                    <td class="table__truncate">{item.query}</td>
                    <td>{item.model}</td>
                    <td>{format!("{} + {}", item.tokens_in, item.tokens_out)}</td>
                    <td>{format_cost(&item.cost_usd)}</td>
                    <td>{format!("{:.0}ms", item.latency_ms)}</td>
                    <td>
                        <span class=if item.cached { "badge badge--success" } else { "badge" }>
                            {if item.cached { "Yes" } else { "No" }}
                        </span>
                    </td>
                    <td>
                        <button class="btn btn--outline" on:click=move |_| {
                            nav(&rerun_target, NavigateOptions::default());
                        }>
                            "Re-run"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Query"</th>
                    <th>"Model"</th>
                    <th>"Tokens"</th>
                    <th>"Cost"</th>
                    <th>"Latency"</th>
                    <th>"Cached"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
