//! Admin dashboard: aggregate metrics and the recent query log.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{HourlyMetrics, MetricsSummary, ModelMetrics, QueryLog};
use crate::state::remote::zip;
use crate::util::format::{format_cost, format_cost_value, format_hour, format_timestamp};

/// How many query-log rows the backend is asked for.
const RECENT_LIMIT: u32 = 100;

/// How many of those rows the table shows.
const RECENT_SHOWN: usize = 20;

/// Dashboard behind `RequireAdmin`. The summary and recent-queries requests
/// run concurrently and join all-or-nothing: one failure fails the whole
/// load and shows a single error.
#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let data = LocalResource::new(move || {
        let api = api.clone();
        async move {
            let (summary, recent) =
                futures::future::join(api.metrics_summary(), api.recent_queries(RECENT_LIMIT))
                    .await;
            zip(summary, recent.map(|page| page.items))
        }
    });

    view! {
        <div class="admin-page">
            <header class="page__header">
                <h1>"Admin Dashboard"</h1>
                <p class="page__subtitle">"System performance metrics and analytics"</p>
            </header>

            <Suspense fallback=move || view! {
                <p class="page__loading">"Loading admin dashboard..."</p>
            }>
                {move || {
                    data.get().map(|result| match result {
                        Err(err) => view! {
                            <div class="alert alert--error">
                                {err.user_message("Failed to load admin data")}
                            </div>
                        }
                        .into_any(),
                        Ok((summary, recent)) => dashboard(summary, recent).into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

fn dashboard(summary: MetricsSummary, recent: Vec<QueryLog>) -> impl IntoView {
    let MetricsSummary {
        total_queries,
        cache_hit_rate,
        avg_cost_usd,
        p50_latency_ms,
        p95_latency_ms,
        by_model,
        last_24h,
    } = summary;

    view! {
        <div class="admin-page__stats">
            <StatCard label="Total Queries" value=total_queries.to_string()/>
            <StatCard
                label="Cache Hit Rate"
                value=format!("{cache_hit_rate:.1}%")
                tone=Tone::Success
            />
            <StatCard
                label="Avg Cost"
                value=format_cost_value(avg_cost_usd)
                tone=Tone::Warning
            />
            <StatCard label="P50 Latency" value=format!("{p50_latency_ms}ms")/>
            <StatCard label="P95 Latency" value=format!("{p95_latency_ms}ms")/>
        </div>
        {hourly_table(last_24h)}
        {model_table(by_model)}
        {recent_table(recent)}
    }
}

/// Visual emphasis for a stat card value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tone {
    #[default]
    Plain,
    Success,
    Warning,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Plain => "stat-card__value",
            Tone::Success => "stat-card__value stat-card__value--success",
            Tone::Warning => "stat-card__value stat-card__value--warning",
        }
    }
}

/// One headline figure on the dashboard.
#[component]
fn StatCard(label: &'static str, value: String, #[prop(optional)] tone: Tone) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <p class="stat-card__label">{label}</p>
            <p class=tone.class()>{value}</p>
        </div>
    }
}

fn hourly_table(last_24h: Vec<HourlyMetrics>) -> impl IntoView {
    let rows = last_24h
        .into_iter()
        .map(|bucket| {
            view! {
                <tr>
                    <td>{format_hour(&bucket.ts_hour)}</td>
                    <td>{bucket.n.to_string()}</td>
                    <td>{format_cost_value(bucket.avg_cost_usd)}</td>
                    <td>{format!("{:.0}ms", bucket.avg_latency_ms)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <h3 class="card__title">"Last 24 Hours"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Hour"</th>
                        <th>"Queries"</th>
                        <th>"Avg Cost"</th>
                        <th>"Avg Latency"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

fn model_table(by_model: Vec<ModelMetrics>) -> impl IntoView {
    let rows = by_model
        .into_iter()
        .map(|metrics| {
            view! {
                <tr>
                    <td>{metrics.model}</td>
                    <td>{metrics.n.to_string()}</td>
                    <td>{format_cost_value(metrics.avg_cost_usd)}</td>
                    <td>{format!("{}ms", metrics.p95_latency_ms)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <h3 class="card__title">"Performance by Model"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Model"</th>
                        <th>"Queries"</th>
                        <th>"Avg Cost"</th>
                        <th>"P95 Latency"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

fn recent_table(recent: Vec<QueryLog>) -> impl IntoView {
    let rows = recent
        .into_iter()
        .take(RECENT_SHOWN)
        .map(|entry| {
            view! {
                <tr>
                    <td>{format_timestamp(&entry.created_at)}</td>
                    <td>{entry.user_name.unwrap_or_else(|| "Unknown".to_owned())}</td>
                    <td class="table__truncate">{entry.query}</td>
                    <td>{entry.model}</td>
                    <td>{format_cost(&entry.cost_usd)}</td>
                    <td>{format!("{:.0}ms", entry.latency_ms)}</td>
                    <td>
                        <span class=if entry.cached { "badge badge--success" } else { "badge" }>
                            {if entry.cached { "Yes" } else { "No" }}
                        </span>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="card">
            <h3 class="card__title">"Recent Queries"</h3>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"User"</th>
                        <th>"Query"</th>
                        <th>"Model"</th>
                        <th>"Cost"</th>
                        <th>"Latency"</th>
                        <th>"Cached"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
