//! Rendered answer: text, performance metrics, and citations.

use leptos::prelude::*;

use crate::components::citation_list::CitationList;
use crate::components::stat_badge::{BadgeVariant, StatBadge};
use crate::net::types::AnswerResponse;
use crate::util::format::format_cost;

/// Full answer card stack for one completed question.
#[component]
pub fn AnswerView(answer: AnswerResponse) -> impl IntoView {
    let AnswerResponse {
        answer: text,
        citations,
        provider,
        model,
        tokens_in,
        tokens_out,
        cost_usd,
        latency_ms,
        cached,
    } = answer;

    view! {
        <div class="answer-view">
            <section class="card">
                <h3 class="card__title">"Answer"</h3>
                <p class="answer-view__text">{text}</p>
            </section>

            <section class="card">
                <h3 class="card__title">"Performance Metrics"</h3>
                <div class="answer-view__badges">
                    <StatBadge label="Input Tokens" value=tokens_in.to_string() variant=BadgeVariant::Info/>
                    <StatBadge label="Output Tokens" value=tokens_out.to_string() variant=BadgeVariant::Info/>
                    <StatBadge label="Cost" value=format_cost(&cost_usd) variant=BadgeVariant::Warning/>
                    <StatBadge label="Latency" value=format!("{latency_ms:.0}") unit="ms"/>
                    <StatBadge label="Model" value=model/>
                    <StatBadge label="Provider" value=provider/>
                    {cached.then(|| view! {
                        <StatBadge label="Cached" value="Yes".to_owned() variant=BadgeVariant::Success/>
                    })}
                </div>
            </section>

            <section class="card">
                <CitationList citations=citations/>
            </section>
        </div>
    }
}
