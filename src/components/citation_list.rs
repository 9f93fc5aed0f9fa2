//! Source citations under a generated answer.
//!
//! Rows keep the backend's ordering — it is the relevance rank. Scores come
//! from the backend too and are never recomputed here.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Citation;
use crate::util::format::snippet_preview;

const PREVIEW_CHARS: usize = 200;

/// Expandable citation cards with a jump into the source document.
#[component]
pub fn CitationList(citations: Vec<Citation>) -> impl IntoView {
    if citations.is_empty() {
        return view! {
            <div class="citation-list citation-list--empty">"No citations available"</div>
        }
        .into_any();
    }

    let navigate = use_navigate();
    let expanded = RwSignal::new(HashSet::<usize>::new());

    let rows = citations
        .into_iter()
        .enumerate()
        .map(|(index, citation)| {
            let preview = snippet_preview(&citation.snippet, PREVIEW_CHARS);
            let full = citation.snippet;
            let expandable = full.chars().count() > PREVIEW_CHARS;
            let doc_label: String = citation.doc_id.chars().take(8).collect();
            let target = format!("/document/{}?chunk={}", citation.doc_id, citation.chunk_index);
            let nav = navigate.clone();

            let toggle = move |_| {
                expanded.update(|set| {
                    if !set.insert(index) {
                        set.remove(&index);
                    }
                });
            };
            let snippet = move || {
                if expanded.get().contains(&index) {
                    full.clone()
                } else {
                    preview.clone()
                }
            };

            view! {
                <div class="citation-list__item">
                    <div class="citation-list__meta">
                        <span class="citation-list__rank">{index + 1}</span>
                        <span class="citation-list__source">
                            {format!("Document: {doc_label}... | Chunk: {}", citation.chunk_index)}
                        </span>
                        <span class="citation-list__score">
                            {format!("Score: {:.3}", citation.score)}
                        </span>
                    </div>
                    <p class="citation-list__snippet">{snippet}</p>
                    <div class="citation-list__actions">
                        <Show when=move || expandable>
                            <button class="btn btn--outline" on:click=toggle.clone()>
                                {move || {
                                    if expanded.get().contains(&index) { "Show Less" } else { "Show More" }
                                }}
                            </button>
                        </Show>
                        <button class="btn btn--outline" on:click=move |_| {
                            nav(&target, NavigateOptions::default());
                        }>
                            "View in Document"
                        </button>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="citation-list">
            <h3 class="citation-list__title">"Sources"</h3>
            {rows}
        </div>
    }
    .into_any()
}
