//! Document page: chunk listing with local search and highlighting.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::net::api::ApiClient;
use crate::net::types::DocumentChunk;

/// Chunk viewer for one document. Reads the document id from the route and
/// an optional `?chunk=` parameter naming a chunk to highlight (citations
/// link here that way). The search box filters chunk content locally.
#[component]
pub fn DocumentPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let highlighted = RwSignal::new(
        use_query_map()
            .get_untracked()
            .get("chunk")
            .and_then(|raw| raw.parse::<u32>().ok()),
    );
    let search = RwSignal::new(String::new());

    let document = LocalResource::new(move || {
        let api = api.clone();
        let doc_id = params.read().get("id").unwrap_or_default();
        async move { api.document_chunks(&doc_id).await }
    });

    view! {
        <div class="document-page">
            <Suspense fallback=move || view! { <p class="page__loading">"Loading document..."</p> }>
                {move || {
                    document.get().map(|result| match result {
                        Err(err) => view! {
                            <div class="alert alert--error">
                                {err.user_message("Failed to load document")}
                            </div>
                        }
                        .into_any(),
                        Ok(doc) => {
                            let term = search.get().to_lowercase();
                            let matching: Vec<DocumentChunk> = doc
                                .chunks
                                .into_iter()
                                .filter(|chunk| {
                                    term.is_empty() || chunk.content.to_lowercase().contains(&term)
                                })
                                .collect();
                            let none_matching = matching.is_empty() && !term.is_empty();

                            view! {
                                <header class="page__header">
                                    <h1>"Document Chunks"</h1>
                                    <p class="page__subtitle">
                                        {format!(
                                            "Document ID: {} | Total Chunks: {}",
                                            doc.doc_id, doc.total_chunks
                                        )}
                                    </p>
                                </header>

                                <section class="card">
                                    <h3 class="card__title">"Search Chunks"</h3>
                                    <input
                                        class="field__input"
                                        type="text"
                                        placeholder="Search within chunks..."
                                        prop:value=move || search.get()
                                        on:input=move |ev| search.set(event_target_value(&ev))
                                    />
                                </section>

                                <div class="document-page__chunks">
                                    {matching
                                        .into_iter()
                                        .map(|chunk| chunk_card(chunk, highlighted))
                                        .collect::<Vec<_>>()}
                                </div>

                                <Show when=move || none_matching>
                                    <p class="page__empty">"No chunks match the search"</p>
                                </Show>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

fn chunk_card(chunk: DocumentChunk, highlighted: RwSignal<Option<u32>>) -> impl IntoView {
    let index = chunk.chunk_index;
    view! {
        <div class=move || {
            if highlighted.get() == Some(index) {
                "card chunk-card chunk-card--highlighted"
            } else {
                "card chunk-card"
            }
        }>
            <div class="chunk-card__header">
                <h3 class="card__title">{format!("Chunk {index}")}</h3>
                <div class="chunk-card__meta">
                    <span class="chunk-card__embedding">
                        {format!("Embedding: {} dimensions", chunk.embedding_length)}
                    </span>
                    <button
                        class="btn btn--outline"
                        on:click=move |_| highlighted.set(Some(index))
                    >
                        "Highlight"
                    </button>
                </div>
            </div>
            <p class="chunk-card__content">{chunk.content}</p>
        </div>
    }
}
