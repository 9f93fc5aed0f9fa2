//! Upload page: pick a PDF, store it, then trigger parsing/indexing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::file_uploader::FileUploader;
use crate::net::api::ApiClient;
use crate::net::types::UploadResponse;

/// Two-step flow: upload (multipart) then parse. Parsing navigates straight
/// to the document's chunk view; "View Document" skips the parse for
/// already-indexed documents.
#[component]
pub fn UploadPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let uploaded = RwSignal::new(None::<UploadResponse>);
    let parsing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_uploaded = Callback::new(move |resp: UploadResponse| {
        error.set(None);
        uploaded.set(Some(resp));
    });

    let on_parse = {
        let api = api.clone();
        let navigate = navigate.clone();
        move |_| {
            let Some(doc) = uploaded.get() else {
                return;
            };
            if parsing.get() {
                return;
            }
            parsing.set(true);
            error.set(None);
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.parse_document(&doc.id).await {
                    Ok(_) => {
                        parsing.set(false);
                        navigate(&format!("/document/{}", doc.id), NavigateOptions::default());
                    }
                    Err(err) => {
                        parsing.set(false);
                        error.set(Some(err.user_message("Parsing failed. Please try again.")));
                    }
                }
            });
        }
    };

    let on_view = {
        let navigate = navigate.clone();
        move |_| {
            if let Some(doc) = uploaded.get() {
                navigate(&format!("/document/{}", doc.id), NavigateOptions::default());
            }
        }
    };

    view! {
        <div class="upload-page">
            <header class="page__header">
                <h1>"Upload Document"</h1>
                <p class="page__subtitle">
                    "Upload a PDF legal document to index it for question answering"
                </p>
            </header>

            <section class="card">
                <h3 class="card__title">"Select PDF Document"</h3>
                <FileUploader on_uploaded=on_uploaded/>
            </section>

            {move || error.get().map(|message| view! {
                <div class="alert alert--error">{message}</div>
            })}

            <Show when=move || uploaded.get().is_some()>
                <section class="card upload-page__result">
                    <h3 class="card__title">"Document Uploaded Successfully"</h3>
                    <p class="upload-page__doc-id">
                        {move || uploaded.get().map(|doc| format!("Document ID: {}", doc.id))}
                    </p>
                    <div class="upload-page__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || parsing.get()
                            on:click=on_parse.clone()
                        >
                            {move || if parsing.get() { "Parsing..." } else { "Parse Document Now" }}
                        </button>
                        <button class="btn btn--outline" on:click=on_view.clone()>
                            "View Document"
                        </button>
                    </div>
                </section>
            </Show>
        </div>
    }
}
