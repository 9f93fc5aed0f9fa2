//! PDF picker with drag-and-drop, local validation, and multipart upload.
//!
//! Validation happens before the file ever enters pending state: a wrong
//! MIME type or an oversized file is rejected on selection with no network
//! call. The browser `File` handle is not `Send`, so it lives in a local
//! stored value behind the `csr` feature; everything the view renders comes
//! from plain [`FileMeta`] signals.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::UploadResponse;
use crate::util::format::format_file_size;
use crate::util::upload::{FileMeta, validate_upload};

/// Drop zone + browse button + upload action. Calls `on_uploaded` with the
/// backend response once the document is stored.
#[component]
pub fn FileUploader(on_uploaded: Callback<UploadResponse>) -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let meta = RwSignal::new(None::<FileMeta>);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let drag_over = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let picked: StoredValue<Option<web_sys::File>, LocalStorage> = StoredValue::new_local(None);

    // Validate and stage a newly chosen file.
    #[cfg(feature = "csr")]
    let select = move |file: web_sys::File| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let candidate = FileMeta {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
        };
        match validate_upload(&candidate) {
            Ok(()) => {
                error.set(None);
                meta.set(Some(candidate));
                picked.set_value(Some(file));
            }
            Err(message) => {
                error.set(Some(message));
                meta.set(None);
                picked.set_value(None);
            }
        }
    };

    let on_file_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) {
                select(file);
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "csr")]
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            select(file);
        }
    };

    let on_clear = move |_| {
        meta.set(None);
        error.set(None);
        #[cfg(feature = "csr")]
        picked.set_value(None);
    };

    let on_upload = move |_| {
        if pending.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let Some(file) = picked.get_value() else {
                return;
            };
            let api = api.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.upload_pdf(&file).await {
                    Ok(resp) => {
                        pending.set(false);
                        on_uploaded.run(resp);
                    }
                    Err(err) => {
                        pending.set(false);
                        error.set(Some(err.user_message("Upload failed. Please try again.")));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&api, &on_uploaded);
    };

    view! {
        <div class="file-uploader">
            <div
                class=move || {
                    if drag_over.get() {
                        "file-uploader__zone file-uploader__zone--active"
                    } else {
                        "file-uploader__zone"
                    }
                }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(false);
                }
                on:drop=on_drop
            >
                <Show
                    when=move || meta.get().is_some()
                    fallback=|| view! {
                        <div class="file-uploader__prompt">
                            <p class="file-uploader__headline">"Upload PDF Document"</p>
                            <p class="file-uploader__hint">
                                "Drag and drop a PDF file here, or browse"
                            </p>
                        </div>
                    }
                >
                    {move || meta.get().map(|m| view! {
                        <div class="file-uploader__picked">
                            <p class="file-uploader__name">{m.name.clone()}</p>
                            <p class="file-uploader__size">{format_file_size(m.size)}</p>
                        </div>
                    })}
                </Show>
                <label class="btn btn--outline file-uploader__browse">
                    "Browse Files"
                    <input
                        class="file-uploader__input"
                        type="file"
                        accept=".pdf"
                        on:change=on_file_input
                    />
                </label>
            </div>

            <Show when=move || meta.get().is_some()>
                <div class="file-uploader__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=on_upload.clone()
                    >
                        {move || if pending.get() { "Uploading..." } else { "Upload Document" }}
                    </button>
                    <button class="btn" disabled=move || pending.get() on:click=on_clear>
                        "Change File"
                    </button>
                </div>
            </Show>

            {move || error.get().map(|message| view! {
                <p class="alert alert--error">{message}</p>
            })}
        </div>
    }
}
