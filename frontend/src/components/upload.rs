//! CSV upload widget with drag & drop support.
//!
//! Handles file selection and validation, upload to the processing
//! endpoint, and download of the returned file.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::{save_file, upload_csv};
use crate::{UploadConfig, UploadResult, WidgetState};

#[component]
pub fn CsvUploadWidget(
    /// Overrides the configuration read from the host page.
    #[prop(optional)]
    config: Option<UploadConfig>,
) -> impl IntoView {
    let config = store_value(config.unwrap_or_else(UploadConfig::from_document));
    let state = create_rw_signal(WidgetState::<File>::default());
    let (dragging, set_dragging) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    log::info!("📡 CSV upload endpoint: {}", config.with_value(|c| c.endpoint.clone()));

    let accept_file = move |file: File| {
        let name = file.name();
        let outcome = config.with_value(|cfg| state.try_update(|s| s.select(file, cfg)));
        match outcome {
            Some(Ok(())) => log::info!("📄 Selected {}", name),
            Some(Err(e)) => log::warn!("Rejected {}: {}", name, e),
            None => {}
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file);
        }
        // Let the same file be picked again after removal.
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            accept_file(file);
        }
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = move |_| state.update(|s| s.remove());

    let on_upload = move |_| {
        let Some(file) = state.try_update(|s| s.begin_upload()).flatten() else {
            return;
        };
        let config = config.get_value();

        spawn_local(async move {
            log::info!("📤 Uploading {} to {}", file.name(), config.endpoint);

            let outcome: UploadResult<()> = match upload_csv(&file, &config).await {
                Ok(processed) => save_file(
                    &processed.bytes,
                    &processed.filename,
                    processed.content_type.as_deref(),
                )
                .map(|()| log::info!("✅ Downloaded result as {}", processed.filename)),
                Err(e) => Err(e),
            };

            if let Err(e) = &outcome {
                match e.detail() {
                    Some(detail) => log::error!("❌ Upload failed: {} ({})", e, detail),
                    None => log::error!("❌ Upload failed: {}", e),
                }
            }
            state.update(|s| s.finish_upload(outcome));
        });
    };

    let selected_name = move || state.with(|s| s.selected().map(|f| f.name.clone()));
    let is_uploading = move || state.with(|s| s.is_uploading());
    let error = move || state.with(|s| s.error_message());
    let (accept_filter, max_mb) = config.with_value(|c| (c.accept_filter.clone(), c.max_file_size_mb()));

    view! {
        <div class="upload-card">
            <div class="upload-icon">"📤"</div>

            <div
                class="drop-zone"
                class:dragging=move || dragging.get()
                on:dragover=on_drag_over
                on:dragleave=move |_| set_dragging.set(false)
                on:drop=on_drop
            >
                <p class="upload-text">"Drag and drop your CSV file here"</p>
                <input
                    type="file"
                    id="fileInput"
                    accept=accept_filter
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button type="button" class="browse-button" on:click=trigger_file_input>
                    "Browse"
                </button>
            </div>

            <Show
                when=move || selected_name().is_some()
                fallback=|| view! { }
            >
                <div class="selected-file">
                    <span class="selected-file-name">
                        {move || selected_name().unwrap_or_default()}
                    </span>
                    <button
                        type="button"
                        class="remove-button"
                        title="Remove file"
                        on:click=on_remove
                    >
                        "✕"
                    </button>
                </div>
            </Show>

            <div
                class="upload-hint"
                title=format!("Please ensure your CSV file is under {}MB in size.", max_mb)
            >
                "❔ " {format!("Max file size: {}MB", max_mb)}
            </div>

            <button
                type="button"
                class="upload-button"
                disabled=move || !state.with(|s| s.can_upload())
                on:click=on_upload
            >
                <Show
                    when=is_uploading
                    fallback=|| view! { "Upload" }
                >
                    <span class="spinner"></span>
                    "Uploading..."
                </Show>
            </button>

            <Show
                when=move || error().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    "⚠️ " {move || error().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
