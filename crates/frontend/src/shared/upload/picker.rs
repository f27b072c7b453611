use contracts::shared::upload::{UploadStatus, UploadTask};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::shared::icons::icon;

/// File input for images; hands the selection over and clears itself so the
/// same file can be picked again
#[component]
pub fn ImagePicker(
    /// Files of this form not uploaded yet
    #[prop(into)]
    pending: Signal<usize>,
    on_files: Callback<Vec<web_sys::File>>,
    #[prop(optional)] single: bool,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        input.set_value("");
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    view! {
        <div class="image-picker">
            <label class="button button--secondary image-picker__button">
                {icon("upload")}
                {if single { "Choose image" } else { "Add images" }}
                <input
                    type="file"
                    accept="image/*"
                    multiple=!single
                    style="display: none;"
                    on:change=on_change
                />
            </label>
            <Show when=move || { pending.get() > 0 }>
                <span class="image-picker__progress">
                    {move || format!("Uploading... ({} left)", pending.get())}
                </span>
            </Show>
        </div>
    }
}

/// Thumbnails in display order, each with a remove button
#[component]
pub fn ImageList(
    #[prop(into)] urls: Signal<Vec<String>>,
    on_remove: Callback<usize>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <div class="image-list">
            {title.map(|t| view! { <div class="image-list__title">{t}</div> })}
            <Show
                when=move || urls.with(|u| !u.is_empty())
                fallback=|| view! { <div class="image-list__empty">"No images"</div> }
            >
                <div class="image-list__grid">
                    {move || {
                        urls.get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, url)| {
                                view! {
                                    <div class="image-list__item">
                                        <img src=url.clone() alt="" />
                                        <button
                                            class="image-list__remove"
                                            title="Remove"
                                            on:click=move |_| on_remove.run(index)
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

fn status_label(task: &UploadTask) -> &'static str {
    match task.status {
        UploadStatus::Queued => "queued",
        UploadStatus::Uploading => "uploading",
        UploadStatus::Done => "done",
        UploadStatus::Failed => "failed",
    }
}

/// Per-file progress of the form's uploads plus the failure messages
#[component]
pub fn UploadQueue(
    #[prop(into)] tasks: Signal<Vec<UploadTask>>,
    #[prop(into)] errors: Signal<Vec<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || tasks.with(|t| t.iter().any(|task| !task.is_settled()))>
            <ul class="upload-queue">
                {move || {
                    tasks.get()
                        .into_iter()
                        .filter(|t| !t.is_settled())
                        .map(|t| {
                            let class = format!("upload-queue__item upload-queue__item--{}", status_label(&t));
                            view! {
                                <li class=class>{t.file_name.clone()}" - "{status_label(&t)}</li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
        <Show when=move || errors.with(|e| !e.is_empty())>
            <div class="error-message upload-errors">
                {move || errors.get().into_iter().map(|e| view! { <div>{e}</div> }).collect_view()}
                <button class="button button--ghost" on:click=move |_| on_dismiss.run(())>
                    "Dismiss"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::upload::UploadTaskId;

    #[test]
    fn test_status_labels() {
        let mut task = UploadTask::queued(UploadTaskId(1), "ring.jpg");
        assert_eq!(status_label(&task), "queued");
        task.status = UploadStatus::Failed;
        assert_eq!(status_label(&task), "failed");
    }
}
