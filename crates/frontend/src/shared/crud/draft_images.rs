use contracts::domain::common::EntityDraft;
use leptos::prelude::*;
use std::sync::Arc;

use super::FormViewModel;
use crate::shared::upload::{ImageList, ImagePicker, RestImageUploader, UploadCoordinator, UploadQueue};

/// Uploaded images of a draft: thumbnails, picker and per-file progress
#[component]
pub fn DraftImages<D>(
    vm: FormViewModel<D>,
    uploads: Arc<UploadCoordinator<RestImageUploader>>,
    #[prop(into, default = "Images".to_string())] label: String,
) -> impl IntoView
where
    D: EntityDraft + Send + Sync + 'static,
    D::Record: Send + Sync + 'static,
{
    let form = vm.form;
    let vm_remove = vm.clone();
    let vm_upload = vm.clone();
    let vm_dismiss = vm.clone();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <ImageList
                urls=Signal::derive(move || form.with(|f| f.image_urls().to_vec()))
                on_remove=Callback::new(move |i| vm_remove.remove_image(i))
            />
            <ImagePicker
                pending=Signal::derive(move || form.with(|f| f.pending_uploads()))
                on_files=Callback::new(move |files| vm_upload.upload(uploads.clone(), files))
            />
            <UploadQueue
                tasks=Signal::derive(move || form.with(|f| f.uploads().to_vec()))
                errors=Signal::derive(move || form.with(|f| f.upload_errors().to_vec()))
                on_dismiss=Callback::new(move |_| vm_dismiss.dismiss_upload_errors())
            />
        </div>
    }
}
