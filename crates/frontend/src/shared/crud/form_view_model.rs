use contracts::domain::common::{EntityDraft, EntityRecord};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use super::ListViewModel;
use crate::shared::api::EntityApi;
use crate::shared::state::FormStore;
use crate::shared::upload::{ImageUploader, UploadCoordinator};

/// Create/edit form opened from a list screen
pub struct FormViewModel<D: EntityDraft> {
    pub form: RwSignal<FormStore<D>>,
    record: Option<D::Record>,
}

impl<D: EntityDraft> Clone for FormViewModel<D> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            record: self.record.clone(),
        }
    }
}

impl<D> FormViewModel<D>
where
    D: EntityDraft + Send + Sync + 'static,
    D::Record: Send + Sync + 'static,
    D::Payload: 'static,
{
    /// `None` opens an empty create form
    pub fn new(record: Option<D::Record>) -> Self {
        let store = match &record {
            Some(r) => FormStore::for_edit(r),
            None => FormStore::for_create(),
        };
        Self {
            form: RwSignal::new(store),
            record,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.record.is_some()
    }

    /// Tracked read of a draft field
    pub fn field<T>(&self, f: impl FnOnce(&D) -> T) -> T {
        self.form.with(|s| f(s.draft()))
    }

    pub fn edit(&self, f: impl FnOnce(&mut D)) {
        self.form.update(|s| s.edit(f));
    }

    /// Tracked text input bound to a draft field
    pub fn text(&self, get: fn(&D) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|s| get(s.draft()).clone()))
    }

    pub fn flag(&self, get: fn(&D) -> bool) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|s| get(s.draft())))
    }

    /// Input handler writing a draft field
    pub fn setter<T: 'static>(&self, set: fn(&mut D, T)) -> Callback<T> {
        let form = self.form;
        Callback::new(move |value| form.update(|s| s.edit(|d| set(d, value))))
    }

    pub fn can_submit(&self) -> bool {
        self.form.with(|s| s.can_submit())
    }

    /// Uploads or a save in progress
    pub fn is_busy(&self) -> bool {
        self.form.with(busy)
    }

    /// Same as [`Self::is_busy`] without subscribing; used by the modal guard
    pub fn is_busy_untracked(&self) -> bool {
        self.form.with_untracked(busy)
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|s| s.error().map(str::to_string)))
    }

    pub fn remove_image(&self, index: usize) {
        self.form.update(|s| {
            s.remove_image(index);
        });
    }

    /// Sends the picked files one by one; URLs land in the draft as they arrive
    pub fn upload<U>(&self, coordinator: Arc<UploadCoordinator<U>>, files: Vec<U::File>)
    where
        U: ImageUploader + 'static,
    {
        if files.is_empty() {
            return;
        }
        let form = self.form;
        spawn_local(async move {
            let results = coordinator.upload_all::<D, _>(files, &form).await;
            let failed = results.iter().filter(|r| !r.is_success()).count();
            if failed > 0 {
                log::warn!("{} of {} image(s) failed to upload", failed, results.len());
            }
        });
    }

    /// Validates, then creates or updates through the list so its table
    /// shows the confirmed record; `on_saved` runs only on success
    pub fn save<A>(&self, list: ListViewModel<A>, on_saved: Callback<()>)
    where
        A: EntityApi<Record = D::Record, Payload = D::Payload> + Send + Sync + 'static,
    {
        let form = self.form;
        let payload = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::debug!("{} not saved: {}", D::Record::element_name(), e);
                return;
            }
            None => return,
        };
        let id = form.with_untracked(|f| f.editing_id().map(str::to_string));

        spawn_local(async move {
            let result = list.save(id.as_deref(), &payload).await;
            let saved = result.is_ok();
            form.update(|f| f.finish_submit(result.map(|_| ())));
            if saved {
                on_saved.run(());
            }
        });
    }

    pub fn dismiss_upload_errors(&self) {
        self.form.update(|s| s.dismiss_upload_errors());
    }

    pub fn reset(&self) {
        let record = self.record.clone();
        let done = self.form.try_update(|s| s.reset(record.as_ref()));
        if done == Some(false) {
            log::debug!("{} form not reset: uploads still running", D::Record::element_name());
        }
    }
}

fn busy<D: EntityDraft>(form: &FormStore<D>) -> bool {
    form.pending_uploads() > 0 || form.is_submitting()
}
