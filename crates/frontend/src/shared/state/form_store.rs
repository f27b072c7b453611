//! Form State Store: the draft of one create/edit form and the uploads
//! feeding its image list.

use contracts::domain::common::{EntityDraft, EntityRecord};
use contracts::shared::upload::{UploadResult, UploadStatus, UploadTask, UploadTaskId};
use contracts::shared::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please wait until all images are uploaded")]
    UploadsInFlight,
    #[error("Already saving")]
    AlreadySubmitting,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormStore<D: EntityDraft> {
    draft: D,
    mode: FormMode,
    uploads: Vec<UploadTask>,
    in_flight: usize,
    submitting: bool,
    upload_errors: Vec<String>,
    error: Option<String>,
}

impl<D: EntityDraft> Default for FormStore<D> {
    fn default() -> Self {
        Self::for_create()
    }
}

impl<D: EntityDraft> FormStore<D> {
    pub fn for_create() -> Self {
        Self::with_draft(D::default(), FormMode::Create)
    }

    /// Draft is a field-by-field copy; the record is never touched afterwards
    pub fn for_edit(record: &D::Record) -> Self {
        Self::with_draft(
            D::from_record(record),
            FormMode::Edit {
                id: record.id().to_string(),
            },
        )
    }

    fn with_draft(draft: D, mode: FormMode) -> Self {
        Self {
            draft,
            mode,
            uploads: Vec::new(),
            in_flight: 0,
            submitting: false,
            upload_errors: Vec::new(),
            error: None,
        }
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn uploads(&self) -> &[UploadTask] {
        &self.uploads
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Tasks of running batches not settled yet, queued ones included
    pub fn pending_uploads(&self) -> usize {
        self.uploads.iter().filter(|t| !t.is_settled()).count()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn image_urls(&self) -> &[String] {
        self.draft.image_urls()
    }

    pub fn upload_errors(&self) -> &[String] {
        &self.upload_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submission gate
    pub fn can_submit(&self) -> bool {
        self.in_flight == 0 && !self.submitting
    }

    // ============================================================================
    // Draft edits
    // ============================================================================

    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
        self.error = None;
    }

    /// Explicit user removal; the remaining images keep their order
    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        self.draft.remove_image_url(index)
    }

    // ============================================================================
    // Upload bookkeeping
    // ============================================================================

    pub fn queue_uploads(&mut self, tasks: impl IntoIterator<Item = UploadTask>) {
        self.uploads.extend(tasks);
    }

    pub fn upload_started(&mut self, id: UploadTaskId) {
        if let Some(task) = self.task_mut(id) {
            task.status = UploadStatus::Uploading;
            self.in_flight += 1;
        }
    }

    /// Settles the task: a URL is appended to the draft, a failure is kept
    /// as a message naming the file
    pub fn upload_finished(&mut self, id: UploadTaskId, result: &UploadResult) {
        let Some(task) = self.task_mut(id) else {
            return;
        };
        let was_uploading = task.status == UploadStatus::Uploading;
        match result {
            UploadResult::Uploaded { url, .. } => {
                task.status = UploadStatus::Done;
                task.result_url = Some(url.clone());
            }
            UploadResult::Failed { error, .. } => {
                task.status = UploadStatus::Failed;
                task.error = Some(error.clone());
            }
        }
        if was_uploading {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        match result {
            UploadResult::Uploaded { url, .. } => self.draft.push_image_url(url.clone()),
            UploadResult::Failed { .. } => {
                if let Some(message) = result.failure_message() {
                    self.upload_errors.push(message);
                }
            }
        }
    }

    pub fn dismiss_upload_errors(&mut self) {
        self.upload_errors.clear();
    }

    fn task_mut(&mut self, id: UploadTaskId) -> Option<&mut UploadTask> {
        self.uploads.iter_mut().find(|t| t.id == id)
    }

    // ============================================================================
    // Submission
    // ============================================================================

    /// Checks the gate and validates; on success the form is marked pending
    pub fn begin_submit(&mut self) -> Result<D::Payload, SubmitError> {
        if self.in_flight > 0 {
            return Err(SubmitError::UploadsInFlight);
        }
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                self.error = None;
                Ok(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(SubmitError::Invalid(e))
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submitting = false;
        self.error = outcome.err();
    }

    /// Back to the initial state of the current mode; upload tasks are dropped
    ///
    /// Refused (returns false) while a batch is still running, since its
    /// requests cannot be cancelled and must keep the gate closed.
    pub fn reset(&mut self, record: Option<&D::Record>) -> bool {
        if self.pending_uploads() > 0 {
            return false;
        }
        *self = match record {
            Some(record) => Self::for_edit(record),
            None => Self::for_create(),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryDraft};

    fn queued(store: &mut FormStore<CategoryDraft>, ids: &[u64]) {
        store.queue_uploads(
            ids.iter()
                .map(|id| UploadTask::queued(UploadTaskId(*id), format!("f{id}.jpg"))),
        );
    }

    fn ok(file: &str, url: &str) -> UploadResult {
        UploadResult::Uploaded {
            source_file: file.into(),
            url: url.into(),
        }
    }

    fn filled() -> FormStore<CategoryDraft> {
        let mut store = FormStore::<CategoryDraft>::for_create();
        store.edit(|d| {
            d.category_id = "RINGS".into();
            d.name = "Rings".into();
        });
        store
    }

    #[test]
    fn test_gate_closed_while_upload_in_flight() {
        let mut store = filled();
        queued(&mut store, &[1, 2]);
        assert!(store.can_submit());

        store.upload_started(UploadTaskId(1));
        assert_eq!(store.in_flight(), 1);
        assert!(!store.can_submit());
        assert_eq!(store.begin_submit(), Err(SubmitError::UploadsInFlight));

        store.upload_finished(UploadTaskId(1), &ok("f1.jpg", "u1"));
        assert_eq!(store.in_flight(), 0);
        assert!(store.can_submit());
        assert!(store.begin_submit().is_ok());
    }

    #[test]
    fn test_pending_submit_blocks_second_submit() {
        let mut store = filled();
        store.begin_submit().unwrap();
        assert!(!store.can_submit());
        assert_eq!(store.begin_submit(), Err(SubmitError::AlreadySubmitting));

        store.finish_submit(Err("Category ID exists".into()));
        assert!(store.can_submit());
        assert_eq!(store.error(), Some("Category ID exists"));
    }

    #[test]
    fn test_failed_upload_is_reported_and_counter_released() {
        let mut store = filled();
        queued(&mut store, &[1, 2]);
        store.upload_started(UploadTaskId(1));
        store.upload_finished(UploadTaskId(1), &ok("f1.jpg", "u1"));
        store.upload_started(UploadTaskId(2));
        store.upload_finished(
            UploadTaskId(2),
            &UploadResult::Failed {
                source_file: "f2.jpg".into(),
                error: "Network error: offline".into(),
            },
        );

        assert_eq!(store.in_flight(), 0);
        assert_eq!(store.image_urls(), ["u1".to_string()]);
        assert_eq!(store.uploads()[1].status, UploadStatus::Failed);
        assert_eq!(
            store.upload_errors(),
            ["Failed to upload \"f2.jpg\": Network error: offline".to_string()]
        );
    }

    #[test]
    fn test_unknown_task_is_ignored() {
        let mut store = filled();
        store.upload_started(UploadTaskId(9));
        store.upload_finished(UploadTaskId(9), &ok("x.jpg", "u"));
        assert_eq!(store.in_flight(), 0);
        assert!(store.image_urls().is_empty());
    }

    #[test]
    fn test_invalid_draft_is_not_submitted() {
        let mut store = FormStore::<CategoryDraft>::for_create();
        assert!(matches!(store.begin_submit(), Err(SubmitError::Invalid(_))));
        assert!(!store.is_submitting());
        assert!(store.error().is_some());

        store.edit(|d| d.name = "Rings".into());
        assert_eq!(store.error(), None);
    }

    #[test]
    fn test_edit_mode_and_reset() {
        let record = Category {
            id: "c1".into(),
            category_id: "RINGS".into(),
            name: "Rings".into(),
            description: String::new(),
            image_urls: vec!["a".into()],
            subcategories: vec![],
            created_at: None,
        };
        let mut store = FormStore::<CategoryDraft>::for_edit(&record);
        assert_eq!(store.editing_id(), Some("c1"));
        assert_eq!(store.remove_image(0), Some("a".into()));
        queued(&mut store, &[1]);

        store.upload_started(UploadTaskId(1));
        store.upload_finished(UploadTaskId(1), &ok("f1.jpg", "u1"));
        assert!(store.reset(Some(&record)));
        assert_eq!(store.image_urls(), ["a".to_string()]);
        assert!(store.uploads().is_empty());
        assert_eq!(record.image_urls, vec!["a".to_string()]);
    }

    #[test]
    fn test_reset_refused_while_batch_running() {
        let mut store = filled();
        queued(&mut store, &[1, 2]);
        store.upload_started(UploadTaskId(1));

        assert!(!store.reset(None));
        assert_eq!(store.in_flight(), 1);
        assert_eq!(store.pending_uploads(), 2);
        assert!(!store.can_submit());

        store.upload_finished(UploadTaskId(1), &ok("f1.jpg", "u1"));
        assert!(!store.reset(None), "task 2 is still queued");

        store.upload_started(UploadTaskId(2));
        store.upload_finished(UploadTaskId(2), &ok("f2.jpg", "u2"));
        assert_eq!(store.image_urls(), ["u1".to_string(), "u2".to_string()]);
        assert!(store.reset(None));
        assert!(store.image_urls().is_empty());
        assert_eq!(store.draft().name, "");
    }
}
