//! Upload Coordinator: sends the files of one batch strictly one after
//! another and reports each outcome to the owning form.
//!
//! The batch is a lazy stream. A file is only sent when the consumer polls
//! for the next result, and the next one only after the previous response
//! arrived. There is no cancellation or retry; a failed file is reported and
//! the batch moves on.

use contracts::domain::common::EntityDraft;
use contracts::shared::upload::{UploadResult, UploadTask, UploadTaskId};
use futures::stream::{self, Stream, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};

use super::uploader::{ImageUploader, UploadSource};
use crate::shared::state::{FormStore, StateCell};

pub struct UploadCoordinator<U> {
    uploader: U,
    next_id: AtomicU64,
}

impl<U: ImageUploader> UploadCoordinator<U> {
    pub fn new(uploader: U) -> Self {
        Self {
            uploader,
            next_id: AtomicU64::new(1),
        }
    }

    fn next_task_id(&self) -> UploadTaskId {
        UploadTaskId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Queues `files` on the form and returns the stream of their outcomes,
    /// in file order
    ///
    /// Per file: mark uploading (in-flight +1), await the request, then
    /// settle the task (in-flight -1) and append the URL or record the error.
    pub fn upload<'a, D, C>(
        &'a self,
        files: Vec<U::File>,
        target: &'a C,
    ) -> impl Stream<Item = UploadResult> + 'a
    where
        D: EntityDraft + 'a,
        C: StateCell<FormStore<D>>,
    {
        let batch: Vec<(UploadTaskId, U::File)> = files
            .into_iter()
            .map(|file| (self.next_task_id(), file))
            .collect();
        target.modify(|form| {
            form.queue_uploads(
                batch
                    .iter()
                    .map(|(id, file)| UploadTask::queued(*id, file.file_name())),
            )
        });
        log::debug!("upload batch of {} file(s) queued", batch.len());

        stream::unfold(batch.into_iter(), move |mut pending| async move {
            let (id, file) = pending.next()?;
            let file_name = file.file_name();

            target.modify(|form| form.upload_started(id));
            let outcome = self
                .uploader
                .upload_image(&file)
                .await
                .map_err(|e| e.to_string());
            let result = UploadResult::from_outcome(file_name, outcome);
            match &result {
                UploadResult::Uploaded { source_file, url } => {
                    log::info!("uploaded {} -> {}", source_file, url)
                }
                UploadResult::Failed { source_file, error } => {
                    log::warn!("upload of {} failed: {}", source_file, error)
                }
            }
            target.modify(|form| form.upload_finished(id, &result));

            Some((result, pending))
        })
    }

    /// Drives a whole batch and returns every outcome
    pub async fn upload_all<D, C>(&self, files: Vec<U::File>, target: &C) -> Vec<UploadResult>
    where
        D: EntityDraft + 'static,
        C: StateCell<FormStore<D>>,
    {
        self.upload(files, target).collect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use async_trait::async_trait;
    use contracts::domain::a001_category::aggregate::CategoryDraft;
    use contracts::domain::a002_collection::aggregate::{Collection, CollectionDraft};
    use contracts::shared::upload::UploadStatus;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    #[derive(Debug, Clone)]
    struct FakeFile(&'static str);

    impl UploadSource for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Completes on the second poll, so a request spans a suspension point
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    type SharedForm = Rc<RefCell<FormStore<CategoryDraft>>>;

    #[derive(Default)]
    struct FakeUploader {
        events: RefCell<Vec<String>>,
        failing: Vec<&'static str>,
        /// Form whose gate is sampled while a request is pending
        watched: Option<SharedForm>,
        gate_samples: RefCell<Vec<(usize, bool)>>,
        /// The watched form is asked to reset while this file is sent
        reset_during: Option<&'static str>,
        resets: RefCell<Vec<bool>>,
    }

    #[async_trait(?Send)]
    impl ImageUploader for FakeUploader {
        type File = FakeFile;

        async fn upload_image(&self, file: &FakeFile) -> Result<String, ApiError> {
            self.events.borrow_mut().push(format!("start {}", file.0));
            if let (Some(form), Some(name)) = (&self.watched, self.reset_during) {
                if name == file.0 {
                    let done = form.borrow_mut().reset(None);
                    self.resets.borrow_mut().push(done);
                }
            }
            if let Some(form) = &self.watched {
                let form = form.borrow();
                self.gate_samples
                    .borrow_mut()
                    .push((form.in_flight(), form.can_submit()));
            }
            YieldOnce(false).await;
            self.events.borrow_mut().push(format!("end {}", file.0));
            if self.failing.contains(&file.0) {
                Err(ApiError::Network("connection reset".into()))
            } else {
                Ok(format!("https://cdn.example/{}", file.0))
            }
        }
    }

    fn files(names: &[&'static str]) -> Vec<FakeFile> {
        names.iter().map(|n| FakeFile(*n)).collect()
    }

    fn requests(uploader: &FakeUploader) -> usize {
        uploader
            .events
            .borrow()
            .iter()
            .filter(|e| e.starts_with("start"))
            .count()
    }

    #[test]
    fn test_one_request_per_file_never_interleaved() {
        let coordinator = UploadCoordinator::new(FakeUploader::default());
        let form = RefCell::new(FormStore::<CategoryDraft>::for_create());

        let results = block_on(coordinator.upload_all(files(&["a.jpg", "b.jpg", "c.jpg"]), &form));

        assert_eq!(results.len(), 3);
        assert_eq!(
            *coordinator.uploader.events.borrow(),
            vec![
                "start a.jpg",
                "end a.jpg",
                "start b.jpg",
                "end b.jpg",
                "start c.jpg",
                "end c.jpg"
            ]
        );
    }

    #[test]
    fn test_urls_appended_in_file_order_then_removal() {
        let coordinator = UploadCoordinator::new(FakeUploader::default());
        let form = RefCell::new(FormStore::<CategoryDraft>::for_create());

        block_on(coordinator.upload_all(files(&["1.jpg", "2.jpg", "3.jpg"]), &form));
        assert_eq!(
            form.borrow().image_urls(),
            [
                "https://cdn.example/1.jpg".to_string(),
                "https://cdn.example/2.jpg".to_string(),
                "https://cdn.example/3.jpg".to_string(),
            ]
        );

        form.borrow_mut().remove_image(1);
        assert_eq!(
            form.borrow().image_urls(),
            [
                "https://cdn.example/1.jpg".to_string(),
                "https://cdn.example/3.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_failure_does_not_stop_batch_or_drop_earlier_urls() {
        let uploader = FakeUploader {
            failing: vec!["2.jpg"],
            ..Default::default()
        };
        let coordinator = UploadCoordinator::new(uploader);
        let form = RefCell::new(FormStore::<CategoryDraft>::for_create());

        let results = block_on(coordinator.upload_all(files(&["1.jpg", "2.jpg", "3.jpg"]), &form));

        assert_eq!(requests(&coordinator.uploader), 3);
        assert_eq!(
            results.iter().map(|r| r.is_success()).collect::<Vec<_>>(),
            vec![true, false, true]
        );
        assert_eq!(results[1].source_file(), "2.jpg");

        let form = form.borrow();
        assert_eq!(
            form.image_urls(),
            [
                "https://cdn.example/1.jpg".to_string(),
                "https://cdn.example/3.jpg".to_string(),
            ]
        );
        assert_eq!(
            form.upload_errors(),
            ["Failed to upload \"2.jpg\": Network error: connection reset".to_string()]
        );
        assert_eq!(form.in_flight(), 0);
        assert!(form.uploads().iter().all(|t| t.is_settled()));
        assert_eq!(form.uploads()[1].status, UploadStatus::Failed);
    }

    #[test]
    fn test_submission_gate_closed_during_each_request() {
        let form: SharedForm = Rc::new(RefCell::new(FormStore::for_create()));
        form.borrow_mut().edit(|d| {
            d.category_id = "EARRINGS".into();
            d.name = "Earrings".into();
        });
        let uploader = FakeUploader {
            watched: Some(form.clone()),
            ..Default::default()
        };
        let coordinator = UploadCoordinator::new(uploader);

        block_on(coordinator.upload_all(files(&["a.jpg", "b.jpg"]), &form));

        assert_eq!(
            *coordinator.uploader.gate_samples.borrow(),
            vec![(1, false), (1, false)]
        );
        assert!(form.borrow().can_submit());
        assert!(form.borrow_mut().begin_submit().is_ok());
    }

    #[test]
    fn test_stream_is_lazy() {
        let coordinator = UploadCoordinator::new(FakeUploader::default());
        let form = RefCell::new(FormStore::<CategoryDraft>::for_create());

        let stream = coordinator.upload(files(&["a.jpg", "b.jpg"]), &form);
        futures::pin_mut!(stream);
        assert_eq!(requests(&coordinator.uploader), 0);
        assert_eq!(form.borrow().uploads().len(), 2);

        let first = block_on(stream.next()).unwrap();
        assert_eq!(first.url(), Some("https://cdn.example/a.jpg"));
        assert_eq!(requests(&coordinator.uploader), 1);
        assert_eq!(form.borrow().uploads()[1].status, UploadStatus::Queued);

        assert!(block_on(stream.next()).is_some());
        assert!(block_on(stream.next()).is_none());
    }

    #[test]
    fn test_task_ids_unique_across_batches() {
        let coordinator = UploadCoordinator::new(FakeUploader::default());
        let form = RefCell::new(FormStore::<CategoryDraft>::for_create());

        block_on(coordinator.upload_all(files(&["a.jpg"]), &form));
        block_on(coordinator.upload_all(files(&["b.jpg"]), &form));

        let ids: Vec<_> = form.borrow().uploads().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![UploadTaskId(1), UploadTaskId(2)]);
    }

    #[test]
    fn test_collection_uploads_leave_record_untouched() {
        let record = Collection {
            id: "col1".into(),
            collection_id: "BRIDAL".into(),
            name: "Bridal".into(),
            description: String::new(),
            image_urls: vec!["https://cdn.example/old.jpg".into()],
            products: vec![],
            created_at: None,
        };
        let coordinator = UploadCoordinator::new(FakeUploader::default());
        let form = RefCell::new(FormStore::<CollectionDraft>::for_edit(&record));

        block_on(coordinator.upload_all(files(&["new.jpg"]), &form));

        let payload = form.borrow_mut().begin_submit().unwrap();
        assert_eq!(
            payload.image_urls,
            vec![
                "https://cdn.example/old.jpg".to_string(),
                "https://cdn.example/new.jpg".to_string(),
            ]
        );
        assert_eq!(record.image_urls, vec!["https://cdn.example/old.jpg".to_string()]);
    }

    #[test]
    fn test_reset_during_batch_keeps_gate_and_urls() {
        let form: SharedForm = Rc::new(RefCell::new(FormStore::for_create()));
        let uploader = FakeUploader {
            watched: Some(form.clone()),
            reset_during: Some("a.jpg"),
            ..Default::default()
        };
        let coordinator = UploadCoordinator::new(uploader);

        let results = block_on(coordinator.upload_all(files(&["a.jpg", "b.jpg"]), &form));

        assert_eq!(*coordinator.uploader.resets.borrow(), vec![false]);
        assert_eq!(
            *coordinator.uploader.gate_samples.borrow(),
            vec![(1, false), (1, false)]
        );
        assert!(results.iter().all(|r| r.is_success()));
        assert_eq!(
            form.borrow().image_urls(),
            [
                "https://cdn.example/a.jpg".to_string(),
                "https://cdn.example/b.jpg".to_string(),
            ]
        );
        assert!(form.borrow_mut().reset(None));
        assert!(form.borrow().image_urls().is_empty());
    }
}
