use contracts::domain::common::EntityDraft;
use leptos::prelude::*;

use super::FormViewModel;
use crate::shared::modal_stack::{ModalFrameOptions, ModalStackService};

/// Opens the create (`None`) or edit form of one record in a modal
///
/// Escape and overlay clicks are ignored while the form is uploading or
/// saving. `body` receives the form and a callback closing the modal.
pub fn open_form_modal<D, F>(modals: ModalStackService, width: u32, record: Option<D::Record>, body: F)
where
    D: EntityDraft + Send + Sync + 'static,
    D::Record: Send + Sync + 'static,
    F: Fn(FormViewModel<D>, Callback<()>) -> AnyView + Send + Sync + 'static,
{
    let vm = FormViewModel::<D>::new(record);
    let guard_vm = vm.clone();

    modals.push_with_guard(
        ModalFrameOptions::width(width).with_class("details-modal"),
        move || !guard_vm.is_busy_untracked(),
        move |handle| {
            let close = Callback::new(move |_| handle.close());
            body(vm.clone(), close)
        },
    );
}
