use leptos::prelude::*;

/// Selection checkbox cell of a table row
///
/// Clicking it does not open the row (`stop_propagation`).
///
/// # Example
/// ```rust,ignore
/// <TableCheckbox
///     checked=Signal::derive(move || selected.get().contains(&id))
///     on_change=Callback::new(move |checked| toggle_select(id.clone(), checked))
/// />
/// ```
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}

/// Header checkbox selecting or clearing every visible row
#[component]
pub fn TableHeaderCheckbox(
    all_checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}
