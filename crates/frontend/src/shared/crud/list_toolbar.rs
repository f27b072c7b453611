use leptos::prelude::*;

use super::ListViewModel;
use crate::shared::api::EntityApi;
use crate::shared::components::feedback::{ErrorBanner, MessageBanner};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Searchable, Sortable};

/// Header of an entity list: search, create, refresh, bulk delete and the
/// error/confirmation banners. Extra buttons go in `children`.
#[component]
pub fn ListToolbar<A>(
    list: ListViewModel<A>,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(into)] new_label: String,
    on_new: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    A: EntityApi + Send + Sync + 'static,
    A::Record: Send + Sync,
{
    let search = list.search;
    let error = list.error();
    let message = list.message();
    let (l_refresh, l_delete, l_count, l_label, l_dismiss) =
        (list.clone(), list.clone(), list.clone(), list.clone(), list.clone());

    view! {
        <PageHeader title=title subtitle=subtitle>
            <SearchInput value=search />
            {children.map(|c| c())}
            <button class="button button--primary" on:click=move |_| on_new.run(())>
                {icon("plus")}
                {new_label}
            </button>
            <button
                class="button button--secondary"
                on:click=move |_| l_refresh.fetch()
                disabled=move || list.is_loading()
            >
                {icon("refresh")}
                "Refresh"
            </button>
            <button
                class="button button--secondary"
                on:click=move |_| l_delete.delete_selected()
                disabled=move || l_count.selected_count() == 0
            >
                {icon("delete")}
                {move || format!("Delete ({})", l_label.selected_count())}
            </button>
        </PageHeader>

        <ErrorBanner error=error />
        <MessageBanner message=message on_dismiss=Callback::new(move |_| l_dismiss.dismiss_message()) />
    }
}

/// Row selection cell of an entity table
#[component]
pub fn RowCheckbox<A>(list: ListViewModel<A>, #[prop(into)] id: String) -> impl IntoView
where
    A: EntityApi + Send + Sync + 'static,
    A::Record: Send + Sync,
{
    let (l_checked, l_toggle) = (list.clone(), list);
    let id_checked = id.clone();
    view! {
        <TableCheckbox
            checked=Signal::derive(move || l_checked.is_selected(&id_checked))
            on_change=Callback::new(move |checked| l_toggle.toggle_select(id.clone(), checked))
        />
    }
}

/// Header cell selecting every visible row
#[component]
pub fn SelectAllCheckbox<A>(list: ListViewModel<A>) -> impl IntoView
where
    A: EntityApi + Send + Sync + 'static,
    A::Record: Sortable + Searchable + Send + Sync,
{
    let l_all = list.clone();
    view! {
        <TableHeaderCheckbox
            all_checked=Signal::derive(move || l_all.all_selected())
            on_change=Callback::new(move |checked| list.set_all_selected(checked))
        />
    }
}
