use contracts::domain::a004_banner::aggregate::{Banner, BannerDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::domain::a004_banner::api::banner_api;
use crate::domain::a004_banner::ui::details::BannerDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;

impl Sortable for Banner {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "position" => self.position.cmp(&other.position),
            "active" => self.active.cmp(&other.active),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Banner {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(
            filter,
            &[&self.title, self.link_url.as_deref().unwrap_or_default()],
        )
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BannerList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(banner_api(&config), "position");
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Banner>| {
            let list = list.clone();
            open_form_modal::<BannerDraft, _>(modal_stack, 640, record, move |vm, close| {
                view! { <BannerDetails vm=vm list=list.clone() on_close=close /> }.into_any()
            });
        })
    };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Banners"
                subtitle="Home page slider, ordered by position"
                new_label="New banner"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <th class="table__header-cell">"Preview"</th>
                            <SortHeader sort=sort field="title" label="Title" />
                            <th class="table__header-cell">"Link"</th>
                            <SortHeader sort=sort field="position" label="Position" />
                            <SortHeader sort=sort field="active" label="Status" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = l_rows.clone();
                            l_rows
                                .rows()
                                .into_iter()
                                .map(|row| {
                                    let (l_checked, l_select) = (list.clone(), list.clone());
                                    let id = row.id.clone();
                                    let selected = {
                                        let id = id.clone();
                                        move || l_checked.is_selected(&id)
                                    };
                                    let (title, image_url) = (row.title.clone(), row.image_url.clone());
                                    let link = row.link_url.clone().unwrap_or_else(|| "-".to_string());
                                    let position = row.position;
                                    let (badge_class, badge_text) = if row.active {
                                        ("badge badge--success", "Active")
                                    } else {
                                        ("badge badge--neutral", "Hidden")
                                    };
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell table__cell--thumb">
                                                <img class="table__thumb table__thumb--wide" src=image_url alt="" />
                                            </td>
                                            <td class="table__cell">{title}</td>
                                            <td class="table__cell table__cell--muted">{link}</td>
                                            <td class="table__cell table__cell--number">{position}</td>
                                            <td class="table__cell">
                                                <span class=badge_class>{badge_text}</span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || l_empty.len() == 0 && !l_empty.is_loading()>
                    <div class="table__empty">"No banners yet"</div>
                </Show>
            </div>
        </div>
    }
}
