use chrono::NaiveDate;
use contracts::domain::a006_discount::aggregate::{Discount, DiscountDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::domain::a006_discount::api::discount_api;
use crate::domain::a006_discount::ui::details::DiscountDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;

impl Sortable for Discount {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "percent" => self.percent.partial_cmp(&other.percent).unwrap_or(Ordering::Equal),
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Discount {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(filter, &[&self.name]) || self.product_ids.iter().any(|p| contains_any(filter, &[p]))
    }
}

pub fn discount_status(discount: &Discount, today: NaiveDate) -> (&'static str, &'static str) {
    if discount.is_running(today) {
        ("badge badge--success", "Running")
    } else if today < discount.start_date {
        ("badge badge--info", "Scheduled")
    } else {
        ("badge badge--neutral", "Ended")
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DiscountList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(discount_api(&config), "start_date");
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Discount>| {
            let list = list.clone();
            open_form_modal::<DiscountDraft, _>(modal_stack, 600, record, move |vm, close| {
                view! { <DiscountDetails vm=vm list=list.clone() on_close=close /> }.into_any()
            });
        })
    };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Discounts"
                subtitle="Time-limited price reductions"
                new_label="New discount"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <SortHeader sort=sort field="name" label="Name" />
                            <SortHeader sort=sort field="percent" label="Percent" />
                            <SortHeader sort=sort field="start_date" label="Starts" />
                            <SortHeader sort=sort field="end_date" label="Ends" />
                            <th class="table__header-cell">"Products"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let list = l_rows.clone();
                            let today = today();
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
                                    let (badge_class, badge_text) = discount_status(&row, today);
                                    let name = row.name.clone();
                                    let percent = format!("{}%", row.percent);
                                    let (starts, ends) = (format_date(&row.start_date), format_date(&row.end_date));
                                    let products = if row.product_ids.is_empty() {
                                        "All".to_string()
                                    } else {
                                        row.product_ids.len().to_string()
                                    };
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell">{name}</td>
                                            <td class="table__cell table__cell--number">{percent}</td>
                                            <td class="table__cell">{starts}</td>
                                            <td class="table__cell">{ends}</td>
                                            <td class="table__cell">{products}</td>
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
                    <div class="table__empty">"No discounts yet"</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_status_by_date() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let discount = Discount {
            id: "d1".into(),
            name: "Bridal week".into(),
            percent: 15.0,
            start_date: d("2026-02-01"),
            end_date: d("2026-02-07"),
            product_ids: vec![],
        };
        assert_eq!(discount_status(&discount, d("2026-01-31")).1, "Scheduled");
        assert_eq!(discount_status(&discount, d("2026-02-07")).1, "Running");
        assert_eq!(discount_status(&discount, d("2026-02-08")).1, "Ended");
    }
}
