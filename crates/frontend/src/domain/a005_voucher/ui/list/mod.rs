use chrono::NaiveDate;
use contracts::domain::a005_voucher::aggregate::{Voucher, VoucherDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::domain::a005_voucher::api::voucher_api;
use crate::domain::a005_voucher::ui::details::VoucherDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;

impl Sortable for Voucher {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => cmp_text(&self.code, &other.code),
            "discount_percent" => self
                .discount_percent
                .partial_cmp(&other.discount_percent)
                .unwrap_or(Ordering::Equal),
            "used_count" => self.used_count.cmp(&other.used_count),
            // No expiry sorts last
            "expires_at" => match (self.expires_at, other.expires_at) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Voucher {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(filter, &[&self.code])
    }
}

/// Badge of a voucher as seen on `today`
pub fn voucher_status(voucher: &Voucher, today: NaiveDate) -> (&'static str, &'static str) {
    if !voucher.active {
        ("badge badge--neutral", "Disabled")
    } else if voucher.is_expired(today) {
        ("badge badge--danger", "Expired")
    } else if voucher.is_exhausted() {
        ("badge badge--warning", "Used up")
    } else {
        ("badge badge--success", "Active")
    }
}

fn usage_text(voucher: &Voucher) -> String {
    match voucher.max_uses {
        Some(max) => format!("{} / {}", voucher.used_count, max),
        None => voucher.used_count.to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VoucherList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(voucher_api(&config), "code");
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<Voucher>| {
            let list = list.clone();
            let used_count = record.as_ref().map(|v| v.used_count);
            open_form_modal::<VoucherDraft, _>(modal_stack, 560, record, move |vm, close| {
                view! {
                    <VoucherDetails vm=vm list=list.clone() used_count=used_count on_close=close />
                }
                .into_any()
            });
        })
    };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Vouchers"
                subtitle="Codes customers enter at checkout"
                new_label="New voucher"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <SortHeader sort=sort field="code" label="Code" />
                            <SortHeader sort=sort field="discount_percent" label="Discount" />
                            <SortHeader sort=sort field="used_count" label="Used" />
                            <SortHeader sort=sort field="expires_at" label="Expires" />
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
                                    let (badge_class, badge_text) = voucher_status(&row, today);
                                    let code = row.code.clone();
                                    let discount = format!("{}%", row.discount_percent);
                                    let usage = usage_text(&row);
                                    let expires = row
                                        .expires_at
                                        .as_ref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell table__cell--code">{code}</td>
                                            <td class="table__cell table__cell--number">{discount}</td>
                                            <td class="table__cell table__cell--number">{usage}</td>
                                            <td class="table__cell">{expires}</td>
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
                    <div class="table__empty">"No vouchers yet"</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher() -> Voucher {
        Voucher {
            id: "v1".into(),
            code: "SPRING10".into(),
            discount_percent: 10.0,
            max_uses: Some(5),
            used_count: 1,
            expires_at: NaiveDate::from_ymd_opt(2026, 6, 1),
            active: true,
        }
    }

    #[test]
    fn test_voucher_status_precedence() {
        let before = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();

        let mut v = voucher();
        assert_eq!(voucher_status(&v, before).1, "Active");
        assert_eq!(voucher_status(&v, after).1, "Expired");

        v.used_count = 5;
        assert_eq!(voucher_status(&v, before).1, "Used up");

        v.active = false;
        assert_eq!(voucher_status(&v, after).1, "Disabled");
    }

    #[test]
    fn test_usage_text() {
        let mut v = voucher();
        assert_eq!(usage_text(&v), "1 / 5");
        v.max_uses = None;
        assert_eq!(usage_text(&v), "1");
    }

    #[test]
    fn test_missing_expiry_sorts_last() {
        let mut open = voucher();
        open.expires_at = None;
        assert_eq!(open.compare_by_field(&voucher(), "expires_at"), Ordering::Greater);
    }
}
