use contracts::domain::a007_blog::aggregate::{BlogPost, BlogPostDraft};
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::domain::a007_blog::api::blog_api;
use crate::domain::a007_blog::ui::details::BlogPostDetails;
use crate::shared::config::use_config;
use crate::shared::crud::{open_form_modal, ListToolbar, ListViewModel, RowCheckbox, SelectAllCheckbox};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_utils::{cmp_text, contains_any, Searchable, SortHeader, Sortable};
use crate::shared::modal_stack::ModalStackService;

const EXCERPT_CHARS: usize = 80;

impl Sortable for BlogPost {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "title" => cmp_text(&self.title, &other.title),
            "author" => cmp_text(&self.author, &other.author),
            "published" => self.published.cmp(&other.published),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for BlogPost {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(filter, &[&self.title, &self.author, &self.content])
    }
}

/// First line of the post, cut at a char boundary
fn excerpt(content: &str) -> String {
    let line = content.lines().find(|l| !l.trim().is_empty()).unwrap_or_default().trim();
    if line.chars().count() <= EXCERPT_CHARS {
        line.to_string()
    } else {
        let cut: String = line.chars().take(EXCERPT_CHARS).collect();
        format!("{}\u{2026}", cut.trim_end())
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BlogList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let list = ListViewModel::new(blog_api(&config), "created_at");
    // Newest first
    list.sort.update(|s| s.ascending = false);
    list.fetch();

    let open_form = {
        let list = list.clone();
        Callback::new(move |record: Option<BlogPost>| {
            let list = list.clone();
            open_form_modal::<BlogPostDraft, _>(modal_stack, 860, record, move |vm, close| {
                view! { <BlogPostDetails vm=vm list=list.clone() on_close=close /> }.into_any()
            });
        })
    };

    let sort = list.sort;
    let (l_head, l_rows, l_empty) = (list.clone(), list.clone(), list.clone());

    view! {
        <div class="content">
            <ListToolbar
                list=list
                title="Blog"
                subtitle="Articles of the shop journal"
                new_label="New post"
                on_new=Callback::new(move |_| open_form.run(None))
            />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SelectAllCheckbox list=l_head />
                            <SortHeader sort=sort field="title" label="Title" />
                            <SortHeader sort=sort field="author" label="Author" />
                            <th class="table__header-cell">"Excerpt"</th>
                            <SortHeader sort=sort field="published" label="Status" />
                            <SortHeader sort=sort field="created_at" label="Created" />
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
                                    let (title, author) = (row.title.clone(), row.author.clone());
                                    let summary = excerpt(&row.content);
                                    let created = format_optional_datetime(row.created_at.as_ref());
                                    let (badge_class, badge_text) = if row.published {
                                        ("badge badge--success", "Published")
                                    } else {
                                        ("badge badge--neutral", "Draft")
                                    };
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=selected
                                            on:click=move |_| open_form.run(Some(row.clone()))
                                        >
                                            <RowCheckbox list=l_select id=id />
                                            <td class="table__cell">{title}</td>
                                            <td class="table__cell">{author}</td>
                                            <td class="table__cell table__cell--muted">{summary}</td>
                                            <td class="table__cell">
                                                <span class=badge_class>{badge_text}</span>
                                            </td>
                                            <td class="table__cell">{created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || l_empty.len() == 0 && !l_empty.is_loading()>
                    <div class="table__empty">"No posts yet"</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_skips_blank_lines_and_truncates() {
        assert_eq!(excerpt("\n  Care for pearls  \nsecond"), "Care for pearls");
        let long = "é".repeat(EXCERPT_CHARS + 5);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
        assert!(cut.ends_with('\u{2026}'));
        assert_eq!(excerpt(""), "");
    }
}
