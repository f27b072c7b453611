//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn item(id: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d100_overview",
            label: tab_label_for_key("d100_overview"),
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "catalog",
            items: vec![
                item("a001_category", "category"),
                item("a002_collection", "collection"),
                item("a003_product", "gem"),
            ],
        },
        MenuGroup {
            id: "marketing",
            label: "Marketing",
            icon: "marketing",
            items: vec![
                item("a004_banner", "image"),
                item("a005_voucher", "ticket"),
                item("a006_discount", "percent"),
                item("a007_blog", "file-text"),
            ],
        },
        MenuGroup {
            id: "a008_order",
            label: tab_label_for_key("a008_order"),
            icon: "orders",
            items: vec![],
        },
        MenuGroup {
            id: "sys_profile",
            label: tab_label_for_key("sys_profile"),
            icon: "user",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["catalog".to_string(), "marketing".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.get().as_deref() == Some(group.id)
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        // Children
                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(id)
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert_ne!(label, crate::layout::tabs::tab_labels::UNKNOWN_TAB, "missing tab label for {id}");
            }
        }
    }
}
