//! Sidebar component with collapsible menu groups

use crate::domain::find_collection;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, OVERVIEW_KEY};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: String,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn collection_items(keys: &[&str]) -> Vec<MenuItem> {
    keys.iter()
        .filter_map(|key| find_collection(key))
        .map(|entry| MenuItem {
            label: entry.list_name.to_string(),
            icon: entry.icon,
            key: entry.key,
        })
        .collect()
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![MenuItem {
                key: OVERVIEW_KEY.to_string(),
                label: tab_label_for_key(OVERVIEW_KEY),
                icon: "bar-chart",
            }],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "dollar-sign",
            items: collection_items(&["a002_orders", "a005_payments", "a006_complaints"]),
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: collection_items(&["a003_products", "a004_categories"]),
        },
        MenuGroup {
            id: "customers",
            label: "Customers",
            icon: "users",
            items: collection_items(&["a001_users", "a007_packages"]),
        },
        MenuGroup {
            id: "settings",
            label: "Content & settings",
            icon: "settings",
            items: collection_items(&["a008_policies", "a010_site_content", "a009_ai_models"]),
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    // Дашборды раскрыты при старте
    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        {
                            let items_stored = StoredValue::new(group.items);
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|item| {
                                            let item_key = StoredValue::new(item.key);
                                            let item_label = StoredValue::new(item.label.clone());
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        item_key.with_value(|k| ctx.active.get().as_deref() == Some(k.as_str()))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        ctx.open_tab(&item_key.get_value(), &item_label.get_value());
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item.icon)}
                                                        <span>{item.label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue;

    #[test]
    fn test_every_collection_is_in_the_menu_once() {
        let keys: Vec<String> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .map(|item| item.key)
            .collect();
        for entry in catalogue() {
            assert_eq!(keys.iter().filter(|k| **k == entry.key).count(), 1, "{}", entry.key);
        }
        assert_eq!(keys.len(), catalogue().len() + 1);
    }
}
