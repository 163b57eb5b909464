//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::common::ResourceKind;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<ResourceKind>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            items: vec![ResourceKind::Vendor, ResourceKind::Product, ResourceKind::Category],
        },
        MenuGroup {
            id: "stock",
            label: "Stock",
            items: vec![
                ResourceKind::Inventory,
                ResourceKind::Purchase,
                ResourceKind::Sale,
                ResourceKind::Transfer,
            ],
        },
        MenuGroup {
            id: "logistics",
            label: "Logistics",
            items: vec![ResourceKind::Shipment, ResourceKind::Vehicle],
        },
        MenuGroup {
            id: "people",
            label: "People",
            items: vec![
                ResourceKind::Employee,
                ResourceKind::Customer,
                ResourceKind::Supervisor,
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__group"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
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
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {group.items.clone().into_iter().map(|kind| {
                                    let key = kind.collection_name();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_page(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(key)}
                                                <span>{kind.list_name()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
