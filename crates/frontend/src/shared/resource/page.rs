use contracts::domain::common::Resource;
use contracts::shared::access::Capabilities;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen_futures::spawn_local;

use super::hook::use_resource;
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{ColumnDef, DataTable};
use crate::shared::forms::{ConfirmDeleteDialog, FieldDef, ResourceFormDialog};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::shared::visibility::{use_visibility, DialogKind};
use crate::system::auth::context::{ensure_session, use_auth, AuthState};

/// How an entity is shown on its list page
pub trait ResourceView: Resource {
    fn columns() -> Vec<ColumnDef<Self>>;

    /// Column the filter box searches
    fn filter_column() -> &'static str;

    fn form_fields() -> Vec<FieldDef>;
}

/// List page of `R`: table, role-gated actions and the three dialogs.
///
/// The list is fetched once on mount. After a successful create, update or
/// delete only the affected entry is patched locally; use Refresh to reload.
pub fn resource_page<R: ResourceView>() -> impl IntoView {
    let kind = R::KIND;
    let element = kind.element_name();

    let (auth_state, set_auth_state) = use_auth();
    let caps = Memo::new(move |_| Capabilities::for_role(kind, auth_state.with(AuthState::role)));

    let hook = use_resource::<R>();
    let items = hook.items;
    let loading = hook.loading;
    let visibility = use_visibility();
    let selected = RwSignal::new(None::<R>);
    let saving = RwSignal::new(false);

    let refresh = {
        let hook = hook.clone();
        move || {
            if !ensure_session(set_auth_state) {
                return;
            }
            let hook = hook.clone();
            spawn_local(async move { hook.list().await });
        }
    };
    refresh();

    let on_create = {
        let hook = hook.clone();
        Callback::new(move |draft: R| {
            if !ensure_session(set_auth_state) {
                return;
            }
            let hook = hook.clone();
            saving.set(true);
            spawn_local(async move {
                if let Some(created) = hook.create(&draft).await {
                    hook.add(created);
                    visibility.close(DialogKind::Add);
                }
                saving.set(false);
            });
        })
    };

    let on_update = {
        let hook = hook.clone();
        Callback::new(move |draft: R| {
            let Some(key) = selected.get_untracked().map(|s| s.key()) else {
                return;
            };
            if !ensure_session(set_auth_state) {
                return;
            }
            let hook = hook.clone();
            saving.set(true);
            spawn_local(async move {
                if let Some(updated) = hook.update(&key, &draft).await {
                    hook.update_in_list(&key, updated);
                    visibility.close(DialogKind::Edit);
                    selected.set(None);
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let hook = hook.clone();
        Callback::new(move |_: ()| {
            let Some(key) = selected.get_untracked().map(|s| s.key()) else {
                return;
            };
            if !ensure_session(set_auth_state) {
                return;
            }
            let hook = hook.clone();
            saving.set(true);
            spawn_local(async move {
                if hook.remove(&key).await {
                    hook.remove_from_list(&key);
                    visibility.close(DialogKind::Delete);
                    selected.set(None);
                }
                saving.set(false);
            });
        })
    };

    let open_create = move || {
        selected.set(None);
        visibility.open(DialogKind::Add);
    };
    let open_edit = Callback::new(move |row: R| {
        selected.set(Some(row));
        visibility.open(DialogKind::Edit);
    });
    let open_delete = Callback::new(move |row: R| {
        selected.set(Some(row));
        visibility.open(DialogKind::Delete);
    });

    let selected_key = Signal::derive(move || {
        selected.with(|s| s.as_ref().map(|r| r.key()).unwrap_or_default())
    });

    view! {
        <PageFrame page_id=page_id(kind.collection_name(), PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(kind.collection_name())}
                    <h1 class="page__title">{kind.list_name()}</h1>
                    <Badge variant="primary">{move || items.with(Vec::len)}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || caps.get().can_create>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                            {icon("plus")}
                            {format!("New {}", element.to_lowercase())}
                        </Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    let caps = caps.get();
                    view! {
                        <DataTable
                            items=items
                            columns=R::columns()
                            filter_column=R::filter_column()
                            loading=loading
                            on_edit=caps.can_edit.then_some(open_edit)
                            on_delete=caps.can_delete.then_some(open_delete)
                        />
                    }
                }}
            </div>

            <Show when=move || caps.get().can_create>
                <ResourceFormDialog
                    open=visibility.signal(DialogKind::Add)
                    title=format!("New {}", element.to_lowercase())
                    fields=R::form_fields()
                    initial=Signal::derive(|| None::<R>)
                    saving=saving
                    on_submit=on_create
                />
            </Show>
            <Show when=move || caps.get().can_edit>
                <ResourceFormDialog
                    open=visibility.signal(DialogKind::Edit)
                    title=Signal::derive(move || format!("Edit {} {}", element.to_lowercase(), selected_key.get()))
                    fields=R::form_fields()
                    initial=selected
                    saving=saving
                    on_submit=on_update
                />
            </Show>
            <Show when=move || caps.get().can_delete>
                <ConfirmDeleteDialog
                    open=visibility.signal(DialogKind::Delete)
                    element=element
                    key=selected_key
                    busy=saving
                    on_confirm=on_delete
                />
            </Show>
        </PageFrame>
    }
}
