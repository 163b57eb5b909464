use leptos::prelude::*;
use thaw::*;

use super::rows::{build_rows, ColumnDef, TableState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, toggle_sort};

/// Filterable, sortable, paginated table over a list of records.
///
/// Edit and delete buttons are rendered only for the callbacks that are
/// passed in, so a page hides them by leaving the callback out.
#[component]
pub fn DataTable<R>(
    #[prop(into)] items: Signal<Vec<R>>,
    columns: Vec<ColumnDef<R>>,
    /// Key of the column the filter box searches
    filter_column: &'static str,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<R>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<R>>,
) -> impl IntoView
where
    R: Clone + PartialEq + Send + Sync + 'static,
{
    let filter_header = columns
        .iter()
        .find(|c| c.key == filter_column)
        .map(|c| c.header.to_lowercase())
        .unwrap_or_default();
    let column_count = columns.len() + usize::from(on_edit.is_some() || on_delete.is_some());
    let columns = StoredValue::new(columns);

    let filter = RwSignal::new(String::new());
    let sort = RwSignal::new(None::<(String, bool)>);
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(TableState::default().page_size);

    // a new filter always starts from the first page
    Effect::new(move |_| {
        filter.track();
        page.set(0);
    });

    let table = Memo::new(move |_| {
        let state = TableState {
            filter: filter.get(),
            sort: sort.get(),
            page: page.get(),
            page_size: page_size.get(),
        };
        items.with(|items| {
            columns.with_value(|columns| build_rows(items, columns, filter_column, &state))
        })
    });

    let sort_field = move || sort.get().map(|(f, _)| f).unwrap_or_default();
    let sort_ascending = move || sort.get().map(|(_, asc)| asc).unwrap_or(true);

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div style="width: 300px;">
                    <Input value=filter placeholder=format!("Filter by {}...", filter_header) />
                </div>
                <Show when=move || loading.get()>
                    <span class="data-table__loading">"Loading..."</span>
                </Show>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        {columns.get_value().into_iter().map(|col| {
                            let key = col.key;
                            view! {
                                <TableHeaderCell resizable=true min_width=120.0>
                                    <div
                                        class=move || get_sort_class(&sort_field(), key)
                                        style="display: flex; align-items: center; gap: 4px; cursor: pointer;"
                                        on:click=move |_| sort.update(|s| *s = toggle_sort(s.take(), key))
                                    >
                                        {col.header}
                                        <span class="sort-indicator">
                                            {move || get_sort_indicator(&sort_field(), key, sort_ascending())}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                            }
                        }).collect_view()}
                        {(on_edit.is_some() || on_delete.is_some()).then(|| view! {
                            <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = table.get().rows;
                        if rows.is_empty() {
                            return view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                                        "No results."
                                    </td>
                                </tr>
                            }.into_any();
                        }
                        rows.into_iter().map(|item| {
                            let cells = columns.with_value(|columns| {
                                columns.iter().map(|col| {
                                    let text = col.render(&item);
                                    let class = if col.numeric { "table__cell--number" } else { "" };
                                    view! {
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=class>{text}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                    }
                                }).collect_view()
                            });
                            let edit_item = item.clone();
                            let delete_item = item;
                            view! {
                                <TableRow>
                                    {cells}
                                    {(on_edit.is_some() || on_delete.is_some()).then(|| view! {
                                        <TableCell>
                                            <TableCellLayout>
                                                {on_edit.map(|cb| view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| cb.run(edit_item.clone())
                                                    >
                                                        {icon("edit")}
                                                        "Edit"
                                                    </Button>
                                                })}
                                                {on_delete.map(|cb| view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| cb.run(delete_item.clone())
                                                    >
                                                        {icon("delete")}
                                                        "Delete"
                                                    </Button>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                    })}
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || table.get().page)
                total_pages=Signal::derive(move || table.get().total_pages)
                total_count=Signal::derive(move || table.get().total_count)
                page_size=page_size
                on_page_change=Callback::new(move |p| page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    page_size.set(size);
                    page.set(0);
                })
            />
        </div>
    }
}
