use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thaw::*;

use super::fields::{FieldDef, FieldKind};
use super::values::{FieldError, FormValues, LineItemDraft};
use crate::shared::icons::icon;

/// Create/edit dialog generated from field declarations.
///
/// With `initial` empty the form starts blank; otherwise it is prefilled
/// from that entity and fields the form does not show are carried over.
/// `on_submit` only fires with a value that passed conversion.
#[component]
pub fn ResourceFormDialog<R>(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    fields: Vec<FieldDef>,
    #[prop(into)] initial: Signal<Option<R>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<R>,
) -> impl IntoView
where
    R: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let fields = StoredValue::new(fields);
    let values = RwSignal::new(FormValues::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    // reset the form each time the dialog opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let prefill = initial
            .get_untracked()
            .and_then(|entity| serde_json::to_value(entity).ok());
        let form = fields.with_value(|fields| match &prefill {
            Some(json) => FormValues::from_json(fields, json),
            None => FormValues::empty(fields),
        });
        values.set(form);
        errors.set(Vec::new());
    });

    let submit = move || {
        let base = initial
            .get_untracked()
            .and_then(|entity| serde_json::to_value(entity).ok())
            .unwrap_or_else(|| Value::Object(Default::default()));
        let parsed = values.with_untracked(|form| fields.with_value(|fields| form.parse::<R>(fields, base)));
        match parsed {
            Ok(entity) => {
                errors.set(Vec::new());
                on_submit.run(entity);
            }
            Err(list) => errors.set(list),
        }
    };

    let field_error = move |name: &'static str| {
        errors.with(|list| {
            list.iter()
                .find(|e| e.field == name)
                .map(|e| e.message.clone())
        })
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <form
                            class="resource-form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                submit();
                            }
                        >
                            {fields.get_value().into_iter().map(|field| {
                                view! {
                                    <div class="form-group">
                                        <label for=field.name>
                                            {field.label}
                                            {field.required.then_some(" *")}
                                        </label>
                                        <FieldInput field=field values=values disabled=saving />
                                        {move || field_error(field.name).map(|message| view! {
                                            <div class="form-group__error">{message}</div>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                            {move || {
                                errors.with(|list| {
                                    list.iter()
                                        .find(|e| e.field.is_empty())
                                        .map(|e| view! { <div class="error-message">{e.message.clone()}</div> })
                                })
                            }}
                        </form>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| submit()
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn FieldInput(
    field: FieldDef,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let name = field.name;
    let current = move || values.with(|v| v.text(name));
    let set = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        values.update(|v| v.set_text(name, value));
    };

    match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                id=name
                rows="3"
                prop:value=current
                on:input=set
                disabled=move || disabled.get()
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select id=name prop:value=current on:change=set disabled=move || disabled.get()>
                {options.iter().map(|&option| view! {
                    <option value=option selected=move || current() == option>{option}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::LineItems => view! { <LineItemsEditor name=name values=values disabled=disabled /> }.into_any(),
        kind => view! {
            <input
                id=name
                type=kind.input_type()
                step=(kind == FieldKind::Decimal).then_some("any")
                prop:value=current
                on:input=set
                required=field.required
                disabled=move || disabled.get()
            />
        }
        .into_any(),
    }
}

/// Product/quantity/unit price rows with a running total
#[component]
fn LineItemsEditor(
    name: &'static str,
    values: RwSignal<FormValues>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let rows = move || values.with(|v| v.items(name));
    let total = move || {
        rows()
            .iter()
            .map(|row| {
                let quantity = row.quantity.trim().parse::<f64>().unwrap_or(0.0);
                let price = row.unit_price.trim().parse::<f64>().unwrap_or(0.0);
                quantity * price
            })
            .sum::<f64>()
    };

    let edit = move |index: usize, apply: fn(&mut LineItemDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            values.update(|v| v.update_item(name, index, |row| apply(row, value)));
        }
    };

    view! {
        <div class="line-items">
            <table class="line-items__table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Quantity"</th>
                        <th>"Unit price"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows().into_iter().enumerate().map(|(index, row)| view! {
                        <tr>
                            <td>
                                <input
                                    type="text"
                                    prop:value=row.product
                                    on:change=edit(index, |r, v| r.product = v)
                                    disabled=move || disabled.get()
                                />
                            </td>
                            <td>
                                <input
                                    type="number"
                                    min="0"
                                    prop:value=row.quantity
                                    on:change=edit(index, |r, v| r.quantity = v)
                                    disabled=move || disabled.get()
                                />
                            </td>
                            <td>
                                <input
                                    type="number"
                                    step="any"
                                    prop:value=row.unit_price
                                    on:change=edit(index, |r, v| r.unit_price = v)
                                    disabled=move || disabled.get()
                                />
                            </td>
                            <td>
                                <button
                                    type="button"
                                    class="line-items__remove"
                                    title="Remove line"
                                    on:click=move |_| values.update(|v| v.remove_item(name, index))
                                    disabled=move || disabled.get()
                                >
                                    {icon("x")}
                                </button>
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            <div class="line-items__footer">
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| values.update(|v| v.push_item(name))
                    disabled=move || disabled.get()
                >
                    {icon("plus")}
                    "Add product"
                </button>
                <span class="line-items__total">{move || format!("Total: {:.2}", total())}</span>
            </div>
        </div>
    }
}

/// Asks before deleting; names the entity by its key
#[component]
pub fn ConfirmDeleteDialog(
    open: RwSignal<bool>,
    /// Singular entity label, e.g. "Vendor"
    element: &'static str,
    #[prop(into)] key: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Delete {}", element.to_lowercase())}</DialogTitle>
                    <DialogContent>
                        <p>
                            {move || format!("Delete {} {}? This cannot be undone.", element.to_lowercase(), key.get())}
                        </p>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
