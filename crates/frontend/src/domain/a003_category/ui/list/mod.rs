use contracts::domain::a003_category::aggregate::Category;
use leptos::prelude::*;

use crate::shared::data_table::ColumnDef;
use crate::shared::forms::FieldDef;
use crate::shared::resource::{resource_page, ResourceView};

impl ResourceView for Category {
    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::text("name", "Name", |c: &Category| c.name.clone()),
            ColumnDef::text("description", "Description", |c: &Category| {
                c.description.clone().unwrap_or_default()
            }),
        ]
    }

    fn filter_column() -> &'static str {
        "name"
    }

    fn form_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("name", "Name").required(),
            FieldDef::textarea("description", "Description"),
        ]
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    resource_page::<Category>()
}
