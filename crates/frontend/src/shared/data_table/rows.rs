use crate::shared::list_utils::{compare_values, matches_filter};

/// One table column: header text and how to render the cell of a row
pub struct ColumnDef<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub value: fn(&R) -> String,
    pub numeric: bool,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ColumnDef<R> {}

impl<R> ColumnDef<R> {
    pub const fn text(key: &'static str, header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            key,
            header,
            value,
            numeric: false,
        }
    }

    pub const fn numeric(key: &'static str, header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            key,
            header,
            value,
            numeric: true,
        }
    }

    pub fn render(&self, row: &R) -> String {
        (self.value)(row)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub filter: String,
    /// Column key and ascending flag
    pub sort: Option<(String, bool)>,
    /// 0-indexed
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: None,
            page: 0,
            page_size: 10,
        }
    }
}

/// Rows of the visible page plus the numbers pagination needs
#[derive(Debug, Clone, PartialEq)]
pub struct TableRows<R> {
    pub rows: Vec<R>,
    /// Rows left after filtering, across all pages
    pub total_count: usize,
    pub total_pages: usize,
    /// Requested page clamped to the last existing one
    pub page: usize,
}

/// Filter on `filter_column`, then sort, then cut out one page.
///
/// An unknown filter column disables filtering, an unknown sort column
/// keeps the incoming order.
pub fn build_rows<R: Clone>(
    items: &[R],
    columns: &[ColumnDef<R>],
    filter_column: &str,
    state: &TableState,
) -> TableRows<R> {
    let filter_col = columns.iter().find(|c| c.key == filter_column);

    let mut rows: Vec<R> = items
        .iter()
        .filter(|item| match filter_col {
            Some(col) => matches_filter(&col.render(item), &state.filter),
            None => true,
        })
        .cloned()
        .collect();

    if let Some((key, ascending)) = &state.sort {
        if let Some(col) = columns.iter().find(|c| c.key == key.as_str()) {
            rows.sort_by(|a, b| {
                let cmp = compare_values(&col.render(a), &col.render(b), col.numeric);
                if *ascending {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }
    }

    let total_count = rows.len();
    let page_size = state.page_size.max(1);
    let total_pages = total_count.div_ceil(page_size);
    let page = state.page.min(total_pages.saturating_sub(1));

    let rows = rows
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    TableRows {
        rows,
        total_count,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::Product;
    use serde_json::json;

    fn product(name: &str, category: &str, price: f64) -> Product {
        serde_json::from_value(json!({
            "name": name,
            "category": category,
            "unit": "pcs",
            "price": price
        }))
        .unwrap()
    }

    fn columns() -> Vec<ColumnDef<Product>> {
        vec![
            ColumnDef::text("name", "Name", |p: &Product| p.name.clone()),
            ColumnDef::text("category", "Category", |p: &Product| p.category.clone()),
            ColumnDef::numeric("price", "Price", |p: &Product| p.price.to_string()),
        ]
    }

    fn items() -> Vec<Product> {
        vec![
            product("Bolt", "hardware", 9.0),
            product("anchor", "hardware", 10.5),
            product("Cable", "electrical", 100.0),
        ]
    }

    fn names(rows: &TableRows<Product>) -> Vec<&str> {
        rows.rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn filter_applies_to_one_column_only() {
        let state = TableState {
            filter: "HARD".into(),
            ..TableState::default()
        };
        let rows = build_rows(&items(), &columns(), "category", &state);
        assert_eq!(names(&rows), vec!["Bolt", "anchor"]);

        // "hard" appears in no name
        let rows = build_rows(&items(), &columns(), "name", &state);
        assert!(rows.rows.is_empty());
        assert_eq!(rows.total_count, 0);
        assert_eq!(rows.page, 0);
    }

    #[test]
    fn text_sort_ignores_case() {
        let state = TableState {
            sort: Some(("name".into(), true)),
            ..TableState::default()
        };
        let rows = build_rows(&items(), &columns(), "name", &state);
        assert_eq!(names(&rows), vec!["anchor", "Bolt", "Cable"]);
    }

    #[test]
    fn numeric_sort_descending() {
        let state = TableState {
            sort: Some(("price".into(), false)),
            ..TableState::default()
        };
        let rows = build_rows(&items(), &columns(), "name", &state);
        assert_eq!(names(&rows), vec!["Cable", "anchor", "Bolt"]);
    }

    #[test]
    fn pagination_clamps_page() {
        let state = TableState {
            sort: Some(("name".into(), true)),
            page: 7,
            page_size: 2,
            ..TableState::default()
        };
        let rows = build_rows(&items(), &columns(), "name", &state);
        assert_eq!(rows.total_count, 3);
        assert_eq!(rows.total_pages, 2);
        assert_eq!(rows.page, 1);
        assert_eq!(names(&rows), vec!["Cable"]);
    }

    #[test]
    fn unknown_filter_column_keeps_all_rows() {
        let state = TableState {
            filter: "zzz".into(),
            ..TableState::default()
        };
        let rows = build_rows(&items(), &columns(), "missing", &state);
        assert_eq!(rows.total_count, 3);
    }
}
