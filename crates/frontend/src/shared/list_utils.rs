/// Sorting and filtering helpers shared by list tables
use std::cmp::Ordering;

/// Case-insensitive substring match; an empty filter matches everything
pub fn matches_filter(value: &str, filter: &str) -> bool {
    let filter = filter.trim();
    filter.is_empty() || value.to_lowercase().contains(&filter.to_lowercase())
}

/// Compare two cell values.
///
/// Numeric columns compare as numbers; a value that does not parse sorts
/// after every number. Text columns compare case-insensitively.
pub fn compare_values(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        let pa = a.trim().parse::<f64>().ok();
        let pb = b.trim().parse::<f64>().ok();
        return match (pa, pb) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Next sort state after a click on `field`: same column flips direction,
/// another column starts ascending
pub fn toggle_sort(current: Option<(String, bool)>, field: &str) -> Option<(String, bool)> {
    match current {
        Some((f, ascending)) if f == field => Some((f, !ascending)),
        _ => Some((field.to_string(), true)),
    }
}

/// Sort indicator for a header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of a sortable header
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}
