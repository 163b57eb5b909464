/// Date formatting for table cells
use chrono::NaiveDate;

/// Format an ISO date (or the date part of an ISO datetime) as "15 Mar 2024".
/// Anything that does not parse is returned unchanged, empty becomes "-".
pub fn format_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Money/quantity amount with two decimals
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
