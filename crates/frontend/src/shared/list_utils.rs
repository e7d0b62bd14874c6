//! Helpers shared by list pages (sort headers, filter inputs)

use contracts::shared::list_query::{FilterValue, SortSpec};

/// Icon of a column's sort button
pub fn get_sort_indicator<C: Copy + PartialEq>(sort: &SortSpec<C>, column: C) -> &'static str {
    if sort.is_active(column) {
        if sort.is_ascending() {
            "⬆️"
        } else {
            "⬇️"
        }
    } else {
        "↕️"
    }
}

/// Text shown in a filter input for the current filter value
pub fn filter_input_text(value: Option<&FilterValue>) -> String {
    match value {
        Some(FilterValue::Text(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// Whether a select option shows the current filter value. No option
/// matches while the column is unfiltered, so the placeholder stays first.
pub fn is_selected_option(value: Option<&FilterValue>, option: &str) -> bool {
    value.is_some() && filter_input_text(value) == option
}
