use super::{FieldValue, ListRow};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder option of a select filter meaning "do not constrain this column"
pub const NO_FILTER: &str = "Select Category";

/// Search value entered into a column filter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl FilterValue {
    /// Blank inputs (empty text, unchecked box, zero) clear the filter instead of setting it
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Flag(flag) => !flag,
            Self::Number(number) => *number == 0.0 || number.is_nan(),
        }
    }

    pub fn is_no_filter(&self) -> bool {
        matches!(self, Self::Text(text) if text == NO_FILTER)
    }

    /// Boolean reading of the value, used against flag columns
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    true
                } else if text.eq_ignore_ascii_case("false") {
                    false
                } else {
                    !text.is_empty()
                }
            }
        }
    }

    /// Numeric reading of the value, used against number columns
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Flag(_) => None,
        }
    }

    fn matches(&self, value: Option<FieldValue>) -> bool {
        if self.is_no_filter() {
            return true;
        }
        match value {
            Some(FieldValue::Text(text)) => text
                .to_lowercase()
                .contains(&self.to_string().to_lowercase()),
            Some(FieldValue::Flag(flag)) => flag == self.as_flag(),
            Some(FieldValue::Number(number)) => self.as_number() == Some(number),
            None => false,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FilterValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// Active per-column filters. At most one search value per column.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet<C: Ord> {
    entries: BTreeMap<C, FilterValue>,
}

impl<C: Ord> Default for FilterSet<C> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<C: Ord + Copy> FilterSet<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter for `column`, or remove it when `value` is blank
    pub fn set(&mut self, column: C, value: FilterValue) {
        if value.is_blank() {
            self.entries.remove(&column);
        } else {
            self.entries.insert(column, value);
        }
    }

    pub fn get(&self, column: C) -> Option<&FilterValue> {
        self.entries.get(&column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, &FilterValue)> {
        self.entries.iter().map(|(column, value)| (*column, value))
    }

    /// No entry constrains any column
    pub fn is_unconstrained(&self) -> bool {
        self.entries.values().all(FilterValue::is_no_filter)
    }

    pub fn matches<T: ListRow<Column = C>>(&self, row: &T) -> bool {
        self.iter()
            .all(|(column, value)| value.matches(row.field(column)))
    }
}

/// Rows matching every active filter, in their original order
pub fn filter_rows<T>(rows: &[T], filters: &FilterSet<T::Column>) -> Vec<T>
where
    T: ListRow + Clone,
{
    if filters.is_unconstrained() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| filters.matches(*row))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Col {
        Name,
        Qty,
        Active,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: Option<&'static str>,
        qty: f64,
        active: bool,
    }

    impl ListRow for Row {
        type Column = Col;

        fn field(&self, column: Col) -> Option<FieldValue> {
            match column {
                Col::Name => self.name.map(|n| FieldValue::Text(n.to_string())),
                Col::Qty => Some(FieldValue::Number(self.qty)),
                Col::Active => Some(FieldValue::Flag(self.active)),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: Some("Green Apple"), qty: 3.0, active: true },
            Row { name: Some("Banana"), qty: 7.0, active: false },
            Row { name: None, qty: 3.0, active: true },
        ]
    }

    #[test]
    fn test_empty_filter_set_returns_all_rows() {
        let filters = FilterSet::new();
        assert_eq!(filter_rows(&rows(), &filters), rows());
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let mut filters = FilterSet::new();
        filters.set(Col::Name, "APP".into());
        let result = filter_rows(&rows(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, Some("Green Apple"));
    }

    #[test]
    fn test_missing_field_excludes_row() {
        let mut filters = FilterSet::new();
        filters.set(Col::Name, "a".into());
        let result = filter_rows(&rows(), &filters);
        assert!(result.iter().all(|r| r.name.is_some()));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_flag_filter() {
        let mut filters = FilterSet::new();
        filters.set(Col::Active, true.into());
        assert_eq!(filter_rows(&rows(), &filters).len(), 2);

        let mut filters = FilterSet::new();
        filters.set(Col::Active, "false".into());
        let result = filter_rows(&rows(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, Some("Banana"));
    }

    #[test]
    fn test_number_filter_requires_exact_equality() {
        let mut filters = FilterSet::new();
        filters.set(Col::Qty, FilterValue::Number(7.0));
        assert_eq!(filter_rows(&rows(), &filters).len(), 1);

        filters.set(Col::Qty, "3".into());
        assert_eq!(filter_rows(&rows(), &filters).len(), 2);

        filters.set(Col::Qty, "3.5".into());
        assert!(filter_rows(&rows(), &filters).is_empty());

        filters.set(Col::Qty, FilterValue::Flag(true));
        assert!(filter_rows(&rows(), &filters).is_empty());
    }

    #[test]
    fn test_all_filters_must_match() {
        let mut filters = FilterSet::new();
        filters.set(Col::Name, "an".into());
        filters.set(Col::Active, true.into());
        assert!(filter_rows(&rows(), &filters).is_empty());
    }

    #[test]
    fn test_no_filter_sentinel_is_unconstrained() {
        let mut filters = FilterSet::new();
        filters.set(Col::Name, NO_FILTER.into());
        assert!(filters.is_unconstrained());
        assert_eq!(filter_rows(&rows(), &filters), rows());

        filters.set(Col::Active, false.into());
        assert_eq!(filters.len(), 1);

        filters.set(Col::Qty, FilterValue::Number(3.0));
        assert!(!filters.is_unconstrained());
        // the sentinel entry itself never excludes a row, even one missing the column
        assert_eq!(filter_rows(&rows(), &filters).len(), 2);
    }

    #[test]
    fn test_blank_value_removes_entry() {
        let mut filters = FilterSet::new();
        filters.set(Col::Name, "apple".into());
        filters.set(Col::Active, true.into());
        assert_eq!(filters.len(), 2);

        filters.set(Col::Name, "".into());
        filters.set(Col::Active, false.into());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_as_flag_coercion() {
        assert!(FilterValue::from("TRUE").as_flag());
        assert!(!FilterValue::from("false").as_flag());
        assert!(FilterValue::from("yes").as_flag());
        assert!(!FilterValue::from("").as_flag());
        assert!(!FilterValue::Number(0.0).as_flag());
    }
}
