//! Per-column filtering and single-column sorting of list rows.
//!
//! The visible rows of a list are always `sort(filter(rows, filters), sort)`;
//! [`query`] is that composition and is a pure function of its inputs, so
//! callers can memoize it on (rows, filters, sort).

pub mod collate;
pub mod filter;
pub mod sort;

use std::fmt;
use std::hash::Hash;

pub use collate::{locale_compare, Collation};
pub use filter::{filter_rows, FilterSet, FilterValue, NO_FILTER};
pub use sort::{compare_rows, sort_rows, SortOrder, SortSpec};

/// Value of a single cell as seen by the filter and sort engines
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Row type that exposes its cells by column
pub trait ListRow {
    type Column: Copy + Eq + Ord + Hash + fmt::Debug;

    /// Cell value, `None` when the row has no value for the column
    fn field(&self, column: Self::Column) -> Option<FieldValue>;

    /// How cells of the column are compared when sorting
    fn collation(_column: Self::Column) -> Collation {
        Collation::Text
    }
}

/// Filter then sort
pub fn query<T>(rows: &[T], filters: &FilterSet<T::Column>, sort: &SortSpec<T::Column>) -> Vec<T>
where
    T: ListRow + Clone,
{
    let mut visible = filter_rows(rows, filters);
    sort_rows(&mut visible, sort);
    visible
}
