use super::{locale_compare, Collation, ListRow};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Active sort: exactly one column and a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec<C> {
    pub order_by: C,
    pub order: SortOrder,
}

impl<C: Copy + PartialEq> SortSpec<C> {
    pub fn ascending(order_by: C) -> Self {
        Self {
            order_by,
            order: SortOrder::Ascending,
        }
    }

    /// Header click: the active ascending column flips to descending,
    /// anything else becomes ascending on `column`
    pub fn toggled(self, column: C) -> Self {
        let order = if self.order == SortOrder::Ascending && self.order_by == column {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Self {
            order_by: column,
            order,
        }
    }

    pub fn is_active(&self, column: C) -> bool {
        self.order_by == column
    }

    pub fn is_ascending(&self) -> bool {
        self.order == SortOrder::Ascending
    }
}

/// Rows without a value for the sort column go last in both directions.
pub fn compare_rows<T: ListRow>(a: &T, b: &T, spec: &SortSpec<T::Column>) -> Ordering {
    match (a.field(spec.order_by), b.field(spec.order_by)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let numeric = T::collation(spec.order_by) == Collation::Numeric;
            let (a, b) = (a.to_string(), b.to_string());
            match spec.order {
                SortOrder::Ascending => locale_compare(&a, &b, numeric),
                SortOrder::Descending => locale_compare(&b, &a, numeric),
            }
        }
    }
}

pub fn sort_rows<T: ListRow>(rows: &mut [T], spec: &SortSpec<T::Column>) {
    rows.sort_by(|a, b| compare_rows(a, b, spec));
}
