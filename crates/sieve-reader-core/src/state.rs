//! Restorable view state: everything the query string carries.

use crate::filter::FilterSpec;
use crate::sort::SortSpec;

/// Filter, sort and page as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            page: 1,
        }
    }
}

impl ViewState {
    /// Whether every field is at its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
