use std::cmp::Ordering;

use serde::Serialize;

pub mod paging;

pub use paging::Page;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir { #[default] Asc, Desc }

impl SortDir {
    pub fn from_param(dir: Option<&str>) -> Self {
        if dir == Some("desc") { SortDir::Desc } else { SortDir::Asc }
    }
    pub fn as_str(&self) -> &'static str {
        match self { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }
    /// Apply the direction to an ascending ordering.
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self { SortDir::Asc => ord, SortDir::Desc => ord.reverse() }
    }
}

/// Option shown in a `<select>`; `selected` is precomputed for the template.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, label: &str, current: &str) -> Self {
        Self { value: value.to_string(), label: label.to_string(), selected: value == current }
    }
}

/// Case-folded comparison, raw string as tie-break.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalise a search box value: trimmed, empty when absent.
pub fn normalize_query(q: Option<&str>) -> String {
    q.map(str::trim).unwrap_or("").to_string()
}

/// Integer query parameter; anything unparsable counts as absent.
pub fn parse_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}
