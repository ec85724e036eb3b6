use askama::Template;

use crate::models::counter::{Counter, Group};
use crate::models::table_filter::{Page, SelectOption};
use super::PageContext;

#[derive(Template)]
#[template(path = "counters/list.html")]
pub struct CounterListTemplate {
    pub ctx: PageContext,
    pub search: String,
    pub quota_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub dir_options: Vec<SelectOption>,
    /// Sectioned by first word; only for the untouched view.
    pub grouped: bool,
    pub groups: Vec<Group<Counter>>,
    pub page: Page<Counter>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub total_count: usize,
    pub shown_count: usize,
    pub load_error: Option<String>,
}
