use askama::Template;

use crate::models::table_filter::SelectOption;
use crate::models::user::UserRow;
use super::PageContext;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub cs_users: usize,
    pub assigned_users: usize,
    pub total_counters: usize,
    pub free_counters: usize,
}

/// A user row plus its role `<select>` with the current role preselected.
pub struct DashboardRow {
    pub row: UserRow,
    pub role_options: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub search: String,
    pub role_options: Vec<SelectOption>,
    pub assignment_options: Vec<SelectOption>,
    pub sort_options: Vec<SelectOption>,
    pub dir_options: Vec<SelectOption>,
    pub rows: Vec<DashboardRow>,
    pub stats: DashboardStats,
    pub filtered: bool,
    pub load_error: Option<String>,
}
