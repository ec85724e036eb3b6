// src/models/user/filter.rs
use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Deserialize;

use super::types::{Role, User, role_label};
use crate::models::counter::Counter;
use crate::models::table_filter::{SelectOption, SortDir, contains_ci, locale_cmp, normalize_query};

/// Raw query string of the user overview.
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub q: Option<String>,
    pub role: Option<String>,
    pub assignment: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignmentFilter { #[default] All, Assigned, Unassigned }

impl AssignmentFilter {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("assigned") => AssignmentFilter::Assigned,
            Some("unassigned") => AssignmentFilter::Unassigned,
            _ => AssignmentFilter::All,
        }
    }
    pub fn key(&self) -> &'static str {
        match self {
            AssignmentFilter::All => "all",
            AssignmentFilter::Assigned => "assigned",
            AssignmentFilter::Unassigned => "unassigned",
        }
    }
    fn accepts(&self, user: &User) -> bool {
        match self {
            AssignmentFilter::All => true,
            AssignmentFilter::Assigned => user.counter_id.is_some(),
            AssignmentFilter::Unassigned => user.counter_id.is_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserSort { #[default] Name, Email, CreatedAt }

impl UserSort {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("email") => UserSort::Email,
            Some("created_at") => UserSort::CreatedAt,
            _ => UserSort::Name,
        }
    }
    pub fn key(&self) -> &'static str {
        match self { UserSort::Name => "name", UserSort::Email => "email", UserSort::CreatedAt => "created_at" }
    }
}

/// A user row with its counter resolved for display.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub user: User,
    pub counter_name: Option<String>,
}

impl UserRow {
    pub fn counter_label(&self) -> &str {
        self.counter_name.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserView {
    pub search: String,
    /// Role name; `None` = all roles.
    pub role: Option<String>,
    pub assignment: AssignmentFilter,
    pub sort: UserSort,
    pub dir: SortDir,
}

impl UserView {
    pub fn from_query(query: &UserQuery) -> Self {
        Self {
            search: normalize_query(query.q.as_deref()),
            role: query
                .role
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty() && *r != "all")
                .map(String::from),
            assignment: AssignmentFilter::from_param(query.assignment.as_deref()),
            sort: UserSort::from_param(query.sort.as_deref()),
            dir: SortDir::from_param(query.dir.as_deref()),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == UserView::default()
    }

    pub fn role_options(&self, roles: &[Role]) -> Vec<SelectOption> {
        let current = self.role.as_deref().unwrap_or("all");
        let mut opts = vec![SelectOption::new("all", "Semua peran", current)];
        opts.extend(roles.iter().map(|r| SelectOption::new(&r.name, &role_label(&r.name), current)));
        opts
    }

    pub fn assignment_options(&self) -> Vec<SelectOption> {
        let current = self.assignment.key();
        vec![
            SelectOption::new("all", "Semua", current),
            SelectOption::new("assigned", "Sudah punya loket", current),
            SelectOption::new("unassigned", "Belum punya loket", current),
        ]
    }

    pub fn sort_options(&self) -> Vec<SelectOption> {
        let current = self.sort.key();
        vec![
            SelectOption::new("name", "Nama", current),
            SelectOption::new("email", "Email", current),
            SelectOption::new("created_at", "Tanggal dibuat", current),
        ]
    }

    pub fn dir_options(&self) -> Vec<SelectOption> {
        let current = self.dir.as_str();
        vec![
            SelectOption::new("asc", "Naik", current),
            SelectOption::new("desc", "Turun", current),
        ]
    }

    /// Resolve counters, filter and sort the active users.
    pub fn apply(&self, users: &[User], counters: &[Counter]) -> Vec<UserRow> {
        let names: HashMap<i64, &str> = counters.iter().map(|c| (c.id, c.name.as_str())).collect();
        let mut rows: Vec<UserRow> = users
            .iter()
            .filter(|u| u.is_active())
            .filter(|u| self.role.as_deref().is_none_or(|r| u.role_name() == r))
            .filter(|u| self.assignment.accepts(u))
            .map(|u| UserRow {
                user: u.clone(),
                counter_name: u.counter_id.and_then(|id| names.get(&id)).map(|n| n.to_string()),
            })
            .filter(|row| matches_search(&row.user, row.counter_name.as_deref(), &self.search))
            .collect();
        rows.sort_by(|a, b| self.dir.apply(compare(self.sort, &a.user, &b.user)));
        rows
    }
}

/// Case-insensitive search over name, email, role and assigned counter.
pub fn matches_search(user: &User, counter_name: Option<&str>, query: &str) -> bool {
    contains_ci(&user.name, query)
        || contains_ci(&user.email, query)
        || contains_ci(&user.role_label(), query)
        || counter_name.is_some_and(|n| contains_ci(n, query))
}

/// Search used by the trash list: name and email only.
pub fn search_trashed(users: &[User], query: &str) -> Vec<User> {
    let mut out: Vec<User> = users
        .iter()
        .filter(|u| contains_ci(&u.name, query) || contains_ci(&u.email, query))
        .cloned()
        .collect();
    out.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    out
}

fn compare(sort: UserSort, a: &User, b: &User) -> Ordering {
    match sort {
        UserSort::Name => locale_cmp(&a.name, &b.name),
        UserSort::Email => locale_cmp(&a.email, &b.email),
        // ISO timestamps order lexically; missing ones sort first
        UserSort::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
