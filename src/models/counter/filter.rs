// src/models/counter/filter.rs
use std::cmp::Ordering;

use serde::Deserialize;

use super::types::{Counter, QuotaBucket};
use crate::models::table_filter::{SelectOption, SortDir, contains_ci, locale_cmp, normalize_query, parse_number};

/// Raw query string of the counter list page.
#[derive(Debug, Default, Deserialize)]
pub struct CounterQuery {
    pub q: Option<String>,
    pub quota: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl CounterQuery {
    pub fn page(&self) -> Option<i64> {
        parse_number(self.page.as_deref())
    }

    pub fn per_page(&self) -> Option<i64> {
        parse_number(self.per_page.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterSort { #[default] Name, Code, Quota }

impl CounterSort {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("code") => CounterSort::Code,
            Some("quota") => CounterSort::Quota,
            _ => CounterSort::Name,
        }
    }
    pub fn key(&self) -> &'static str {
        match self { CounterSort::Name => "name", CounterSort::Code => "code", CounterSort::Quota => "quota" }
    }
}

/// Parsed view state: search, quota bucket (None = all), sort key and direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterView {
    pub search: String,
    pub quota: Option<QuotaBucket>,
    pub sort: CounterSort,
    pub dir: SortDir,
}

impl CounterView {
    pub fn from_query(query: &CounterQuery) -> Self {
        Self {
            search: normalize_query(query.q.as_deref()),
            quota: query.quota.as_deref().and_then(QuotaBucket::from_key),
            sort: CounterSort::from_param(query.sort.as_deref()),
            dir: SortDir::from_param(query.dir.as_deref()),
        }
    }

    /// Grouping only applies to the untouched view.
    pub fn is_default(&self) -> bool {
        *self == CounterView::default()
    }

    pub fn quota_key(&self) -> &'static str {
        self.quota.map(|b| b.key()).unwrap_or("all")
    }

    pub fn quota_options(&self) -> Vec<SelectOption> {
        let current = self.quota_key();
        let mut opts = vec![SelectOption::new("all", "Semua kuota", current)];
        opts.extend(QuotaBucket::ALL.iter().map(|b| SelectOption::new(b.key(), b.label(), current)));
        opts
    }

    pub fn sort_options(&self) -> Vec<SelectOption> {
        let current = self.sort.key();
        vec![
            SelectOption::new("name", "Nama", current),
            SelectOption::new("code", "Kode", current),
            SelectOption::new("quota", "Kuota", current),
        ]
    }

    pub fn dir_options(&self) -> Vec<SelectOption> {
        let current = self.dir.as_str();
        vec![
            SelectOption::new("asc", "Naik", current),
            SelectOption::new("desc", "Turun", current),
        ]
    }

    /// Filter then sort.
    pub fn apply(&self, counters: &[Counter]) -> Vec<Counter> {
        let mut out: Vec<Counter> = counters
            .iter()
            .filter(|c| matches_search(c, &self.search))
            .filter(|c| self.quota.is_none_or(|b| c.quota_bucket() == b))
            .cloned()
            .collect();
        out.sort_by(|a, b| self.dir.apply(compare(self.sort, a, b)));
        out
    }
}

/// Case-insensitive substring search over name, code and description.
pub fn matches_search(counter: &Counter, query: &str) -> bool {
    contains_ci(&counter.name, query)
        || contains_ci(&counter.counter_code, query)
        || contains_ci(counter.description_text(), query)
}

fn compare(sort: CounterSort, a: &Counter, b: &Counter) -> Ordering {
    match sort {
        CounterSort::Name => locale_cmp(&a.name, &b.name),
        CounterSort::Code => locale_cmp(&a.counter_code, &b.counter_code),
        CounterSort::Quota => compare_quota(a.quota, b.quota),
    }
}

/// Numeric quotas ascending, unlimited (missing/zero) last.
fn compare_quota(a: Option<i64>, b: Option<i64>) -> Ordering {
    let rank = |q: Option<i64>| match q {
        None | Some(0) => None,
        Some(n) => Some(n),
    };
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(id: i64, name: &str, code: &str, quota: Option<i64>, desc: Option<&str>) -> Counter {
        Counter {
            id,
            name: name.into(),
            counter_code: code.into(),
            quota,
            schedule_start: None,
            schedule_end: None,
            description: desc.map(String::from),
        }
    }

    fn sample() -> Vec<Counter> {
        vec![
            counter(1, "Loket Pajak", "PJK", Some(120), Some("Pajak kendaraan bermotor")),
            counter(2, "Loket Dukcapil", "DKC", Some(60), Some("KTP dan KK")),
            counter(3, "imigrasi", "IMG", Some(30), None),
            counter(4, "Loket BPJS", "BPJ", None, Some("Kesehatan")),
            counter(5, "Samsat", "SMS", Some(0), None),
        ]
    }

    fn ids(list: &[Counter]) -> Vec<i64> {
        list.iter().map(|c| c.id).collect()
    }

    fn search(counters: &[Counter], q: &str) -> Vec<Counter> {
        CounterView { search: q.into(), ..Default::default() }.apply(counters)
    }

    #[test]
    fn search_hits_name_code_and_description() {
        let all = sample();
        assert_eq!(ids(&search(&all, "pajak")), vec![1]);
        assert_eq!(ids(&search(&all, "dkc")), vec![2]);
        assert_eq!(ids(&search(&all, "KESEHATAN")), vec![4]);
        assert_eq!(search(&all, "").len(), all.len());
    }

    #[test]
    fn search_is_idempotent() {
        let all = sample();
        for q in ["loket", "a", "ktp", "zzz", ""] {
            let once = search(&all, q);
            let twice = search(&once, q);
            assert_eq!(once, twice, "query {q:?}");
        }
    }

    #[test]
    fn quota_filter_selects_bucket() {
        let all = sample();
        let view = CounterView { quota: Some(QuotaBucket::Unlimited), ..Default::default() };
        assert_eq!(ids(&view.apply(&all)), vec![4, 5]);
        let view = CounterView { quota: Some(QuotaBucket::Large), ..Default::default() };
        assert_eq!(ids(&view.apply(&all)), vec![1]);
    }

    #[test]
    fn quota_buckets_partition_the_list() {
        let all = sample();
        let total: usize = QuotaBucket::ALL
            .iter()
            .map(|b| CounterView { quota: Some(*b), ..Default::default() }.apply(&all).len())
            .sum();
        assert_eq!(total, all.len());
    }

    #[test]
    fn default_sort_is_name_case_insensitive() {
        let view = CounterView::default();
        assert_eq!(ids(&view.apply(&sample())), vec![3, 4, 2, 1, 5]);
    }

    #[test]
    fn quota_sort_puts_unlimited_last() {
        let view = CounterView { sort: CounterSort::Quota, ..Default::default() };
        let sorted = ids(&view.apply(&sample()));
        assert_eq!(&sorted[..3], &[3, 2, 1]);
        let desc = CounterView { sort: CounterSort::Quota, dir: SortDir::Desc, ..Default::default() };
        assert_eq!(&ids(&desc.apply(&sample()))[2..], &[1, 2, 3]);
    }

    #[test]
    fn query_parsing_is_lenient() {
        let query = CounterQuery {
            q: Some("  bpjs ".into()),
            quota: Some("enormous".into()),
            sort: Some("colour".into()),
            dir: Some("desc".into()),
            ..Default::default()
        };
        let view = CounterView::from_query(&query);
        assert_eq!(view.search, "bpjs");
        assert_eq!(view.quota, None);
        assert_eq!(view.sort, CounterSort::Name);
        assert_eq!(view.dir, SortDir::Desc);
        assert!(!view.is_default());
        assert!(CounterView::from_query(&CounterQuery::default()).is_default());
    }

    #[test]
    fn bad_page_numbers_count_as_absent() {
        let query = CounterQuery {
            page: Some("abc".into()),
            per_page: Some("".into()),
            ..Default::default()
        };
        assert_eq!(query.page(), None);
        assert_eq!(query.per_page(), None);
        let query = CounterQuery { page: Some("2".into()), ..Default::default() };
        assert_eq!(query.page(), Some(2));
    }

    #[test]
    fn options_mark_current_values() {
        let view = CounterView { quota: Some(QuotaBucket::Medium), ..Default::default() };
        let selected: Vec<_> = view.quota_options().into_iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "medium");
    }
}
