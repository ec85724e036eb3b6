pub const DEFAULT_PER_PAGE: i64 = 12;

/// One page of an in-memory list.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Slice `items` to the requested page. Out-of-range pages clamp to the last one.
    pub fn paginate(items: Vec<T>, page: Option<i64>, per_page: Option<i64>) -> Self {
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, 100);
        let total_count = items.len() as i64;
        let total_pages = ((total_count + per_page - 1) / per_page).max(1);
        let page = page.unwrap_or(1).clamp(1, total_pages);
        let offset = ((page - 1) * per_page) as usize;

        let items = items.into_iter().skip(offset).take(per_page as usize).collect();
        Page { items, page, per_page, total_count, total_pages }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_page(&self) -> i64 {
        (self.page - 1).max(1)
    }

    pub fn next_page(&self) -> i64 {
        (self.page + 1).min(self.total_pages)
    }
}
