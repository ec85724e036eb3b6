use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::client_for;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::counter::{Counter, CounterQuery, CounterView, group_by_first_word};
use crate::models::table_filter::Page;
use crate::templates_structs::{CounterListTemplate, PageContext};
use super::LOAD_FAILED;

/// GET /counters: counter list with search, quota bucket, sort and grouping.
pub async fn list(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<CounterQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &config, "/counters");
    let view = CounterView::from_query(&query);
    let client = client_for(&session, &api);

    let mut tmpl = CounterListTemplate {
        ctx,
        search: view.search.clone(),
        quota_options: view.quota_options(),
        sort_options: view.sort_options(),
        dir_options: view.dir_options(),
        grouped: false,
        groups: vec![],
        page: Page::paginate(vec![], None, query.per_page()),
        prev_href: None,
        next_href: None,
        total_count: 0,
        shown_count: 0,
        load_error: None,
    };

    let counters = match client.list_counters().await {
        Ok(counters) => counters,
        Err(e) => {
            log::warn!("Counter list failed: {e}");
            tmpl.load_error = Some(e.user_message(LOAD_FAILED));
            return render(tmpl);
        }
    };

    let filtered = view.apply(&counters);
    tmpl.total_count = counters.len();
    tmpl.shown_count = filtered.len();

    if view.is_default() {
        tmpl.grouped = true;
        tmpl.groups = group_by_first_word(filtered, |c: &Counter| c.name.as_str());
    } else {
        let page = Page::paginate(filtered, query.page(), query.per_page());
        if page.has_prev() {
            tmpl.prev_href = Some(page_href(&view, page.prev_page(), page.per_page));
        }
        if page.has_next() {
            tmpl.next_href = Some(page_href(&view, page.next_page(), page.per_page));
        }
        tmpl.page = page;
    }

    render(tmpl)
}

/// Link to another page of the same filtered view. Defaults are left out.
pub fn page_href(view: &CounterView, page: i64, per_page: i64) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if !view.search.is_empty() {
        params.push(("q", view.search.clone()));
    }
    if view.quota.is_some() {
        params.push(("quota", view.quota_key().to_string()));
    }
    params.push(("sort", view.sort.key().to_string()));
    params.push(("dir", view.dir.as_str().to_string()));
    params.push(("page", page.to_string()));
    params.push(("per_page", per_page.to_string()));
    let qs = serde_urlencoded::to_string(&params).unwrap_or_default();
    format!("/counters?{qs}")
}
