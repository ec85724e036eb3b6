use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::client_for;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::counter::Counter;
use crate::models::occupancy;
use crate::models::table_filter::SelectOption;
use crate::models::user::{Role, User, UserQuery, UserView};
use crate::models::user::types::role_label;
use crate::templates_structs::{DashboardRow, DashboardStats, DashboardTemplate, PageContext};
use super::LOAD_FAILED;

pub fn compute_stats(users: &[User], counters: &[Counter]) -> DashboardStats {
    let active: Vec<&User> = users.iter().filter(|u| u.is_active()).collect();
    DashboardStats {
        total_users: active.len(),
        cs_users: active.iter().filter(|u| u.is_customer_service()).count(),
        assigned_users: active.iter().filter(|u| u.counter_id.is_some()).count(),
        total_counters: counters.len(),
        free_counters: occupancy::free_count(users, counters),
    }
}

fn role_select(roles: &[Role], user: &User) -> Vec<SelectOption> {
    let current = user.effective_role_id().map(|id| id.to_string()).unwrap_or_default();
    roles
        .iter()
        .map(|r| SelectOption::new(&r.id.to_string(), &role_label(&r.name), &current))
        .collect()
}

/// GET /dashboard: users with their counters and roles.
pub async fn index(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &config, "/dashboard");
    let view = UserView::from_query(&query);
    let client = client_for(&session, &api);

    let loaded = tokio::try_join!(client.list_users(), client.list_counters(), client.list_roles());

    let (rows, stats, roles, load_error) = match loaded {
        Ok((users, counters, roles)) => {
            let rows = view
                .apply(&users, &counters)
                .into_iter()
                .map(|row| DashboardRow { role_options: role_select(&roles, &row.user), row })
                .collect();
            (rows, compute_stats(&users, &counters), roles, None)
        }
        Err(e) => {
            log::warn!("Dashboard load failed: {e}");
            (vec![], DashboardStats::default(), vec![], Some(e.user_message(LOAD_FAILED)))
        }
    };

    let tmpl = DashboardTemplate {
        ctx,
        search: view.search.clone(),
        role_options: view.role_options(&roles),
        assignment_options: view.assignment_options(),
        sort_options: view.sort_options(),
        dir_options: view.dir_options(),
        rows,
        stats,
        filtered: !view.is_default(),
        load_error,
    };
    render(tmpl)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: &str, counter_id: Option<i64>, deleted: bool) -> User {
        User {
            id,
            name: format!("U{id}"),
            email: String::new(),
            role_id: None,
            role: Some(Role { id: if role == "admin" { 1 } else { 2 }, name: role.into() }),
            counter_id,
            email_verified_at: None,
            created_at: None,
            updated_at: None,
            deleted_at: deleted.then(|| "2024-01-01T00:00:00Z".to_string()),
        }
    }

    fn counter(id: i64) -> Counter {
        Counter {
            id,
            name: format!("Loket {id}"),
            counter_code: String::new(),
            quota: None,
            schedule_start: None,
            schedule_end: None,
            description: None,
        }
    }

    #[test]
    fn stats_skip_soft_deleted_users() {
        let users = vec![
            user(1, "customer_service", Some(10), false),
            user(2, "admin", None, false),
            user(3, "customer_service", Some(20), true),
        ];
        let stats = compute_stats(&users, &[counter(10), counter(20), counter(30)]);
        assert_eq!(
            stats,
            DashboardStats { total_users: 2, cs_users: 1, assigned_users: 1, total_counters: 3, free_counters: 2 }
        );
    }

    #[test]
    fn role_select_preselects_current_role() {
        let roles = vec![Role { id: 1, name: "admin".into() }, Role { id: 2, name: "customer_service".into() }];
        let opts = role_select(&roles, &user(5, "customer_service", None, false));
        let selected: Vec<_> = opts.iter().filter(|o| o.selected).map(|o| o.label.as_str()).collect();
        assert_eq!(selected, vec!["Customer Service"]);
    }
}
