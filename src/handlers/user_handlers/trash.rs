use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::session::client_for;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::table_filter::normalize_query;
use crate::models::user::filter::search_trashed;
use crate::templates_structs::{PageContext, TrashTemplate};
use crate::handlers::LOAD_FAILED;

#[derive(Deserialize)]
pub struct TrashQuery {
    q: Option<String>,
}

/// GET /users/trashed: archived (soft-deleted) users.
pub async fn list(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<TrashQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &config, "/users/trashed");
    let search = normalize_query(query.q.as_deref());

    let tmpl = match client_for(&session, &api).list_trashed_users().await {
        Ok(users) => TrashTemplate {
            ctx,
            users: search_trashed(&users, &search),
            total_count: users.len(),
            search,
            load_error: None,
        },
        Err(e) => {
            log::warn!("Trash list failed: {e}");
            TrashTemplate {
                ctx,
                search,
                users: vec![],
                total_count: 0,
                load_error: Some(e.user_message(LOAD_FAILED)),
            }
        }
    };
    render(tmpl)
}
