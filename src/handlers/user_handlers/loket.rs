use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::csrf;
use crate::auth::session::{client_for, flash_error, flash_success};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::models::occupancy;
use crate::templates_structs::{CounterChoice, LoketTemplate, PageContext};
use crate::handlers::{ACTION_FAILED, LOAD_FAILED};

#[derive(Deserialize)]
pub struct AssignForm {
    pub counter_id: i64,
    pub csrf_token: String,
}

/// GET /users/{id}/loket: pick a counter for one user.
pub async fn form(
    req: HttpRequest,
    api: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let ctx = PageContext::build(&req, &session, &config, "/dashboard");
    let client = client_for(&session, &api);

    match tokio::try_join!(client.get_user(id), client.list_users(), client.list_counters()) {
        Ok((user, users, counters)) => {
            let occ = occupancy::resolve(&users, &counters, user.id);
            let current_counter = user
                .counter_id
                .and_then(|cid| counters.iter().find(|c| c.id == cid))
                .cloned();
            let available = occ
                .available
                .into_iter()
                .map(|counter| CounterChoice { current: Some(counter.id) == user.counter_id, counter })
                .collect();
            render(LoketTemplate {
                ctx,
                user: Some(user),
                current_counter,
                available,
                occupied: occ.occupied,
                load_error: None,
            })
        }
        Err(e) if e.is_not_found() => Err(AppError::NotFound),
        Err(e) => {
            log::warn!("Loket page for user {id} failed: {e}");
            render(LoketTemplate {
                ctx,
                user: None,
                current_counter: None,
                available: vec![],
                occupied: vec![],
                load_error: Some(e.user_message(LOAD_FAILED)),
            })
        }
    }
}

/// POST /users/{id}/loket: assign a counter, refusing ones held by someone else.
pub async fn assign(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<AssignForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let back = format!("/users/{id}/loket");
    let client = client_for(&session, &api);

    let (users, counters) = match tokio::try_join!(client.list_users(), client.list_counters()) {
        Ok(loaded) => loaded,
        Err(e) => {
            flash_error(&session, e.user_message(LOAD_FAILED));
            return Ok(see_other(&back));
        }
    };

    let Some(counter) = counters.iter().find(|c| c.id == form.counter_id) else {
        flash_error(&session, "Loket tidak ditemukan");
        return Ok(see_other(&back));
    };

    let occ = occupancy::resolve(&users, &counters, id);
    if let Some(taken) = occ.occupant_of(counter.id) {
        flash_error(
            &session,
            format!("{} sudah ditempati oleh {}", counter.name, taken.occupant_name),
        );
        return Ok(see_other(&back));
    }

    match client.assign_counter(id, counter.id).await {
        Ok(()) => {
            log::info!("Assigned counter {} to user {id}", counter.id);
            flash_success(&session, format!("{} berhasil ditetapkan", counter.name));
            Ok(see_other("/dashboard"))
        }
        Err(e) => {
            flash_error(&session, e.user_message(ACTION_FAILED));
            Ok(see_other(&back))
        }
    }
}
