use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiResult};
use crate::auth::csrf;
use crate::auth::session::{client_for, flash_error, flash_success};
use crate::errors::{AppError, see_other};
use crate::handlers::{ACTION_FAILED, safe_redirect};

#[derive(Deserialize)]
pub struct ActionForm {
    pub csrf_token: String,
    pub redirect_to: Option<String>,
}

#[derive(Deserialize)]
pub struct RoleForm {
    pub role_id: i64,
    pub csrf_token: String,
    pub redirect_to: Option<String>,
}

/// Turn a mutation result into a flash message and a redirect.
fn finish(session: &Session, result: ApiResult<()>, success: &str, location: &str) -> HttpResponse {
    match result {
        Ok(()) => flash_success(session, success),
        Err(e) => flash_error(session, e.user_message(ACTION_FAILED)),
    }
    see_other(location)
}

/// POST /users/{id}/delete: soft delete (moves the user to the archive).
pub async fn delete(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let result = client_for(&session, &api).delete_user(id).await;
    let location = safe_redirect(form.redirect_to.as_deref(), "/dashboard");
    Ok(finish(&session, result, "Pengguna dipindahkan ke arsip", &location))
}

/// POST /users/{id}/role
pub async fn change_role(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<RoleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let result = client_for(&session, &api).change_role(id, form.role_id).await;
    let location = safe_redirect(form.redirect_to.as_deref(), "/dashboard");
    Ok(finish(&session, result, "Peran pengguna diperbarui", &location))
}

/// POST /users/{id}/restore
pub async fn restore(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let result = client_for(&session, &api).restore_user(id).await;
    let location = safe_redirect(form.redirect_to.as_deref(), "/users/trashed");
    Ok(finish(&session, result, "Pengguna berhasil dipulihkan", &location))
}

/// POST /users/{id}/force-delete: permanent, only for archived users.
pub async fn force_delete(
    api: web::Data<ApiClient>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<ActionForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let id = path.into_inner();
    let result = client_for(&session, &api).force_delete_user(id).await;
    let location = safe_redirect(form.redirect_to.as_deref(), "/users/trashed");
    Ok(finish(&session, result, "Pengguna dihapus permanen", &location))
}
