use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{clear_api_token, flash_error, flash_success, get_api_token, set_api_token};
use crate::config::AppConfig;
use crate::errors::{AppError, render, see_other};
use crate::handlers::user_handlers::ActionForm;
use crate::templates_structs::{PageContext, TokenTemplate};

#[derive(Deserialize)]
pub struct TokenForm {
    pub token: String,
    pub csrf_token: String,
}

/// GET /token
pub async fn form(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&req, &session, &config, "/token");
    render(TokenTemplate {
        ctx,
        has_session_token: get_api_token(&session).is_some(),
        has_config_token: config.api_token.is_some(),
        api_base_url: config.api_base_url.clone(),
    })
}

/// POST /token: keep the bearer token in the session.
pub async fn save(session: Session, form: web::Form<TokenForm>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let token = form.token.trim();
    if token.is_empty() {
        flash_error(&session, "Token tidak boleh kosong");
        return Ok(see_other("/token"));
    }
    set_api_token(&session, token).map_err(AppError::Session)?;
    flash_success(&session, "Token API disimpan");
    Ok(see_other("/counters"))
}

/// POST /token/clear
pub async fn clear(session: Session, form: web::Form<ActionForm>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    clear_api_token(&session);
    flash_success(&session, "Token API dihapus dari sesi");
    Ok(see_other("/token"))
}
