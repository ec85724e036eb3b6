use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;

const TOKEN_KEY: &str = "api_token";
const FLASH_KEY: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notification shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "toast toast-success",
            FlashKind::Error => "toast toast-error",
        }
    }
}

pub fn set_flash(session: &Session, kind: FlashKind, message: impl Into<String>) {
    let flash = Flash { kind, message: message.into() };
    if let Err(e) = session.insert(FLASH_KEY, &flash) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn flash_success(session: &Session, message: impl Into<String>) {
    set_flash(session, FlashKind::Success, message);
}

pub fn flash_error(session: &Session, message: impl Into<String>) {
    set_flash(session, FlashKind::Error, message);
}

pub fn take_flash(session: &Session) -> Option<Flash> {
    let flash = session.get::<Flash>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Bearer token pasted by the operator, if any.
pub fn get_api_token(session: &Session) -> Option<String> {
    session
        .get::<String>(TOKEN_KEY)
        .unwrap_or(None)
        .filter(|t| !t.is_empty())
}

pub fn set_api_token(session: &Session, token: &str) -> Result<(), String> {
    session
        .insert(TOKEN_KEY, token.trim())
        .map_err(|e| format!("Session error: {e}"))
}

pub fn clear_api_token(session: &Session) {
    session.remove(TOKEN_KEY);
}

/// Client for this request: the session token wins over the configured one.
pub fn client_for(session: &Session, base: &ApiClient) -> ApiClient {
    match get_api_token(session) {
        Some(token) => base.with_token(Some(token)),
        None => base.clone(),
    }
}
