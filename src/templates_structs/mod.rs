// Template context structures for Askama templates, organized by page.

use actix_session::Session;
use actix_web::HttpRequest;

use crate::auth::csrf;
use crate::auth::session::{Flash, get_api_token, take_flash};
use crate::config::AppConfig;

mod common;
mod counter;
mod dashboard;
mod user;

pub use self::common::TokenTemplate;
pub use self::counter::CounterListTemplate;
pub use self::dashboard::{DashboardRow, DashboardStats, DashboardTemplate};
pub use self::user::{CounterChoice, LoketTemplate, TrashTemplate};

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

const NAV: [(&str, &str); 4] = [
    ("/counters", "Loket"),
    ("/dashboard", "Customer Service"),
    ("/users/trashed", "Arsip Pengguna"),
    ("/token", "Token API"),
];

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<Flash>,
    pub csrf_token: String,
    pub nav: Vec<NavLink>,
    /// Path + query of the current request, used by "try again" links.
    pub current_url: String,
    pub has_token: bool,
}

impl PageContext {
    pub fn build(req: &HttpRequest, session: &Session, config: &AppConfig, nav_path: &str) -> Self {
        let nav = NAV
            .iter()
            .map(|&(href, label)| NavLink { href, label, active: href == nav_path })
            .collect();
        Self {
            app_name: config.app_name.clone(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            nav,
            current_url: req.uri().to_string(),
            has_token: get_api_token(session).is_some() || config.api_token.is_some(),
        }
    }
}
