use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "token.html")]
pub struct TokenTemplate {
    pub ctx: PageContext,
    pub has_session_token: bool,
    pub has_config_token: bool,
    pub api_base_url: String,
}
