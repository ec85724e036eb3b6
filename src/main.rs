use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use mpp_admin::api::ApiClient;
use mpp_admin::config::AppConfig;
use mpp_admin::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let api = ApiClient::from_config(&config).map_err(std::io::Error::other)?;

    // Session encryption key from SESSION_KEY, else a random one
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    if config.api_token.is_none() {
        log::info!("No API_TOKEN configured; requests carry a token only once one is set at /token");
    }
    log::info!("Backend API at {}", api.base_url());
    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    let cookie_secure = config.cookie_secure;
    let api_data = web::Data::new(api);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(api_data.clone())
            .app_data(config_data.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
