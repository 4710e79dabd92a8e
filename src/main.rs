use academy_portal::config::{config, EnvConfig, CONFIG};
use academy_portal::db::db_service::DbService;
use academy_portal::routes::configure_routes;
use academy_portal::utils::throttle::LoginThrottle;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let _ = CONFIG.set(EnvConfig::from_env());
    let addr = format!("0.0.0.0:{}", config().port);

    let db_service = Arc::new(
        DbService::new(&config().db_url)
            .await
            .map_err(|e| std::io::Error::other(format!("database init failed: {e}")))?,
    );

    let purge_db = Arc::clone(&db_service);
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = purge_db.purge_expired_sessions().await {
                error!(error = %e, "session purge failed");
            }
        }
    });

    let throttle = web::Data::new(LoginThrottle::from_config(&config().session));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .app_data(throttle.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
