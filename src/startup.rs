use crate::configuration::Settings;
use crate::connectors;
use crate::helpers::Views;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

fn io_error<E>(err: E) -> std::io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std::io::Error::new(std::io::ErrorKind::Other, err)
}

/// Largest urlencoded body a page form may carry. Bodies past it are
/// rejected with 413 rather than read as an empty form.
pub const FORM_BODY_LIMIT: usize = 16 * 1024 * 1024;

pub async fn run(
    listener: TcpListener,
    pool: SqlitePool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let views = web::Data::new(Views::new().map_err(io_error)?);

    // Built once; every request shares the same clients and configuration
    let assistant = connectors::init_gemini(&settings.connectors).map_err(io_error)?;
    let messenger = connectors::init_telegram(&settings.connectors).map_err(io_error)?;

    let settings = web::Data::new(settings);
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(routes::health_check)
            .service(routes::pages::index_handler)
            .service(routes::user::main_handler)
            .service(routes::pages::checkout_handler)
            .service(routes::pages::home_handler)
            .service(routes::gemini::page_handler)
            .service(routes::gemini::reply_handler)
            .service(routes::logs::list_handler)
            .service(routes::logs::delete_handler)
            .service(routes::telegram::page_handler)
            .service(routes::telegram::start_handler)
            .service(routes::telegram::stop_handler)
            .service(routes::telegram::webhook_handler)
            .service(routes::pages::paynow_handler)
            .app_data(web::FormConfig::default().limit(FORM_BODY_LIMIT))
            .app_data(pool.clone())
            .app_data(views.clone())
            .app_data(assistant.clone())
            .app_data(messenger.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
