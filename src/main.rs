use finassist::configuration::get_configuration;
use finassist::db;
use finassist::startup::run;
use finassist::telemetry::{get_subscriber, init_subscriber};
use sqlx::sqlite::SqlitePoolOptions;
use std::net::TcpListener;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("finassist".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    tracing::info!(db_path = %settings.database.path, "Opening SQLite database");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(settings.database.connect_options())
        .await
        .expect("Failed to open database.");

    db::migrate(&pool)
        .await
        .expect("Failed to migrate database.");

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run(listener, pool, settings).await?.await
}
