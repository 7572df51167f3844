use arredo_server::core::{AppState, AuthConfig};
use arredo_server::mailer::SmtpMailer;
use arredo_server::repositories::{MySqlInquiryStore, MySqlUserDirectory};
use arredo_server::{Config, create_router};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Inizializza la configurazione
    let config = Config::from_env()?;
    config.print_info();

    // Pool di connessioni verso la directory utenti e l'archivio richieste
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let state = Arc::new(AppState::new(
        Arc::new(MySqlUserDirectory::new(pool.clone())),
        Arc::new(MySqlInquiryStore::new(pool)),
        Arc::new(SmtpMailer::new(config.smtp.clone())),
        AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            exempt_user_ids: config.exempt_user_ids.clone(),
        },
        config.contact_inbox.clone(),
    ));

    // Crea il router (il front-end gira su un'origin diversa)
    let app = create_router(state).layer(CorsLayer::permissive());

    // Definisci l'indirizzo e avvia il server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    println!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
