use sea_orm::Database;
use tracing::info;

use parley_accounts::config::AccountsConfig;
use parley_accounts::infra::auth::HttpTokenValidator;
use parley_accounts::router::build_router;
use parley_accounts::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let token_validator =
        HttpTokenValidator::new(&config.auth_service_url, config.auth_http_timeout)
            .expect("failed to build auth client");

    let state = AppState {
        db,
        token_validator,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
