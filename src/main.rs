mod config;
mod nav;
mod routes;
mod services;
mod sim;
mod state;
mod views;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = config::DashConfig::from_env();
    let state = state::AppState::new(config);

    // Spawn background idle-session sweeper.
    let _sweeper = services::sweeper::spawn_sweeper_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "callboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
