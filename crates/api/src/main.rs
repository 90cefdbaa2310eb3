#[tokio::main]
async fn main() {
    vaultfit_observability::init();

    let config = vaultfit_api::config::AppConfig::from_env();
    let port = config.port;

    let app = vaultfit_api::app::build_app(config).expect("failed to assemble application");

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
