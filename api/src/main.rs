use api::{serve, AppConfig, AppState};
use rag_client::RagClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let rag_client = RagClient::new(config.upstream_url);
    log::info!("Forwarding searches to RAG upstream at {}", rag_client.upstream_url());

    let state = AppState::new(rag_client);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", config.bind_addr, e))?;
    log::info!("Listening on {}", listener.local_addr()?);

    serve(listener, state).await
}
