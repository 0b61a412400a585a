use tracing_subscriber::EnvFilter;

use salvage_rules::RULE_VERSION;
use salvage_server::config::{LogFormat, ServerConfig};
use salvage_server::state::AppState;
use salvage_storage::FileStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init(),
    }

    tokio::fs::create_dir_all(&config.data_dir).await?;
    let state = AppState::new(FileStore::new(&config.data_dir));
    let app = salvage_server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        rule_version = RULE_VERSION,
        "salvage server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
