mod cli;
mod telemetry;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use slink_gateway::{App, AppState};
use slink_generator::RandomGenerator;
use slink_relay::{Judge0Client, Judge0Settings, RelayService};
use slink_shortener::ShortenerService;
use slink_storage::{
    mysql, InMemoryLinkRepository, InMemorySubmissionRepository, LinkRepository,
    MySqlLinkRepository, MySqlSubmissionRepository, SubmissionRepository,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::try_parse()?;
    telemetry::init(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        judge_base_url = %config.judge_base_url,
        judge_key_configured = config.judge_api_key.is_some(),
        "starting slink gateway"
    );

    let generator = RandomGenerator::new(config.code_length)?;
    debug!(code_length = generator.length(), "short code generator ready");
    let judge = Judge0Client::new(
        Judge0Settings::builder()
            .base_url(config.judge_base_url.clone())
            .api_key(config.judge_api_key.clone())
            .api_host(config.judge_api_host.clone())
            .timeout(Duration::from_secs(config.judge_timeout_secs))
            .build(),
    )?;

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(
                config.listen_addr,
                config.base_url,
                InMemoryLinkRepository::new(),
                InMemorySubmissionRepository::new(),
                generator,
                judge,
            )
            .await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .ok_or("mysql dsn is required when storage backend is mysql")?;
            let pool = mysql::connect(&mysql_dsn).await.inspect_err(|e| {
                error!(error = %e, "failed to connect to mysql");
            })?;
            mysql::ensure_schema(&pool).await.inspect_err(|e| {
                error!(error = %e, "failed to prepare mysql schema");
            })?;
            run_server(
                config.listen_addr,
                config.base_url,
                MySqlLinkRepository::new(pool.clone()),
                MySqlSubmissionRepository::new(pool),
                generator,
                judge,
            )
            .await?;
        }
    }

    Ok(())
}

async fn run_server<L, S>(
    listen_addr: SocketAddr,
    base_url: String,
    links: L,
    submissions: S,
    generator: RandomGenerator,
    judge: Judge0Client,
) -> std::io::Result<()>
where
    L: LinkRepository,
    S: SubmissionRepository,
{
    let state = AppState::new(
        Arc::new(ShortenerService::new(links, generator)),
        Arc::new(RelayService::new(submissions, judge)),
        base_url,
    );

    let listener = TcpListener::bind(listen_addr).await?;
    info!(addr = %listener.local_addr()?, "http server listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
