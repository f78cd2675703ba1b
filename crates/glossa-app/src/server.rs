use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use glossa_config::Config;
use glossa_core::{DictionaryService, WordStore};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

/// Run the dictionary server until `shutdown` resolves or the server task exits
pub async fn run(config: Config, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let store = WordStore::open(&config.store.path)
        .await
        .with_context(|| format!("Failed to load dictionary {}", config.store.path.display()))?;
    let service = DictionaryService::new(Arc::new(store));

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    let cancel = CancellationToken::new();
    let mut server = tokio::spawn(glossa_io::serve(listener, Arc::new(service), cancel.clone()));

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = &mut server => {
            return match result {
                Ok(Ok(())) => {
                    tracing::warn!("server task exited");
                    Ok(())
                }
                Ok(Err(e)) => Err(e.context("server task failed")),
                Err(e) => Err(anyhow::anyhow!("server task panicked: {e}")),
            };
        }
    }

    cancel.cancel();

    match timeout(config.server.shutdown_timeout(), server).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(anyhow::anyhow!("server task panicked: {e}")),
        Err(_) => {
            tracing::warn!(
                "Connections still open after {}s, exiting anyway",
                config.server.shutdown_timeout_seconds
            );
            Ok(())
        }
    }
}
