use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use glossa_core::Dictionary;
use glossa_types::{RpcRequest, RpcResponse};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;

/// Accept WebSocket connections on `listener` until `cancel` fires.
///
/// Each connection runs on its own task. On cancellation the listener stops
/// accepting, open connections finish their current request and are closed,
/// and this returns once all of them are done.
pub async fn serve(
    listener: TcpListener,
    dictionary: Arc<dyn Dictionary>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("Server started, listening on {}", listener.local_addr()?);

    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Server stopping, closing {} connection(s)", connections.len());
                break;
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        tracing::warn!("Failed to accept connection: {e}");
                        continue;
                    }
                };

                let dictionary = Arc::clone(&dictionary);
                let cancel = cancel.child_token();
                connections.spawn(async move {
                    if let Err(e) = handle_connection(stream, peer, dictionary, cancel).await {
                        tracing::warn!("Connection {peer} closed with error: {e}");
                    }
                });
            }
            Some(result) = connections.join_next(), if !connections.is_empty() => {
                if let Err(e) = result {
                    tracing::error!("connection task panicked: {e}");
                }
            }
        }
    }

    while let Some(result) = connections.join_next().await {
        if let Err(e) = result {
            tracing::error!("connection task panicked: {e}");
        }
    }

    tracing::info!("Server shut down");
    Ok(())
}

async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    dictionary: Arc<dyn Dictionary>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    let (mut write, mut read) = ws_stream.split();
    tracing::debug!("Connection opened: {peer}");

    loop {
        let msg = tokio::select! {
            _ = cancel.cancelled() => {
                let _ = write.send(Message::Close(None)).await;
                break;
            }
            msg = read.next() => msg,
        };

        let Some(msg) = msg else {
            break;
        };
        let msg = msg?;

        if msg.is_close() {
            break;
        }
        if !msg.is_text() {
            continue;
        }

        let response = respond(msg.to_text()?, dictionary.as_ref()).await;
        write
            .send(Message::text(serde_json::to_string(&response)?))
            .await?;
    }

    tracing::debug!("Connection closed: {peer}");
    Ok(())
}

/// Decode one request frame and run it against `dictionary`
async fn respond(text: &str, dictionary: &dyn Dictionary) -> RpcResponse {
    match serde_json::from_str::<RpcRequest>(text) {
        Ok(request) => {
            tracing::debug!("Request: {:?}", request);
            dictionary.handle(request).await
        }
        Err(e) => {
            tracing::warn!("Invalid request frame: {e}");
            RpcResponse::Error {
                message: format!("invalid request: {e}"),
            }
        }
    }
}
