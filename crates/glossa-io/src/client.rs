use anyhow::{Context, bail};
use futures_util::{SinkExt, StreamExt};
use glossa_types::{DefineResponse, LookupResponse, RpcRequest, RpcResponse, WordRequest};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

/// Client for a dictionary server. One request is in flight at a time.
pub struct DictionaryClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl DictionaryClient {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let (stream, _) = connect_async(url)
            .await
            .with_context(|| format!("Failed to connect to {url}"))?;
        tracing::debug!("Connected to {url}");

        Ok(Self { stream })
    }

    pub async fn look_up_word(
        &mut self,
        word: &str,
        language_code: &str,
    ) -> anyhow::Result<LookupResponse> {
        let request = RpcRequest::LookUpWord(WordRequest::lookup(word, language_code));
        match self.call(&request).await? {
            RpcResponse::LookUpWord(response) => Ok(response),
            other => bail!("Unexpected response to lookUpWord: {other:?}"),
        }
    }

    pub async fn define_word(
        &mut self,
        word: &str,
        language_code: &str,
        definition: &str,
    ) -> anyhow::Result<DefineResponse> {
        let request = RpcRequest::DefineWord(WordRequest::define(word, language_code, definition));
        match self.call(&request).await? {
            RpcResponse::DefineWord(response) => Ok(response),
            other => bail!("Unexpected response to defineWord: {other:?}"),
        }
    }

    /// Send a raw text frame and wait for the reply
    pub async fn call_raw(&mut self, text: String) -> anyhow::Result<RpcResponse> {
        self.stream.send(Message::text(text)).await?;

        while let Some(msg) = self.stream.next().await {
            let msg = msg?;
            if msg.is_close() {
                break;
            }
            if msg.is_text() {
                let response = serde_json::from_str(msg.to_text()?)
                    .context("Server sent an unreadable response")?;
                return Ok(response);
            }
        }

        bail!("Connection closed before a response arrived")
    }

    async fn call(&mut self, request: &RpcRequest) -> anyhow::Result<RpcResponse> {
        match self.call_raw(serde_json::to_string(request)?).await? {
            RpcResponse::Error { message } => bail!("Server rejected request: {message}"),
            response => Ok(response),
        }
    }

    /// Send a close frame and wait for the server to acknowledge it
    pub async fn close(mut self) -> anyhow::Result<()> {
        self.stream.close(None).await?;
        while let Some(msg) = self.stream.next().await {
            if msg.is_err() {
                break;
            }
        }
        Ok(())
    }
}
