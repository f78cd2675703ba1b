use std::sync::Arc;

use glossa_types::{
    DefineResponse, LookupResponse, ResponseCode, RpcRequest, RpcResponse, WordRequest,
};

use crate::error::StoreError;
use crate::store::WordStore;

/// Dictionary RPC surface, as dispatched by the transport
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a word and report the definition and the language code it was stored under
    async fn look_up_word(&self, request: WordRequest) -> LookupResponse;

    /// Add a word unless it is already defined
    async fn define_word(&self, request: WordRequest) -> DefineResponse;

    /// Dispatch a request frame to the matching operation
    async fn handle(&self, request: RpcRequest) -> RpcResponse {
        match request {
            RpcRequest::LookUpWord(request) => {
                RpcResponse::LookUpWord(self.look_up_word(request).await)
            }
            RpcRequest::DefineWord(request) => {
                RpcResponse::DefineWord(self.define_word(request).await)
            }
        }
    }
}

/// Maps requests onto a [`WordStore`]. Store errors never reach the caller.
#[derive(Debug, Clone)]
pub struct DictionaryService {
    store: Arc<WordStore>,
}

impl DictionaryService {
    pub fn new(store: Arc<WordStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<WordStore> {
        &self.store
    }
}

#[async_trait::async_trait]
impl Dictionary for DictionaryService {
    async fn look_up_word(&self, request: WordRequest) -> LookupResponse {
        match self.store.lookup(&request.word, &request.language_code).await {
            Some(entry) => LookupResponse::found(entry.definition, entry.language_code),
            None => {
                tracing::debug!("No entry for '{}' ({})", request.word, request.language_code);
                LookupResponse::not_found()
            }
        }
    }

    async fn define_word(&self, request: WordRequest) -> DefineResponse {
        let result = self
            .store
            .define(&request.word, &request.language_code, &request.definition)
            .await;

        match result {
            Ok(()) => {
                tracing::info!("Added '{}' ({}) to dictionary", request.word, request.language_code);
                DefineResponse::new(ResponseCode::Success)
            }
            Err(e @ StoreError::DuplicateKey { .. }) => {
                tracing::warn!("Rejected define: {e}");
                DefineResponse::new(ResponseCode::Failure)
            }
            Err(e) => {
                tracing::warn!("Failed to add word '{}' to dictionary: {e}", request.word);
                DefineResponse::new(ResponseCode::Failure)
            }
        }
    }
}
