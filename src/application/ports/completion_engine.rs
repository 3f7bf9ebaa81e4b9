use async_trait::async_trait;

/// Language-model collaborator. Given a prompt, returns one non-streaming
/// text completion.
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    RequestFailed(String),
    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}
