use async_trait::async_trait;

use crate::application::ports::{CompletionEngine, CompletionError};

/// Scripted completion engine for tests and offline development.
pub struct MockCompletionEngine {
    reply: String,
}

impl MockCompletionEngine {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl CompletionEngine for MockCompletionEngine {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Ok(self.reply.clone())
    }
}
