mod mock_completion_engine;
mod ollama_client;

pub use mock_completion_engine::MockCompletionEngine;
pub use ollama_client::OllamaClient;
