mod completion_engine;
mod recording_store;
mod speech_engine;
mod transcoder;

pub use completion_engine::{CompletionEngine, CompletionError};
pub use recording_store::{RecordingStore, StoreError};
pub use speech_engine::{SpeechEngine, SpeechEngineError};
pub use transcoder::{Transcoder, TranscoderError};
