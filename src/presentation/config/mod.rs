mod settings;

pub use settings::{
    FfmpegSettings, LimitSettings, OllamaSettings, ServerSettings, Settings, StoreSettings,
    WhisperSettings,
};
