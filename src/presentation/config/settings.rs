use std::time::Duration;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub whisper: WhisperSettings,
    pub ffmpeg: FfmpegSettings,
    pub ollama: OllamaSettings,
    pub store: StoreSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct WhisperSettings {
    pub binary: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct FfmpegSettings {
    pub binary: String,
}

#[derive(Debug, Clone)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub csv_path: String,
}

#[derive(Debug, Clone)]
pub struct LimitSettings {
    pub max_upload_mb: usize,
    pub external_call_timeout_secs: u64,
}

impl Settings {
    /// Assemble settings from the environment, with local-development
    /// defaults for every knob.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse_or("SERVER_PORT", 5000),
            },
            whisper: WhisperSettings {
                binary: env_or("WHISPER_BINARY", "whisper"),
                model: env_or("WHISPER_MODEL", "base"),
            },
            ffmpeg: FfmpegSettings {
                binary: env_or("FFMPEG_BINARY", "ffmpeg"),
            },
            ollama: OllamaSettings {
                base_url: env_or("OLLAMA_URL", "http://localhost:11434"),
                model: env_or("OLLAMA_MODEL", "llama3.2"),
            },
            store: StoreSettings {
                csv_path: env_or("RECORDINGS_CSV", "recordings.csv"),
            },
            limits: LimitSettings {
                max_upload_mb: env_parse_or("MAX_UPLOAD_MB", 50),
                external_call_timeout_secs: env_parse_or("EXTERNAL_CALL_TIMEOUT_SECS", 120),
            },
        }
    }

    pub fn external_call_timeout(&self) -> Duration {
        Duration::from_secs(self.limits.external_call_timeout_secs)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.limits.max_upload_mb * 1024 * 1024
    }
}
