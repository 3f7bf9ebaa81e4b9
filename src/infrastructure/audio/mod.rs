mod ffmpeg_transcoder;
mod whisper_cli_engine;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use whisper_cli_engine::WhisperCliEngine;
