use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use super::TracingConfig;

/// Install the global tracing subscriber and log the startup line.
///
/// Consultation transcripts flow through this service, so handlers log
/// sanitized previews only; the filter default keeps third-party HTTP noise
/// at debug rather than trace.
pub fn init_tracing(config: TracingConfig, port: u16) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medscribe=debug,tower_http=debug"));

    let base = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    let fmt_layer = if config.json_format {
        base.json().boxed()
    } else {
        base.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!(
        port = port,
        environment = %config.environment,
        json_format = config.json_format,
        "Telemetry initialized"
    );
}
