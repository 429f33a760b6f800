use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use roster_config::ObservabilityConfig;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}

/// Installs the global subscriber.
///
/// The console layer honours `RUST_LOG`. With observability enabled, errors
/// also go to a daily `roster.log` and info-level events to a daily
/// `roster.json` under the configured log directory.
pub fn init_tracing(config: &ObservabilityConfig) -> anyhow::Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let (file_layer, json_layer) = if config.enabled {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "roster.log");
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(EnvFilter::new("error"));

        // Structured logs for ingestion
        let json_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "roster.json");
        let json_layer = fmt::layer()
            .json()
            .with_writer(json_appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"));

        (Some(file_layer), Some(json_layer))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()?;

    if config.enabled {
        info!(log_dir = %config.log_dir, "Tracing initialized with file logging");
    } else {
        info!("Tracing initialized (console only)");
    }

    Ok(())
}
