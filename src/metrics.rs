use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use roster_config::ObservabilityConfig;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether a recorder was installed by [`init_metrics`]. False until then,
/// so tests and the CLI record nothing.
pub fn is_observability_enabled() -> bool {
    OBSERVABILITY_ENABLED.get().copied().unwrap_or(false)
}

/// Installs the Prometheus recorder and its upkeep task.
/// Returns `None` when observability is disabled.
pub fn init_metrics(config: &ObservabilityConfig) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.enabled {
        let _ = OBSERVABILITY_ENABLED.set(false);
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )?
        .install_recorder()?;

    let _ = OBSERVABILITY_ENABLED.set(true);

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for the metrics listener
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_student_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("students_created_total").increment(1);
}

/// `kind` is `in_place` or `relocated`.
pub fn track_student_updated(kind: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("students_updated_total", "kind" => kind).increment(1);
}

pub fn track_student_deleted(count: u64) {
    if !is_observability_enabled() {
        return;
    }
    counter!("students_deleted_total").increment(count);
}
