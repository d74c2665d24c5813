use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder once per process.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        if let Err(e) = metrics::set_global_recorder(recorder) {
            tracing::warn!("Prometheus recorder not installed: {}", e);
        }

        handle
    })
}

/// Renders the Prometheus exposition text, empty until `init_metrics` runs.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success,
    EmptyResult,
    Failure,
}

impl GenerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::EmptyResult => "empty_result",
            Self::Failure => "failure",
        }
    }
}

pub fn record_generation(model: &str, outcome: GenerationOutcome, elapsed: Duration) {
    counter!(
        "video_generations_total",
        "model" => model.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    histogram!("video_generation_duration_seconds", "model" => model.to_string())
        .record(elapsed.as_secs_f64());
}
