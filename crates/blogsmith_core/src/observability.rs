//! Metric export setup and the instruments recorded per generation.

#[cfg(feature = "metrics")]
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
use std::time::Duration;
use tracing::{debug, info, instrument};
#[cfg(feature = "metrics")]
use tracing::warn;

/// Install the global meter provider for `service_name`.
///
/// `OTEL_EXPORTER=otlp` exports over OTLP/HTTP to
/// `OTEL_EXPORTER_OTLP_ENDPOINT` (default `http://localhost:4318`). Anything
/// else prints metrics to stdout. Without the `metrics` feature this only logs.
#[instrument(skip_all, fields(service_name))]
pub fn init_observability(service_name: &'static str, interval_secs: u64) -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        let _ = interval_secs;
        info!(service_name, "Built without metrics, skipping meter provider");
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        let interval = Duration::from_secs(interval_secs);
        let builder = SdkMeterProvider::builder().with_resource(
            Resource::builder_empty()
                .with_attributes([KeyValue::new("service.name", service_name)])
                .build(),
        );

        let provider = match std::env::var("OTEL_EXPORTER").unwrap_or_default().as_str() {
            "otlp" => builder
                .with_reader(
                    PeriodicReader::builder(otlp_exporter()?)
                        .with_interval(interval)
                        .build(),
                )
                .build(),
            _ => {
                info!("Exporting metrics to stdout");
                builder
                    .with_reader(
                        PeriodicReader::builder(StdoutExporter::default())
                            .with_interval(interval)
                            .build(),
                    )
                    .build()
            }
        };
        global::set_meter_provider(provider);
        debug!(service_name, interval_secs, "Meter provider installed");
        Ok(())
    }
}

#[cfg(feature = "metrics")]
fn otlp_exporter() -> Result<OtlpExporter, String> {
    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4318".to_string());
    info!(%endpoint, "Exporting metrics over OTLP");

    OtlpExporter::builder()
        .with_http()
        .with_endpoint(&endpoint)
        .with_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| {
            warn!(error = %e, "OTLP exporter unavailable");
            format!("Failed to create OTLP exporter: {}", e)
        })
}

/// Log the end of metric export. The provider flushes when dropped.
#[instrument]
pub fn shutdown_observability() {
    debug!("Metrics export stopped");
}

/// Instruments recorded around each generation call.
///
/// Without the `metrics` feature every method is a no-op.
#[derive(Debug, Clone)]
pub struct GenerationMetrics {
    #[cfg(feature = "metrics")]
    generations: Counter<u64>,
    #[cfg(feature = "metrics")]
    failures: Counter<u64>,
    #[cfg(feature = "metrics")]
    latency: Histogram<f64>,
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationMetrics {
    /// Create instruments on the global meter.
    pub fn new() -> Self {
        #[cfg(feature = "metrics")]
        {
            let meter = global::meter("blogsmith");
            Self {
                generations: meter
                    .u64_counter("blogsmith.generations")
                    .with_description("Completed blog generations")
                    .build(),
                failures: meter
                    .u64_counter("blogsmith.generation_failures")
                    .with_description("Blog generations that returned an error")
                    .build(),
                latency: meter
                    .f64_histogram("blogsmith.generation_latency")
                    .with_unit("s")
                    .build(),
            }
        }

        #[cfg(not(feature = "metrics"))]
        {
            Self {}
        }
    }

    /// Record a successful call and how long it took.
    pub fn record_success(&self, style: &str, elapsed: Duration) {
        #[cfg(feature = "metrics")]
        {
            let attrs = [KeyValue::new("style", style.to_string())];
            self.generations.add(1, &attrs);
            self.latency.record(elapsed.as_secs_f64(), &attrs);
        }
        #[cfg(not(feature = "metrics"))]
        let _ = (style, elapsed);
    }

    /// Record a failed call.
    pub fn record_failure(&self, style: &str) {
        #[cfg(feature = "metrics")]
        {
            self.failures
                .add(1, &[KeyValue::new("style", style.to_string())]);
        }
        #[cfg(not(feature = "metrics"))]
        let _ = style;
    }
}
