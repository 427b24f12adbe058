//! Process-wide log subscriber for the `roster` binary.
//!
//! Events are written to stderr with `RUST_LOG` taking precedence over the
//! verbosity flags. Setting `ROSTER_OTEL=1` adds a span bridge that prints
//! OpenTelemetry spans to stdout, which is only useful during local debugging.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use std::sync::OnceLock;

/// Environment variable that turns on the OpenTelemetry bridge when set to `1`.
pub const OTEL_ENV: &str = "ROSTER_OTEL";

/// Held for [`shutdown_tracing`].
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Map `-v` count and `--quiet` to an `EnvFilter` directive.
pub fn verbosity_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,roster=debug",
        _ => "trace",
    }
}

/// Whether `ROSTER_OTEL=1` is set.
pub fn otel_requested() -> bool {
    std::env::var(OTEL_ENV).is_ok_and(|v| v == "1")
}

/// Install the global subscriber.
///
/// `default_filter` applies only when `RUST_LOG` is unset. Fails if a
/// subscriber is already installed for this process.
pub fn init_tracing(default_filter: &str, enable_otel: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);

    let span_bridge = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("roster");
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
        tracing_opentelemetry::layer().with_tracer(tracer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(span_bridge)
        .try_init()?;
    Ok(())
}

/// Flush the span bridge, if one was installed.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("roster: span exporter shutdown failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0, true), "error");
        assert_eq!(verbosity_filter(0, false), "warn");
        assert_eq!(verbosity_filter(1, true), "info,roster=debug");
        assert_eq!(verbosity_filter(3, false), "trace");
    }

    #[test]
    fn test_shutdown_without_init_is_noop() {
        shutdown_tracing();
    }
}
