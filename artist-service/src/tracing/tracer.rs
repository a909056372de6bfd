use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, fmt::format::Format, prelude::*};

use crate::{
    config::{AppConfig, DistributionConfig, TracingConfig},
    error::AppResult,
};

/// Sets up logging and distributed tracing for the artist service.
pub struct Tracer;

impl Tracer {
    /// Installs the tracer selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn install(config: &AppConfig) -> AppResult<()> {
        match config.tracing {
            TracingConfig::Stdout => Self::install_stdout(&config.distribution),
            TracingConfig::Memory => Self::install_memory(&config.distribution),
        }
    }

    /// Installs stdout tracing with OpenTelemetry.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install_stdout(distribution: &DistributionConfig) -> AppResult<()> {
        let provider = SdkTracerProvider::builder()
            .with_resource(Self::resource(distribution))
            .with_simple_exporter(SpanExporter::default())
            .build();
        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(provider);

        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }

    /// Installs a tracer provider without exporters and a compact log format.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install_memory(distribution: &DistributionConfig) -> AppResult<()> {
        let provider = SdkTracerProvider::builder()
            .with_resource(Self::resource(distribution))
            .build();
        global::set_tracer_provider(provider);

        let layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }

    fn resource(distribution: &DistributionConfig) -> Resource {
        let mut resource = Resource::builder().with_service_name(distribution.name.clone());
        if let Some(version) = distribution.version.clone() {
            resource = resource.with_attribute(KeyValue::new("version", version));
        }
        resource.build()
    }
}
