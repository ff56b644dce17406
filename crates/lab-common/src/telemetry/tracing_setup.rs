//! Tracing and logging setup
//!
//! Human-readable logs while developing, one JSON object per line in
//! production. `RUST_LOG` always wins over the built-in filter.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Per-crate overrides appended to the base level; sqlx logs every statement at info
const QUIET_DEPENDENCIES: &str = "sqlx=warn,tower_governor=warn,hyper=info";

#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for our own crates when `RUST_LOG` is unset
    pub level: Level,
    pub json: bool,
    /// Emit span open/close events (service and repository calls)
    pub span_events: bool,
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl TracingConfig {
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
                file_line: true,
            },
            Environment::Staging => Self {
                level: Level::DEBUG,
                json: true,
                span_events: false,
                file_line: false,
            },
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                span_events: false,
                file_line: false,
            },
        }
    }

    /// Filter used when `RUST_LOG` is not set
    #[must_use]
    pub fn default_directives(&self) -> String {
        format!(
            "{},{QUIET_DEPENDENCIES}",
            self.level.to_string().to_lowercase()
        )
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if a global subscriber is already installed
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // Option<Layer> is itself a layer, so exactly one formatter is active
    let (json_layer, pretty_layer) = if config.json {
        let layer = fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_events(span_events);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_file(config.file_line)
            .with_line_number(config.file_line)
            .with_span_events(span_events);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
