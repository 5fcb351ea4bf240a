use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one. winit is
/// chatty at info on some platforms.
pub const DEFAULT_FILTER: &str = "info,winit=warn";

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. "orrery_engine=debug". Takes
    /// precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Prefix each record with its target (`orrery_engine::engine::frame`, ...).
    pub show_target: bool,
}

impl LoggingConfig {
    /// Engine internals at debug: per-asset loads, runtime commands.
    pub fn verbose() -> Self {
        Self {
            env_filter: Some("debug,winit=warn".to_string()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            show_target: true,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has any
/// effect; call it at the top of `main`.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `DEFAULT_FILTER`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_target(config.show_target);

        // Another logger may already be installed (test harness, host app).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized (filter: {filter})");
    });
}
