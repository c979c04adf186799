use std::sync::Once;

/// Logger settings for the `recast` binary.
///
/// The effective filter is `env_filter` if set, else `RUST_LOG`, else
/// `recast_*` crates at `info` (`debug` with `--verbose`, which also shows
/// per-node parse traces and skipped `gone` views).  Ignored-attribute
/// warnings from the lenient parser are visible at every default level.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            verbose: false,
        }
    }
}

impl LoggingConfig {
    pub fn verbose(verbose: bool) -> Self {
        Self { verbose, ..Self::default() }
    }

    /// Filter used when neither `env_filter` nor `RUST_LOG` is set.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "warn,recast_markup=debug,recast_compose=debug,recast_cli=debug,recast=debug"
        } else {
            "warn,recast_markup=info,recast_compose=info,recast_cli=info,recast=info"
        }
    }

    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| self.default_filter().to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on the first call; later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_timestamp(None)
            .format_target(config.verbose)
            .init();

        log::debug!("logging initialized with `{filter}`");
    });
}
