use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `--log-level`; otherwise `debug` when the
/// config enables it, else `info`.
pub fn init_logging(log_level: Option<&str>, json: bool, config_debug: bool) {
    let default_level = match log_level {
        Some(level) => level,
        None if config_debug => "debug",
        None => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
