use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a JSON subscriber for binaries embedding the engine.
///
/// `RUST_LOG` wins when set; otherwise the engine logs at `info` and the HTTP
/// stack at `warn`. Safe to call more than once.
///
/// ```
/// werewolf_engine::telemetry::init_tracing();
/// tracing::info!(seats = 6, "Table ready");
/// ```
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
