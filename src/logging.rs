use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr. Stdout is left to the progress lines.
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise info for our crate, warn for the rest
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("academic_screener=info,warn"));

    // try_init so a second call (e.g. from tests) is a no-op
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
