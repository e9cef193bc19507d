//! Logging init: stderr only. Stdout is reserved for reports, which an
//! external harness greps verbatim.

use tracing_subscriber::EnvFilter;

/// Initialize tracing output on stderr, filtered via `RUST_LOG`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sitecheck_core=info,sitecheck_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}
