//! Log filter selection
//!
//! `RUST_LOG`, when set, is used as-is. The built-in directives only apply
//! when it is unset or blank, so a user asking for `linkstack=trace` gets
//! the library's push/pop events.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "lstack=info";
const VERBOSE_DIRECTIVES: &str = "lstack=debug,linkstack=debug";

/// Build the filter from the `RUST_LOG` value, falling back to the defaults
pub fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    match env {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ if verbose => EnvFilter::new(VERBOSE_DIRECTIVES),
        _ => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}

/// Install the global `fmt` subscriber, writing to stderr
pub fn init(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
