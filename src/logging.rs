//! Process-wide logging configuration

use env_logger::Env;

/// Initialize logging to stderr
///
/// The threshold is `debug` when verbose, `warn` otherwise. `RUST_LOG`
/// overrides the default when set. Must be called once, before any log
/// records are emitted.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
