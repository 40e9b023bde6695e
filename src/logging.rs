//! Diagnostic logging via `env_logger`. `RUST_LOG` overrides the level.

use log::LevelFilter;

/// Level for the given verbosity flags. Quiet wins.
pub fn level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the logger. Later calls are ignored.
pub fn init(default: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(default.to_string());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
