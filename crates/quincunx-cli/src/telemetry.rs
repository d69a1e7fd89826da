//! Log subscriber setup for the binary.

use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `verbosity` picks the default level; the `LOG` environment variable
/// overrides it with full `EnvFilter` directives.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var("LOG")
        .from_env_lossy();

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
