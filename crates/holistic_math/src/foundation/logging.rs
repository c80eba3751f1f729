//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`, defaulting to Info
pub fn init() {
    init_with_level(log::LevelFilter::Info);
}

/// Initialize the logging system with an explicit default level
///
/// `RUST_LOG` still overrides the level when set. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    }

    if builder.try_init().is_ok() {
        log::debug!("logging initialized at {}", level);
    }
}
