use log::LevelFilter;

/// `RUST_LOG` is read first, `level` then overrides the global filter.
/// Millisecond timestamps so render timings line up with the log.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
