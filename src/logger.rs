use log::LevelFilter;

/// Initialize the logger at the given level. The environment is not consulted.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}
