use env_logger::Env;

/// Logger for the `stackbake` binary: silent unless `--verbose` is passed.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();
}

/// Logger for the service binaries, driven by `RUST_LOG`.
pub fn init_env_logger(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
