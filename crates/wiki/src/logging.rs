use log::LevelFilter;

/// Stderr logger; `RUST_LOG` sets the base filter and `verbose` raises this crate to debug.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    if verbose {
        builder.filter_module("wiki", LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false);

    let _ = builder.try_init();
}
