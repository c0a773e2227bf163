use env_logger::{Builder, Env, Target};

/// `RUST_LOG` wins over `default_level`. Logs go to stderr so stdout stays parseable.
pub(crate) fn init_logging(default_level: &str) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.target(Target::Stderr).format_timestamp(None);
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
