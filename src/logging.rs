use env_logger::Env;

/// Initializes logging, info level by default unless overridden by RUST_LOG
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
