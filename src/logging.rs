use std::io::Write;

/// Diagnostics go to stderr; stdout carries only the converted timestamp.
/// Verbosity defaults to `warn` and follows `RUST_LOG` when set.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.module_path().unwrap_or_default(),
                record.args()
            )
        })
        .init();
}
