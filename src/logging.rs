use env_logger::{Builder, Env, Target};

/// 初始化 stderr 日志。`RUST_LOG` 优先；否则由 `-v` 次数决定级别。
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = Builder::from_env(Env::default().default_filter_or(default))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();
}
