//! 日志基础设施

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 存在时优先于配置的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{level},tower_http=debug,sqlx=warn"))
        });

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
