//! # 产品服务
//!
//! 基于 Axum 与 SQLx 的产品 CRUD HTTP 服务：
//! - `app`: 路由、处理器与存储抽象
//! - `core`: 错误处理与中间件
//! - `infrastructure`: 数据库连接池与日志
//! - `config`: 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use app::product::handler::AppState;
pub use app::product::model::{NewProduct, Product};
pub use app::product::store::{MemoryProductStore, PgProductStore, ProductStore, StoreError};
pub use config::{Config, ConfigError};
