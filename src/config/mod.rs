//! 配置管理
//!
//! 配置来源优先级：config.toml < config.{env}.toml < CAMPUS_* 环境变量。

mod r#impl;
mod structs;

pub use structs::*;
