//! 配置模块

pub mod config;
pub mod loader;

pub use config::{AppConfig, GenerationConfig, ServerConfig};
pub use loader::ConfigLoader;
