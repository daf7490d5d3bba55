//! 路由模块

pub mod coach_routes;
pub mod record_routes;
