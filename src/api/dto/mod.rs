//! DTO 模块
//!
//! API 请求/响应数据传输对象。

pub mod coach_dto;
pub mod record_dto;
