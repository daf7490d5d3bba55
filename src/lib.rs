//! Vita - 个人健康追踪服务
//!
//! 记录用户的饮食、运动与情绪，并在此之上提供 AI 教练能力：
//! 汇总当日活动上下文，按用户选择的教练人设生成建议与问答回复，
//! 外部生成服务不可用时降级为人设一致的预置回复。

pub mod api;
pub mod coach;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod storage;
