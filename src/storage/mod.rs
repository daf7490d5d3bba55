//! 存储模块
//!
//! 数据存储对教练流水线而言是一个外部协作方，这里只定义
//! 流水线依赖的读写契约与进程内实现。

pub mod memory;
pub mod repository;

pub use memory::MemoryStore;
pub use repository::DataStore;
