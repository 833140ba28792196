//! # 工具函数模块
//!
//! 提供美化输出、进度条、内容哈希快照等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `models/` 使用
//! - 子模块: output, progress, snapshot

pub mod output;
pub mod progress;
pub mod snapshot;
