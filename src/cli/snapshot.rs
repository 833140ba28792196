//! # snapshot 子命令 CLI 定义
//!
//! 变更前把输入文件复制为内容哈希命名的快照。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/snapshot.rs`

use clap::Args;

/// snapshot 子命令参数
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Seed name (expects <seed>.cell / <seed>.param)
    #[arg(short, long)]
    pub seed: String,

    /// Only snapshot <seed>.cell
    #[arg(long, default_value_t = false, conflicts_with = "param_only")]
    pub cell_only: bool,

    /// Only snapshot <seed>.param
    #[arg(long, default_value_t = false)]
    pub param_only: bool,
}
