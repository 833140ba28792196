//! # diff 子命令 CLI 定义
//!
//! 将 .param 与 gencell 默认值做三类对比 (same / diff / missing)。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/diff.rs`

use clap::Args;
use std::path::PathBuf;

/// diff 子命令参数
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Seed name (expects <seed>.param)
    #[arg(short, long)]
    pub seed: String,

    /// Also list keys whose values match the baseline
    #[arg(long, default_value_t = false)]
    pub show_same: bool,

    /// Export the full classification to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
