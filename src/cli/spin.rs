//! # spin 子命令 CLI 定义
//!
//! 批量为 .cell 的 positions_frac 标注初始磁矩。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/spin.rs`

use crate::models::SpinScheme;

use clap::Args;
use std::path::PathBuf;

/// spin 子命令参数
#[derive(Args, Debug)]
pub struct SpinArgs {
    /// Input .cell file or directory containing .cell files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Glob pattern for input files (directory mode)
    #[arg(short, long, default_value = "*.cell")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Moment assignment scheme
    #[arg(long, value_enum, default_value_t = SpinScheme::Mp)]
    pub scheme: SpinScheme,

    /// Snapshot each file to a content-hash copy before rewriting
    #[arg(long, default_value_t = false)]
    pub snapshot: bool,
}
