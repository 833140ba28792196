//! # gen 子命令 CLI 定义
//!
//! 生成 gencell 默认 .param 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/gen.rs`

use clap::Args;
use std::path::PathBuf;

/// gen 子命令参数
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Output path (default: gencell.param)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
