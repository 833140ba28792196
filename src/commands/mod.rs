//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `parsers/`, `utils/`
//! - 子模块: spin, prepare, tune, gen, diff, snapshot

pub mod diff;
pub mod gen;
pub mod prepare;
pub mod snapshot;
pub mod spin;
pub mod tune;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Spin(args) => spin::execute(args),
        Commands::Prepare(args) => prepare::execute(args),
        Commands::Tune(args) => tune::execute(args),
        Commands::Gen(args) => gen::execute(args),
        Commands::Diff(args) => diff::execute(args),
        Commands::Snapshot(args) => snapshot::execute(args),
    }
}
