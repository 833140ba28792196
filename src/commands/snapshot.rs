//! # snapshot 命令实现
//!
//! 把种子的 .cell / .param 复制为内容哈希命名的快照。
//!
//! ## 依赖关系
//! - 使用 `cli/snapshot.rs` 定义的参数
//! - 使用 `utils/output.rs`, `utils/snapshot.rs`

use crate::cli::snapshot::SnapshotArgs;
use crate::error::Result;
use crate::utils::{output, snapshot};

use std::path::PathBuf;

/// 执行 snapshot 命令
pub fn execute(args: SnapshotArgs) -> Result<()> {
    if !args.param_only {
        let path = snapshot::snapshot_file(&PathBuf::from(format!("{}.cell", args.seed)))?;
        output::print_success(&format!("Snapshot: {}", path.display()));
    }
    if !args.cell_only {
        let path = snapshot::snapshot_file(&PathBuf::from(format!("{}.param", args.seed)))?;
        output::print_success(&format!("Snapshot: {}", path.display()));
    }
    Ok(())
}
