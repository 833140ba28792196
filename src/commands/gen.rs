//! # gen 命令实现
//!
//! 写出 gencell 默认 .param（diff 子命令的基准）。
//!
//! ## 依赖关系
//! - 使用 `cli/gen.rs` 定义的参数
//! - 使用 `models/param.rs`
//! - 使用 `utils/output.rs`

use crate::cli::gen::GenArgs;
use crate::error::{CasprepError, Result};
use crate::models::ParamDoc;
use crate::utils::output;

use std::path::PathBuf;

/// 执行 gen 命令
pub fn execute(args: GenArgs) -> Result<()> {
    let param = ParamDoc::from_gencell();
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from("gencell.param"));

    if path.exists() && !args.overwrite {
        return Err(CasprepError::InvalidArgument(format!(
            "'{}' exists; use --overwrite to replace it",
            path.display()
        )));
    }

    param.save_to(&path)?;
    output::print_success(&format!("Wrote '{}'", path.display()));
    Ok(())
}
