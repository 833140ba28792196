//! # casprep - CASTEP 输入文件准备与调优工具
//!
//! 把分散的 CASTEP 工作流辅助脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `spin`     - 批量标注初始磁矩 (SPIN=)
//! - `prepare`  - 表面/界面几何优化输入准备
//! - `tune`     - 单项 .param 质量调整
//! - `gen`      - 生成 gencell 默认 .param
//! - `diff`     - 与 gencell 基准对比
//! - `snapshot` - 内容哈希快照
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (.cell/.param 解析器)
//!   │     └── models/    (文档模型与预设表)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
