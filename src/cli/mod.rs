//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `spin`: 批量标注初始磁矩 (SPIN=)
//! - `prepare`: 表面/界面几何优化输入准备（完整流水线）
//! - `tune`: 单项 .param 质量调整
//! - `gen`: 生成 gencell 默认 .param
//! - `diff`: 与 gencell 基准对比
//! - `snapshot`: 内容哈希快照
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: spin, prepare, tune, gen, diff, snapshot

pub mod diff;
pub mod gen;
pub mod prepare;
pub mod snapshot;
pub mod spin;
pub mod tune;

use clap::{Parser, Subcommand};

/// casprep - CASTEP 输入文件准备与调优工具
#[derive(Parser)]
#[command(name = "casprep")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A CASTEP input preparation and tuning toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Tag initial magnetic moments (SPIN=) in .cell files
    Spin(spin::SpinArgs),

    /// Prepare a seed's .cell/.param for slab geometry optimization
    Prepare(prepare::PrepareArgs),

    /// Apply a single quality adjustment to a seed's .param
    Tune(tune::TuneArgs),

    /// Generate the gencell default .param
    Gen(gen::GenArgs),

    /// Compare a seed's .param against the gencell defaults
    Diff(diff::DiffArgs),

    /// Copy a seed's input files to content-hash named snapshots
    Snapshot(snapshot::SnapshotArgs),
}
