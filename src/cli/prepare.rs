//! # prepare 子命令 CLI 定义
//!
//! 一次性准备表面/界面几何优化输入：SPIN 标注、k 点、对称性、
//! 约束、赝势、SCF 混合与容差、重启/写出策略。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/prepare.rs`

use crate::models::{MixQuality, TolQuality};

use clap::Args;

/// prepare 子命令参数
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Seed name (expects <seed>.cell and <seed>.param)
    #[arg(short, long)]
    pub seed: String,

    /// Monkhorst-Pack k-point spacing (1/Angstrom)
    #[arg(short, long, default_value_t = 0.05)]
    pub kpoint_spacing: f64,

    /// Pseudopotential library ('off' to remove)
    #[arg(long, default_value = "C19")]
    pub pseudopot: String,

    /// SCF density mixing preset
    #[arg(long, value_enum, default_value_t = MixQuality::DefaultVasp)]
    pub mixing: MixQuality,

    /// SCF electronic tolerance quality
    #[arg(long, value_enum, default_value_t = TolQuality::Medium)]
    pub scf_tol: TolQuality,

    /// Geometry optimization tolerance quality
    #[arg(long, value_enum, default_value_t = TolQuality::Medium)]
    pub geom_tol: TolQuality,

    /// Extra conduction bands (percent of occupied)
    #[arg(long, default_value_t = 20)]
    pub extra_bands: u32,

    /// Skip the pre-mutation content-hash snapshots
    #[arg(long, default_value_t = false)]
    pub no_snapshot: bool,
}
