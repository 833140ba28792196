//! # tune 子命令 CLI 定义
//!
//! 对已有 .param 做单项质量调整（收敛失败后的典型补救操作）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/tune.rs`

use crate::models::{MixQuality, RestartMode, SpinFixOption, TolQuality, WriteMode};

use clap::Args;

/// tune 子命令参数；至少给出一项调整
#[derive(Args, Debug)]
pub struct TuneArgs {
    /// Seed name (expects <seed>.param)
    #[arg(short, long)]
    pub seed: String,

    /// Adjust SCF electronic tolerance (e.g. looser after SCF failure)
    #[arg(long, value_enum)]
    pub scf_tol: Option<TolQuality>,

    /// Adjust geometry optimization tolerance
    #[arg(long, value_enum)]
    pub geom_tol: Option<TolQuality>,

    /// Adjust SCF density mixing ('improve' halves the amplitudes)
    #[arg(long, value_enum)]
    pub mixing: Option<MixQuality>,

    /// Set the restart marker
    #[arg(long, value_enum)]
    pub restart: Option<RestartMode>,

    /// Set the checkpoint write policy
    #[arg(long, value_enum)]
    pub write: Option<WriteMode>,

    /// Set the total-spin fixing policy
    #[arg(long, value_enum)]
    pub spin_fix: Option<SpinFixOption>,

    /// Set extra conduction bands (percent of occupied)
    #[arg(long)]
    pub extra_bands: Option<u32>,

    /// Snapshot the .param to a content-hash copy before rewriting
    #[arg(long, default_value_t = false)]
    pub snapshot: bool,
}
