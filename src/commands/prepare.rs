//! # prepare 命令实现
//!
//! 表面/界面几何优化输入的一次性准备流水线：
//! 快照 -> .cell 变更（SPIN、k 点、对称性、约束、赝势）->
//! .param 变更（混合、容差、重启、写出、能带）-> 对比 gencell -> 写回。
//!
//! ## 依赖关系
//! - 使用 `cli/prepare.rs` 定义的参数
//! - 使用 `models/cell.rs`, `models/param.rs`
//! - 使用 `commands/diff.rs` 的报告渲染
//! - 使用 `utils/output.rs`

use crate::cli::prepare::PrepareArgs;
use crate::commands::diff::render_report;
use crate::error::Result;
use crate::models::{
    CellConstraintOption, CellDoc, IonicConstraintOption, ParamDoc, PseudopotOption, RestartMode,
    SpinScheme, SymmetryOption, WriteMode,
};
use crate::utils::output;

/// 执行 prepare 命令
pub fn execute(args: PrepareArgs) -> Result<()> {
    output::print_header(&format!("Preparing '{}' for geometry optimization", args.seed));

    let pseudopot: PseudopotOption = args.pseudopot.parse()?;

    // ─────────────────────────────────────────────────────────────
    // .cell
    // ─────────────────────────────────────────────────────────────
    let mut cell = CellDoc::from_seed(&args.seed)?;
    if !args.no_snapshot {
        let snap = cell.snapshot_to_hash()?;
        output::print_info(&format!("Snapshot: {}", snap.display()));
    }

    cell.set_spin(SpinScheme::Mp)?;
    cell.set_kpoints(args.kpoint_spacing);
    cell.set_symmetry(SymmetryOption::On);
    cell.set_cell_constraints(CellConstraintOption::GeomOpt);
    cell.set_ionic_constraints(IonicConstraintOption::Fixed);
    cell.set_efield(None);
    cell.set_pressure(None);
    cell.clear_hubbard_u();
    cell.clear_species_mass();
    cell.clear_species_lcao_states();
    cell.set_pseudopot(pseudopot);

    let cell_path = cell.save()?;
    output::print_success(&format!("Wrote '{}'", cell_path.display()));

    // ─────────────────────────────────────────────────────────────
    // .param
    // ─────────────────────────────────────────────────────────────
    let mut param = ParamDoc::from_seed(&args.seed)?;
    if !args.no_snapshot {
        let snap = param.snapshot_to_hash()?;
        output::print_info(&format!("Snapshot: {}", snap.display()));
    }

    param.set_scf_mixing(args.mixing)?;
    param.set_scf_tol(args.scf_tol)?;
    param.set_geom_tol(args.geom_tol)?;
    param.set_restart(RestartMode::Reuse);
    param.set_write(WriteMode::Restart);
    param.set_extra_bands(args.extra_bands);

    // 相对 gencell 基准的漂移报告
    let baseline = ParamDoc::from_gencell();
    let report = param.compare(&baseline.fields);
    render_report(&report, false);

    let param_path = param.save()?;
    output::print_success(&format!("Wrote '{}'", param_path.display()));

    output::print_done(&format!("Seed '{}' ready", args.seed));
    Ok(())
}
