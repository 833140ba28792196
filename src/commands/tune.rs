//! # tune 命令实现
//!
//! 对 .param 应用选定的质量调整并回显受影响的关键字。
//! 典型用法：SCF 失败后 `--mixing improve` 或 `--scf-tol looser`。
//!
//! ## 依赖关系
//! - 使用 `cli/tune.rs` 定义的参数
//! - 使用 `models/param.rs`
//! - 使用 `utils/output.rs`

use crate::cli::tune::TuneArgs;
use crate::error::{CasprepError, Result};
use crate::models::ParamDoc;
use crate::utils::output;

/// 执行 tune 命令
pub fn execute(args: TuneArgs) -> Result<()> {
    if args.scf_tol.is_none()
        && args.geom_tol.is_none()
        && args.mixing.is_none()
        && args.restart.is_none()
        && args.write.is_none()
        && args.spin_fix.is_none()
        && args.extra_bands.is_none()
    {
        return Err(CasprepError::InvalidArgument(
            "tune requires at least one adjustment flag".to_string(),
        ));
    }

    output::print_header(&format!("Tuning '{}.param'", args.seed));

    let mut param = ParamDoc::from_seed(&args.seed)?;
    if args.snapshot {
        let snap = param.snapshot_to_hash()?;
        output::print_info(&format!("Snapshot: {}", snap.display()));
    }

    if let Some(quality) = args.mixing {
        param.set_scf_mixing(quality)?;
        echo(&param, &["metals_method", "mix_charge_amp", "mix_spin_amp"]);
    }
    if let Some(quality) = args.scf_tol {
        param.set_scf_tol(quality)?;
        echo(&param, &["elec_energy_tol", "max_scf_cycles"]);
    }
    if let Some(quality) = args.geom_tol {
        param.set_geom_tol(quality)?;
        echo(
            &param,
            &[
                "geom_energy_tol",
                "geom_force_tol",
                "geom_stress_tol",
                "geom_disp_tol",
            ],
        );
    }
    if let Some(mode) = args.restart {
        param.set_restart(mode);
        echo(&param, &["reuse", "continuation"]);
    }
    if let Some(mode) = args.write {
        param.set_write(mode);
        echo(&param, &["backup_interval", "write_checkpoint"]);
    }
    if let Some(option) = args.spin_fix {
        param.set_spin_fix(option);
        echo(&param, &["spin_fix", "geom_spin_fix"]);
    }
    if let Some(percent) = args.extra_bands {
        param.set_extra_bands(percent);
        echo(&param, &["perc_extra_bands"]);
    }

    let path = param.save()?;
    output::print_done(&format!("Wrote '{}'", path.display()));
    Ok(())
}

/// 回显调整后的关键字取值
fn echo(param: &ParamDoc, keys: &[&str]) {
    let rendered = param.to_keys_string(keys);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    output::print_separator();
}
