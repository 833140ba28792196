//! # 物理质量预设常量表
//!
//! CASTEP 工作流用到的全部静态预设：初始磁矩方案、SCF 混合参数、
//! SCF / 几何优化收敛容差阶梯、spin_fix 预设、gencell 默认 `.param`。
//!
//! 全部为编译期常量，进程内不再修改。
//!
//! ## 依赖关系
//! - 被 `models/cell.rs`, `models/param.rs` 使用
//! - 无外部模块依赖

/// d 区过渡金属（3d + 4d + 5d），初始磁矩取高值
pub const D_BLOCK: [&str; 30] = [
    // 3d
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    // 4d
    "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", //
    // 5d
    "La", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
];

/// `mp` 方案：d 区元素的初始磁矩
pub const SPIN_MOMENT_D_BLOCK: f64 = 5.0;

/// `mp` 方案：其余元素的初始磁矩
pub const SPIN_MOMENT_DEFAULT: f64 = 0.6;

// ─────────────────────────────────────────────────────────────
// SCF 密度混合
// ─────────────────────────────────────────────────────────────

/// 密度混合预设 (metals_method 固定为 dm)
#[derive(Debug, Clone, Copy)]
pub struct MixingPreset {
    pub mix_charge_amp: f64,
    pub mix_spin_amp: f64,
}

pub const MIXING_DEFAULT_CASTEP: MixingPreset = MixingPreset {
    mix_charge_amp: 0.8,
    mix_spin_amp: 2.0,
};

pub const MIXING_DEFAULT_MS: MixingPreset = MixingPreset {
    mix_charge_amp: 0.5,
    mix_spin_amp: 2.0,
};

/// VASP 的 AMIX / AMIX_MAG 对应值
pub const MIXING_DEFAULT_VASP: MixingPreset = MixingPreset {
    mix_charge_amp: 0.4,
    mix_spin_amp: 1.6,
};

pub const MIXING_NORMAL: MixingPreset = MixingPreset {
    mix_charge_amp: 0.2,
    mix_spin_amp: 0.8,
};

/// `improve` 逐次减半的下限
pub const MIX_CHARGE_AMP_FLOOR: f64 = 0.1;
pub const MIX_SPIN_AMP_FLOOR: f64 = 0.4;

// ─────────────────────────────────────────────────────────────
// 收敛容差阶梯
// ─────────────────────────────────────────────────────────────

/// 容差 setter 进入时统一设置的 SCF 循环上限
pub const MAX_SCF_CYCLES_TOL: u32 = 200;

/// SCF 电子能量容差预设
#[derive(Debug, Clone, Copy)]
pub struct ScfTolPreset {
    pub elec_energy_tol: f64,
}

/// CASTEP 默认（与 MS coarse 相同），不参与阶梯排序
pub const SCF_TOL_DEFAULT_CASTEP: ScfTolPreset = ScfTolPreset {
    elec_energy_tol: 1.0e-5,
};

/// coarse -> ultrafine，严格单调收紧
pub const SCF_TOL_LADDER: [ScfTolPreset; 4] = [
    ScfTolPreset {
        elec_energy_tol: 1.0e-5,
    },
    ScfTolPreset {
        elec_energy_tol: 2.0e-6,
    },
    ScfTolPreset {
        elec_energy_tol: 1.0e-6,
    },
    ScfTolPreset {
        elec_energy_tol: 5.0e-7,
    },
];

/// 几何优化收敛容差预设
#[derive(Debug, Clone, Copy)]
pub struct GeomTolPreset {
    pub geom_energy_tol: f64,
    pub geom_force_tol: f64,
    pub geom_stress_tol: f64,
    pub geom_disp_tol: f64,
}

/// CASTEP 默认（接近 MS medium），不参与阶梯排序
pub const GEOM_TOL_DEFAULT_CASTEP: GeomTolPreset = GeomTolPreset {
    geom_energy_tol: 2.0e-5,
    geom_force_tol: 0.05,
    geom_stress_tol: 0.1,
    geom_disp_tol: 0.001,
};

/// coarse -> ultrafine，四个字段同时严格单调收紧
pub const GEOM_TOL_LADDER: [GeomTolPreset; 4] = [
    GeomTolPreset {
        geom_energy_tol: 5.0e-5,
        geom_force_tol: 0.1,
        geom_stress_tol: 0.2,
        geom_disp_tol: 0.005,
    },
    GeomTolPreset {
        geom_energy_tol: 2.0e-5,
        geom_force_tol: 0.05,
        geom_stress_tol: 0.1,
        geom_disp_tol: 0.002,
    },
    GeomTolPreset {
        geom_energy_tol: 1.0e-5,
        geom_force_tol: 0.03,
        geom_stress_tol: 0.05,
        geom_disp_tol: 0.001,
    },
    GeomTolPreset {
        geom_energy_tol: 5.0e-6,
        geom_force_tol: 0.01,
        geom_stress_tol: 0.02,
        geom_disp_tol: 5.0e-4,
    },
];

// ─────────────────────────────────────────────────────────────
// spin_fix / 写出策略
// ─────────────────────────────────────────────────────────────

/// 固定总自旋的 SCF 循环数预设
#[derive(Debug, Clone, Copy)]
pub struct SpinFixPreset {
    pub spin_fix: i32,
    pub geom_spin_fix: i32,
}

pub const SPIN_FIX_DEFAULT_CASTEP: SpinFixPreset = SpinFixPreset {
    spin_fix: 10,
    geom_spin_fix: 0,
};

/// 整个计算期间总自旋保持固定
pub const SPIN_FIX_FIX: SpinFixPreset = SpinFixPreset {
    spin_fix: -1,
    geom_spin_fix: -1,
};

/// restart 写出模式下的检查点备份间隔（秒）
pub const BACKUP_INTERVAL_RESTART: u32 = 600;

/// set_write 两种模式共用的固定输出开关
pub const WRITE_FLAGS_FIXED: [(&str, &str); 7] = [
    ("write_cell_structure", "true"),
    ("write_bib", "false"),
    ("write_otfg", "false"),
    ("write_cst_esp", "false"),
    ("write_bands", "false"),
    ("write_geom", "false"),
    ("bs_write_eigenvalues", "false"),
];

// ─────────────────────────────────────────────────────────────
// gencell 默认 .param
// ─────────────────────────────────────────────────────────────

/// AIRSS gencell 生成的几何优化默认参数，用作 diff 基准
pub const GENCELL_PARAM: [(&str, &str); 26] = [
    ("task", "geometryoptimization"),
    ("xc_functional", "PBE"),
    ("spin_polarized", "false"),
    ("fix_occupancy", "false"),
    ("metals_method", "dm"),
    ("mixing_scheme", "pulay"),
    ("max_scf_cycles", "1000"),
    ("cut_off_energy", "340"),
    ("opt_strategy", "speed"),
    ("page_wvfns", "0"),
    ("num_dump_cycles", "0"),
    ("backup_interval", "0"),
    ("geom_method", "LBFGS"),
    ("geom_max_iter", "20"),
    ("mix_history_length", "20"),
    ("finite_basis_corr", "0"),
    ("fixed_npw", "true"),
    ("write_cell_structure", "true"),
    ("write_checkpoint", "none"),
    ("write_bib", "false"),
    ("write_otfg", "false"),
    ("write_cst_esp", "false"),
    ("write_bands", "false"),
    ("write_geom", "false"),
    ("bs_write_eigenvalues", "false"),
    ("calculate_stress", "true"),
];

/// 标量数值的统一文本化：很小的数用科学计数法，其余用十进制
pub fn format_value(v: f64) -> String {
    if v != 0.0 && v.abs() < 1.0e-3 {
        format!("{:.1e}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d_block_membership() {
        assert!(D_BLOCK.contains(&"Fe"));
        assert!(D_BLOCK.contains(&"Pd"));
        assert!(D_BLOCK.contains(&"Pt"));
        assert!(!D_BLOCK.contains(&"O"));
        assert!(!D_BLOCK.contains(&"Li"));
    }

    #[test]
    fn test_scf_ladder_strictly_tightens() {
        for pair in SCF_TOL_LADDER.windows(2) {
            assert!(pair[1].elec_energy_tol < pair[0].elec_energy_tol);
        }
    }

    #[test]
    fn test_geom_ladder_strictly_tightens() {
        for pair in GEOM_TOL_LADDER.windows(2) {
            assert!(pair[1].geom_energy_tol < pair[0].geom_energy_tol);
            assert!(pair[1].geom_force_tol < pair[0].geom_force_tol);
            assert!(pair[1].geom_stress_tol < pair[0].geom_stress_tol);
            assert!(pair[1].geom_disp_tol < pair[0].geom_disp_tol);
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.05), "0.05");
        assert_eq!(format_value(2.0e-6), "2.0e-6");
        assert_eq!(format_value(5.0e-7), "5.0e-7");
        assert_eq!(format_value(0.001), "0.001");
        assert_eq!(format_value(5.0e-4), "5.0e-4");
        assert_eq!(format_value(2.0), "2");
        assert_eq!(format_value(0.4), "0.4");
    }
}
