//! # CASTEP .param 文档模型
//!
//! `.param` 输入文件的内存表示与质量预设操作：
//! SCF 密度混合、SCF/几何收敛容差阶梯 (coarse -> ultrafine)、
//! 重启与检查点写出策略、额外能带数，以及相对 gencell 基准的 diff。
//!
//! 质量名称为封闭枚举；`FromStr` 对未知名称返回 `UnsupportedQuality`，
//! 不存在静默 no-op 路径。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/field.rs`, `models/presets.rs`, `parsers/param.rs`

use crate::error::{CasprepError, Result};
use crate::models::field::{FieldTable, FieldValue};
use crate::models::presets::{self, format_value, GeomTolPreset, MixingPreset, ScfTolPreset};
use crate::parsers;
use crate::utils::snapshot;

use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// SCF 密度混合质量
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MixQuality {
    /// CASTEP 默认 (0.8 / 2.0)
    DefaultCastep,
    /// Materials Studio 默认 (0.5 / 2.0)
    DefaultMs,
    /// VASP AMIX / AMIX_MAG 默认 (0.4 / 1.6)
    DefaultVasp,
    /// 金属体系的保守取值 (0.2 / 0.8)
    Normal,
    /// 坏收敛时换 ensemble-DFT 求解器
    Edft,
    /// 当前混合参数减半（下限 0.1 / 0.4）
    Improve,
}

impl FromStr for MixQuality {
    type Err = CasprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "default-castep" => Ok(MixQuality::DefaultCastep),
            "default-ms" => Ok(MixQuality::DefaultMs),
            "default-vasp" => Ok(MixQuality::DefaultVasp),
            "normal" => Ok(MixQuality::Normal),
            "edft" => Ok(MixQuality::Edft),
            "improve" => Ok(MixQuality::Improve),
            _ => Err(CasprepError::UnsupportedQuality {
                setter: "set_scf_mixing".to_string(),
                quality: s.to_string(),
            }),
        }
    }
}

/// 收敛容差质量：命名档位或相对调整
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TolQuality {
    /// CASTEP 默认参考点（不参与阶梯排序）
    DefaultCastep,
    Coarse,
    Medium,
    Fine,
    Ultrafine,
    /// 相对当前值放松一档
    Looser,
    /// 相对当前值收紧一档
    Tighter,
}

impl FromStr for TolQuality {
    type Err = CasprepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "default-castep" => Ok(TolQuality::DefaultCastep),
            "coarse" => Ok(TolQuality::Coarse),
            "medium" => Ok(TolQuality::Medium),
            "fine" => Ok(TolQuality::Fine),
            "ultrafine" => Ok(TolQuality::Ultrafine),
            "looser" => Ok(TolQuality::Looser),
            "tighter" => Ok(TolQuality::Tighter),
            _ => Err(CasprepError::UnsupportedQuality {
                setter: "set_tol".to_string(),
                quality: s.to_string(),
            }),
        }
    }
}

/// 重启策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RestartMode {
    /// 清除全部重启标记
    Off,
    /// 新计算，尽量复用旧检查点
    Reuse,
    /// 从检查点继续旧计算
    Continuation,
}

/// 检查点写出策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WriteMode {
    /// 周期性写检查点，可重启
    Restart,
    /// 关闭全部检查点输出
    Minimal,
}

/// 总自旋固定策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpinFixOption {
    /// 前 10 个 SCF 循环固定总自旋后放开
    DefaultCastep,
    /// 整个计算期间固定
    Fix,
}

/// diff 分类的单条记录
#[derive(Debug, Clone)]
pub struct DiffEntry {
    pub key: String,
    /// 当前文档的值（other 类没有）
    pub current: Option<String>,
    /// 基准侧的值
    pub baseline: String,
}

/// 相对基准的三类划分：值相同 / 值不同 / 本文档缺失
#[derive(Debug, Clone, Default)]
pub struct DiffReport {
    pub same: Vec<DiffEntry>,
    pub diff: Vec<DiffEntry>,
    pub other: Vec<DiffEntry>,
}

/// `.param` 文档：种子名 + 保持顺序的标量字段表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub seed: String,
    pub fields: FieldTable,
}

impl ParamDoc {
    pub fn new(seed: impl Into<String>, fields: FieldTable) -> Self {
        ParamDoc {
            seed: seed.into(),
            fields,
        }
    }

    /// 从 .param 文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        parsers::param::parse_param_file(path)
    }

    /// 从种子名加载 `<seed>.param`
    pub fn from_seed(seed: &str) -> Result<Self> {
        Self::from_file(Path::new(&format!("{}.param", seed)))
    }

    /// AIRSS gencell 的几何优化默认参数集
    pub fn from_gencell() -> Self {
        let fields = presets::GENCELL_PARAM
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::Scalar(v.to_string())))
            .collect();
        ParamDoc::new("gencell", fields)
    }

    /// 默认保存路径 `<seed>.param`
    pub fn param_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.param", self.seed))
    }

    /// 序列化为 .param 文本
    pub fn to_param_string(&self) -> String {
        parsers::param::to_param_string(self)
    }

    /// 只序列化指定关键字（按文档顺序），用于回显变更
    pub fn to_keys_string(&self, keys: &[&str]) -> String {
        let mut lines = Vec::new();
        for (k, v) in self.fields.iter() {
            if keys.contains(&k) {
                if let FieldValue::Scalar(value) = v {
                    lines.push(format!("{:<30} : {}", k, value));
                }
            }
        }
        lines.join("\n")
    }

    /// 写回 `<seed>.param`
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.param_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// 写到指定路径（整文件重写）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_param_string()).map_err(|e| CasprepError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// 把当前磁盘上的 `<seed>.param` 复制为内容哈希命名的快照
    pub fn snapshot_to_hash(&self) -> Result<PathBuf> {
        snapshot::snapshot_file(&self.param_path())
    }

    /// 读取数值型字段的当前值
    fn scalar_f64(&self, key: &str) -> Result<f64> {
        let raw = self
            .fields
            .get_scalar(key)
            .ok_or_else(|| CasprepError::MissingField {
                seed: self.seed.clone(),
                field: key.to_string(),
            })?;
        raw.parse().map_err(|_| CasprepError::InvalidFieldValue {
            field: key.to_string(),
            value: raw.to_string(),
        })
    }

    // ─────────────────────────────────────────────────────────────
    // SCF 密度混合
    // ─────────────────────────────────────────────────────────────

    fn apply_mixing(&mut self, preset: MixingPreset) {
        self.fields.set_scalar("metals_method", "dm");
        self.fields
            .set_scalar("mix_charge_amp", format_value(preset.mix_charge_amp));
        self.fields
            .set_scalar("mix_spin_amp", format_value(preset.mix_spin_amp));
    }

    /// SCF 密度混合参数
    ///
    /// `Improve` 在 SCF 不收敛时逐次减半两个混合幅度，
    /// 下限 0.1 / 0.4，到达下限后再调用不再变化。
    pub fn set_scf_mixing(&mut self, quality: MixQuality) -> Result<()> {
        match quality {
            MixQuality::DefaultCastep => self.apply_mixing(presets::MIXING_DEFAULT_CASTEP),
            MixQuality::DefaultMs => self.apply_mixing(presets::MIXING_DEFAULT_MS),
            MixQuality::DefaultVasp => self.apply_mixing(presets::MIXING_DEFAULT_VASP),
            MixQuality::Normal => self.apply_mixing(presets::MIXING_NORMAL),
            MixQuality::Edft => {
                self.fields.set_scalar("metals_method", "edft");
            }
            MixQuality::Improve => {
                let charge = self.scalar_f64("mix_charge_amp")?;
                let spin = self.scalar_f64("mix_spin_amp")?;

                if charge > presets::MIX_CHARGE_AMP_FLOOR {
                    let halved = (charge / 2.0).max(presets::MIX_CHARGE_AMP_FLOOR);
                    self.fields
                        .set_scalar("mix_charge_amp", format_value(halved));
                }
                if spin > presets::MIX_SPIN_AMP_FLOOR {
                    let halved = (spin / 2.0).max(presets::MIX_SPIN_AMP_FLOOR);
                    self.fields.set_scalar("mix_spin_amp", format_value(halved));
                }
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // SCF 电子容差
    // ─────────────────────────────────────────────────────────────

    fn apply_scf_tol(&mut self, preset: &ScfTolPreset) {
        self.fields
            .set_scalar("elec_energy_tol", format_value(preset.elec_energy_tol));
    }

    /// SCF 电子能量容差
    ///
    /// `Looser` / `Tighter` 从阶梯相应端开始，取第一个相对当前值
    /// 严格放松/收紧的档位；已在端点时为 no-op。
    pub fn set_scf_tol(&mut self, quality: TolQuality) -> Result<()> {
        self.fields
            .set_scalar("max_scf_cycles", presets::MAX_SCF_CYCLES_TOL.to_string());

        match quality {
            TolQuality::DefaultCastep => self.apply_scf_tol(&presets::SCF_TOL_DEFAULT_CASTEP),
            TolQuality::Coarse => self.apply_scf_tol(&presets::SCF_TOL_LADDER[0]),
            TolQuality::Medium => self.apply_scf_tol(&presets::SCF_TOL_LADDER[1]),
            TolQuality::Fine => self.apply_scf_tol(&presets::SCF_TOL_LADDER[2]),
            TolQuality::Ultrafine => self.apply_scf_tol(&presets::SCF_TOL_LADDER[3]),
            TolQuality::Tighter => {
                let current = self.scalar_f64("elec_energy_tol")?;
                if let Some(preset) = presets::SCF_TOL_LADDER
                    .iter()
                    .find(|p| p.elec_energy_tol < current)
                {
                    self.apply_scf_tol(preset);
                }
            }
            TolQuality::Looser => {
                let current = self.scalar_f64("elec_energy_tol")?;
                if let Some(preset) = presets::SCF_TOL_LADDER
                    .iter()
                    .rev()
                    .find(|p| current < p.elec_energy_tol)
                {
                    self.apply_scf_tol(preset);
                }
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // 几何优化容差
    // ─────────────────────────────────────────────────────────────

    fn apply_geom_tol(&mut self, preset: &GeomTolPreset) {
        self.fields
            .set_scalar("geom_energy_tol", format_value(preset.geom_energy_tol));
        self.fields
            .set_scalar("geom_force_tol", format_value(preset.geom_force_tol));
        self.fields
            .set_scalar("geom_stress_tol", format_value(preset.geom_stress_tol));
        self.fields
            .set_scalar("geom_disp_tol", format_value(preset.geom_disp_tol));
    }

    /// 几何优化收敛容差
    ///
    /// `Looser` / `Tighter` 要求四个容差字段同时严格放松/收紧，
    /// 只松一部分字段的档位会被跳过（全字段一致判据）。
    pub fn set_geom_tol(&mut self, quality: TolQuality) -> Result<()> {
        self.fields
            .set_scalar("max_scf_cycles", presets::MAX_SCF_CYCLES_TOL.to_string());

        match quality {
            TolQuality::DefaultCastep => self.apply_geom_tol(&presets::GEOM_TOL_DEFAULT_CASTEP),
            TolQuality::Coarse => self.apply_geom_tol(&presets::GEOM_TOL_LADDER[0]),
            TolQuality::Medium => self.apply_geom_tol(&presets::GEOM_TOL_LADDER[1]),
            TolQuality::Fine => self.apply_geom_tol(&presets::GEOM_TOL_LADDER[2]),
            TolQuality::Ultrafine => self.apply_geom_tol(&presets::GEOM_TOL_LADDER[3]),
            TolQuality::Tighter => {
                let current = self.current_geom_tol()?;
                if let Some(preset) = presets::GEOM_TOL_LADDER
                    .iter()
                    .find(|p| Self::geom_strictly_tighter(p, &current))
                {
                    self.apply_geom_tol(preset);
                }
            }
            TolQuality::Looser => {
                let current = self.current_geom_tol()?;
                if let Some(preset) = presets::GEOM_TOL_LADDER
                    .iter()
                    .rev()
                    .find(|p| Self::geom_strictly_looser(p, &current))
                {
                    self.apply_geom_tol(preset);
                }
            }
        }
        Ok(())
    }

    fn current_geom_tol(&self) -> Result<[f64; 4]> {
        Ok([
            self.scalar_f64("geom_energy_tol")?,
            self.scalar_f64("geom_force_tol")?,
            self.scalar_f64("geom_stress_tol")?,
            self.scalar_f64("geom_disp_tol")?,
        ])
    }

    fn geom_strictly_tighter(preset: &GeomTolPreset, current: &[f64; 4]) -> bool {
        preset.geom_energy_tol < current[0]
            && preset.geom_force_tol < current[1]
            && preset.geom_stress_tol < current[2]
            && preset.geom_disp_tol < current[3]
    }

    fn geom_strictly_looser(preset: &GeomTolPreset, current: &[f64; 4]) -> bool {
        current[0] < preset.geom_energy_tol
            && current[1] < preset.geom_force_tol
            && current[2] < preset.geom_stress_tol
            && current[3] < preset.geom_disp_tol
    }

    // ─────────────────────────────────────────────────────────────
    // 重启 / 写出 / 能带
    // ─────────────────────────────────────────────────────────────

    /// 重启标记，reuse 与 continuation 互斥
    pub fn set_restart(&mut self, mode: RestartMode) {
        self.fields.remove("reuse");
        self.fields.remove("continuation");

        match mode {
            RestartMode::Off => {}
            RestartMode::Reuse => self.fields.set_scalar("reuse", "default"),
            RestartMode::Continuation => self.fields.set_scalar("continuation", "default"),
        }
    }

    /// 检查点写出策略
    pub fn set_write(&mut self, mode: WriteMode) {
        let (interval, checkpoint) = match mode {
            WriteMode::Restart => (presets::BACKUP_INTERVAL_RESTART, "all"),
            WriteMode::Minimal => (0, "none"),
        };

        self.fields
            .set_scalar("backup_interval", interval.to_string());
        self.fields.set_scalar("write_checkpoint", checkpoint);
        for (key, value) in presets::WRITE_FLAGS_FIXED {
            self.fields.set_scalar(key, value);
        }
    }

    /// 总自旋固定策略
    pub fn set_spin_fix(&mut self, option: SpinFixOption) {
        let preset = match option {
            SpinFixOption::DefaultCastep => presets::SPIN_FIX_DEFAULT_CASTEP,
            SpinFixOption::Fix => presets::SPIN_FIX_FIX,
        };
        self.fields.set_scalar("spin_fix", preset.spin_fix.to_string());
        self.fields
            .set_scalar("geom_spin_fix", preset.geom_spin_fix.to_string());
    }

    /// 额外能带按百分比给出，与绝对数目 nextra_bands 互斥
    pub fn set_extra_bands(&mut self, percent: u32) {
        self.fields.remove("nextra_bands");
        self.fields
            .set_scalar("perc_extra_bands", percent.to_string());
    }

    // ─────────────────────────────────────────────────────────────
    // diff
    // ─────────────────────────────────────────────────────────────

    /// 把基准侧的每个键分类为 same / diff / other
    ///
    /// 键与值比较均不区分大小写；不修改任何一侧；
    /// 结果保持基准侧的键顺序。
    pub fn compare(&self, baseline: &FieldTable) -> DiffReport {
        let mut report = DiffReport::default();

        for (key, value) in baseline.iter() {
            let key = key.to_lowercase();
            let baseline_value = match value {
                FieldValue::Scalar(v) => v.to_lowercase(),
                FieldValue::Block(lines) => lines.join(" ").to_lowercase(),
            };

            match self.fields.get_scalar(&key) {
                Some(current) => {
                    let entry = DiffEntry {
                        key,
                        current: Some(current.to_string()),
                        baseline: baseline_value.clone(),
                    };
                    if current.to_lowercase() == baseline_value {
                        report.same.push(entry);
                    } else {
                        report.diff.push(entry);
                    }
                }
                None => report.other.push(DiffEntry {
                    key,
                    current: None,
                    baseline: baseline_value,
                }),
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, &str)]) -> ParamDoc {
        let mut fields = FieldTable::new();
        for (k, v) in pairs {
            fields.set_scalar(*k, *v);
        }
        ParamDoc::new("test", fields)
    }

    fn f64_of(doc: &ParamDoc, key: &str) -> f64 {
        doc.fields.get_scalar(key).unwrap().parse().unwrap()
    }

    #[test]
    fn test_mixing_presets() {
        let mut p = doc(&[]);
        p.set_scf_mixing(MixQuality::DefaultVasp).unwrap();
        assert_eq!(p.fields.get_scalar("metals_method"), Some("dm"));
        assert_eq!(f64_of(&p, "mix_charge_amp"), 0.4);
        assert_eq!(f64_of(&p, "mix_spin_amp"), 1.6);
    }

    #[test]
    fn test_mixing_edft_single_key() {
        let mut p = doc(&[]);
        p.set_scf_mixing(MixQuality::Edft).unwrap();
        assert_eq!(p.fields.get_scalar("metals_method"), Some("edft"));
        assert!(!p.fields.contains("mix_charge_amp"));
    }

    #[test]
    fn test_mixing_improve_ladder() {
        let mut p = doc(&[("mix_charge_amp", "0.8"), ("mix_spin_amp", "2.0")]);

        p.set_scf_mixing(MixQuality::Improve).unwrap();
        assert_eq!(f64_of(&p, "mix_charge_amp"), 0.4);
        assert_eq!(f64_of(&p, "mix_spin_amp"), 1.0);

        p.set_scf_mixing(MixQuality::Improve).unwrap();
        assert_eq!(f64_of(&p, "mix_charge_amp"), 0.2);
        assert_eq!(f64_of(&p, "mix_spin_amp"), 0.5);

        p.set_scf_mixing(MixQuality::Improve).unwrap();
        assert_eq!(f64_of(&p, "mix_charge_amp"), 0.1);
        assert_eq!(f64_of(&p, "mix_spin_amp"), 0.4);

        // 到达下限后不再变化
        p.set_scf_mixing(MixQuality::Improve).unwrap();
        assert_eq!(f64_of(&p, "mix_charge_amp"), 0.1);
        assert_eq!(f64_of(&p, "mix_spin_amp"), 0.4);
    }

    #[test]
    fn test_mixing_improve_missing_amp_fails() {
        let mut p = doc(&[]);
        let err = p.set_scf_mixing(MixQuality::Improve).unwrap_err();
        assert!(matches!(err, CasprepError::MissingField { .. }));
    }

    #[test]
    fn test_mix_quality_from_str_rejects_unknown() {
        let err = "better".parse::<MixQuality>().unwrap_err();
        assert!(matches!(err, CasprepError::UnsupportedQuality { .. }));
        assert_eq!(
            "default_vasp".parse::<MixQuality>().unwrap(),
            MixQuality::DefaultVasp
        );
    }

    #[test]
    fn test_scf_tol_sets_cycle_cap() {
        let mut p = doc(&[]);
        p.set_scf_tol(TolQuality::Medium).unwrap();
        assert_eq!(p.fields.get_scalar("max_scf_cycles"), Some("200"));
        assert_eq!(f64_of(&p, "elec_energy_tol"), 2.0e-6);
    }

    #[test]
    fn test_scf_tol_looser_tighter() {
        let mut p = doc(&[]);
        p.set_scf_tol(TolQuality::Fine).unwrap();

        p.set_scf_tol(TolQuality::Looser).unwrap();
        assert_eq!(f64_of(&p, "elec_energy_tol"), 2.0e-6);

        p.set_scf_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "elec_energy_tol"), 1.0e-6);

        p.set_scf_tol(TolQuality::Ultrafine).unwrap();
        // 已是最紧档位，no-op
        p.set_scf_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "elec_energy_tol"), 5.0e-7);
    }

    #[test]
    fn test_geom_tol_tighter_ladder() {
        let mut p = doc(&[]);
        p.set_geom_tol(TolQuality::Coarse).unwrap();

        p.set_geom_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 2.0e-5);
        assert_eq!(f64_of(&p, "geom_disp_tol"), 0.002);

        p.set_geom_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 1.0e-5);

        p.set_geom_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 5.0e-6);
        assert_eq!(f64_of(&p, "geom_force_tol"), 0.01);

        // 已是最紧档位，no-op
        p.set_geom_tol(TolQuality::Tighter).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 5.0e-6);
    }

    #[test]
    fn test_geom_tol_looser_ladder() {
        let mut p = doc(&[]);
        p.set_geom_tol(TolQuality::Ultrafine).unwrap();

        p.set_geom_tol(TolQuality::Looser).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 1.0e-5);
        assert_eq!(f64_of(&p, "geom_disp_tol"), 0.001);

        p.set_geom_tol(TolQuality::Looser).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 2.0e-5);

        p.set_geom_tol(TolQuality::Looser).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 5.0e-5);
        assert_eq!(f64_of(&p, "geom_force_tol"), 0.1);

        // 已是最松档位，no-op
        p.set_geom_tol(TolQuality::Looser).unwrap();
        assert_eq!(f64_of(&p, "geom_energy_tol"), 5.0e-5);
        assert_eq!(f64_of(&p, "geom_stress_tol"), 0.2);
    }

    #[test]
    fn test_geom_tol_all_fields_must_agree() {
        // 能量容差位于 fine 档，位移容差却比 ultrafine 还松：
        // tighter 必须跳过只收紧部分字段的档位
        let mut p = doc(&[
            ("geom_energy_tol", "1.0e-5"),
            ("geom_force_tol", "0.03"),
            ("geom_stress_tol", "0.05"),
            ("geom_disp_tol", "0.01"),
        ]);
        p.set_geom_tol(TolQuality::Tighter).unwrap();
        // coarse/medium/fine 均未在全部字段上严格收紧，命中 ultrafine
        assert_eq!(f64_of(&p, "geom_energy_tol"), 5.0e-6);
        assert_eq!(f64_of(&p, "geom_disp_tol"), 5.0e-4);
    }

    #[test]
    fn test_geom_tol_missing_field_fails() {
        let mut p = doc(&[("geom_energy_tol", "1.0e-5")]);
        let err = p.set_geom_tol(TolQuality::Tighter).unwrap_err();
        assert!(matches!(err, CasprepError::MissingField { .. }));
    }

    #[test]
    fn test_restart_mutual_exclusive() {
        let mut p = doc(&[]);
        p.set_restart(RestartMode::Reuse);
        p.set_restart(RestartMode::Continuation);
        assert!(!p.fields.contains("reuse"));
        assert_eq!(p.fields.get_scalar("continuation"), Some("default"));

        p.set_restart(RestartMode::Off);
        assert!(!p.fields.contains("reuse"));
        assert!(!p.fields.contains("continuation"));
    }

    #[test]
    fn test_set_write_restart_and_minimal() {
        let mut p = doc(&[]);
        p.set_write(WriteMode::Restart);
        assert_eq!(p.fields.get_scalar("backup_interval"), Some("600"));
        assert_eq!(p.fields.get_scalar("write_checkpoint"), Some("all"));
        assert_eq!(p.fields.get_scalar("write_cell_structure"), Some("true"));

        p.set_write(WriteMode::Minimal);
        assert_eq!(p.fields.get_scalar("backup_interval"), Some("0"));
        assert_eq!(p.fields.get_scalar("write_checkpoint"), Some("none"));
    }

    #[test]
    fn test_extra_bands_exclusive() {
        let mut p = doc(&[("nextra_bands", "16")]);
        p.set_extra_bands(20);
        assert!(!p.fields.contains("nextra_bands"));
        assert_eq!(p.fields.get_scalar("perc_extra_bands"), Some("20"));
    }

    #[test]
    fn test_compare_classification() {
        let p = doc(&[("a", "1"), ("b", "2")]);
        let mut baseline = FieldTable::new();
        baseline.set_scalar("a", "1");
        baseline.set_scalar("b", "3");
        baseline.set_scalar("c", "4");

        let report = p.compare(&baseline);

        assert_eq!(report.same.len(), 1);
        assert_eq!(report.same[0].key, "a");
        assert_eq!(report.same[0].baseline, "1");

        assert_eq!(report.diff.len(), 1);
        assert_eq!(report.diff[0].key, "b");
        assert_eq!(report.diff[0].baseline, "3");
        assert_eq!(report.diff[0].current.as_deref(), Some("2"));

        assert_eq!(report.other.len(), 1);
        assert_eq!(report.other[0].key, "c");
        assert_eq!(report.other[0].baseline, "4");
        assert!(report.other[0].current.is_none());
    }

    #[test]
    fn test_compare_case_insensitive() {
        let p = doc(&[("xc_functional", "pbe")]);
        let mut baseline = FieldTable::new();
        baseline.set_scalar("xc_functional", "PBE");

        let report = p.compare(&baseline);
        assert_eq!(report.same.len(), 1);
        assert!(report.diff.is_empty());
    }

    #[test]
    fn test_from_gencell_baseline() {
        let p = ParamDoc::from_gencell();
        assert_eq!(p.seed, "gencell");
        assert_eq!(p.fields.get_scalar("task"), Some("geometryoptimization"));
        assert_eq!(p.fields.get_scalar("geom_method"), Some("LBFGS"));
        assert_eq!(p.fields.len(), 26);
    }
}
