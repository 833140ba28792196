//! # CASTEP .cell 文档模型
//!
//! `.cell` 输入文件的内存表示与字段级变更操作：
//! 原子初始磁矩标注 (SPIN=)、k 点间距、对称性、晶格/离子约束、
//! 外压/外场、赝势库等。
//!
//! 所有选项为封闭枚举，非法取值在解析参数阶段即被拒绝。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/field.rs`, `models/presets.rs`, `parsers/cell.rs`

use crate::error::{CasprepError, Result};
use crate::models::field::FieldTable;
use crate::models::presets;
use crate::parsers;
use crate::utils::snapshot;

use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// 初始磁矩标注方案
///
/// 目前只有 `mp`：d 区过渡金属 5.0 μB，其余 0.6 μB
/// （Materials Project 的常用初猜）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpinScheme {
    Mp,
}

/// 对称性开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymmetryOption {
    /// 生成对称操作并吸附到对称位置
    On,
    /// 移除全部对称性关键字
    Off,
}

/// 晶格自由度约束
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CellConstraintOption {
    /// 移除全部晶格约束关键字
    Off,
    /// 固定晶格，仅弛豫离子位置（表面/界面模型）
    GeomOpt,
    /// 晶格与离子同时弛豫
    CellOpt,
}

/// 离子自由度约束
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IonicConstraintOption {
    /// 移除全部离子约束关键字
    Off,
    /// 保留已有约束块，仅解除质心固定
    Fixed,
}

/// 赝势选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudopotOption {
    /// 移除 species_pot 块
    Off,
    /// 使用指定赝势库（如 C19, QC5）
    Library(String),
}

impl FromStr for PseudopotOption {
    type Err = CasprepError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(CasprepError::UnsupportedQuality {
                setter: "set_pseudopot".to_string(),
                quality: s.to_string(),
            });
        }
        if s.eq_ignore_ascii_case("off") {
            Ok(PseudopotOption::Off)
        } else {
            Ok(PseudopotOption::Library(s.to_string()))
        }
    }
}

/// `.cell` 文档：种子名 + 保持顺序的字段表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDoc {
    pub seed: String,
    pub fields: FieldTable,
}

impl CellDoc {
    pub fn new(seed: impl Into<String>, fields: FieldTable) -> Self {
        CellDoc {
            seed: seed.into(),
            fields,
        }
    }

    /// 从 .cell 文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        parsers::cell::parse_cell_file(path)
    }

    /// 从种子名加载 `<seed>.cell`
    pub fn from_seed(seed: &str) -> Result<Self> {
        Self::from_file(Path::new(&format!("{}.cell", seed)))
    }

    /// 默认保存路径 `<seed>.cell`
    pub fn cell_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.cell", self.seed))
    }

    /// 序列化为 .cell 文本
    pub fn to_cell_string(&self) -> String {
        parsers::cell::to_cell_string(self)
    }

    /// 写回 `<seed>.cell`
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.cell_path();
        self.save_to(&path)?;
        Ok(path)
    }

    /// 写到指定路径（整文件重写）
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_cell_string()).map_err(|e| CasprepError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// 把当前磁盘上的 `<seed>.cell` 复制为内容哈希命名的快照
    pub fn snapshot_to_hash(&self) -> Result<PathBuf> {
        snapshot::snapshot_file(&self.cell_path())
    }

    // ─────────────────────────────────────────────────────────────
    // 字段变更操作
    // ─────────────────────────────────────────────────────────────

    /// 为 positions_frac 每个原子标注初始磁矩
    ///
    /// 已有 ` SPIN=...` 后缀先剥除再追加，重复调用幂等。
    /// positions_frac 缺失时报 `MissingField`。
    pub fn set_spin(&mut self, scheme: SpinScheme) -> Result<()> {
        use regex::Regex;
        let spin_re = Regex::new(r"\s+SPIN=\S+").unwrap();

        let lines = match self.fields.get_block("positions_frac") {
            Some(lines) => lines.to_vec(),
            None => {
                return Err(CasprepError::MissingField {
                    seed: self.seed.clone(),
                    field: "positions_frac".to_string(),
                })
            }
        };

        let tagged: Vec<String> = lines
            .into_iter()
            .map(|line| {
                let element = match line.split_whitespace().next() {
                    Some(tok) if !tok.starts_with('#') => tok,
                    // 空行和注释行原样保留
                    _ => return line,
                };

                let moment = match scheme {
                    SpinScheme::Mp => {
                        if presets::D_BLOCK.contains(&element) {
                            presets::SPIN_MOMENT_D_BLOCK
                        } else {
                            presets::SPIN_MOMENT_DEFAULT
                        }
                    }
                };

                let bare = spin_re.replace(&line, "").to_string();
                format!("{} SPIN={:.1}", bare, moment)
            })
            .collect();

        self.fields.set_block("positions_frac", tagged);
        Ok(())
    }

    /// 用 Monkhorst-Pack 间距替换显式 k 点列表
    pub fn set_kpoints(&mut self, spacing: f64) {
        self.fields.remove("kpoints_list");
        self.fields
            .set_scalar("kpoints_mp_spacing", presets::format_value(spacing));
    }

    /// 对称性开关
    pub fn set_symmetry(&mut self, option: SymmetryOption) {
        match option {
            SymmetryOption::On => {
                self.fields.remove("symmetry_ops");
                self.fields.set_scalar("symmetry_generate", "");
                self.fields.set_scalar("snap_to_symmetry", "");
            }
            SymmetryOption::Off => {
                self.fields.remove("symmetry_ops");
                self.fields.remove("symmetry_generate");
                self.fields.remove("snap_to_symmetry");
            }
        }
    }

    /// 外加静水压（GPa）；`None` 移除
    pub fn set_pressure(&mut self, pressure: Option<f64>) {
        match pressure {
            None => {
                self.fields.remove("external_pressure");
            }
            Some(p) => {
                let p = presets::format_value(p);
                self.fields.set_block(
                    "external_pressure",
                    vec![format!("{} 0 0", p), format!("{} 0", p), p],
                );
            }
        }
    }

    /// 外加电场（eV/Å/e）；`None` 移除
    pub fn set_efield(&mut self, efield: Option<[f64; 3]>) {
        match efield {
            None => {
                self.fields.remove("external_efield");
            }
            Some([x, y, z]) => {
                self.fields
                    .set_block("external_efield", vec![format!("{} {} {}", x, y, z)]);
            }
        }
    }

    /// 晶格约束
    pub fn set_cell_constraints(&mut self, option: CellConstraintOption) {
        match option {
            CellConstraintOption::Off | CellConstraintOption::CellOpt => {
                self.fields.remove("cell_constraints");
                self.fields.remove("fix_all_cell");
                self.fields.remove("fix_vol");
            }
            CellConstraintOption::GeomOpt => {
                self.fields.remove("cell_constraints");
                self.fields.set_scalar("fix_all_cell", "true");
            }
        }
    }

    /// 离子约束
    pub fn set_ionic_constraints(&mut self, option: IonicConstraintOption) {
        match option {
            IonicConstraintOption::Off => {
                self.fields.remove("ionic_constraints");
                self.fields.remove("fix_all_ions");
                self.fields.remove("fix_com");
            }
            IonicConstraintOption::Fixed => {
                self.fields.remove("fix_com");
            }
        }
    }

    /// 赝势库
    pub fn set_pseudopot(&mut self, option: PseudopotOption) {
        match option {
            PseudopotOption::Off => {
                self.fields.remove("species_pot");
            }
            PseudopotOption::Library(lib) => {
                self.fields.set_block("species_pot", vec![lib]);
            }
        }
    }

    /// 移除 Hubbard U 设置
    pub fn clear_hubbard_u(&mut self) {
        self.fields.remove("hubbard_u");
    }

    /// 移除自定义同位素质量
    pub fn clear_species_mass(&mut self) {
        self.fields.remove("species_mass");
    }

    /// 移除 LCAO 基组态设置
    pub fn clear_species_lcao_states(&mut self) {
        self.fields.remove("species_lcao_states");
    }
}
