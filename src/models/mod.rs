//! # 数据模型模块
//!
//! 定义 CASTEP 输入文件的内存文档模型与静态预设表。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: field, cell, param, presets

pub mod cell;
pub mod field;
pub mod param;
pub mod presets;

pub use cell::{CellConstraintOption, CellDoc, IonicConstraintOption, PseudopotOption, SpinScheme, SymmetryOption};
pub use field::{FieldTable, FieldValue};
pub use param::{DiffEntry, DiffReport, MixQuality, ParamDoc, RestartMode, SpinFixOption, TolQuality, WriteMode};
