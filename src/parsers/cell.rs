//! # CASTEP .cell 格式解析器
//!
//! 解析/序列化 CASTEP 输入文件 .cell 格式。
//!
//! ## .cell 格式说明
//! ```text
//! # 注释行
//! %BLOCK POSITIONS_FRAC
//! Element x y z [SPIN=v]
//! ...
//! %ENDBLOCK POSITIONS_FRAC
//!
//! KPOINTS_MP_SPACING 0.05
//! FIX_ALL_CELL : true
//! ```
//! 块标记不区分大小写；标量行整行转小写后按首个 `:` 切分，
//! 无冒号时按首个空白切分。少数布尔型关键字用冒号语法写回。
//!
//! ## 依赖关系
//! - 被 `models/cell.rs` 使用
//! - 使用 `models/field.rs`

use crate::error::{CasprepError, Result};
use crate::models::cell::CellDoc;
use crate::models::{FieldTable, FieldValue};

use std::fs;
use std::path::Path;

/// 写回时使用 `KEY : value` 语法的关键字
const COLON_KEYS: [&str; 3] = ["fix_all_cell", "fix_vol", "fix_com"];

/// 解析 .cell 文件
pub fn parse_cell_file(path: &Path) -> Result<CellDoc> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CasprepError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            CasprepError::FileReadError {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    parse_cell_content(&content, &super::seed_from_path(path, ".cell"))
}

/// 从字符串内容解析 .cell 格式
pub fn parse_cell_content(content: &str, seed: &str) -> Result<CellDoc> {
    let mut fields = FieldTable::new();
    let mut lines = content.lines();

    while let Some(raw) = lines.next() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let lower = line.to_lowercase();
        if lower.starts_with("%block") {
            let name = lower.split_whitespace().nth(1).map(str::to_string).ok_or_else(|| {
                CasprepError::ParseError {
                    format: "cell".to_string(),
                    path: seed.to_string(),
                    reason: "%BLOCK without a block name".to_string(),
                }
            })?;

            let mut block = Vec::new();
            let mut closed = false;
            for raw in lines.by_ref() {
                let inner = raw.trim();
                if inner.to_lowercase().starts_with("%endblock") {
                    closed = true;
                    break;
                }
                block.push(inner.to_string());
            }

            if !closed {
                return Err(CasprepError::ParseError {
                    format: "cell".to_string(),
                    path: seed.to_string(),
                    reason: format!("Unterminated %BLOCK {}", name.to_uppercase()),
                });
            }

            fields.set_block(name, block);
        } else if let Some((key, value)) = lower.split_once(':') {
            fields.set_scalar(key.trim(), value.trim());
        } else if let Some((key, value)) = lower.split_once(char::is_whitespace) {
            fields.set_scalar(key.trim(), value.trim());
        } else {
            // 裸关键字（如 SYMMETRY_GENERATE）
            fields.set_scalar(lower, "");
        }
    }

    Ok(CellDoc::new(seed, fields))
}

/// 将 CellDoc 序列化为 .cell 格式字符串
pub fn to_cell_string(doc: &CellDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (key, value) in doc.fields.iter() {
        match value {
            FieldValue::Block(block) => {
                lines.push(format!("%BLOCK {}", key.to_uppercase()));
                lines.extend(block.iter().cloned());
                lines.push(format!("%ENDBLOCK {}", key.to_uppercase()));
            }
            FieldValue::Scalar(v) => {
                if COLON_KEYS.contains(&key) {
                    lines.push(format!("{} : {}", key.to_uppercase(), v));
                } else if v.is_empty() {
                    lines.push(key.to_uppercase());
                } else {
                    lines.push(format!("{} {}", key.to_uppercase(), v));
                }
            }
        }
        // 字段之间空一行
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLAB: &str = r#"# Ni(111) slab
%BLOCK LATTICE_CART
2.49 0.0 0.0
-1.245 2.156 0.0
0.0 0.0 18.0
%ENDBLOCK LATTICE_CART

%BLOCK POSITIONS_FRAC
Ni 0.0 0.0 0.30
Ni 0.3333 0.6667 0.40
O 0.6667 0.3333 0.50
%ENDBLOCK POSITIONS_FRAC

KPOINTS_MP_SPACING 0.05
FIX_ALL_CELL : true
SYMMETRY_GENERATE
"#;

    #[test]
    fn test_parse_blocks_and_scalars() {
        let doc = parse_cell_content(SLAB, "Ni-slab").unwrap();

        assert_eq!(doc.seed, "Ni-slab");
        assert_eq!(doc.fields.get_block("lattice_cart").unwrap().len(), 3);
        assert_eq!(doc.fields.get_block("positions_frac").unwrap().len(), 3);
        assert_eq!(doc.fields.get_scalar("kpoints_mp_spacing"), Some("0.05"));
        assert_eq!(doc.fields.get_scalar("fix_all_cell"), Some("true"));
        assert_eq!(doc.fields.get_scalar("symmetry_generate"), Some(""));
    }

    #[test]
    fn test_unterminated_block_fails() {
        let content = "%BLOCK POSITIONS_FRAC\nNi 0.0 0.0 0.0\n";
        let err = parse_cell_content(content, "broken").unwrap_err();
        assert!(matches!(err, CasprepError::ParseError { .. }));
    }

    #[test]
    fn test_unnamed_block_fails() {
        let err = parse_cell_content("%BLOCK\nx\n%ENDBLOCK\n", "broken").unwrap_err();
        assert!(matches!(err, CasprepError::ParseError { .. }));
    }

    #[test]
    fn test_block_markers_case_insensitive() {
        let content = "%block Positions_Frac\nFe 0.0 0.0 0.0\n%EndBlock Positions_Frac\n";
        let doc = parse_cell_content(content, "fe").unwrap();
        assert_eq!(
            doc.fields.get_block("positions_frac").unwrap(),
            std::slice::from_ref(&"Fe 0.0 0.0 0.0".to_string())
        );
    }

    #[test]
    fn test_round_trip_idempotent() {
        let doc = parse_cell_content(SLAB, "Ni-slab").unwrap();
        let once = to_cell_string(&doc);
        let doc2 = parse_cell_content(&once, "Ni-slab").unwrap();
        let twice = to_cell_string(&doc2);

        assert_eq!(doc.fields, doc2.fields);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serialize_colon_keys() {
        let out = to_cell_string(&parse_cell_content(SLAB, "Ni-slab").unwrap());
        assert!(out.contains("FIX_ALL_CELL : true"));
        assert!(out.contains("KPOINTS_MP_SPACING 0.05"));
        assert!(out.contains("%BLOCK POSITIONS_FRAC"));
        assert!(out.contains("%ENDBLOCK POSITIONS_FRAC"));
        // 裸关键字不带尾随空格
        assert!(out.contains("\nSYMMETRY_GENERATE\n"));
        assert!(out.ends_with('\n'));
    }
}
