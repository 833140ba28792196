//! # CASTEP .param 格式解析器
//!
//! 行式 `key : value` 格式；值只保留冒号后的第一个空白分隔 token，
//! 行尾注释在读取时丢弃。写回固定为 `{key:<30} : {value}`。
//!
//! ## 依赖关系
//! - 被 `models/param.rs` 使用
//! - 使用 `models/field.rs`

use crate::error::{CasprepError, Result};
use crate::models::{FieldTable, FieldValue};
use crate::models::param::ParamDoc;

use std::fs;
use std::path::Path;

/// 解析 .param 文件
pub fn parse_param_file(path: &Path) -> Result<ParamDoc> {
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

    Ok(parse_param_content(
        &content,
        &super::seed_from_path(path, ".param"),
    ))
}

/// 从字符串内容解析 .param 格式
///
/// 空行、`#` 注释行、无冒号的行一律跳过，因此该解析不会失败。
pub fn parse_param_content(content: &str, seed: &str) -> ParamDoc {
    let mut fields = FieldTable::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };

        let value = rest
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();
        fields.set_scalar(key.trim().to_lowercase(), value);
    }

    ParamDoc::new(seed, fields)
}

/// 将 ParamDoc 序列化为 .param 格式字符串
pub fn to_param_string(doc: &ParamDoc) -> String {
    let mut out = String::new();
    for (key, value) in doc.fields.iter() {
        if let FieldValue::Scalar(v) = value {
            out.push_str(&format!("{:<30} : {}\n", key, v));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAM: &str = r#"# geometry optimisation
task                           : GeometryOptimization
cut_off_energy                 : 340 eV  # plane-wave cutoff
elec_energy_tol                : 1.0e-5

write_checkpoint               : none
"#;

    #[test]
    fn test_parse_first_token_only() {
        let doc = parse_param_content(PARAM, "test");
        assert_eq!(doc.fields.get_scalar("task"), Some("geometryoptimization"));
        // 单位与行尾注释被丢弃
        assert_eq!(doc.fields.get_scalar("cut_off_energy"), Some("340"));
        assert_eq!(doc.fields.get_scalar("elec_energy_tol"), Some("1.0e-5"));
        assert_eq!(doc.fields.len(), 4);
    }

    #[test]
    fn test_colonless_lines_skipped() {
        let doc = parse_param_content("task : singlepoint\nstray line\n", "test");
        assert_eq!(doc.fields.len(), 1);
    }

    #[test]
    fn test_serialize_alignment() {
        let doc = parse_param_content("task : singlepoint\n", "test");
        assert_eq!(to_param_string(&doc), "task                           : singlepoint\n");
    }

    #[test]
    fn test_round_trip_idempotent() {
        let doc = parse_param_content(PARAM, "test");
        let once = to_param_string(&doc);
        let doc2 = parse_param_content(&once, "test");
        let twice = to_param_string(&doc2);

        assert_eq!(doc.fields, doc2.fields);
        assert_eq!(once, twice);
    }
}
