//! # 解析器模块
//!
//! CASTEP 两种输入文本格式的解析与序列化。
//!
//! ## 依赖关系
//! - 被 `models/`, `commands/` 使用
//! - 子模块: cell, param

pub mod cell;
pub mod param;

use std::path::Path;

/// 从文件路径推断种子名：去掉给定扩展名，保留目录前缀
pub(crate) fn seed_from_path(path: &Path, ext: &str) -> String {
    let display = path.display().to_string();
    display
        .strip_suffix(ext)
        .unwrap_or(display.as_str())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_path() {
        assert_eq!(seed_from_path(Path::new("Ni-slab.cell"), ".cell"), "Ni-slab");
        assert_eq!(
            seed_from_path(Path::new("runs/Ni-slab.param"), ".param"),
            "runs/Ni-slab"
        );
        assert_eq!(seed_from_path(Path::new("noext"), ".cell"), "noext");
    }
}
