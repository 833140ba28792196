//! # 内容哈希快照
//!
//! 把输入文件按字节复制为 `<文件名>.<哈希前8位>`，
//! 变更前留档。内容决定文件名，同名快照必然同内容，
//! 因此已存在时直接跳过，并发调用也安全。
//!
//! ## 依赖关系
//! - 被 `models/` 和 `commands/snapshot.rs` 使用
//! - 使用 `sha2`, `hex` crate

use crate::error::{CasprepError, Result};

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// 快照文件名中哈希前缀的长度
const HASH_PREFIX_LEN: usize = 8;

/// 计算字节内容的十六进制哈希前缀
pub fn content_hash_prefix(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hex::encode(hasher.finalize());
    digest[..HASH_PREFIX_LEN].to_string()
}

/// 为文件创建内容哈希命名的快照副本，返回快照路径
///
/// 快照已存在时不重写（追加语义）。
pub fn snapshot_file(path: &Path) -> Result<PathBuf> {
    let bytes = fs::read(path).map_err(|e| {
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

    let snap_path = PathBuf::from(format!(
        "{}.{}",
        path.display(),
        content_hash_prefix(&bytes)
    ));

    if !snap_path.exists() {
        fs::write(&snap_path, &bytes).map_err(|e| CasprepError::FileWriteError {
            path: snap_path.display().to_string(),
            source: e,
        })?;
    }

    Ok(snap_path)
}
