//! # spin 命令实现
//!
//! 批量为 .cell 的 positions_frac 标注初始磁矩 (AIRSS 自旋工作流)。
//!
//! ## 功能
//! - 单文件或目录 + glob 两种输入模式
//! - 可选变更前内容哈希快照
//! - 目录模式并行处理
//!
//! ## 依赖关系
//! - 使用 `cli/spin.rs` 定义的参数
//! - 使用 `models/cell.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/snapshot.rs`

use crate::cli::spin::SpinArgs;
use crate::error::{CasprepError, Result};
use crate::models::CellDoc;
use crate::utils::{output, progress, snapshot};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use walkdir::WalkDir;

/// 执行 spin 命令
pub fn execute(args: SpinArgs) -> Result<()> {
    output::print_header("Tagging initial magnetic moments");

    if !args.input.exists() {
        return Err(CasprepError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    // 单文件模式
    if args.input.is_file() {
        tag_file(&args.input, &args)?;
        output::print_done(&format!("Tagged '{}'", args.input.display()));
        return Ok(());
    }

    // 目录模式：收集输入文件
    let files = collect_input_files(&args.input, &args.pattern, args.recursive)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to tag", files.len()));

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(files.len() as u64, "Tagging");
    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        match tag_file(path, &args) {
            Ok(()) => {
                success_count.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::SeqCst);
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", path.display(), e));
                });
            }
        }
        pb.inc(1);
    });

    pb.finish_with_message("Done");

    output::print_done(&format!(
        "Tagged {} file(s) in '{}' ({} failed)",
        success_count.load(Ordering::SeqCst),
        args.input.display(),
        error_count.load(Ordering::SeqCst)
    ));

    Ok(())
}

/// 标注单个 .cell 文件并原地写回
fn tag_file(path: &Path, args: &SpinArgs) -> Result<()> {
    if args.snapshot {
        snapshot::snapshot_file(path)?;
    }

    let mut doc = CellDoc::from_file(path)?;
    doc.set_spin(args.scheme)?;
    doc.save_to(path)
}

/// 收集输入文件
fn collect_input_files(input_dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        CasprepError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_respects_pattern_and_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.cell"), "").unwrap();
        fs::write(dir.path().join("a.param"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.cell"), "").unwrap();

        let flat = collect_input_files(dir.path(), "*.cell", false).unwrap();
        assert_eq!(flat.len(), 1);

        let deep = collect_input_files(dir.path(), "*.cell", true).unwrap();
        assert_eq!(deep.len(), 2);
    }
}
