//! # diff 命令实现
//!
//! 将 .param 与 gencell 默认值做三类对比并输出终端表格 / CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/diff.rs` 定义的参数
//! - 使用 `models/param.rs` 的 compare
//! - 使用 `utils/output.rs`
//! - 使用 `tabled`, `csv` crate

use crate::cli::diff::DiffArgs;
use crate::error::Result;
use crate::models::{DiffEntry, DiffReport, ParamDoc};
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 对比表格行
#[derive(Debug, Clone, Tabled)]
struct DiffRow {
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Baseline")]
    baseline: String,
}

impl DiffRow {
    fn from_entry(entry: &DiffEntry) -> Self {
        DiffRow {
            keyword: entry.key.clone(),
            current: entry.current.clone().unwrap_or_else(|| "-".to_string()),
            baseline: entry.baseline.clone(),
        }
    }
}

/// 执行 diff 命令
pub fn execute(args: DiffArgs) -> Result<()> {
    output::print_header(&format!("Comparing '{}.param' against gencell", args.seed));

    let param = ParamDoc::from_seed(&args.seed)?;
    let baseline = ParamDoc::from_gencell();
    let report = param.compare(&baseline.fields);

    render_report(&report, args.show_same);

    if let Some(ref csv_path) = args.csv {
        save_report_csv(&report, csv_path)?;
        output::print_success(&format!("Classification saved to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 渲染对比报告到终端
pub(crate) fn render_report(report: &DiffReport, show_same: bool) {
    if report.diff.is_empty() && report.other.is_empty() && !show_same {
        output::print_info("No drift from the gencell baseline.");
        return;
    }

    if !report.diff.is_empty() {
        output::print_info(&format!("{} keyword(s) differ from baseline", report.diff.len()));
        let rows: Vec<DiffRow> = report.diff.iter().map(DiffRow::from_entry).collect();
        println!("{}", Table::new(&rows));
    }

    if !report.other.is_empty() {
        output::print_info(&format!(
            "{} baseline keyword(s) absent from document",
            report.other.len()
        ));
        let rows: Vec<DiffRow> = report.other.iter().map(DiffRow::from_entry).collect();
        println!("{}", Table::new(&rows));
    }

    if show_same && !report.same.is_empty() {
        output::print_info(&format!("{} keyword(s) match baseline", report.same.len()));
        let rows: Vec<DiffRow> = report.same.iter().map(DiffRow::from_entry).collect();
        println!("{}", Table::new(&rows));
    }
}

/// CSV 导出行；表头由字段名生成
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    class: &'a str,
    keyword: &'a str,
    current: Option<&'a str>,
    baseline: &'a str,
}

/// 保存完整分类到 CSV
fn save_report_csv(report: &DiffReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for (class, entries) in [
        ("same", &report.same),
        ("diff", &report.diff),
        ("other", &report.other),
    ] {
        for entry in entries {
            wtr.serialize(CsvRecord {
                class,
                keyword: &entry.key,
                current: entry.current.as_deref(),
                baseline: &entry.baseline,
            })?;
        }
    }

    wtr.flush().map_err(|e| crate::error::CasprepError::Other(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldTable;

    #[test]
    fn test_csv_export_lists_all_classes() {
        let mut fields = FieldTable::new();
        fields.set_scalar("task", "singlepoint");
        let param = ParamDoc::new("t", fields);

        let mut baseline = FieldTable::new();
        baseline.set_scalar("task", "geometryoptimization");
        baseline.set_scalar("cut_off_energy", "340");

        let report = param.compare(&baseline);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        save_report_csv(&report, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("class,keyword,current,baseline"));
        assert!(content.contains("diff,task,singlepoint,geometryoptimization"));
        assert!(content.contains("other,cut_off_energy,,340"));
    }
}
