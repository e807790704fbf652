use crate::apply::apply_plan;
use crate::output::{ApplyResult, PlanResult};
use crate::plan::{build_plan, PlanOptions};
use crate::preview::{render_plan, Preview};
use crate::scanner::{scan_directory, ScanOptions};
use anyhow::Result;
use std::path::Path;

/// Plan operation - scan, plan, and render a preview without touching the
/// filesystem. Returns structured data plus the rendered preview, if any.
pub fn plan_operation(
    root: &Path,
    scan_options: &ScanOptions,
    plan_options: &PlanOptions,
    preview: Preview,
    use_color: Option<bool>,
) -> Result<(PlanResult, Option<String>)> {
    let scan = scan_directory(root, scan_options)?;
    let plan = build_plan(&scan, plan_options)?;

    let preview_content = match preview {
        Preview::None => None,
        format => Some(render_plan(&plan, format, use_color)),
    };

    let result = PlanResult {
        root: plan.root.clone(),
        width: plan.width,
        renames: plan.renames.len(),
        dry_run: true,
        plan: Some(plan),
    };

    Ok((result, preview_content))
}

/// Apply operation - scan, plan, and execute in one pass. Per-file failures
/// land in the report; only scan and plan errors abort.
pub fn apply_operation(
    root: &Path,
    scan_options: &ScanOptions,
    plan_options: &PlanOptions,
) -> Result<ApplyResult> {
    let scan = scan_directory(root, scan_options)?;
    let plan = build_plan(&scan, plan_options)?;
    let report = apply_plan(&plan);

    Ok(ApplyResult {
        root: plan.root,
        width: plan.width,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plan_operation_leaves_directory_untouched() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file-1.jpg"), b"x").unwrap();
        fs::write(temp.path().join("file-100.jpg"), b"x").unwrap();

        let (result, preview) = plan_operation(
            temp.path(),
            &ScanOptions::default(),
            &PlanOptions::default(),
            Preview::List,
            Some(false),
        )
        .unwrap();

        assert!(result.dry_run);
        assert_eq!(result.renames, 1);
        assert!(preview.unwrap().contains("file-1.jpg -> file-001.jpg"));

        let mut names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["file-1.jpg", "file-100.jpg"]);
    }

    #[test]
    fn test_apply_operation_is_idempotent() {
        let temp = TempDir::new().unwrap();
        for name in ["file-090.jpg", "file-1.jpg", "file-100.jpg", "file-5.jpg"] {
            fs::write(temp.path().join(name), b"x").unwrap();
        }

        let first = apply_operation(
            temp.path(),
            &ScanOptions::default(),
            &PlanOptions::default(),
        )
        .unwrap();
        assert_eq!(first.report.renamed, 2);
        assert_eq!(first.report.failed, 0);

        let second = apply_operation(
            temp.path(),
            &ScanOptions::default(),
            &PlanOptions::default(),
        )
        .unwrap();
        assert_eq!(second.report.renamed, 0);
        assert!(second.report.outcomes.is_empty());
    }
}
