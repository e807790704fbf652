use crate::apply::{ApplyReport, RenameOutcome};
use crate::plan::Plan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a plan (dry-run) operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResult {
    pub root: PathBuf,
    pub width: usize,
    pub renames: usize,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

/// Result of an apply operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResult {
    pub root: PathBuf,
    pub width: usize,
    pub report: ApplyReport,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PlanResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "root": self.root,
            "dry_run": self.dry_run,
            "summary": {
                "width": self.width,
                "renames": self.renames,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.renames == 0 {
            writeln!(output, "Nothing to rename.").unwrap();
            return output;
        }

        writeln!(
            output,
            "Would rename {} file{} to width {}",
            self.renames,
            if self.renames == 1 { "" } else { "s" },
            self.width
        )
        .unwrap();

        output
    }
}

impl OutputFormatter for ApplyResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.report.failed == 0,
            "operation": "apply",
            "root": self.root,
            "summary": {
                "width": self.width,
                "renamed": self.report.renamed,
                "failed": self.report.failed,
            },
            "outcomes": self.report.outcomes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        for outcome in &self.report.outcomes {
            match outcome {
                RenameOutcome::Renamed { from, to } => {
                    writeln!(output, "✓ {} -> {}", from, to).unwrap();
                },
                RenameOutcome::Failed { from, to, error } => {
                    writeln!(output, "✗ {} -> {}: {}", from, to, error).unwrap();
                },
            }
        }

        if self.report.outcomes.is_empty() {
            writeln!(output, "Nothing to rename.").unwrap();
            return output;
        }

        writeln!(
            output,
            "Renamed {} file{}",
            self.report.renamed,
            if self.report.renamed == 1 { "" } else { "s" }
        )
        .unwrap();

        if self.report.failed > 0 {
            writeln!(
                output,
                "Failed {} rename{}",
                self.report.failed,
                if self.report.failed == 1 { "" } else { "s" }
            )
            .unwrap();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_apply_result() -> ApplyResult {
        ApplyResult {
            root: PathBuf::from("photos"),
            width: 3,
            report: ApplyReport {
                outcomes: vec![
                    RenameOutcome::Renamed {
                        from: "file-1.jpg".to_string(),
                        to: "file-001.jpg".to_string(),
                    },
                    RenameOutcome::Failed {
                        from: "file-5.jpg".to_string(),
                        to: "file-005.jpg".to_string(),
                        error: "failed to rename file-5.jpg to file-005.jpg: target already exists"
                            .to_string(),
                    },
                ],
                renamed: 1,
                failed: 1,
            },
        }
    }

    #[test]
    fn test_apply_summary_reports_each_file() {
        let output = sample_apply_result().format_summary();
        assert!(output.contains("✓ file-1.jpg -> file-001.jpg"));
        assert!(output.contains("✗ file-5.jpg -> file-005.jpg"));
        assert!(output.contains("Renamed 1 file"));
        assert!(output.contains("Failed 1 rename"));
    }

    #[test]
    fn test_apply_json_success_tracks_failures() {
        let result = sample_apply_result();
        let parsed: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["summary"]["renamed"], 1);
        assert_eq!(parsed["outcomes"][1]["status"], "failed");
    }

    #[test]
    fn test_plan_summary_empty() {
        let result = PlanResult {
            root: PathBuf::from("."),
            width: 0,
            renames: 0,
            dry_run: true,
            plan: None,
        };
        assert!(result.format_summary().contains("Nothing to rename."));
    }

    #[test]
    fn test_plan_json_includes_the_plan() {
        let result = PlanResult {
            root: PathBuf::from("photos"),
            width: 3,
            renames: 1,
            dry_run: true,
            plan: Some(Plan {
                root: PathBuf::from("photos"),
                width: 3,
                renames: vec![crate::plan::Rename {
                    from: "file-1.jpg".to_string(),
                    to: "file-001.jpg".to_string(),
                }],
                matched: 1,
                skipped: 0,
            }),
        };
        let parsed: serde_json::Value = serde_json::from_str(&result.format_json()).unwrap();
        assert_eq!(parsed["dry_run"], true);
        assert_eq!(parsed["plan"]["renames"][0]["to"], "file-001.jpg");
    }
}
