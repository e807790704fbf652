use crate::error::Error;
use crate::plan::Plan;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// What happened to one planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed {
        from: String,
        to: String,
    },
    Failed {
        from: String,
        to: String,
        error: String,
    },
}

/// Ordered per-file outcomes of an executed plan. A failed rename is data
/// here, not an error that aborts the remaining entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyReport {
    pub outcomes: Vec<RenameOutcome>,
    pub renamed: usize,
    pub failed: usize,
}

/// Execute a plan against the filesystem, one atomic rename per entry.
///
/// Filesystem races are reported, never resolved: a target that appeared
/// since planning fails that entry, and the batch keeps going.
pub fn apply_plan(plan: &Plan) -> ApplyReport {
    let mut report = ApplyReport::default();

    for rename in &plan.renames {
        let from = plan.root.join(&rename.from);
        let to = plan.root.join(&rename.to);

        // fs::rename would silently replace an existing target on Unix.
        let result = if to.exists() {
            Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "target already exists",
            ))
        } else {
            fs::rename(&from, &to)
        };

        match result {
            Ok(()) => {
                report.renamed += 1;
                report.outcomes.push(RenameOutcome::Renamed {
                    from: rename.from.clone(),
                    to: rename.to.clone(),
                });
            },
            Err(source) => {
                let error = Error::Rename {
                    from: rename.from.clone(),
                    to: rename.to.clone(),
                    source,
                }
                .to_string();
                report.failed += 1;
                report.outcomes.push(RenameOutcome::Failed {
                    from: rename.from.clone(),
                    to: rename.to.clone(),
                    error,
                });
            },
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{build_plan, PlanOptions};
    use crate::scanner::{scan_directory, ScanOptions};
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_apply_renames_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "file-1.jpg");
        touch(temp.path(), "file-80.jpg");
        touch(temp.path(), "file-100.jpg");

        let scan = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        let plan = build_plan(&scan, &PlanOptions::default()).unwrap();
        let report = apply_plan(&plan);

        assert_eq!(report.renamed, 2);
        assert_eq!(report.failed, 0);
        assert!(temp.path().join("file-001.jpg").exists());
        assert!(temp.path().join("file-080.jpg").exists());
        assert!(temp.path().join("file-100.jpg").exists());
        assert!(!temp.path().join("file-1.jpg").exists());
    }

    #[test]
    fn test_apply_continues_past_a_failed_entry() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "file-1.jpg");
        touch(temp.path(), "file-5.jpg");
        touch(temp.path(), "file-80.jpg");

        let scan = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        let plan = build_plan(&scan, &PlanOptions::default()).unwrap();

        // A target appearing between planning and execution is the race the
        // executor must report without giving up on the rest.
        touch(temp.path(), "file-01.jpg");
        let report = apply_plan(&plan);

        assert_eq!(report.renamed, 1);
        assert_eq!(report.failed, 1);
        assert!(matches!(
            &report.outcomes[0],
            RenameOutcome::Failed { from, .. } if from == "file-1.jpg"
        ));
        assert!(temp.path().join("file-1.jpg").exists());
        assert!(temp.path().join("file-05.jpg").exists());
        assert!(temp.path().join("file-80.jpg").exists());
    }

    #[test]
    fn test_failed_outcome_carries_the_error_text() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "file-1.jpg");
        touch(temp.path(), "file-10.jpg");

        let scan = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        let plan = build_plan(&scan, &PlanOptions::default()).unwrap();
        touch(temp.path(), "file-01.jpg");
        let report = apply_plan(&plan);

        let RenameOutcome::Failed { error, .. } = &report.outcomes[0] else {
            panic!("expected a failed outcome");
        };
        assert!(error.contains("file-1.jpg"));
        assert!(error.contains("already exists"));
    }
}
