use crate::error::Error;
use crate::scanner::Scan;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Literal `(from, to)` substitutions applied to target names after
    /// padding.
    pub replace: Vec<(String, String)>,
}

/// A single planned rename, both names relative to the plan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

/// The full outcome of planning: built once per invocation, consumed once by
/// the executor or a preview renderer, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub root: PathBuf,
    pub width: usize,
    pub renames: Vec<Rename>,
    pub matched: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub sources: Vec<String>,
    pub target: String,
    pub kind: ConflictKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Multiple sources map to the same target.
    ManyToOne,
    /// The target name is already taken by a file that stays in place.
    TargetExists,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConflictKind::ManyToOne => write!(
                f,
                "{} would all become {}",
                self.sources.join(", "),
                self.target
            ),
            ConflictKind::TargetExists => write!(
                f,
                "{} would overwrite existing file {}",
                self.sources.join(", "),
                self.target
            ),
        }
    }
}

/// Compute the padding width and the ordered rename list for a scan.
///
/// The width is the digit count of the largest numeric token among matched
/// entries. Entries already at their target name are left out of the plan.
/// Any target collision fails the whole plan before a single rename runs.
pub fn build_plan(scan: &Scan, options: &PlanOptions) -> Result<Plan, Error> {
    let width = scan
        .entries
        .iter()
        .map(|e| e.number.width())
        .max()
        .unwrap_or(0);

    let mut renames = Vec::new();
    for entry in &scan.entries {
        let mut target = entry.number.padded(width);
        for (from, to) in &options.replace {
            target = target.replace(from, to);
        }
        if target != entry.name {
            renames.push(Rename {
                from: entry.name.clone(),
                to: target,
            });
        }
    }

    let conflicts = detect_conflicts(&renames, &scan.names);
    if !conflicts.is_empty() {
        return Err(Error::Conflict(conflicts));
    }

    Ok(Plan {
        root: scan.root.clone(),
        width,
        renames,
        matched: scan.entries.len(),
        skipped: scan.skipped,
    })
}

/// A target is in conflict when two sources land on it, or when it names a
/// directory entry that no rename moves out of the way.
fn detect_conflicts(renames: &[Rename], names: &[String]) -> Vec<Conflict> {
    let mut by_target: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for rename in renames {
        by_target.entry(&rename.to).or_default().push(&rename.from);
    }

    let sources: HashSet<&str> = renames.iter().map(|r| r.from.as_str()).collect();
    let existing: HashSet<&str> = names.iter().map(String::as_str).collect();

    let mut conflicts = Vec::new();
    for (target, srcs) in &by_target {
        if srcs.len() > 1 {
            conflicts.push(Conflict {
                sources: srcs.iter().map(|s| (*s).to_string()).collect(),
                target: (*target).to_string(),
                kind: ConflictKind::ManyToOne,
            });
        }
        if existing.contains(target) && !sources.contains(target) {
            conflicts.push(Conflict {
                sources: srcs.iter().map(|s| (*s).to_string()).collect(),
                target: (*target).to_string(),
                kind: ConflictKind::TargetExists,
            });
        }
    }
    conflicts
}
