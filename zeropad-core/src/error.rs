use crate::plan::Conflict;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error kinds surfaced by the core. `NotFound` and `Conflict` abort a run
/// before any rename happens; `Rename` is per-file and lands in the apply
/// report instead of escaping the batch.
#[derive(Debug, Error)]
pub enum Error {
    #[error("directory not found or not accessible: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", format_conflicts(.0))]
    Conflict(Vec<Conflict>),

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    #[error("replace expects values like from=to, got {0:?}")]
    InvalidReplace(String),
}

fn format_conflicts(conflicts: &[Conflict]) -> String {
    let details = conflicts
        .iter()
        .map(|c| format!("  {}", c))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "found {} rename conflict{}:\n{}",
        conflicts.len(),
        if conflicts.len() == 1 { "" } else { "s" },
        details
    )
}
