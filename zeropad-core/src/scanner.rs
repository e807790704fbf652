use crate::error::Error;
use crate::pattern::NumberedName;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory file that carries a numeric token.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub number: NumberedName,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Consider every numbered file instead of only the majority extension.
    pub all_extensions: bool,
}

/// One pass over a directory: the numbered entries to plan over, plus every
/// plain-file name seen, which the planner needs for collision checks.
#[derive(Debug, Clone)]
pub struct Scan {
    pub root: PathBuf,
    pub entries: Vec<FileEntry>,
    pub names: Vec<String>,
    pub majority_ext: Option<String>,
    pub skipped: usize,
}

/// List the plain files of `root` and parse their numeric tokens.
/// Subdirectories and names without a token are skipped silently.
pub fn scan_directory(root: &Path, options: &ScanOptions) -> Result<Scan, Error> {
    let not_found = |source| Error::NotFound {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(not_found)? {
        let entry = entry.map_err(not_found)?;
        if !entry.file_type().map_err(not_found)?.is_file() {
            continue;
        }
        // Non-UTF-8 names have no numeric token to speak of; leave them alone.
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let majority_ext = if options.all_extensions {
        None
    } else {
        majority_extension(&names)
    };

    let mut entries = Vec::new();
    let mut skipped = 0;
    for name in &names {
        match NumberedName::parse(name) {
            Some(number) if is_targeted(name, majority_ext.as_deref()) => {
                entries.push(FileEntry {
                    name: name.clone(),
                    number,
                });
            },
            _ => skipped += 1,
        }
    }

    Ok(Scan {
        root: root.to_path_buf(),
        entries,
        names,
        majority_ext,
        skipped,
    })
}

/// Most common case-folded extension among `names`, if any file has one.
/// Ties break alphabetically for deterministic output.
fn majority_extension(names: &[String]) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in names {
        if let Some(ext) = extension_of(name) {
            *counts.entry(ext).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|(a_ext, a_count), (b_ext, b_count)| {
            a_count.cmp(b_count).then_with(|| b_ext.cmp(a_ext))
        })
        .map(|(ext, _)| ext)
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_lowercase)
}

fn is_targeted(name: &str, majority_ext: Option<&str>) -> bool {
    match majority_ext {
        Some(majority) => extension_of(name).as_deref() == Some(majority),
        None => true,
    }
}
