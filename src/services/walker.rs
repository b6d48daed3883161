use crate::domain::models::{DirectoryResult, ValidationReport};
use crate::services::validator::HeuristicValidator;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const SQL_EXTENSION: &str = "sql";

/// Outcome of walking one tree: candidate files, plus entries the walk
/// could not descend into.
struct Discovered {
    files: Vec<PathBuf>,
    unreadable: Vec<ValidationReport>,
}

/// Regular files, plus symlinks that do not point at a directory. Dangling
/// links are kept so they surface as "file not found" reports.
fn is_candidate_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

/// Collects `.sql` files under `root`, depth-first with entries sorted by
/// file name at every level. Directory symlinks are not followed.
fn discover_sql_files(root: &Path) -> Discovered {
    let mut files = Vec::new();
    let mut unreadable = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                unreadable.push(ValidationReport::failure(path, e.to_string()));
                continue;
            }
        };
        if !is_candidate_file(&entry) {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some(SQL_EXTENSION) {
            continue;
        }
        files.push(entry.into_path());
    }
    Discovered { files, unreadable }
}

pub fn validate_directory(validator: &HeuristicValidator, root: &Path) -> DirectoryResult {
    let Discovered {
        files,
        mut unreadable,
    } = discover_sql_files(root);
    tracing::debug!(root = %root.display(), count = files.len(), "discovered sql files");

    let mut reports = Vec::with_capacity(files.len() + unreadable.len());
    for file in &files {
        let report = validator.validate_file(file);
        tracing::debug!(path = %file.display(), status = ?report.status, "validated");
        reports.push(report);
    }
    reports.append(&mut unreadable);
    DirectoryResult::from_reports(reports)
}
