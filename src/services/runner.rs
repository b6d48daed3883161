use crate::domain::models::{DirectoryScan, RunReport};
use crate::services::validator::HeuristicValidator;
use crate::services::walker::validate_directory;
use std::path::{Path, PathBuf};

/// Directories checked under the root when none are given.
pub const DEFAULT_DIRS: [&str; 3] = ["src", "data", "tests"];

/// Picks the scan root: `start` if it has a `src/` directory, else the
/// nearest ancestor that does, else `start` itself.
pub fn detect_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join("src").is_dir())
        .unwrap_or(start)
        .to_path_buf()
}

pub fn resolve_root(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => Ok(detect_root(&std::env::current_dir()?)),
    }
}

pub fn scan_directory(validator: &HeuristicValidator, name: &str, path: PathBuf) -> DirectoryScan {
    if !path.is_dir() {
        tracing::warn!(path = %path.display(), "directory not found, skipping");
        return DirectoryScan {
            name: name.to_string(),
            path,
            found: false,
            result: None,
        };
    }
    let result = validate_directory(validator, &path);
    DirectoryScan {
        name: name.to_string(),
        path,
        found: true,
        result: Some(result),
    }
}

pub fn run_scan(validator: &HeuristicValidator, root: &Path, dirs: &[String]) -> RunReport {
    let directories: Vec<DirectoryScan> = dirs
        .iter()
        .map(|name| scan_directory(validator, name, root.join(name)))
        .collect();
    RunReport {
        root: root.to_path_buf(),
        all_valid: directories.iter().all(DirectoryScan::is_valid),
        directories,
    }
}

#[cfg(test)]
mod tests {
    use super::{detect_root, run_scan, DEFAULT_DIRS};
    use crate::services::validator::HeuristicValidator;
    use std::fs;
    use tempfile::TempDir;

    fn default_dirs() -> Vec<String> {
        DEFAULT_DIRS.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn detect_root_prefers_start_with_src() {
        let tmp = TempDir::new().expect("temp dir");
        fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
        assert_eq!(detect_root(tmp.path()), tmp.path());
    }

    #[test]
    fn detect_root_climbs_to_ancestor_with_src() {
        let tmp = TempDir::new().expect("temp dir");
        let deep = tmp.path().join("src/pkg/body");
        fs::create_dir_all(&deep).expect("mkdir");
        assert_eq!(detect_root(&deep), tmp.path());
    }

    #[test]
    fn missing_directories_do_not_fail_the_run() {
        let tmp = TempDir::new().expect("temp dir");
        fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
        fs::write(tmp.path().join("src/a.sql"), "CREATE TABLE a (x NUMBER);").expect("write");

        let v = HeuristicValidator::new().expect("rules");
        let report = run_scan(&v, tmp.path(), &default_dirs());
        assert!(report.all_valid);
        let found: Vec<_> = report.directories.iter().map(|d| d.found).collect();
        assert_eq!(found, vec![true, false, false]);
    }

    #[test]
    fn any_failing_file_fails_the_run() {
        let tmp = TempDir::new().expect("temp dir");
        fs::create_dir_all(tmp.path().join("src")).expect("mkdir");
        fs::create_dir_all(tmp.path().join("tests")).expect("mkdir");
        fs::write(tmp.path().join("src/a.sql"), "CREATE TABLE a (x NUMBER);").expect("write");
        fs::write(tmp.path().join("tests/b.sql"), "CREATE OR REPLACE TABLE b (x NUMBER);")
            .expect("write");

        let v = HeuristicValidator::new().expect("rules");
        let report = run_scan(&v, tmp.path(), &default_dirs());
        assert!(!report.all_valid);
        assert!(report.directories[0].is_valid());
        assert!(!report.directories[2].is_valid());
    }

    #[test]
    fn a_plain_file_named_like_a_directory_is_not_found() {
        let tmp = TempDir::new().expect("temp dir");
        fs::write(tmp.path().join("data"), "not a dir").expect("write");
        let v = HeuristicValidator::new().expect("rules");
        let report = run_scan(&v, tmp.path(), &["data".to_string()]);
        assert!(!report.directories[0].found);
        assert!(report.all_valid);
    }
}
