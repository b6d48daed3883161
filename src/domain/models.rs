use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Failure,
}

impl Status {
    pub fn tag(self) -> &'static str {
        match self {
            Status::Success => "[SUCCESS]",
            Status::Warning => "[WARNING]",
            Status::Failure => "[FAILURE]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Outcome of checking one file. Built once by the validator and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub file_path: PathBuf,
    pub status: Status,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Derives the status from the collected messages: any error fails the
    /// file, warnings alone do not.
    pub fn from_findings(file_path: PathBuf, errors: Vec<String>, warnings: Vec<String>) -> Self {
        let status = if !errors.is_empty() {
            Status::Failure
        } else if !warnings.is_empty() {
            Status::Warning
        } else {
            Status::Success
        };
        Self {
            file_path,
            status,
            errors,
            warnings,
        }
    }

    pub fn failure(file_path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            file_path,
            status: Status::Failure,
            errors: vec![error.into()],
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status != Status::Failure
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryResult {
    pub all_valid: bool,
    pub reports: Vec<ValidationReport>,
}

impl DirectoryResult {
    pub fn from_reports(reports: Vec<ValidationReport>) -> Self {
        Self {
            all_valid: reports.iter().all(ValidationReport::is_valid),
            reports,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectoryScan {
    pub name: String,
    pub path: PathBuf,
    pub found: bool,
    pub result: Option<DirectoryResult>,
}

impl DirectoryScan {
    pub fn is_valid(&self) -> bool {
        self.result.as_ref().map(|r| r.all_valid).unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub directories: Vec<DirectoryScan>,
    pub all_valid: bool,
}
