use crate::domain::models::ValidationReport;
use regex::Regex;
use std::path::{Path, PathBuf};

const BALANCE_TOLERANCE: usize = 2;
const BLOCK_CLOSERS: [&str; 3] = ["IF", "LOOP", "CASE"];

pub const EMPTY_FILE: &str = "file is empty";
pub const NO_PLSQL_OBJECTS: &str = "file may not contain valid PL/SQL objects";

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// Blank means only whitespace, counting the ASCII file/group/record/unit
/// separators (`\x1c`..`\x1f`) as whitespace too.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Reads a whole file as UTF-8. The handle is closed before returning.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_path_buf())
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    String::from_utf8(bytes).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Surface-pattern checks for SQL and PL/SQL text.
///
/// Not a parser. The BEGIN/END count is a rough heuristic with a tolerance
/// band, and only single physical lines are inspected for invalid statements.
pub struct HeuristicValidator {
    create_keywords: Regex,
    plsql_keywords: Regex,
    begin: Regex,
    end_statement: Regex,
    create_or_replace_table: Regex,
}

impl HeuristicValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            create_keywords: Regex::new(r"(?i)\b(CREATE|REPLACE)\b")?,
            plsql_keywords: Regex::new(r"(?i)\b(PROCEDURE|FUNCTION|PACKAGE|TRIGGER|BEGIN|END)\b")?,
            begin: Regex::new(r"(?i)\bBEGIN\b")?,
            end_statement: Regex::new(r"(?i)\bEND\b\s*(\w+)?[;/]")?,
            create_or_replace_table: Regex::new(r"(?i)CREATE\s+OR\s+REPLACE\s+TABLE")?,
        })
    }

    /// Reads and validates one file. Read failures become a failure report.
    pub fn validate_file(&self, path: &Path) -> ValidationReport {
        match read_source(path) {
            Ok(text) => self.validate(path, &text),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "unreadable source");
                ValidationReport::failure(path.to_path_buf(), e.to_string())
            }
        }
    }

    pub fn validate(&self, file_path: &Path, text: &str) -> ValidationReport {
        if is_blank(text) {
            return ValidationReport::failure(file_path.to_path_buf(), EMPTY_FILE);
        }

        let mut warnings = Vec::new();
        if !self.has_structure(text) {
            warnings.push(NO_PLSQL_OBJECTS.to_string());
        }

        let (begins, ends) = self.block_counts(text);
        if begins.abs_diff(ends) > BALANCE_TOLERANCE {
            warnings.push(format!(
                "possible BEGIN/END imbalance: {} BEGIN, ~{} END (may be a false positive in packages)",
                begins, ends
            ));
        }

        let errors = self.invalid_statements(text);
        ValidationReport::from_findings(file_path.to_path_buf(), errors, warnings)
    }

    fn has_structure(&self, text: &str) -> bool {
        self.create_keywords.is_match(text) || self.plsql_keywords.is_match(text)
    }

    /// Returns `(BEGIN count, block-closing END count)`.
    fn block_counts(&self, text: &str) -> (usize, usize) {
        let begins = self.begin.find_iter(text).count();
        let ends = self
            .end_statement
            .captures_iter(text)
            .filter(|caps| match caps.get(1) {
                None => true,
                Some(ident) => {
                    let ident = ident.as_str().to_uppercase();
                    BLOCK_CLOSERS.contains(&ident.as_str())
                }
            })
            .count();
        (begins, ends)
    }

    fn invalid_statements(&self, text: &str) -> Vec<String> {
        let mut errors = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let code = match line.split_once("--") {
                Some((before, _)) => before,
                None => line,
            }
            .trim();
            if code.is_empty() {
                continue;
            }
            if self.create_or_replace_table.is_match(code) {
                errors.push(format!(
                    "line {}: 'CREATE OR REPLACE TABLE' is invalid syntax, use 'CREATE TABLE' instead",
                    idx + 1
                ));
            }
        }
        errors
    }
}
