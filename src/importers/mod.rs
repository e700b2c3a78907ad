// src/importers/mod.rs

pub mod csv;
pub mod text;

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::models::ParsedCredential;

/// Category assigned to imported records when none can be inferred.
pub const DEFAULT_CATEGORY: &str = "Imported";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported import formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Text,
    Csv,
}

impl ImportFormat {
    /// Classify raw content by its first line: a header mentioning
    /// service, username and password means CSV, anything else is
    /// free-form text.
    pub fn detect(raw: &str) -> ImportFormat {
        if let Some(first) = raw.lines().next() {
            let header = first.trim().to_lowercase();
            if header.contains("service")
                && header.contains("username")
                && header.contains("password")
            {
                return ImportFormat::Csv;
            }
        }
        ImportFormat::Text
    }

    /// Classify by file extension: `.csv` means CSV, anything else text.
    pub fn from_path(path: &Path) -> ImportFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ImportFormat::Csv,
            _ => ImportFormat::Text,
        }
    }
}

impl std::fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportFormat::Text => write!(f, "text"),
            ImportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse raw pasted content into credential candidates.
///
/// Never fails: input with nothing extractable yields an empty list, and
/// the caller is responsible for surfacing that as "no credentials found".
pub fn parse(raw: &str, format: ImportFormat) -> Vec<ParsedCredential> {
    match format {
        ImportFormat::Csv => csv::parse_csv(raw),
        ImportFormat::Text => text::parse_text(raw),
    }
}

/// Read and parse a file, inferring the format from the extension and,
/// for non-CSV files, from the first line of the content.
pub fn parse_file(path: &Path) -> Result<Vec<ParsedCredential>, ImportError> {
    let raw = fs::read_to_string(path)?;
    let format = match ImportFormat::from_path(path) {
        ImportFormat::Csv => ImportFormat::Csv,
        ImportFormat::Text => ImportFormat::detect(&raw),
    };
    log::debug!("importing {} as {}", path.display(), format);
    Ok(parse(&raw, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_csv_from_header_line() {
        let raw = "Service,Username,Password,Category,Notes\nGmail,a,b";
        assert_eq!(ImportFormat::detect(raw), ImportFormat::Csv);
    }

    #[test]
    fn detection_is_case_insensitive() {
        let raw = "SERVICE;USERNAME;PASSWORD\n";
        assert_eq!(ImportFormat::detect(raw), ImportFormat::Csv);
    }

    #[test]
    fn partial_header_is_text() {
        assert_eq!(
            ImportFormat::detect("Username,Password\n"),
            ImportFormat::Text
        );
        assert_eq!(ImportFormat::detect("Gmail\n"), ImportFormat::Text);
        assert_eq!(ImportFormat::detect(""), ImportFormat::Text);
    }

    #[test]
    fn csv_extension_wins_regardless_of_case() {
        assert_eq!(
            ImportFormat::from_path(Path::new("export.csv")),
            ImportFormat::Csv
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("export.CSV")),
            ImportFormat::Csv
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("export.txt")),
            ImportFormat::Text
        );
        assert_eq!(
            ImportFormat::from_path(Path::new("export")),
            ImportFormat::Text
        );
    }

    #[test]
    fn empty_input_parses_to_nothing_in_both_modes() {
        assert!(parse("", ImportFormat::Text).is_empty());
        assert!(parse("", ImportFormat::Csv).is_empty());
        assert!(parse("   \n\n  ", ImportFormat::Text).is_empty());
    }
}
