use serde::Serialize;
use std::fmt;

//==============================================================================
// Input
//==============================================================================

/// One uploaded spreadsheet: display name plus raw byte content.
///
/// Owned for the duration of a single batch run; nothing is retained after
/// the archive is built.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

//==============================================================================
// Per-file report
//==============================================================================

/// Report entry for a file that made it into the staging area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedFile {
    /// Name the file was uploaded under
    pub original: String,
    /// Final name inside the archive (always `.xlsx`)
    pub renamed: String,
}

/// User-visible diagnostic for a file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchWarning {
    pub file: String,
    pub reason: String,
}

impl BatchWarning {
    pub fn new(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.reason)
    }
}

//==============================================================================
// Batch results
//==============================================================================

/// Result of a full batch run: the archive plus its suggested download name.
#[derive(Debug)]
pub struct BatchOutput {
    /// Zip archive bytes, built entirely in memory
    pub archive: Vec<u8>,
    /// Suggested download name (`processed_files_<YYYYMMDDHHMMSS>.zip`)
    pub archive_name: String,
    /// One entry per file written into the archive, in input order
    pub files: Vec<RenamedFile>,
    /// One entry per file that failed to parse or write
    pub warnings: Vec<BatchWarning>,
}

/// Result of a preview run: the names a pack would produce, no archive.
#[derive(Debug, Serialize)]
pub struct BatchPreview {
    pub files: Vec<RenamedFile>,
    pub warnings: Vec<BatchWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_file_new() {
        let file = UploadedFile::new("report.xlsx", vec![1, 2, 3]);
        assert_eq!(file.name, "report.xlsx");
        assert_eq!(file.content, vec![1, 2, 3]);
    }

    #[test]
    fn test_warning_display() {
        let warning = BatchWarning::new("broken.xlsx", "could not read file");
        assert_eq!(warning.to_string(), "broken.xlsx: could not read file");
    }

    #[test]
    fn test_renamed_file_serialize() {
        let entry = RenamedFile {
            original: "upload.xls".to_string(),
            renamed: "Report.xlsx".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"original\":\"upload.xls\""));
        assert!(json.contains("\"renamed\":\"Report.xlsx\""));
    }
}
