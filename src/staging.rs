//! Staging area: a transient directory holding renamed files until they are
//! packed into an archive.
//!
//! The directory lives under the system temp root with a random name, so
//! concurrent batches can never collide. It is removed recursively when the
//! `StagingArea` is dropped, on every exit path.

use crate::error::SheetpackResult;
use chrono::Local;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Transient directory owning the renamed files of one batch run.
pub struct StagingArea {
    dir: TempDir,
    label: String,
}

impl StagingArea {
    /// Create a fresh staging directory with a timestamped label.
    ///
    /// The label (`processed_files_<YYYYMMDDHHMMSS>`) is only used to derive
    /// the archive's download name; the directory itself gets a random name.
    pub fn new() -> SheetpackResult<Self> {
        let dir = tempfile::Builder::new().prefix("sheetpack-").tempdir()?;
        let label = format!("processed_files_{}", Local::now().format("%Y%m%d%H%M%S"));
        Ok(Self { dir, label })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Download name for the archive built from this staging area.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.label)
    }

    /// Whether a file with this exact name has already been staged.
    pub fn contains(&self, file_name: &str) -> bool {
        self.dir.path().join(file_name).is_file()
    }

    /// Resolve a base name to a file name that is free in this staging area.
    ///
    /// Tries `<base>.xlsx` first, then `<base>_1.xlsx`, `<base>_2.xlsx`, …
    /// until an unused name is found. The `.xlsx` extension is fixed
    /// regardless of what the file was uploaded as.
    pub fn reserve_name(&self, base: &str) -> String {
        let mut candidate = format!("{base}.xlsx");
        let mut counter = 1;
        while self.contains(&candidate) {
            candidate = format!("{base}_{counter}.xlsx");
            counter += 1;
        }
        candidate
    }

    /// Write a staged file under the given name.
    pub fn write(&self, file_name: &str, content: &[u8]) -> std::io::Result<()> {
        fs::write(self.dir.path().join(file_name), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_directory() {
        let staging = StagingArea::new().unwrap();
        assert!(staging.path().is_dir());
    }

    #[test]
    fn test_label_format() {
        let staging = StagingArea::new().unwrap();
        let label = staging.label();
        assert!(label.starts_with("processed_files_"));
        let stamp = &label["processed_files_".len()..];
        assert_eq!(stamp.len(), 14, "timestamp should be YYYYMMDDHHMMSS");
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_archive_name_appends_zip() {
        let staging = StagingArea::new().unwrap();
        assert_eq!(staging.archive_name(), format!("{}.zip", staging.label()));
    }

    #[test]
    fn test_reserve_name_without_collision() {
        let staging = StagingArea::new().unwrap();
        assert_eq!(staging.reserve_name("Report"), "Report.xlsx");
    }

    #[test]
    fn test_reserve_name_appends_counter_on_collision() {
        let staging = StagingArea::new().unwrap();
        staging.write("Report.xlsx", b"first").unwrap();
        assert_eq!(staging.reserve_name("Report"), "Report_1.xlsx");

        staging.write("Report_1.xlsx", b"second").unwrap();
        assert_eq!(staging.reserve_name("Report"), "Report_2.xlsx");
    }

    #[test]
    fn test_write_then_contains() {
        let staging = StagingArea::new().unwrap();
        assert!(!staging.contains("a.xlsx"));
        staging.write("a.xlsx", b"bytes").unwrap();
        assert!(staging.contains("a.xlsx"));
    }

    #[test]
    fn test_drop_removes_directory() {
        let staging = StagingArea::new().unwrap();
        let path = staging.path().to_path_buf();
        staging.write("a.xlsx", b"bytes").unwrap();
        assert!(path.is_dir());

        drop(staging);
        assert!(!path.exists(), "staging directory should be removed on drop");
    }

    #[test]
    fn test_two_areas_never_share_a_directory() {
        let a = StagingArea::new().unwrap();
        let b = StagingArea::new().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
