//! Sheetpack - batch-rename spreadsheets by cell content
//!
//! This library takes a batch of uploaded spreadsheet files, derives a new
//! name for each from a fixed cell (C2 of the first worksheet), collects the
//! renamed files in a transient staging directory, and packs them into an
//! in-memory zip archive ready to be offered as a download.
//!
//! # Features
//!
//! - Reads `.xlsx` and `.xls` workbooks (format auto-detection)
//! - Filename sanitization and collision-free deduplication
//! - Per-file error recovery: bad files are skipped with a warning
//! - Staging directory removed on every exit path
//!
//! # Example
//!
//! ```no_run
//! use sheetpack::batch;
//! use sheetpack::types::UploadedFile;
//!
//! let content = std::fs::read("report.xlsx")?;
//! let files = vec![UploadedFile::new("report.xlsx", content)];
//!
//! let output = batch::process(files)?;
//!
//! println!("{} ({} bytes)", output.archive_name, output.archive.len());
//! for warning in &output.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok::<(), sheetpack::error::SheetpackError>(())
//! ```

pub mod api;
pub mod archive;
pub mod batch;
pub mod cli;
pub mod error;
pub mod excel;
pub mod naming;
pub mod staging;
pub mod types;

// Re-export commonly used types
pub use error::{SheetpackError, SheetpackResult};
pub use types::{BatchOutput, BatchPreview, BatchWarning, RenamedFile, UploadedFile};
