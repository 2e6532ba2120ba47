//! The batch rename pass.
//!
//! One linear sweep over the uploaded files: parse, extract the naming key,
//! sanitize, deduplicate, write to staging; then pack the staging area into
//! an in-memory zip. Per-file failures are recorded as warnings and never
//! abort the batch; only archive construction is fatal.

use crate::archive;
use crate::error::SheetpackResult;
use crate::excel;
use crate::naming;
use crate::staging::StagingArea;
use crate::types::{BatchOutput, BatchPreview, BatchWarning, RenamedFile, UploadedFile};
use tracing::{debug, warn};

/// Rename every file in the batch and pack the results into a zip archive.
///
/// The staging directory and all intermediate files are removed before this
/// function returns, whether it succeeds or not.
pub fn process(files: Vec<UploadedFile>) -> SheetpackResult<BatchOutput> {
    let staging = StagingArea::new()?;
    let (renamed, warnings) = stage_files(&staging, files);

    let archive = archive::zip_directory(staging.path())?;
    let archive_name = staging.archive_name();

    Ok(BatchOutput {
        archive,
        archive_name,
        files: renamed,
        warnings,
    })
}

/// Run the rename pass only and report the names a pack would produce.
pub fn preview(files: Vec<UploadedFile>) -> SheetpackResult<BatchPreview> {
    let staging = StagingArea::new()?;
    let (renamed, warnings) = stage_files(&staging, files);

    Ok(BatchPreview {
        files: renamed,
        warnings,
    })
}

/// Per-file pass: derive a unique name for each upload and write it into the
/// staging area. Returns the rename report and the accumulated warnings.
fn stage_files(
    staging: &StagingArea,
    files: Vec<UploadedFile>,
) -> (Vec<RenamedFile>, Vec<BatchWarning>) {
    let mut renamed = Vec::new();
    let mut warnings = Vec::new();

    for file in files {
        let key = match excel::naming_key(&file.content) {
            Ok(key) => key,
            Err(e) => {
                warn!("skipping {}: {e}", file.name);
                warnings.push(BatchWarning::new(&file.name, format!("could not read file: {e}")));
                continue;
            }
        };

        let base = naming::base_name(&key, &file.name);
        let final_name = staging.reserve_name(&base);

        if let Err(e) = staging.write(&final_name, &file.content) {
            warn!("could not save {} as {final_name}: {e}", file.name);
            warnings.push(BatchWarning::new(&file.name, format!("could not save file: {e}")));
            continue;
        }

        debug!("{} -> {final_name}", file.name);
        renamed.push(RenamedFile {
            original: file.name,
            renamed: final_name,
        });
    }

    (renamed, warnings)
}
