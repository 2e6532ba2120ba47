//! Zip archive construction - staging directory → in-memory archive

use crate::error::SheetpackResult;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Pack every regular file in `dir` into a zip archive held in memory.
///
/// Entries are stored flat (no directory prefix) in name order, Deflate
/// compressed. An empty directory yields a valid empty archive.
pub fn zip_directory(dir: &Path) -> SheetpackResult<Vec<u8>> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        zip.start_file(name, options)?;
        zip.write_all(&fs::read(entry.path())?)?;
    }

    Ok(zip.finish()?.into_inner())
}
