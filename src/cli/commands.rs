use crate::batch;
use crate::error::SheetpackResult;
use crate::types::{BatchWarning, UploadedFile};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Execute the pack command
pub fn pack(files: Vec<PathBuf>, output: Option<PathBuf>, verbose: bool) -> SheetpackResult<()> {
    println!("{}", "📦 Sheetpack - Renaming and packing".bold().green());
    println!("   Input files: {}", files.len());
    println!();

    let (uploads, read_warnings) = read_inputs(&files);
    let result = batch::process(uploads)?;

    print_warnings(read_warnings.iter().chain(&result.warnings));

    if verbose {
        for entry in &result.files {
            println!(
                "   {} {} {}",
                entry.original.cyan(),
                "→".bold(),
                entry.renamed.bright_blue()
            );
        }
        println!();
    }

    let output_path = output.unwrap_or_else(|| PathBuf::from(&result.archive_name));
    fs::write(&output_path, &result.archive)?;

    println!("{}", "✅ Archive written".bold().green());
    println!(
        "   {} file(s) packed, {} skipped",
        result.files.len(),
        read_warnings.len() + result.warnings.len()
    );
    println!("   Output: {}", output_path.display());

    Ok(())
}

/// Execute the preview command - show derived names without packing
pub fn preview(files: Vec<PathBuf>) -> SheetpackResult<()> {
    println!("{}", "🔍 Sheetpack - Preview".bold().green());
    println!("   Input files: {}", files.len());
    println!();

    let (uploads, read_warnings) = read_inputs(&files);
    let result = batch::preview(uploads)?;

    print_warnings(read_warnings.iter().chain(&result.warnings));

    for entry in &result.files {
        println!(
            "   {} {} {}",
            entry.original.cyan(),
            "→".bold(),
            entry.renamed.bright_blue()
        );
    }

    println!();
    println!(
        "   {} file(s) would be packed, {} skipped",
        result.files.len(),
        read_warnings.len() + result.warnings.len()
    );

    Ok(())
}

/// Read the input paths from disk. Unreadable files are skipped with a
/// warning, same as the per-file rule inside the batch.
fn read_inputs(paths: &[PathBuf]) -> (Vec<UploadedFile>, Vec<BatchWarning>) {
    let mut uploads = Vec::new();
    let mut warnings = Vec::new();

    for path in paths {
        match fs::read(path) {
            Ok(content) => uploads.push(UploadedFile::new(display_name(path), content)),
            Err(e) => warnings.push(BatchWarning::new(
                path.display().to_string(),
                format!("could not read file: {e}"),
            )),
        }
    }

    (uploads, warnings)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_warnings<'a>(warnings: impl Iterator<Item = &'a BatchWarning>) {
    let mut any = false;
    for warning in warnings {
        println!("   {} {}", "⚠️".yellow(), warning.to_string().yellow());
        any = true;
    }
    if any {
        println!();
    }
}
