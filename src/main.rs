use clap::{Parser, Subcommand};
use sheetpack::cli;
use sheetpack::error::SheetpackResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetpack")]
#[command(about = "Batch-rename spreadsheet files by cell content and pack them into a zip.")]
#[command(long_about = "Sheetpack - Batch spreadsheet renamer

Reads cell C2 of each input workbook, renames the file after its content,
and packs the renamed files into a single zip archive.

COMMANDS:
  pack     - Rename inputs and write the zip archive
  preview  - Show the names a pack would produce, write nothing

NAMING RULES:
  - Cell C2 of the first worksheet supplies the new name
  - Illegal filename characters are stripped (alphanumerics, spaces,
    periods and underscores survive)
  - Missing or empty cells fall back to 'Unknown'
  - Name collisions get a numeric suffix: Report.xlsx, Report_1.xlsx, ...

EXAMPLES:
  sheetpack pack q1.xlsx q2.xlsx q3.xlsx
  sheetpack pack reports/*.xlsx -o renamed.zip
  sheetpack preview reports/*.xlsx")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Rename spreadsheets by their C2 cell and pack them into a zip.

Each input file is decoded, renamed after the content of cell C2, and added
to the archive with a fixed .xlsx extension. Files that cannot be decoded or
written are skipped with a warning; the batch always continues.

The archive defaults to processed_files_<YYYYMMDDHHMMSS>.zip in the current
directory. Use -o to choose a different path.")]
    /// Rename spreadsheets by their C2 cell and pack them into a zip
    Pack {
        /// Spreadsheet files to process (.xlsx or .xls)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output archive path (defaults to the suggested archive name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show each rename as it happens
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the names a pack would produce, without writing anything
    Preview {
        /// Spreadsheet files to inspect (.xlsx or .xls)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> SheetpackResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            files,
            output,
            verbose,
        } => cli::pack(files, output, verbose),

        Commands::Preview { files } => cli::preview(files),
    }
}
