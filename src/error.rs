use thiserror::Error;

pub type SheetpackResult<T> = Result<T, SheetpackError>;

#[derive(Error, Debug)]
pub enum SheetpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("workbook error: {0}")]
    Workbook(String),
}
