//! Naming-key extraction - workbook bytes → key string

use crate::error::{SheetpackError, SheetpackResult};
use crate::naming::UNKNOWN_KEY;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use tracing::warn;

/// Read the naming key from cell C2 (row 1, column 2, 0-based) of the first
/// worksheet.
///
/// Bytes that do not decode as a workbook are the only error case; a
/// workbook that opens but has no usable cell yields `"Unknown"`.
pub fn naming_key(data: &[u8]) -> SheetpackResult<String> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| SheetpackError::Workbook(format!("failed to open workbook: {e}")))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        warn!("workbook has no worksheets");
        return Ok(UNKNOWN_KEY.to_string());
    };

    let range = match workbook.worksheet_range(first_sheet) {
        Ok(range) => range,
        Err(e) => {
            warn!("failed to read worksheet {first_sheet}: {e}");
            return Ok(UNKNOWN_KEY.to_string());
        }
    };

    Ok(key_from_range(&range))
}

/// Resolve the key cell within a worksheet range.
///
/// Missing rows/columns, empty cells, error cells, and empty strings all
/// fall back to `"Unknown"`.
fn key_from_range(range: &Range<Data>) -> String {
    let (height, width) = range.get_size();
    if height < 2 || width < 3 {
        return UNKNOWN_KEY.to_string();
    }

    match range.get((1, 2)) {
        None | Some(Data::Empty) | Some(Data::Error(_)) => UNKNOWN_KEY.to_string(),
        Some(Data::String(s)) if s.is_empty() => UNKNOWN_KEY.to_string(),
        Some(value) => value.to_string(),
    }
}
