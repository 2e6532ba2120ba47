//! Naming-key extraction tests against real generated workbooks.

use rust_xlsxwriter::Workbook;
use sheetpack::excel;

/// Workbook with an A1 anchor and the given C2 value.
fn workbook_with_c2(value: &str) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "anchor").unwrap();
    worksheet.write_string(1, 2, value).unwrap();
    workbook.save_to_buffer().unwrap()
}

#[test]
fn test_reads_string_key() {
    let bytes = workbook_with_c2("Quarterly Report");
    assert_eq!(excel::naming_key(&bytes).unwrap(), "Quarterly Report");
}

#[test]
fn test_reads_numeric_key() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "anchor").unwrap();
    worksheet.write_number(1, 2, 42.0).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert_eq!(excel::naming_key(&bytes).unwrap(), "42");
}

#[test]
fn test_reads_key_from_first_sheet_only() {
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(0, 0, "anchor").unwrap();
    first.write_string(1, 2, "FromFirst").unwrap();
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "anchor").unwrap();
    second.write_string(1, 2, "FromSecond").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert_eq!(excel::naming_key(&bytes).unwrap(), "FromFirst");
}

#[test]
fn test_too_few_rows_is_unknown() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "a").unwrap();
    worksheet.write_string(0, 1, "b").unwrap();
    worksheet.write_string(0, 2, "c").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert_eq!(excel::naming_key(&bytes).unwrap(), "Unknown");
}

#[test]
fn test_too_few_columns_is_unknown() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "a").unwrap();
    worksheet.write_string(1, 1, "b").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert_eq!(excel::naming_key(&bytes).unwrap(), "Unknown");
}

#[test]
fn test_missing_key_cell_is_unknown() {
    // Wide enough and tall enough, but C2 itself was never written
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "a").unwrap();
    worksheet.write_string(0, 2, "header").unwrap();
    worksheet.write_string(1, 0, "b").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    assert_eq!(excel::naming_key(&bytes).unwrap(), "Unknown");
}

#[test]
fn test_garbage_bytes_fail_to_parse() {
    let result = excel::naming_key(b"PK\x03\x04 this is a lie");
    assert!(result.is_err(), "corrupt bytes should be a parse error");
}

#[test]
fn test_empty_bytes_fail_to_parse() {
    assert!(excel::naming_key(&[]).is_err());
}
