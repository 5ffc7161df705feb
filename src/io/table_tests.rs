use ndarray::array;

use crate::error::RsptError;
use crate::io::table::read_table;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_io_table_read() {
    let table = read_table(format!("{ROOT}/tests/rspt_files/real-hyb-off")).unwrap();
    let table_ref = array![[-5.0, 0.25, 0.50], [-4.0, 0.75, 1.00]];
    assert_eq!(table, table_ref);
}

#[test]
fn test_io_table_skips_comments_and_blank_lines() {
    let table = read_table(format!("{ROOT}/tests/rspt_files/pdos")).unwrap();
    assert_eq!(table.dim(), (3, 4));
}

#[test]
fn test_io_table_ragged() {
    let err = read_table(format!("{ROOT}/tests/rspt_files/ragged")).unwrap_err();
    assert!(matches!(err, RsptError::TableFormat { line: 2, .. }));
}

#[test]
fn test_io_table_empty() {
    let err = read_table(format!("{ROOT}/tests/rspt_files/empty-table")).unwrap_err();
    assert!(matches!(err, RsptError::TableFormat { .. }));
}

#[test]
fn test_io_table_bad_token() {
    let err = read_table(format!("{ROOT}/tests/rspt_files/bad-token")).unwrap_err();
    assert!(matches!(err, RsptError::TableFormat { line: 1, .. }));
}

#[test]
fn test_io_table_missing_file() {
    let err = read_table(format!("{ROOT}/tests/rspt_files/no-such-file")).unwrap_err();
    assert!(matches!(err, RsptError::Io(_)));
}
