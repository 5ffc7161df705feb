//! Whitespace-delimited numeric table reader.

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::{Result, RsptError};

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

/// Decodes a plain-text numeric table into a rectangular array.
///
/// Blank lines and lines starting with `#` are skipped. Every remaining line
/// must hold the same number of whitespace-separated floating-point values.
///
/// # Arguments
///
/// * `path` - The path to the table file to be read.
///
/// # Returns
///
/// A `Result` containing the table as a two-dimensional array with one row
/// per data line.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mut values: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0;
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut count = 0;
        for token in trimmed.split_whitespace() {
            let value = token.parse::<f64>().map_err(|err| RsptError::TableFormat {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("unparsable value `{token}`: {err}"),
            })?;
            values.push(value);
            count += 1;
        }
        match ncols {
            None => ncols = Some(count),
            Some(n) if n != count => {
                return Err(RsptError::TableFormat {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("expected {n} columns, found {count}"),
                })
            }
            Some(_) => {}
        }
        nrows += 1;
    }
    let ncols = ncols.ok_or_else(|| RsptError::TableFormat {
        path: path.to_path_buf(),
        line: 0,
        message: "table contains no data rows".to_string(),
    })?;
    Array2::from_shape_vec((nrows, ncols), values).map_err(|err| RsptError::TableFormat {
        path: path.to_path_buf(),
        line: 0,
        message: err.to_string(),
    })
}
