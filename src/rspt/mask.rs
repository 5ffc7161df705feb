//! Recovery of the off-diagonal sparsity mask from an RSPt out-file.

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::error::{Result, RsptError};

#[cfg(test)]
#[path = "mask_tests.rs"]
mod mask_tests;

/// The literal line printed by RSPt's `dumpdata` routine immediately before
/// the off-diagonal element mask.
const SEARCH_PHRASE: &str = "dumpdata: Mask of the printed off-diagonal elements:";

/// Recovers the off-diagonal sparsity mask from an RSPt out-file.
///
/// The first occurrence of the marker phrase is assumed to refer to the
/// localised orbitals of interest; the `2 * norb` lines following it each
/// hold `2 * norb` 0/1 tokens.
///
/// # Arguments
///
/// * `outfile` - The path to the RSPt out-file to be searched.
/// * `norb` - The number of non-equivalent correlated orbitals.
///
/// # Returns
///
/// A `Result` containing the mask as a square boolean array of dimension
/// `2 * norb`.
pub fn off_diagonal_mask<P: AsRef<Path>>(outfile: P, norb: usize) -> Result<Array2<bool>> {
    let path = outfile.as_ref();
    let contents = fs::read_to_string(path)?;
    let n = 2 * norb;
    let mut lines = contents.lines().enumerate();
    let marker = loop {
        match lines.next() {
            Some((index, line)) if line.contains(SEARCH_PHRASE) => break index,
            Some(_) => continue,
            None => {
                return Err(RsptError::MaskNotFound {
                    path: path.to_path_buf(),
                })
            }
        }
    };
    let mut mask = Array2::from_elem((n, n), false);
    for i in 0..n {
        let (index, line) = lines.next().ok_or_else(|| RsptError::TableFormat {
            path: path.to_path_buf(),
            line: marker + 1,
            message: format!("mask block truncated: expected {n} lines"),
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(RsptError::TableFormat {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("expected {n} mask tokens, found {}", tokens.len()),
            });
        }
        for (j, token) in tokens.iter().enumerate() {
            mask[(i, j)] = match *token {
                "0" => false,
                "1" => true,
                _ => {
                    return Err(RsptError::TableFormat {
                        path: path.to_path_buf(),
                        line: index + 1,
                        message: format!("mask token `{token}` is not 0 or 1"),
                    })
                }
            };
        }
    }
    log::debug!(
        "Off-diagonal mask recovered from `{}` at line {}.",
        path.display(),
        marker + 1
    );
    Ok(mask)
}
