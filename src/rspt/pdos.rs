//! Reconstruction of projected densities of states from RSPt output files.

use std::path::Path;

use ndarray::{Array1, Array2};

use crate::error::{Result, RsptError};
use crate::io::table::read_table;
use crate::units::EV;

#[cfg(test)]
#[path = "pdos_tests.rs"]
mod pdos_tests;

/// Returns the projected density of states and the associated energy mesh,
/// read from an RSPt-generated file.
///
/// The density columns start at column 7 for spin-polarised calculations and
/// at column 2 otherwise, reflecting the different number of leading metadata
/// columns. The mesh is converted to eV while the densities are converted to
/// states per eV, so the two use opposite scaling directions.
///
/// # Arguments
///
/// * `filename` - The path to the PDOS file to be read.
/// * `norb` - The number of non-equivalent correlated orbitals.
/// * `spinpol` - Boolean indicating if the calculation is spin-polarised.
///
/// # Returns
///
/// A `Result` containing the energy mesh in eV and the densities, one row
/// per spin-orbital.
pub fn pdos<P: AsRef<Path>>(
    filename: P,
    norb: usize,
    spinpol: bool,
) -> Result<(Array1<f64>, Array2<f64>)> {
    let path = filename.as_ref();
    let nc = if spinpol { 2 * norb } else { norb };
    let k = if spinpol { 7 } else { 2 };
    let table = read_table(path)?;
    if table.ncols() < k + nc {
        return Err(RsptError::ShapeMismatch {
            path: path.to_path_buf(),
            message: format!(
                "table has {} columns but {} spin-orbitals require at least {}",
                table.ncols(),
                nc,
                k + nc
            ),
        });
    }
    let w = table.column(0).mapv(|x| EV * x);
    let mut p = Array2::<f64>::zeros((nc, w.len()));
    for i in 0..nc {
        p.row_mut(i).assign(&table.column(k + i).mapv(|x| x / EV));
    }
    Ok((w, p))
}
