//! Reconstruction of dynamic self-energies from RSPt output files.

use std::path::PathBuf;

use derive_builder::Builder;
use ndarray::{Array1, Array2};
use num_complex::Complex;

use crate::error::{Result, RsptError};
use crate::io::table::read_table;
use crate::rspt::hybridization::check_same_shape;
use crate::units::EV;

#[cfg(test)]
#[path = "self_energy_tests.rs"]
mod self_energy_tests;

/// A structure containing control parameters for reading self-energies.
///
/// Unlike [`HybParams`](crate::rspt::hybridization::HybParams), no orbital
/// count is taken: the number of spin-orbitals is derived from the width of
/// the decoded diagonal table.
#[derive(Clone, Builder, Debug)]
pub struct SelfEnergyParams {
    /// Path to the file holding the real parts of the diagonal self-energies.
    pub file_re: PathBuf,

    /// Path to the file holding the imaginary parts of the diagonal
    /// self-energies.
    pub file_im: PathBuf,

    /// Boolean indicating if the calculation is spin-polarised.
    #[builder(default = "false")]
    pub spinpol: bool,

    /// Optional path to the file holding the real parts of the off-diagonal
    /// self-energies. The off-diagonal reconstruction is incomplete upstream;
    /// supplying this always fails.
    #[builder(default = "None")]
    pub file_re_off: Option<PathBuf>,

    /// Optional path to the file holding the imaginary parts of the
    /// off-diagonal self-energies.
    #[builder(default = "None")]
    pub file_im_off: Option<PathBuf>,
}

impl SelfEnergyParams {
    /// Returns a builder to construct a [`SelfEnergyParams`] structure.
    pub fn builder() -> SelfEnergyParamsBuilder {
        SelfEnergyParamsBuilder::default()
    }
}

/// Returns diagonal dynamic self-energies and the associated energy mesh,
/// read from RSPt-generated files.
///
/// The diagonal tables share their layout and unit scaling with the
/// hybridization tables: mesh in column 0, one spin-orbital per column from
/// column 4 onwards. Requesting the off-diagonal reconstruction fails
/// unconditionally, mirroring the incomplete upstream implementation.
///
/// # Arguments
///
/// * `params` - The control parameters for the read.
///
/// # Returns
///
/// A `Result` containing the energy mesh in eV and the diagonal
/// self-energies, one row per spin-orbital.
pub fn self_energy(params: &SelfEnergyParams) -> Result<(Array1<f64>, Array2<Complex<f64>>)> {
    match (&params.file_re_off, &params.file_im_off) {
        (None, None) => {}
        (Some(_), Some(_)) => {
            return Err(RsptError::NotImplemented(
                "off-diagonal self-energy reconstruction",
            ))
        }
        _ => {
            return Err(RsptError::WrongInputParameters(
                "file_re_off and file_im_off must be supplied together".to_string(),
            ))
        }
    }
    let re = read_table(&params.file_re)?;
    let im = read_table(&params.file_im)?;
    check_same_shape(&re, &params.file_re, &im, &params.file_im)?;
    if re.ncols() < 5 {
        return Err(RsptError::ShapeMismatch {
            path: params.file_re.clone(),
            message: format!(
                "table has {} columns but at least 5 are required",
                re.ncols()
            ),
        });
    }
    let nc = re.ncols() - 4;
    if params.spinpol && nc % 2 != 0 {
        return Err(RsptError::ShapeMismatch {
            path: params.file_re.clone(),
            message: format!(
                "spin-polarised self-energy requires an even number of spin-orbital columns, found {nc}"
            ),
        });
    }
    let norb = if params.spinpol { nc / 2 } else { nc };
    let w = re.column(0).mapv(|x| EV * x);
    let nw = w.len();
    let mut sig_diagonal = Array2::<Complex<f64>>::zeros((nc, nw));
    for i in 0..nc {
        for k in 0..nw {
            sig_diagonal[(i, k)] = EV * Complex::new(re[(k, 4 + i)], im[(k, 4 + i)]);
        }
    }
    log::debug!("Read diagonal self-energies for {norb} orbitals ({nc} spin-orbitals).");
    Ok((w, sig_diagonal))
}
