//! Reconstruction of hybridization functions from RSPt output files.

use std::path::{Path, PathBuf};

use derive_builder::Builder;
use itertools::iproduct;
use ndarray::{s, Array1, Array2, Array3};
use num_complex::Complex;

use crate::error::{Result, RsptError};
use crate::io::table::read_table;
use crate::rspt::mask::off_diagonal_mask;
use crate::units::EV;

#[cfg(test)]
#[path = "hybridization_tests.rs"]
mod hybridization_tests;

/// A structure containing control parameters for reading hybridization
/// functions.
#[derive(Clone, Builder, Debug)]
pub struct HybParams {
    /// Path to the file holding the real parts of the diagonal hybridization
    /// functions.
    pub file_re: PathBuf,

    /// Path to the file holding the imaginary parts of the diagonal
    /// hybridization functions.
    pub file_im: PathBuf,

    /// The number of non-equivalent correlated orbitals.
    pub norb: usize,

    /// Boolean indicating if the calculation is spin-polarised, in which case
    /// the number of spin-orbitals is twice [`Self::norb`].
    #[builder(default = "false")]
    pub spinpol: bool,

    /// Optional path to the file holding the real parts of the off-diagonal
    /// hybridization functions. Must be supplied together with
    /// [`Self::file_im_off`] and [`Self::outfile`].
    #[builder(default = "None")]
    pub file_re_off: Option<PathBuf>,

    /// Optional path to the file holding the imaginary parts of the
    /// off-diagonal hybridization functions.
    #[builder(default = "None")]
    pub file_im_off: Option<PathBuf>,

    /// Optional path to the RSPt out-file from which the off-diagonal
    /// sparsity mask is recovered.
    #[builder(default = "None")]
    pub outfile: Option<PathBuf>,

    /// Boolean indicating if the diagonal-only result is to be returned as a
    /// full matrix with zero off-diagonal entries. Has no effect when
    /// off-diagonal files are supplied, which always yield the full-matrix
    /// form.
    #[builder(default = "false")]
    pub return_as_full_matrix: bool,
}

impl HybParams {
    /// Returns a builder to construct a [`HybParams`] structure.
    pub fn builder() -> HybParamsBuilder {
        HybParamsBuilder::default()
    }
}

/// An enumerated type for reconstructed hybridization functions.
#[derive(Clone, Debug)]
pub enum Hybridization {
    /// Variant for diagonal-only functions, of shape `nc × nw` for `nc`
    /// spin-orbitals over `nw` mesh points.
    Diagonal(Array2<Complex<f64>>),

    /// Variant for full-matrix functions, of shape `nc × nc × nw`.
    Full(Array3<Complex<f64>>),
}

impl Hybridization {
    /// Returns a reference to the diagonal-only array, if this is the
    /// [`Self::Diagonal`] variant.
    pub fn as_diagonal(&self) -> Option<&Array2<Complex<f64>>> {
        match self {
            Hybridization::Diagonal(h) => Some(h),
            Hybridization::Full(_) => None,
        }
    }

    /// Returns a reference to the full-matrix array, if this is the
    /// [`Self::Full`] variant.
    pub fn as_full(&self) -> Option<&Array3<Complex<f64>>> {
        match self {
            Hybridization::Diagonal(_) => None,
            Hybridization::Full(h) => Some(h),
        }
    }
}

/// Returns hybridization functions and the associated energy mesh, read from
/// RSPt-generated files.
///
/// Can read and return diagonal and off-diagonal hybridization functions.
/// When reading off-diagonal functions, the first occurrence of the mask
/// marker in the out-file is assumed to refer to the localised orbitals of
/// interest.
///
/// # Arguments
///
/// * `params` - The control parameters for the read.
///
/// # Returns
///
/// A `Result` containing the energy mesh in eV and the reconstructed
/// hybridization functions.
pub fn hyb(params: &HybParams) -> Result<(Array1<f64>, Hybridization)> {
    let nc = if params.spinpol {
        2 * params.norb
    } else {
        params.norb
    };
    let (w, h_diagonal) = read_diagonal(&params.file_re, &params.file_im, nc)?;
    let nw = w.len();
    match (&params.file_re_off, &params.file_im_off, &params.outfile) {
        (None, None, None) => {
            if params.return_as_full_matrix {
                let mut h = Array3::<Complex<f64>>::zeros((nc, nc, nw));
                for i in 0..nc {
                    h.slice_mut(s![i, i, ..]).assign(&h_diagonal.row(i));
                }
                Ok((w, Hybridization::Full(h)))
            } else {
                Ok((w, Hybridization::Diagonal(h_diagonal)))
            }
        }
        (Some(file_re_off), Some(file_im_off), Some(outfile)) => {
            let re_off = read_table(file_re_off)?;
            let im_off = read_table(file_im_off)?;
            check_same_shape(&re_off, file_re_off, &im_off, file_im_off)?;
            if re_off.nrows() != nw {
                return Err(RsptError::ShapeMismatch {
                    path: file_re_off.clone(),
                    message: format!(
                        "off-diagonal table has {} rows but the energy mesh has {nw} points",
                        re_off.nrows()
                    ),
                });
            }
            let mask = off_diagonal_mask(outfile, params.norb)?;
            // The first norb × norb block suffices when the two spin
            // channels are equivalent.
            let mask = if params.spinpol {
                mask
            } else {
                mask.slice(s![..nc, ..nc]).to_owned()
            };
            let mut h = Array3::<Complex<f64>>::zeros((nc, nc, nw));
            for i in 0..nc {
                h.slice_mut(s![i, i, ..]).assign(&h_diagonal.row(i));
            }
            // Column-major over the mask, matching the order in which RSPt
            // prints the off-diagonal columns. Accumulation rather than
            // assignment keeps any already-set diagonal entry intact.
            let mut n = 0;
            for (j, i) in iproduct!(0..nc, 0..nc) {
                if mask[(i, j)] {
                    if n + 1 >= re_off.ncols() {
                        return Err(RsptError::ShapeMismatch {
                            path: file_re_off.clone(),
                            message: format!(
                                "off-diagonal table has {} data columns but the mask selects more",
                                re_off.ncols() - 1
                            ),
                        });
                    }
                    for k in 0..nw {
                        h[(i, j, k)] +=
                            EV * Complex::new(re_off[(k, n + 1)], im_off[(k, n + 1)]);
                    }
                    n += 1;
                }
            }
            log::debug!("Filled {n} off-diagonal hybridization functions.");
            Ok((w, Hybridization::Full(h)))
        }
        _ => Err(RsptError::WrongInputParameters(
            "file_re_off, file_im_off and outfile must be supplied together".to_string(),
        )),
    }
}

/// Reads a pair of real/imaginary diagonal tables and returns the energy mesh
/// in eV together with the complex diagonal functions, one row per
/// spin-orbital.
///
/// The tables hold the mesh in column 0 and the per-spin-orbital values in
/// columns 4 onwards, all in Rydberg.
pub(crate) fn read_diagonal(
    file_re: &Path,
    file_im: &Path,
    nc: usize,
) -> Result<(Array1<f64>, Array2<Complex<f64>>)> {
    let re = read_table(file_re)?;
    let im = read_table(file_im)?;
    check_same_shape(&re, file_re, &im, file_im)?;
    if re.ncols() < 4 + nc {
        return Err(RsptError::ShapeMismatch {
            path: file_re.to_path_buf(),
            message: format!(
                "table has {} columns but {} spin-orbitals require at least {}",
                re.ncols(),
                nc,
                4 + nc
            ),
        });
    }
    let w = re.column(0).mapv(|x| EV * x);
    let nw = w.len();
    let mut diagonal = Array2::<Complex<f64>>::zeros((nc, nw));
    for i in 0..nc {
        for k in 0..nw {
            diagonal[(i, k)] = EV * Complex::new(re[(k, 4 + i)], im[(k, 4 + i)]);
        }
    }
    Ok((w, diagonal))
}

/// Verifies that the real and imaginary tables of a real/imaginary file pair
/// have identical shapes.
pub(crate) fn check_same_shape(
    re: &Array2<f64>,
    file_re: &Path,
    im: &Array2<f64>,
    file_im: &Path,
) -> Result<()> {
    if re.dim() != im.dim() {
        return Err(RsptError::ShapeMismatch {
            path: file_im.to_path_buf(),
            message: format!(
                "shape {:?} differs from shape {:?} of `{}`",
                im.dim(),
                re.dim(),
                file_re.display()
            ),
        });
    }
    Ok(())
}
