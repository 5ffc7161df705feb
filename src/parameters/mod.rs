//! Material-specific analysis parameters.
//!
//! The downstream impurity-model construction scripts are steered by a small
//! parameter file placed in the RSPt simulation folder. This module gives
//! that file a serialisable YAML form; none of the readers in
//! [`crate::rspt`] consume it, they keep taking explicit arguments.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::read_yaml;
use crate::units::EV;

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod parameters_tests;

/// An enumerated type representing the method of choice for calculating
/// on-site energies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnSiteEnergyMethod {
    /// Variant considering the non-interacting PDOS and neglecting
    /// off-diagonal elements of RSPt's hybridization function.
    NonInteractingDiagonal,

    /// Variant considering the non-interacting PDOS and including
    /// off-diagonal elements of RSPt's hybridization function.
    NonInteracting,

    /// Variant considering the interacting PDOS and including off-diagonal
    /// elements of RSPt's hybridization function.
    Interacting,
}

impl Default for OnSiteEnergyMethod {
    fn default() -> Self {
        OnSiteEnergyMethod::NonInteractingDiagonal
    }
}

/// A structure containing material-specific analysis parameters which can be
/// serialised into and deserialised from a YAML file placed in the RSPt
/// simulation folder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Boolean indicating if figures are to be produced.
    #[serde(default = "default_true")]
    pub verbose_fig: bool,

    /// Boolean indicating if verbose text output is to be produced.
    #[serde(default = "default_true")]
    pub verbose_text: bool,

    /// Name of the file the non-relativistic non-interacting Hamiltonian
    /// operator is written to.
    #[serde(default = "default_output_filename")]
    pub output_filename: String,

    /// Distance above the real axis, in eV. This has to be the same as the
    /// RSPt value stored in `green.inp`.
    #[serde(default = "default_eim")]
    pub eim: f64,

    /// Tag of the correlated orbitals to study, e.g. `0102010100-obs1`.
    #[serde(default)]
    pub basis_tag: String,

    /// User-defined local basis keyword, e.g. `Irr05`. An empty string if no
    /// projection file is used.
    #[serde(default)]
    pub irr_flag: String,

    /// Boolean indicating if spin-polarised calculations are analysed.
    #[serde(default)]
    pub spinpol: bool,

    /// Boolean indicating if spin-averaged calculations are analysed, in
    /// which case spin-polarisation, if any, enters only through the
    /// hybridization and the self-energy.
    #[serde(default = "default_true")]
    pub spinavg: bool,

    /// Optional bath energies; one row holds the bath energies belonging to
    /// one impurity orbital. Either this or [`Self::wborder`] should be
    /// given.
    #[serde(default)]
    pub eb: Option<Vec<Vec<f64>>>,

    /// Optional energy windows for the bath energies; one row holds the
    /// `[lower, upper]` windows belonging to one impurity orbital.
    #[serde(default)]
    pub wborder: Option<Vec<Vec<[f64; 2]>>>,

    /// Plot energy range. Only used for plotting.
    #[serde(default = "default_xlim")]
    pub xlim: [f64; 2],

    /// Method of choice for calculating on-site energies.
    #[serde(default)]
    pub e_method: OnSiteEnergyMethod,

    /// Boolean indicating if off-diagonal hybridization elements are
    /// available in files.
    #[serde(default)]
    pub off_diag_hyb: bool,

    /// Boolean indicating if the self-energy is available in files.
    #[serde(default)]
    pub self_energy: bool,

    /// Energy interval in which to search for solutions of adjusted on-site
    /// energies.
    #[serde(default = "default_bounds")]
    pub bounds: [f64; 2],

    /// Lower edge of the energy window in which the centre of gravity of the
    /// non-interacting PDOS is calculated.
    #[serde(default = "default_wmin0")]
    pub wmin0: f64,

    /// Upper edge of the energy window in which the centre of gravity of the
    /// non-interacting PDOS is calculated.
    #[serde(default = "default_wmax0")]
    pub wmax0: f64,

    /// Lower edge of the energy window in which the centre of gravity of the
    /// interacting PDOS is calculated.
    #[serde(default = "default_wmin")]
    pub wmin: f64,

    /// Upper edge of the energy window in which the centre of gravity of the
    /// interacting PDOS is calculated.
    #[serde(default = "default_wmax")]
    pub wmax: f64,

    /// Boolean indicating if bath orbitals are expressed in spherical
    /// harmonics rather than kept in the rotated basis.
    #[serde(default = "default_true")]
    pub spherical_bath_basis: bool,

    /// Boolean indicating if the Hamiltonian is also saved in a
    /// Quanty-friendly format.
    #[serde(default = "default_true")]
    pub save2quanty: bool,
}

impl AnalysisParams {
    /// Reads analysis parameters from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the YAML file to be read in.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialised parameters.
    pub fn from_yaml<P: AsRef<Path>>(name: P) -> Result<Self, anyhow::Error> {
        read_yaml(name)
    }
}

impl Default for AnalysisParams {
    fn default() -> Self {
        AnalysisParams {
            verbose_fig: true,
            verbose_text: true,
            output_filename: default_output_filename(),
            eim: default_eim(),
            basis_tag: String::new(),
            irr_flag: String::new(),
            spinpol: false,
            spinavg: true,
            eb: None,
            wborder: None,
            xlim: default_xlim(),
            e_method: OnSiteEnergyMethod::default(),
            off_diag_hyb: false,
            self_energy: false,
            bounds: default_bounds(),
            wmin0: default_wmin0(),
            wmax0: default_wmax0(),
            wmin: default_wmin(),
            wmax: default_wmax(),
            spherical_bath_basis: true,
            save2quanty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output_filename() -> String {
    "h0.pickle".to_string()
}

fn default_eim() -> f64 {
    0.005 * EV
}

fn default_xlim() -> [f64; 2] {
    [-9.0, 4.0]
}

fn default_bounds() -> [f64; 2] {
    [-3.0, 0.5]
}

fn default_wmin0() -> f64 {
    -3.0
}

fn default_wmax0() -> f64 {
    2.0
}

fn default_wmin() -> f64 {
    -8.0
}

fn default_wmax() -> f64 {
    3.0
}
