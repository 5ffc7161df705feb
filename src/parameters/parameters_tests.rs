use approx::assert_relative_eq;

use crate::parameters::{AnalysisParams, OnSiteEnergyMethod};
use crate::units::EV;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_parameters_from_yaml() {
    let params = AnalysisParams::from_yaml(format!(
        "{ROOT}/tests/rspt_files/rspt2spectra_parameters.yml"
    ))
    .unwrap();
    assert_eq!(params.basis_tag, "0102010100-obs1");
    assert_eq!(params.irr_flag, "Irr05");
    assert!(!params.spinpol);
    assert!(params.spinavg);
    assert_eq!(params.e_method, OnSiteEnergyMethod::NonInteractingDiagonal);
    let wborder = params.wborder.as_ref().unwrap();
    assert_eq!(wborder.len(), 5);
    assert_eq!(wborder[0].len(), 2);
    assert_relative_eq!(wborder[1][0][0], -8.0);
    assert_relative_eq!(wborder[1][0][1], -4.0);
    assert_eq!(params.xlim, [-9.0, 4.0]);
    assert_eq!(params.bounds, [-3.0, 0.5]);
    // Keys absent from the file fall back to their defaults.
    assert_relative_eq!(params.eim, 0.005 * EV);
    assert_relative_eq!(params.wmin, -8.0);
    assert_relative_eq!(params.wmax, 3.0);
    assert_eq!(params.output_filename, "h0.pickle");
    assert!(params.eb.is_none());
}

#[test]
fn test_parameters_defaults() {
    let params = AnalysisParams::default();
    assert!(params.verbose_fig);
    assert!(params.verbose_text);
    assert!(!params.off_diag_hyb);
    assert!(!params.self_energy);
    assert!(params.spherical_bath_basis);
    assert!(params.save2quanty);
    assert_relative_eq!(params.wmin0, -3.0);
    assert_relative_eq!(params.wmax0, 2.0);
    assert_eq!(params.e_method, OnSiteEnergyMethod::NonInteractingDiagonal);
}
