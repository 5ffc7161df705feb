use approx::assert_relative_eq;

use crate::error::RsptError;
use crate::rspt::pdos::pdos;
use crate::units::EV;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_pdos() {
    let (w, p) = pdos(format!("{ROOT}/tests/rspt_files/pdos"), 2, false).unwrap();
    assert_eq!(w.len(), 3);
    assert_relative_eq!(w[0], -EV);
    assert_relative_eq!(w[2], EV);
    assert_eq!(p.dim(), (2, 3));
    // Densities start at column 2 and are converted to states per eV.
    assert_relative_eq!(p[(0, 0)], 0.5 / EV);
    assert_relative_eq!(p[(0, 1)], 0.7 / EV);
    assert_relative_eq!(p[(1, 0)], 0.6 / EV);
    assert_relative_eq!(p[(1, 2)], 1.0 / EV);
}

#[test]
fn test_pdos_spinpol() {
    let (w, p) = pdos(format!("{ROOT}/tests/rspt_files/pdos-sp"), 1, true).unwrap();
    assert_eq!(w.len(), 2);
    assert_eq!(p.dim(), (2, 2));
    // Densities start at column 7 for spin-polarised calculations.
    assert_relative_eq!(p[(0, 0)], 0.5 / EV);
    assert_relative_eq!(p[(0, 1)], 0.7 / EV);
    assert_relative_eq!(p[(1, 0)], 0.6 / EV);
    assert_relative_eq!(p[(1, 1)], 0.8 / EV);
}

#[test]
fn test_pdos_too_few_columns() {
    let err = pdos(format!("{ROOT}/tests/rspt_files/pdos"), 2, true).unwrap_err();
    assert!(matches!(err, RsptError::ShapeMismatch { .. }));
}
