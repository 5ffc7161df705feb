use num_complex::Complex;

use rspt2spectra::error::RsptError;
use rspt2spectra::rspt::hybridization::{hyb, HybParams};
use rspt2spectra::rspt::pdos::pdos;
use rspt2spectra::rspt::self_energy::{self_energy, SelfEnergyParams};
use rspt2spectra::units::EV;

#[test]
fn test_full_hybridization_matrix() {
    let params = HybParams::builder()
        .file_re("tests/rspt_files/real-hyb-sp".into())
        .file_im("tests/rspt_files/imag-hyb-sp".into())
        .norb(1)
        .spinpol(true)
        .file_re_off(Some("tests/rspt_files/real-hyb-off-sp".into()))
        .file_im_off(Some("tests/rspt_files/imag-hyb-off-sp".into()))
        .outfile(Some("tests/rspt_files/out-sp".into()))
        .build()
        .unwrap();
    let (w, h) = hyb(&params).unwrap();
    let h = h.as_full().unwrap();
    assert_eq!(w.len(), 3);
    assert_eq!(h.dim(), (2, 2, 3));
    // Diagonal from the diagonal tables, off-diagonal per the mask in the
    // out-file.
    assert!((h[(0, 0, 1)] - EV * Complex::new(0.30, -0.03)).norm() < 1e-12);
    assert!((h[(1, 0, 2)] - EV * Complex::new(1.1, 0.11)).norm() < 1e-12);
    assert!((h[(0, 1, 1)] - EV * Complex::new(1.0, 0.10)).norm() < 1e-12);
}

#[test]
fn test_self_energy_and_pdos() {
    let sig_params = SelfEnergyParams::builder()
        .file_re("tests/rspt_files/real-sig".into())
        .file_im("tests/rspt_files/imag-sig".into())
        .build()
        .unwrap();
    let (w_sig, sig) = self_energy(&sig_params).unwrap();
    assert_eq!(sig.dim(), (2, w_sig.len()));

    let (w_pdos, p) = pdos("tests/rspt_files/pdos", 2, false).unwrap();
    assert_eq!(p.dim(), (2, w_pdos.len()));
}

#[test]
fn test_error_taxonomy() {
    let partial = HybParams::builder()
        .file_re("tests/rspt_files/real-hyb".into())
        .file_im("tests/rspt_files/imag-hyb".into())
        .norb(2)
        .outfile(Some("tests/rspt_files/out".into()))
        .build()
        .unwrap();
    assert!(matches!(
        hyb(&partial).unwrap_err(),
        RsptError::WrongInputParameters(_)
    ));

    let unimplemented = SelfEnergyParams::builder()
        .file_re("tests/rspt_files/real-sig".into())
        .file_im("tests/rspt_files/imag-sig".into())
        .file_re_off(Some("tests/rspt_files/real-sig".into()))
        .file_im_off(Some("tests/rspt_files/imag-sig".into()))
        .build()
        .unwrap();
    assert!(matches!(
        self_energy(&unimplemented).unwrap_err(),
        RsptError::NotImplemented(_)
    ));
}
