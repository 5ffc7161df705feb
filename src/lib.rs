//! # rspt2spectra
//!
//! Routines for reconstructing spectral quantities from output files
//! generated by the [RSPt](http://fplmto-rspt.org) electronic-structure
//! package:
//! - hybridization functions, diagonal and off-diagonal, as complex-valued
//!   matrices over an energy mesh,
//! - dynamic self-energies (diagonal part; the off-diagonal reconstruction is
//!   incomplete upstream and reported as such),
//! - projected densities of states (PDOS).
//!
//! The reconstructed quantities feed downstream many-body impurity-model
//! construction. This crate only decodes RSPt's tabular text formats and
//! reassembles flat column data into structured arrays; it performs no
//! simulation, basis rotation, or energy-window fitting.
//!
//! All energies read from disk are in Rydberg and are converted to
//! electron-volts via [`units::EV`].

pub mod error;
pub mod io;
pub mod parameters;
pub mod rspt;
pub mod units;
