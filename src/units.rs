//! Unit-conversion constants for RSPt-generated data.

/// One Rydberg expressed in electron-volts.
///
/// RSPt writes all energies in Rydberg. Every energy mesh read from file is
/// multiplied by this constant, while PDOS weights (states per energy) are
/// divided by it.
pub const EV: f64 = 13.605_698_066;
