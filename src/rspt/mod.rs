//! Readers for RSPt-generated spectral data.
//!
//! Each reader is a stateless transformation of file contents into in-memory
//! arrays: no retries, no partial results. Any parse or shape mismatch
//! surfaces as an [`RsptError`](crate::error::RsptError) for the caller to
//! act on.

pub mod hybridization;
pub mod mask;
pub mod pdos;
pub mod self_energy;
