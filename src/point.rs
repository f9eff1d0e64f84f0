//! Point and vector types and related functionality
//!
//! All geometry in this crate is double precision. The algebraic operators
//! themselves (negation, addition, scalar broadcast via `add_scalar`, scalar
//! multiply/divide, `dot`, `cross`, `norm`) come straight from nalgebra;
//! this module pins down the type aliases and the zero-length normalization
//! policy.

use crate::error::{Error, Result};
use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Returns the unit vector pointing in the direction of `v`.
///
/// Fails with [`Error::DegenerateInput`] when the magnitude of `v` is zero;
/// the zero vector is never silently returned.
pub fn normalized(v: &Vector3d) -> Result<Vector3d> {
    v.try_normalize(0.0)
        .ok_or(Error::DegenerateInput("cannot normalize a zero vector"))
}

/// Normalizes `v` in place, returning its original magnitude.
///
/// The only in-place operation in the crate's vector API; everything else
/// returns a fresh value. Fails with [`Error::DegenerateInput`] on a zero
/// vector, leaving `v` untouched.
pub fn normalize_in_place(v: &mut Vector3d) -> Result<f64> {
    let magnitude = v.norm();
    if magnitude == 0.0 {
        return Err(Error::DegenerateInput("cannot normalize a zero vector"));
    }
    *v /= magnitude;
    Ok(magnitude)
}
