//! Camera framing
//!
//! Derives a viewpoint that keeps a set of scene contents fully visible:
//! merge the per-object bounding boxes, take the weighted centroid as the
//! look-at target, back the camera away far enough for the configured field
//! of view, and place it along a view direction given either explicitly or
//! by spherical angles.

use crate::bounds::Aabb;
use crate::error::{Error, Result};
use crate::mesh::DIMENSION_WEIGHT_FRACTION;
use crate::point::{normalized, Point3d, Vector3d};
use crate::stats::WeightedCenter;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Framing parameters with optional overrides
///
/// Every override that is left `None` is derived from the scene contents;
/// everything else is taken verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view in radians
    pub fov: f64,
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
    /// World-up vector passed through to the pose
    pub up: Vector3d,
    /// Polar angle of the derived view direction, radians from +z
    pub theta: f64,
    /// Azimuthal angle of the derived view direction, radians from +x
    pub phi: f64,
    /// Explicit look-at target, skipping the weighted centroid
    pub target: Option<Point3d>,
    /// Explicit camera position, skipping distance and direction derivation
    pub position: Option<Point3d>,
    /// Explicit view direction from target to camera; auto-normalized
    pub direction: Option<Vector3d>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: PI / 8.0,
            near: 0.1,
            far: 1000.0,
            up: Vector3d::new(0.0, 0.0, 1.0),
            theta: 2.0 * PI / 5.0,
            phi: -PI / 10.0,
            target: None,
            position: None,
            direction: None,
        }
    }
}

/// A finished camera pose, consumed verbatim by the renderer
///
/// A plain record with no further behavior; units follow whatever coherent
/// world scale the caller used for the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Point3d,
    pub target: Point3d,
    pub up: Vector3d,
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

/// The unit view direction for spherical angles `(theta, phi)`
///
/// `theta` is measured from the +z axis, `phi` from the +x axis in the
/// xy plane.
pub fn view_direction(theta: f64, phi: f64) -> Vector3d {
    Vector3d::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

impl CameraConfig {
    /// Derive a pose from already-aggregated scene statistics
    ///
    /// `bounds` is the merged bounding box of everything in view and
    /// `centroid` the summed weighted-center pair of all contents. The
    /// camera distance follows the law of sines against the field-of-view
    /// half-angle: `distance = diagonal / sin(fov / 2)`. A scene with zero
    /// total weight targets the box center; a scene with zero extent is
    /// viewed from unit distance.
    pub fn pose_for(&self, bounds: &Aabb, centroid: &WeightedCenter) -> Result<CameraPose> {
        let target = match self.target {
            Some(target) => target,
            None => centroid.resolve().unwrap_or_else(|| bounds.center()),
        };

        let position = match self.position {
            Some(position) => position,
            None => {
                let max_width = bounds.diagonal();
                let distance = if max_width > 0.0 {
                    max_width / (self.fov / 2.0).sin()
                } else {
                    1.0
                };
                let direction = match self.direction {
                    Some(direction) => normalized(&direction)?,
                    None => view_direction(self.theta, self.phi),
                };
                target + distance * direction
            }
        };

        Ok(CameraPose {
            position,
            target,
            up: self.up,
            fov: self.fov,
            near: self.near,
            far: self.far,
        })
    }

    /// Frame a collection of meshes
    ///
    /// Merges bounding boxes, sums each mesh's combined statistics with
    /// `dw` taken from the global diagonal, and derives the pose. Fails
    /// with [`Error::DegenerateInput`] when no mesh has any vertex.
    pub fn frame<'a, I>(&self, meshes: I) -> Result<CameraPose>
    where
        I: IntoIterator<Item = &'a crate::mesh::IndexedMesh>,
        I::IntoIter: Clone,
    {
        let meshes = meshes.into_iter();
        let bounds = meshes
            .clone()
            .filter_map(|m| m.bounding_box())
            .reduce(|a, b| a.merged(&b))
            .ok_or(Error::DegenerateInput("cannot frame an empty scene"))?;

        let dw = DIMENSION_WEIGHT_FRACTION * bounds.diagonal();
        let mut centroid = WeightedCenter::zero();
        for mesh in meshes {
            centroid += mesh.combined_stats(dw);
        }
        self.pose_for(&bounds, &centroid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::IndexedMesh;
    use approx::assert_relative_eq;

    #[test]
    fn view_direction_is_unit_length() {
        for (theta, phi) in [(0.0, 0.0), (1.0, 2.0), (2.0 * PI / 5.0, -PI / 10.0)] {
            assert_relative_eq!(view_direction(theta, phi).norm(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(
            view_direction(0.0, 0.0),
            Vector3d::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = CameraConfig::default();
        assert_eq!(config.fov, PI / 8.0);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.far, 1000.0);
        assert_eq!(config.up, Vector3d::new(0.0, 0.0, 1.0));
        assert_eq!(config.theta, 2.0 * PI / 5.0);
        assert_eq!(config.phi, -PI / 10.0);
    }

    #[test]
    fn framing_an_empty_scene_fails() {
        let config = CameraConfig::default();
        let no_meshes: [IndexedMesh; 0] = [];
        assert_eq!(
            config.frame(&no_meshes).unwrap_err(),
            Error::DegenerateInput("cannot frame an empty scene")
        );
    }

    #[test]
    fn explicit_overrides_pass_through() {
        let config = CameraConfig {
            target: Some(Point3d::new(1.0, 2.0, 3.0)),
            position: Some(Point3d::new(10.0, 0.0, 0.0)),
            ..Default::default()
        };
        let mesh = IndexedMesh::point_cloud(vec![Point3d::origin()]);
        let pose = config.frame(&[mesh]).unwrap();
        assert_eq!(pose.target, Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(pose.position, Point3d::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn explicit_direction_is_normalized() {
        let config = CameraConfig {
            direction: Some(Vector3d::new(0.0, 0.0, 4.0)),
            ..Default::default()
        };
        let mesh = IndexedMesh::polyline(
            vec![Point3d::new(0.0, 0.0, 0.0), Point3d::new(1.0, 0.0, 0.0)],
            false,
        )
        .unwrap();
        let pose = config.frame(&[mesh]).unwrap();
        let expected_distance = 1.0 / (config.fov / 2.0).sin();
        assert_relative_eq!(
            pose.position,
            Point3d::new(0.5, 0.0, expected_distance),
            epsilon = 1e-12
        );
    }

    #[test]
    fn zero_direction_override_fails() {
        let config = CameraConfig {
            direction: Some(Vector3d::zeros()),
            ..Default::default()
        };
        let mesh = IndexedMesh::point_cloud(vec![Point3d::origin(), Point3d::new(1.0, 0.0, 0.0)]);
        assert!(matches!(
            config.frame(&[mesh]),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn single_point_scene_uses_unit_distance() {
        let config = CameraConfig::default();
        let mesh = IndexedMesh::point_cloud(vec![Point3d::new(1.0, 1.0, 1.0)]);
        let pose = config.frame(&[mesh]).unwrap();
        assert_eq!(pose.target, Point3d::new(1.0, 1.0, 1.0));
        assert_relative_eq!((pose.position - pose.target).norm(), 1.0, epsilon = 1e-12);
    }
}
