//! Scene assembly and the renderer boundary
//!
//! A [`Scene`] is a short-lived bag of styled meshes and text labels. The
//! core's entire obligation to the outside world is to hand a renderer the
//! scene contents plus a [`CameraPose`](crate::camera::CameraPose); whatever
//! the renderer produces is opaque here.

use crate::bounds::Aabb;
use crate::camera::{CameraConfig, CameraPose};
use crate::error::{Error, Result};
use crate::mesh::{IndexedMesh, DIMENSION_WEIGHT_FRACTION};
use crate::point::Point3d;
use crate::stats::WeightedCenter;
use crate::style::TextStyle;
use serde::{Deserialize, Serialize};

/// A text label anchored at a world position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub position: Point3d,
    pub text: String,
    pub style: TextStyle,
}

impl TextLabel {
    /// Create a label with default styling
    pub fn new(position: Point3d, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Centroid statistics for the label, weight 1 at its anchor
    pub fn stats(&self) -> WeightedCenter {
        WeightedCenter::of(self.position, 1.0)
    }
}

/// A collection of renderable contents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub meshes: Vec<IndexedMesh>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh to the scene
    pub fn push_mesh(&mut self, mesh: IndexedMesh) -> &mut Self {
        self.meshes.push(mesh);
        self
    }

    /// Add a text label to the scene
    pub fn push_label(&mut self, label: TextLabel) -> &mut Self {
        self.labels.push(label);
        self
    }

    /// Check if the scene has nothing with a position
    pub fn is_empty(&self) -> bool {
        self.meshes.iter().all(|m| m.is_empty()) && self.labels.is_empty()
    }

    /// The merged bounding box of every mesh and label, `None` for an
    /// empty scene
    pub fn bounding_box(&self) -> Option<Aabb> {
        let mut boxes = self
            .meshes
            .iter()
            .filter_map(|m| m.bounding_box())
            .chain(
                self.labels
                    .iter()
                    .map(|l| Aabb::new(l.position, l.position)),
            );
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.merged(&b)))
    }

    /// Derive the camera pose framing the whole scene
    ///
    /// Labels weigh like points: their unit weights are rescaled by `dw²`,
    /// with `dw` a 5% fraction of the global bounding-box diagonal. Fails
    /// with [`Error::DegenerateInput`] on an empty scene.
    pub fn frame(&self, config: &CameraConfig) -> Result<CameraPose> {
        let bounds = self
            .bounding_box()
            .ok_or(Error::DegenerateInput("cannot frame an empty scene"))?;

        let dw = DIMENSION_WEIGHT_FRACTION * bounds.diagonal();
        let mut centroid = WeightedCenter::zero();
        for mesh in &self.meshes {
            centroid += mesh.combined_stats(dw);
        }
        for label in &self.labels {
            centroid += label.stats().scaled(dw * dw);
        }
        config.pose_for(&bounds, &centroid)
    }
}

/// The external rendering collaborator
///
/// The core hands over finished geometry and a camera pose; it never parses
/// or validates what comes back, so the output type is entirely the
/// implementor's business.
pub trait Renderer {
    type Output;

    fn render(&mut self, scene: &Scene, camera: &CameraPose) -> Self::Output;
}
