//! Geometry and camera-framing core for browser-rendered 3D scenes
//!
//! This crate builds short-lived descriptions of 3D scenes — point clouds,
//! polylines, triangle meshes, and text labels — and derives the camera pose
//! that frames them. The actual rendering is delegated to an external
//! collaborator through the [`Renderer`] trait; the core hands it finished
//! geometry plus a [`CameraPose`] and never looks at what comes back.
//!
//! Vector and matrix algebra is provided by `nalgebra` (`f64` throughout);
//! this crate adds validated mesh construction, weighted scene statistics,
//! affine transform factories, and the framing heuristic.

pub mod bounds;
pub mod camera;
pub mod error;
pub mod mesh;
pub mod point;
pub mod scene;
pub mod stats;
pub mod style;
pub mod traits;
pub mod transform;

pub use bounds::*;
pub use camera::*;
pub use error::*;
pub use mesh::*;
pub use point::*;
pub use scene::*;
pub use stats::*;
pub use style::*;
pub use traits::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// Common result type for scenegeom operations
pub type Result<T> = std::result::Result<T, Error>;
