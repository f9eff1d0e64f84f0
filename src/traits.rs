//! Core traits for scenegeom

use crate::bounds::Aabb;
use crate::mesh::IndexedMesh;
use crate::point::Point3d;
use crate::scene::{Scene, TextLabel};
use crate::transform::Transform3D;

/// Trait for objects occupying a region of space
pub trait Drawable {
    /// Get the bounding box of the object, `None` when it has no vertices
    fn bounding_box(&self) -> Option<Aabb>;

    /// Get the center of the object's bounding box
    fn center(&self) -> Option<Point3d> {
        self.bounding_box().map(|b| b.center())
    }
}

/// Trait for objects that can be transformed
pub trait Transformable {
    /// Apply a transformation to the object
    fn transform(&mut self, transform: &Transform3D);
}

impl Drawable for IndexedMesh {
    fn bounding_box(&self) -> Option<Aabb> {
        IndexedMesh::bounding_box(self)
    }
}

impl Drawable for TextLabel {
    fn bounding_box(&self) -> Option<Aabb> {
        Some(Aabb::new(self.position, self.position))
    }
}

impl Drawable for Scene {
    fn bounding_box(&self) -> Option<Aabb> {
        Scene::bounding_box(self)
    }
}

impl Transformable for IndexedMesh {
    fn transform(&mut self, transform: &Transform3D) {
        IndexedMesh::transform(self, transform);
    }
}

impl Transformable for TextLabel {
    fn transform(&mut self, transform: &Transform3D) {
        self.position = transform.transform_point(&self.position);
    }
}

impl Transformable for Scene {
    fn transform(&mut self, transform: &Transform3D) {
        for mesh in &mut self.meshes {
            mesh.transform(transform);
        }
        for label in &mut self.labels {
            Transformable::transform(label, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Vector3d;
    use approx::assert_relative_eq;

    #[test]
    fn transforming_a_mesh_moves_its_bounding_box() {
        let mut mesh = IndexedMesh::triangle(
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
        );
        mesh.transform(&Transform3D::translation(Vector3d::new(0.0, 0.0, 2.0)));
        let aabb = Drawable::bounding_box(&mesh).unwrap();
        assert_eq!(aabb.min.z, 2.0);
        assert_eq!(aabb.max.z, 2.0);
        // Topology is untouched.
        assert_eq!(mesh.faces(), &[[0, 1, 2]]);
    }

    #[test]
    fn scene_transform_reaches_labels() {
        let mut scene = Scene::new();
        scene.push_label(TextLabel::new(Point3d::new(1.0, 0.0, 0.0), "a"));
        Transformable::transform(
            &mut scene,
            &Transform3D::rotation_z(std::f64::consts::FRAC_PI_2),
        );
        assert_relative_eq!(
            scene.labels[0].position,
            Point3d::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn center_is_the_box_center() {
        let mesh = IndexedMesh::point_cloud(vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(2.0, 4.0, 6.0),
        ]);
        assert_eq!(mesh.center(), Some(Point3d::new(1.0, 2.0, 3.0)));
    }
}
