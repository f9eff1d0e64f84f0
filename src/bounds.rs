//! Axis-aligned bounding boxes

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box given by component-wise minimum and maximum
/// corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3d,
    pub max: Point3d,
}

impl Aabb {
    /// Create a box from explicit corners
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }

    /// Compute the bounding box of a set of points, `None` if the set is
    /// empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3d>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let mut aabb = Self::new(first, first);
        for p in points {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grow the box to contain `point`
    ///
    /// Each axis is accumulated independently; the maximum is a true
    /// per-component maximum on every axis, z included.
    pub fn include(&mut self, point: &Point3d) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);

        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// The smallest box containing both `self` and `other`
    pub fn merged(&self, other: &Aabb) -> Aabb {
        let mut result = *self;
        result.include(&other.min);
        result.include(&other.max);
        result
    }

    /// The center of the box
    pub fn center(&self) -> Point3d {
        nalgebra::center(&self.min, &self.max)
    }

    /// The vector from the minimum to the maximum corner
    pub fn extent(&self) -> Vector3d {
        self.max - self.min
    }

    /// The length of the box diagonal
    pub fn diagonal(&self) -> f64 {
        self.extent().norm()
    }
}
