//! Weighted centroid accumulation
//!
//! Aggregate statistics are carried around as the pair
//! `(Σ weight·center, Σ weight)` rather than a finished average, so that
//! contributions from different primitive kinds and different meshes can be
//! merged without re-deriving any geometry. The average is only formed at
//! the very end by [`WeightedCenter::resolve`].

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// A running weighted-centroid accumulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedCenter {
    /// Sum of `weight * center` over all contributions
    pub weighted_sum: Vector3d,
    /// Sum of weights over all contributions
    pub weight: f64,
}

impl WeightedCenter {
    /// An empty accumulator
    pub fn zero() -> Self {
        Self {
            weighted_sum: Vector3d::zeros(),
            weight: 0.0,
        }
    }

    /// A single contribution at `center` with the given weight
    pub fn of(center: Point3d, weight: f64) -> Self {
        Self {
            weighted_sum: center.coords * weight,
            weight,
        }
    }

    /// Rescale both the weighted sum and the total weight by `factor`
    ///
    /// Used by the dimensional-normalization heuristic to bring counts and
    /// lengths onto the same footing as areas.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            weighted_sum: self.weighted_sum * factor,
            weight: self.weight * factor,
        }
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: &WeightedCenter) {
        self.weighted_sum += other.weighted_sum;
        self.weight += other.weight;
    }

    /// The weighted average, `None` when the total weight is zero
    pub fn resolve(&self) -> Option<Point3d> {
        if self.weight == 0.0 {
            None
        } else {
            Some(Point3d::from(self.weighted_sum / self.weight))
        }
    }
}

impl Default for WeightedCenter {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::AddAssign for WeightedCenter {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
