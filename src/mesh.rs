//! Indexed mesh data structures and derived statistics
//!
//! An [`IndexedMesh`] owns a vertex pool plus three independent index
//! collections into it: isolated points, line-segment edges, and triangle
//! faces. A vertex's position in the pool is its index and stays stable for
//! the mesh's lifetime. Every index is validated against the pool at
//! construction time, so the collections can never dangle.
//!
//! Specialized shapes are usages of the same representation, not separate
//! types: a point cloud populates only `points`, a polyline only `edges`,
//! a triangle set or polygon only `faces`.

use crate::bounds::Aabb;
use crate::error::{Error, Result};
use crate::point::Point3d;
use crate::stats::WeightedCenter;
use crate::style::MeshStyle;
use serde::{Deserialize, Serialize};

/// Fraction of a bounding-box diagonal used as the dimensional weight `dw`
///
/// Points and lines have no natural area; their native weights (count and
/// length) are rescaled by `dw²` and `dw` respectively so that a point or
/// line contributes to a combined centroid comparably to a face of similar
/// visual extent.
pub const DIMENSION_WEIGHT_FRACTION: f64 = 0.05;

/// An indexed mesh: a vertex pool with point, edge, and face index lists
///
/// The index collections are private so the in-range invariant established
/// at construction holds for the mesh's lifetime; read them through
/// [`points`](Self::points), [`edges`](Self::edges), and
/// [`faces`](Self::faces). After construction a mesh is treated as
/// read-only input to statistics and rendering; `Clone` is a full value
/// copy, never aliased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedMesh {
    vertices: Vec<Point3d>,
    points: Vec<usize>,
    edges: Vec<[usize; 2]>,
    faces: Vec<[usize; 3]>,
    /// Rendering options; never consulted by any geometric query
    pub style: MeshStyle,
}

impl IndexedMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            points: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            style: MeshStyle::default(),
        }
    }

    /// Create a mesh from complete vertex and index lists
    ///
    /// Fails with [`Error::IndexOutOfRange`] if any point, edge, or face
    /// references a vertex index not in the pool.
    pub fn from_parts(
        vertices: Vec<Point3d>,
        points: Vec<usize>,
        edges: Vec<[usize; 2]>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self> {
        let len = vertices.len();
        for &index in points.iter().chain(edges.iter().flatten()).chain(faces.iter().flatten()) {
            check_index(index, len)?;
        }
        Ok(Self {
            vertices,
            points,
            edges,
            faces,
            style: MeshStyle::default(),
        })
    }

    /// Create a mesh rendering every position as an isolated point glyph
    pub fn point_cloud(positions: Vec<Point3d>) -> Self {
        let points = (0..positions.len()).collect();
        Self {
            vertices: positions,
            points,
            edges: Vec::new(),
            faces: Vec::new(),
            style: MeshStyle::default(),
        }
    }

    /// Create a mesh whose edges chain the given positions into a polyline
    ///
    /// An open polyline needs at least 2 vertices ([`Error::InvalidArity`]
    /// otherwise). A closed one gets an extra edge from the last vertex back
    /// to the first and needs at least 3 distinct vertices
    /// ([`Error::DegenerateInput`] otherwise).
    pub fn polyline(positions: Vec<Point3d>, closed: bool) -> Result<Self> {
        if positions.len() < 2 {
            return Err(Error::InvalidArity {
                context: "IndexedMesh::polyline",
                expected: "at least 2 vertices",
                got: positions.len(),
            });
        }
        if closed {
            let mut distinct: Vec<&Point3d> = Vec::new();
            for p in &positions {
                if !distinct.contains(&p) {
                    distinct.push(p);
                }
            }
            if distinct.len() < 3 {
                return Err(Error::DegenerateInput(
                    "closed polyline needs at least 3 distinct vertices",
                ));
            }
        }
        let mut edges: Vec<[usize; 2]> = (0..positions.len() - 1).map(|i| [i, i + 1]).collect();
        if closed {
            edges.push([positions.len() - 1, 0]);
        }
        Ok(Self {
            vertices: positions,
            points: Vec::new(),
            edges,
            faces: Vec::new(),
            style: MeshStyle::default(),
        })
    }

    /// Create a mesh holding a single triangle face
    pub fn triangle(a: Point3d, b: Point3d, c: Point3d) -> Self {
        Self {
            vertices: vec![a, b, c],
            points: Vec::new(),
            edges: Vec::new(),
            faces: vec![[0, 1, 2]],
            style: MeshStyle::default(),
        }
    }

    /// Create a mesh from vertices and triangle faces only
    pub fn triangle_set(vertices: Vec<Point3d>, faces: Vec<[usize; 3]>) -> Result<Self> {
        Self::from_parts(vertices, Vec::new(), Vec::new(), faces)
    }

    /// Create a filled polygon from a ring of at least 3 vertices
    ///
    /// The interior is fan-triangulated from the first vertex; the ring is
    /// assumed coplanar and convex.
    pub fn polygon(ring: Vec<Point3d>) -> Result<Self> {
        if ring.len() < 3 {
            return Err(Error::InvalidArity {
                context: "IndexedMesh::polygon",
                expected: "at least 3 vertices",
                got: ring.len(),
            });
        }
        let faces = (1..ring.len() - 1).map(|i| [0, i, i + 1]).collect();
        Ok(Self {
            vertices: ring,
            points: Vec::new(),
            edges: Vec::new(),
            faces,
            style: MeshStyle::default(),
        })
    }

    /// Append a vertex to the pool, returning its index
    pub fn add_vertex(&mut self, vertex: Point3d) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Append an isolated point referencing an existing vertex
    pub fn add_point(&mut self, index: usize) -> Result<()> {
        check_index(index, self.vertices.len())?;
        self.points.push(index);
        Ok(())
    }

    /// Append an edge between two existing vertices
    pub fn add_edge(&mut self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.vertices.len())?;
        check_index(j, self.vertices.len())?;
        self.edges.push([i, j]);
        Ok(())
    }

    /// Append a triangle face over three existing vertices
    pub fn add_face(&mut self, i: usize, j: usize, k: usize) -> Result<()> {
        check_index(i, self.vertices.len())?;
        check_index(j, self.vertices.len())?;
        check_index(k, self.vertices.len())?;
        self.faces.push([i, j, k]);
        Ok(())
    }

    /// The vertex pool
    pub fn vertices(&self) -> &[Point3d] {
        &self.vertices
    }

    /// Indices rendered as isolated points
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Index pairs rendered as line segments
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Index triples rendered as triangles
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The component-wise bounding box of the vertex pool, `None` when the
    /// mesh is empty
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// The arithmetic mean of the three vertices of face `face`
    pub fn face_center(&self, face: usize) -> Point3d {
        let [i, j, k] = self.faces[face];
        let sum = self.vertices[i].coords + self.vertices[j].coords + self.vertices[k].coords;
        Point3d::from(sum / 3.0)
    }

    /// The area of face `face`, half the cross product of two edge vectors
    pub fn face_area(&self, face: usize) -> f64 {
        let [i, j, k] = self.faces[face];
        let e1 = self.vertices[j] - self.vertices[i];
        let e2 = self.vertices[k] - self.vertices[i];
        0.5 * e1.cross(&e2).norm()
    }

    /// The midpoint of edge `edge`
    pub fn edge_midpoint(&self, edge: usize) -> Point3d {
        let [i, j] = self.edges[edge];
        nalgebra::center(&self.vertices[i], &self.vertices[j])
    }

    /// The length of edge `edge`
    pub fn edge_length(&self, edge: usize) -> f64 {
        let [i, j] = self.edges[edge];
        (self.vertices[j] - self.vertices[i]).norm()
    }

    /// Centroid statistics over the point list, weight 1 per point
    pub fn point_stats(&self) -> WeightedCenter {
        let mut acc = WeightedCenter::zero();
        for &i in &self.points {
            acc += WeightedCenter::of(self.vertices[i], 1.0);
        }
        acc
    }

    /// Centroid statistics over the edge list, weighted by length
    pub fn edge_stats(&self) -> WeightedCenter {
        let mut acc = WeightedCenter::zero();
        for edge in 0..self.edges.len() {
            acc += WeightedCenter::of(self.edge_midpoint(edge), self.edge_length(edge));
        }
        acc
    }

    /// Centroid statistics over the face list, weighted by area
    pub fn face_stats(&self) -> WeightedCenter {
        let mut acc = WeightedCenter::zero();
        for face in 0..self.faces.len() {
            acc += WeightedCenter::of(self.face_center(face), self.face_area(face));
        }
        acc
    }

    /// Combined statistics over all primitive kinds, normalized by `dw`
    ///
    /// `dw` is a reference length; point contributions are rescaled by
    /// `dw²` and edge contributions by `dw` so that all three kinds carry
    /// area-like weights.
    pub fn combined_stats(&self, dw: f64) -> WeightedCenter {
        let mut acc = self.point_stats().scaled(dw * dw);
        acc += self.edge_stats().scaled(dw);
        acc += self.face_stats();
        acc
    }

    /// Combined statistics with `dw` taken from the mesh's own bounding box
    /// diagonal
    pub fn mesh_stats(&self) -> WeightedCenter {
        let diagonal = self.bounding_box().map_or(0.0, |b| b.diagonal());
        self.combined_stats(DIMENSION_WEIGHT_FRACTION * diagonal)
    }

    /// Apply a transformation to every vertex in the pool
    ///
    /// Indices are untouched; the topology is unchanged.
    pub fn transform(&mut self, transform: &crate::transform::Transform3D) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
    }
}

impl Default for IndexedMesh {
    fn default() -> Self {
        Self::new()
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}
