use crate::bounding_volume::Aabb;
use crate::math::{HomogeneousMatrix, Isometry, Point, Real, TexCoord, Vector};
use crate::shape::Triangle;
use core::fmt;

/// The minimum number of vertices each task must process for
/// [`TriangleMesh::bounding_box_parallel`] to actually run in parallel.
#[cfg(feature = "parallel")]
pub const MIN_VERTICES_PER_TASK: usize = 4096;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleMeshError {
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-range vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
    /// The mesh would contain more vertices than what a `u32` index can address.
    #[error("a triangle mesh cannot contain more than u32::MAX vertices.")]
    TooManyVertices,
}

fn checked_num_vertices(num_vertices: usize) -> Result<u32, TriangleMeshError> {
    u32::try_from(num_vertices).map_err(|_| TriangleMeshError::TooManyVertices)
}

/// A vertex of a [`TriangleMesh`].
///
/// Vertices have no identity beyond their position in the vertex buffer: two vertices
/// with identical attributes are never merged.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "bytemuck",
    derive(bytemuck::Pod, bytemuck::Zeroable)
)]
#[repr(C)]
pub struct Vertex {
    /// The vertex position.
    pub position: Point<Real>,
    /// The vertex unit normal.
    pub normal: Vector<Real>,
    /// The vertex texture coordinates.
    pub tex_coord: TexCoord<Real>,
}

static_assertions::assert_eq_size!(Vertex, [Real; 8]);

impl Vertex {
    /// Creates a new vertex.
    #[inline]
    pub fn new(position: Point<Real>, normal: Vector<Real>, tex_coord: TexCoord<Real>) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// A triangle mesh with per-vertex normals and texture coordinates.
///
/// This is the output of every mesh generator and the input and output of the mesh
/// clipper. The buffers only grow during generation: vertices and triangles are appended
/// with [`TriangleMesh::add_vertex`] and [`TriangleMesh::add_triangle`], and the only way
/// to remove them is [`TriangleMesh::clear`].
///
/// Triangles are counter-clockwise when seen from the side their normal points to.
#[derive(Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    vertices: Vec<Vertex>,
    indices: Vec<[u32; 3]>,
}

impl fmt::Debug for TriangleMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TriangleMesh {{ {} vertices, {} triangles }}",
            self.vertices.len(),
            self.indices.len()
        )
    }
}

impl TriangleMesh {
    /// Creates a new empty triangle mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty triangle mesh with pre-allocated buffers.
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            indices: Vec::with_capacity(num_triangles),
        }
    }

    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Fails if any index is out of bounds.
    pub fn from_buffers(
        vertices: Vec<Vertex>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriangleMeshError> {
        let result = Self { vertices, indices };
        result.validate()?;
        Ok(result)
    }

    /// Checks that every triangle of this mesh references existing vertices.
    pub fn validate(&self) -> Result<(), TriangleMeshError> {
        let num_vertices = checked_num_vertices(self.vertices.len())?;

        for (triangle, idx) in self.indices.iter().enumerate() {
            if let Some(index) = idx.iter().copied().find(|i| *i >= num_vertices) {
                return Err(TriangleMeshError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    index,
                    num_vertices,
                });
            }
        }

        Ok(())
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn add_vertex(
        &mut self,
        position: Point<Real>,
        normal: Vector<Real>,
        tex_coord: TexCoord<Real>,
    ) -> u32 {
        self.push_vertex(Vertex::new(position, normal, tex_coord))
    }

    /// Appends an existing vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let id = self.vertices.len() as u32;
        self.vertices.push(vertex);
        id
    }

    /// Appends a triangle and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if any of the three indices doesn’t reference an existing vertex.
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> u32 {
        let num_vertices = self.vertices.len();
        assert!(
            (i0 as usize) < num_vertices && (i1 as usize) < num_vertices && (i2 as usize) < num_vertices,
            "Triangle [{}, {}, {}] is out of bounds of a vertex buffer of length {}.",
            i0,
            i1,
            i2,
            num_vertices
        );
        let id = self.indices.len() as u32;
        self.indices.push([i0, i1, i2]);
        id
    }

    /// Removes every vertex and triangle from this mesh.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Appends a second triangle mesh to this triangle mesh.
    ///
    /// The appended indices are shifted by the number of vertices `self` had before the
    /// call.
    pub fn append(&mut self, rhs: &TriangleMesh) {
        let base_id = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&rhs.vertices);
        self.indices.extend(
            rhs.indices
                .iter()
                .map(|idx| [idx[0] + base_id, idx[1] + base_id, idx[2] + base_id]),
        );
    }

    /// Appends a second triangle mesh to this triangle mesh, failing instead of
    /// overflowing the `u32` index range.
    pub fn append_checked(&mut self, rhs: &TriangleMesh) -> Result<(), TriangleMeshError> {
        let _ = checked_num_vertices(self.vertices.len() + rhs.vertices.len())?;
        self.append(rhs);
        Ok(())
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The mutable vertex buffer of this mesh.
    ///
    /// The number of vertices cannot be changed through this slice, so the index buffer
    /// stays valid.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The `i`-th vertex of this mesh.
    #[inline]
    pub fn vertex(&self, i: u32) -> &Vertex {
        &self.vertices[i as usize]
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize].position,
            self.vertices[idx[1] as usize].position,
            self.vertices[idx[2] as usize].position,
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Is this mesh free of vertices and triangles?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Reverse the orientation of the triangles and normals of this mesh.
    pub fn reverse_winding(&mut self) {
        for idx in &mut self.indices {
            idx.swap(0, 1);
        }

        for vtx in &mut self.vertices {
            vtx.normal = -vtx.normal;
        }
    }

    /// Transforms in-place the vertices and normals of this mesh.
    pub fn transform_vertices(&mut self, transform: &Isometry<Real>) {
        for vtx in &mut self.vertices {
            vtx.position = transform * vtx.position;
            vtx.normal = transform * vtx.normal;
        }
    }

    /// The AABB of the vertex positions of this mesh.
    ///
    /// Returns [`Aabb::new_invalid`] if the mesh has no vertex.
    pub fn bounding_box(&self) -> Aabb {
        crate::bounding_volume::details::local_point_cloud_aabb(
            self.vertices.iter().map(|vtx| vtx.position),
        )
    }

    /// The AABB of the vertex positions of this mesh once transformed by the homogeneous
    /// matrix `m`.
    pub fn bounding_box_transformed(&self, m: &HomogeneousMatrix<Real>) -> Aabb {
        crate::bounding_volume::details::point_cloud_aabb(
            m,
            self.vertices.iter().map(|vtx| &vtx.position),
        )
    }

    /// The AABB of the vertex positions of this mesh, computed by `num_tasks` parallel
    /// tasks.
    ///
    /// The computation is sequential if `num_tasks < 2` or if a task would get fewer
    /// than [`MIN_VERTICES_PER_TASK`] vertices.
    #[cfg(feature = "parallel")]
    pub fn bounding_box_parallel(&self, num_tasks: usize) -> Aabb {
        crate::bounding_volume::details::local_point_cloud_aabb_parallel(
            &self.vertices,
            |vtx| vtx.position,
            num_tasks,
            MIN_VERTICES_PER_TASK,
        )
    }
}
