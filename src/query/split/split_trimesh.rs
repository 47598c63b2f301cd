use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{clip_triangle, TriangleClip};
use crate::shape::{Plane, PointPlaneRelation, TriangleMesh, Vertex};
use crate::utils::{hashmap::HashMap, SortedPair};
use arrayvec::ArrayVec;

impl TriangleMesh {
    /// Clips this mesh by a plane, returning the parts in front of and behind it.
    ///
    /// See [`clip_mesh`] for details.
    pub fn clip(&self, plane: &Plane, epsilon: Real) -> (TriangleMesh, TriangleMesh) {
        let mut front = TriangleMesh::new();
        let mut back = TriangleMesh::new();
        clip_mesh(self, plane, epsilon, &mut front, &mut back);
        (front, back)
    }
}

/// Clips `mesh` by `plane`, writing the part in front of the plane into `front` and the
/// part behind it into `back`.
///
/// Both output meshes are cleared first. Triangles that are not cut are copied to their
/// side, and triangles lying onto the plane go to `front`. Cut triangles are split into
/// convex polygons by [`clip_triangle`] and fan-triangulated. The attributes of the new
/// vertices are interpolated from the original triangle.
///
/// Each original vertex is copied at most once per side, and the points where the plane
/// crosses an edge are shared by all the triangles adjacent to that edge, so a closed
/// mesh yields two halves without cracks.
pub fn clip_mesh(
    mesh: &TriangleMesh,
    plane: &Plane,
    epsilon: Real,
    front: &mut TriangleMesh,
    back: &mut TriangleMesh,
) {
    front.clear();
    back.clear();

    let mut front = ClippedSide::new(front, mesh.num_vertices());
    let mut back = ClippedSide::new(back, mesh.num_vertices());
    let mut num_coplanar = 0;

    for (i, idx) in mesh.indices().iter().enumerate() {
        let triangle = mesh.triangle(i as u32);

        match clip_triangle(&triangle, plane, epsilon) {
            TriangleClip::InFrontOf => {
                if triangle
                    .vertices()
                    .iter()
                    .all(|pt| plane.classify_point(pt, epsilon) == PointPlaneRelation::Onto)
                {
                    num_coplanar += 1;
                }
                front.push_triangle(mesh, idx);
            }
            TriangleClip::Behind => back.push_triangle(mesh, idx),
            TriangleClip::Clipped {
                front: front_poly,
                back: back_poly,
            } => {
                front.push_polygon(mesh, idx, &front_poly);
                back.push_polygon(mesh, idx, &back_poly);
            }
        }
    }

    if num_coplanar > 0 {
        log::debug!(
            "{} triangles lie onto the clipping plane, they were kept in front of it.",
            num_coplanar
        );
    }
}

/// Where a polygon vertex lies on the triangle it was clipped from.
enum PolygonVertex {
    Corner(usize),
    Edge(usize, usize),
    Interior,
}

impl PolygonVertex {
    fn locate(bcoords: &Vector<Real>) -> Self {
        let nonzero: ArrayVec<usize, 3> = (0..3).filter(|i| bcoords[*i] != 0.0).collect();

        match nonzero[..] {
            [i] if bcoords[i] == 1.0 => PolygonVertex::Corner(i),
            [i, j] => PolygonVertex::Edge(i, j),
            _ => PolygonVertex::Interior,
        }
    }
}

/// One of the two output meshes of a clipping operation.
struct ClippedSide<'a> {
    mesh: &'a mut TriangleMesh,
    // Index of each original vertex in `mesh`, or `u32::MAX` if it wasn't copied yet.
    remap: Vec<u32>,
    edge_points: HashMap<SortedPair<u32>, u32>,
}

impl<'a> ClippedSide<'a> {
    fn new(mesh: &'a mut TriangleMesh, num_original_vertices: usize) -> Self {
        Self {
            mesh,
            remap: vec![u32::MAX; num_original_vertices],
            edge_points: HashMap::default(),
        }
    }

    fn original_vertex(&mut self, original: &TriangleMesh, id: u32) -> u32 {
        let remapped = &mut self.remap[id as usize];

        if *remapped == u32::MAX {
            *remapped = self.mesh.push_vertex(*original.vertex(id));
        }

        *remapped
    }

    fn polygon_vertex(
        &mut self,
        original: &TriangleMesh,
        idx: &[u32; 3],
        bcoords: &Vector<Real>,
    ) -> u32 {
        match PolygonVertex::locate(bcoords) {
            PolygonVertex::Corner(i) => self.original_vertex(original, idx[i]),
            PolygonVertex::Edge(i, j) => {
                let key = SortedPair::new(idx[i], idx[j]);

                if let Some(id) = self.edge_points.get(&key) {
                    return *id;
                }

                let id = self.mesh.push_vertex(blend(original, idx, bcoords));
                let _ = self.edge_points.insert(key, id);
                id
            }
            PolygonVertex::Interior => self.mesh.push_vertex(blend(original, idx, bcoords)),
        }
    }

    fn push_triangle(&mut self, original: &TriangleMesh, idx: &[u32; 3]) {
        let [a, b, c] = idx.map(|id| self.original_vertex(original, id));
        self.mesh.add_triangle(a, b, c);
    }

    fn push_polygon(&mut self, original: &TriangleMesh, idx: &[u32; 3], polygon: &[Vector<Real>]) {
        let ids: Vec<u32> = polygon
            .iter()
            .map(|bcoords| self.polygon_vertex(original, idx, bcoords))
            .collect();

        for k in 1..ids.len().saturating_sub(1) {
            self.mesh.add_triangle(ids[0], ids[k], ids[k + 1]);
        }
    }
}

/// Interpolates the attributes of the vertices of a triangle with barycentric weights.
fn blend(mesh: &TriangleMesh, idx: &[u32; 3], bcoords: &Vector<Real>) -> Vertex {
    let [a, b, c] = idx.map(|id| *mesh.vertex(id));
    let position = Point::from(
        a.position.coords * bcoords.x + b.position.coords * bcoords.y + c.position.coords * bcoords.z,
    );
    let normal = a.normal * bcoords.x + b.normal * bcoords.y + c.normal * bcoords.z;
    let tex_coord = a.tex_coord * bcoords.x + b.tex_coord * bcoords.y + c.tex_coord * bcoords.z;

    Vertex::new(
        position,
        normal.try_normalize(DEFAULT_EPSILON).unwrap_or(normal),
        tex_coord,
    )
}
