use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, Rotation, TexCoord, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{RealField, Vector2, Vector3};

/// Describes an axis-aligned box centered on the origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CuboidDescriptor {
    /// The extents of the box along each axis.
    pub size: Vector<Real>,
    /// The number of subdivisions of the faces along each axis.
    pub segments: Vector3<u32>,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for CuboidDescriptor {
    fn default() -> Self {
        Self {
            size: Vector::repeat(1.0),
            segments: Vector3::repeat(1),
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for CuboidDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments = Vector3::new(
            utils::clamp_segments("cuboid segments.x", self.segments.x, 1),
            utils::clamp_segments("cuboid segments.y", self.segments.y, 1),
            utils::clamp_segments("cuboid segments.z", self.segments.z, 1),
        );
        let size = self.size;
        let half = size * 0.5;
        let pi = Real::pi();
        let frac_pi_2 = Real::frac_pi_2();

        // (roll, pitch) of each face, its in-plane size and subdivisions, and its distance
        // to the center.
        let faces = [
            // +Z, -Z
            ((0.0, 0.0), (size.x, size.y), (segments.x, segments.y), half.z),
            ((0.0, pi), (size.x, size.y), (segments.x, segments.y), half.z),
            // +X, -X
            ((0.0, frac_pi_2), (size.z, size.y), (segments.z, segments.y), half.x),
            ((0.0, -frac_pi_2), (size.z, size.y), (segments.z, segments.y), half.x),
            // +Y, -Y
            ((-frac_pi_2, 0.0), (size.x, size.z), (segments.x, segments.z), half.y),
            ((frac_pi_2, 0.0), (size.x, size.z), (segments.x, segments.z), half.y),
        ];

        for ((roll, pitch), face_size, face_segments, offset) in faces {
            let rotation = Rotation::from_euler_angles(roll, pitch, 0.0);
            build_face(
                mesh,
                &rotation,
                Vector2::new(face_size.0, face_size.1),
                face_segments,
                offset,
                self.alternate_grid,
                modifier,
            );
        }
    }
}

/// Pushes a flat grid facing +Z at the distance `offset` from the origin, rotated by
/// `rotation`.
///
/// The grid vertices are laid out top to bottom and left to right, with texture coordinates
/// following the same order.
fn build_face(
    mesh: &mut TriangleMesh,
    rotation: &Rotation<Real>,
    size: Vector2<Real>,
    (segments_u, segments_v): (u32, u32),
    offset: Real,
    alternate_grid: bool,
    modifier: Option<&VertexModifier>,
) {
    let base = mesh.num_vertices() as u32;
    let normal = rotation * Vector::z();

    for i in 0..=segments_u {
        let u = i as Real / segments_u as Real;

        for j in 0..=segments_v {
            let v = j as Real / segments_v as Real;
            let local = Point::new(-size.x * 0.5 + u * size.x, size.y * 0.5 - v * size.y, offset);
            let position = rotation * local * modifier_factor(modifier, u, v);
            mesh.add_vertex(position, normal, TexCoord::new(u, v));
        }
    }

    // `v` runs downward, so `∂v × ∂u` points toward +Z.
    utils::push_grid_indices(mesh, base, segments_u, segments_v, alternate_grid, false);
}
