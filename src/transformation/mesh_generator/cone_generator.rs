use super::cylinder_generator::push_covers;
use super::revolution::{push_revolution, ProfileSample};
use super::{MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{RealField, Vector2};

/// Describes an elliptic cone centered on the origin, with its base at `y = -height / 2` and
/// its tip at `y = height / 2`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConeDescriptor {
    /// The radii of the base along X and Z.
    pub radius: Vector2<Real>,
    /// The height of the cone along Y.
    pub height: Real,
    /// The number of subdivisions around the axis (`x`) and along it (`y`).
    pub mantle_segments: Vector2<u32>,
    /// The number of concentric rings of the base cover. `0` leaves the base open.
    pub cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for ConeDescriptor {
    fn default() -> Self {
        Self {
            radius: Vector2::repeat(1.0),
            height: 1.0,
            mantle_segments: Vector2::new(20, 1),
            cover_segments: 1,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for ConeDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("cone mantle_segments.x", self.mantle_segments.x, 3);
        let segments_v = utils::clamp_segments("cone mantle_segments.y", self.mantle_segments.y, 1);
        let height = self.height;

        // Every row but the tip, which is shared by all the columns.
        let profile: Vec<_> = (0..segments_v)
            .map(|j| {
                let v = j as Real / segments_v as Real;
                ProfileSample {
                    radius: 1.0 - v,
                    y: (v - 0.5) * height,
                    normal: Vector2::new(height, 1.0),
                    v,
                    tex_v: 1.0 - v,
                }
            })
            .collect();

        let base = mesh.num_vertices() as u32;
        push_revolution(
            mesh,
            &self.radius,
            Real::two_pi(),
            segments_u,
            &profile,
            false,
            self.alternate_grid,
            modifier,
        );

        let tip = mesh.add_vertex(
            Point::new(0.0, height * 0.5, 0.0),
            Vector::y(),
            TexCoord::new(0.5, 0.0),
        );

        for i in 0..segments_u {
            let last_row = base + i * segments_v + segments_v - 1;
            mesh.add_triangle(last_row, tip, last_row + segments_v);
        }

        push_covers(
            mesh,
            Vector2::zeros(),
            self.radius,
            height * 0.5,
            Real::two_pi(),
            segments_u,
            (self.cover_segments, 0),
            self.alternate_grid,
            modifier,
        );
    }
}
