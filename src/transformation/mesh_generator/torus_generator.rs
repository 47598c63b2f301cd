use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes a torus centered on the origin, lying on the XZ plane.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TorusDescriptor {
    /// The distance from the origin to the center of the tube.
    pub ring_radius: Real,
    /// The radius of the tube.
    pub tube_radius: Real,
    /// The number of subdivisions around the ring (`x`) and around the tube (`y`).
    pub segments: Vector2<u32>,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for TorusDescriptor {
    fn default() -> Self {
        Self {
            ring_radius: 1.0,
            tube_radius: 0.5,
            segments: Vector2::new(30, 15),
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for TorusDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("torus segments.x", self.segments.x, 3);
        let segments_v = utils::clamp_segments("torus segments.y", self.segments.y, 3);
        let base = mesh.num_vertices() as u32;

        for i in 0..=segments_u {
            let u = i as Real / segments_u as Real;
            let (sin_theta, cos_theta) = ComplexField::sin_cos(Real::two_pi() * u);
            let ring_center = Point::new(cos_theta, 0.0, sin_theta) * self.ring_radius;

            for j in 0..=segments_v {
                let v = j as Real / segments_v as Real;
                let (sin_phi, cos_phi) = ComplexField::sin_cos(Real::two_pi() * v);
                let normal = Vector::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta);
                let radius = self.tube_radius * modifier_factor(modifier, u, v);

                mesh.add_vertex(
                    ring_center + normal * radius,
                    normal,
                    TexCoord::new(u, v),
                );
            }
        }

        utils::push_grid_indices(
            mesh,
            base,
            segments_u,
            segments_v,
            self.alternate_grid,
            false,
        );
    }
}
