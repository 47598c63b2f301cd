use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes an ellipsoid centered on the origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EllipsoidDescriptor {
    /// The radii of the ellipsoid along each axis.
    pub radius: Vector<Real>,
    /// The number of subdivisions around the Y axis (`x`) and from pole to pole (`y`).
    pub segments: Vector2<u32>,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for EllipsoidDescriptor {
    fn default() -> Self {
        Self {
            radius: Vector::repeat(1.0),
            segments: Vector2::new(20, 10),
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for EllipsoidDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("ellipsoid segments.x", self.segments.x, 3);
        let segments_v = utils::clamp_segments("ellipsoid segments.y", self.segments.y, 2);
        let radius = self.radius;
        let inv_sq_radius = radius.map(|r| 1.0 / (r * r).max(DEFAULT_EPSILON));
        let base = mesh.num_vertices() as u32;

        for i in 0..=segments_u {
            let u = i as Real / segments_u as Real;
            let (sin_theta, cos_theta) = ComplexField::sin_cos(Real::two_pi() * u);

            for j in 0..=segments_v {
                let v = j as Real / segments_v as Real;
                // Latitude from the bottom pole (`phi = 0`) to the top pole (`phi = π`).
                let (sin_phi, cos_phi) = ComplexField::sin_cos(Real::pi() * v);
                let dir = Vector::new(sin_phi * cos_theta, -cos_phi, sin_phi * sin_theta);
                let local = radius.component_mul(&dir);
                let normal = utils::normalize_or(local.component_mul(&inv_sq_radius), dir);
                let position = Point::from(local * modifier_factor(modifier, u, v));

                mesh.add_vertex(position, normal, TexCoord::new(u, 1.0 - v));
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
