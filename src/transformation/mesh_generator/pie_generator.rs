use super::cylinder_generator::push_covers;
use super::revolution::{push_revolution, straight_profile};
use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes a sector of an elliptic cylinder centered on the origin, with its axis along +Y.
///
/// The sector spans the angles `[0, angle]`, measured from +X toward +Z.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PieDescriptor {
    /// The radii of the cylinder along X and Z.
    pub radius: Vector2<Real>,
    /// The height of the pie along Y.
    pub height: Real,
    /// The angular extent of the sector, in radians. Clamped to `(0, 2π]`.
    pub angle: Real,
    /// The number of subdivisions around the axis (`x`) and along it (`y`).
    pub mantle_segments: Vector2<u32>,
    /// The number of subdivisions of each wall from the axis to the rim.
    pub wall_segments: u32,
    /// The number of concentric rings of the top cover. `0` leaves the top open.
    pub top_cover_segments: u32,
    /// The number of concentric rings of the bottom cover. `0` leaves the bottom open.
    pub bottom_cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for PieDescriptor {
    fn default() -> Self {
        Self {
            radius: Vector2::repeat(1.0),
            height: 1.0,
            angle: Real::pi() * 1.5,
            mantle_segments: Vector2::new(20, 1),
            wall_segments: 1,
            top_cover_segments: 1,
            bottom_cover_segments: 1,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for PieDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("pie mantle_segments.x", self.mantle_segments.x, 1);
        let segments_v = utils::clamp_segments("pie mantle_segments.y", self.mantle_segments.y, 1);
        let segments_w = utils::clamp_segments("pie wall_segments", self.wall_segments, 1);
        let angle = self.angle.clamp(DEFAULT_EPSILON, Real::two_pi());

        push_revolution(
            mesh,
            &self.radius,
            angle,
            segments_u,
            &straight_profile(self.height, segments_v),
            false,
            self.alternate_grid,
            modifier,
        );
        push_covers(
            mesh,
            Vector2::zeros(),
            self.radius,
            self.height * 0.5,
            angle,
            segments_u,
            (self.bottom_cover_segments, self.top_cover_segments),
            self.alternate_grid,
            modifier,
        );

        self.push_wall(mesh, 0.0, segments_w, segments_v, false, modifier);
        self.push_wall(mesh, angle, segments_w, segments_v, true, modifier);
    }
}

impl PieDescriptor {
    /// Pushes the planar wall closing the sector at `angle`, from the axis to the rim.
    fn push_wall(
        &self,
        mesh: &mut TriangleMesh,
        angle: Real,
        segments_w: u32,
        segments_v: u32,
        is_end: bool,
        modifier: Option<&VertexModifier>,
    ) {
        let base = mesh.num_vertices() as u32;
        let (sin, cos) = ComplexField::sin_cos(angle);
        let (rx, rz) = (self.radius.x, self.radius.y);
        // The start wall faces -Z at angle 0, the end wall faces toward increasing angles.
        let normal = utils::normalize_or(Vector::new(rz * sin, 0.0, -rx * cos), -Vector::z());
        let (normal, modifier_u) = if is_end { (-normal, 1.0) } else { (normal, 0.0) };

        for i in 0..=segments_w {
            let s = i as Real / segments_w as Real;

            for j in 0..=segments_v {
                let v = j as Real / segments_v as Real;
                let r = s * modifier_factor(modifier, modifier_u, v);
                let position = Point::new(rx * r * cos, (v - 0.5) * self.height, rz * r * sin);
                let tex_u = if is_end { s } else { 1.0 - s };
                mesh.add_vertex(position, normal, TexCoord::new(tex_u, 1.0 - v));
            }
        }

        utils::push_grid_indices(
            mesh,
            base,
            segments_w,
            segments_v,
            self.alternate_grid,
            is_end,
        );
    }
}
