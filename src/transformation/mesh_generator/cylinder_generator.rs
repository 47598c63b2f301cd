use super::revolution::{push_revolution, straight_profile};
use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils::{self, Cover};
use na::{RealField, Vector2};

/// Describes an elliptic cylinder centered on the origin, with its axis along +Y.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CylinderDescriptor {
    /// The radii of the cylinder along X and Z.
    pub radius: Vector2<Real>,
    /// The height of the cylinder along Y.
    pub height: Real,
    /// The number of subdivisions around the axis (`x`) and along it (`y`).
    pub mantle_segments: Vector2<u32>,
    /// The number of concentric rings of the top cover. `0` leaves the top open.
    pub top_cover_segments: u32,
    /// The number of concentric rings of the bottom cover. `0` leaves the bottom open.
    pub bottom_cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for CylinderDescriptor {
    fn default() -> Self {
        Self {
            radius: Vector2::repeat(1.0),
            height: 1.0,
            mantle_segments: Vector2::new(20, 1),
            top_cover_segments: 1,
            bottom_cover_segments: 1,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for CylinderDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("cylinder mantle_segments.x", self.mantle_segments.x, 3);
        let segments_v = utils::clamp_segments("cylinder mantle_segments.y", self.mantle_segments.y, 1);

        push_revolution(
            mesh,
            &self.radius,
            Real::two_pi(),
            segments_u,
            &straight_profile(self.height, segments_v),
            false,
            self.alternate_grid,
            modifier,
        );

        let half_height = self.height * 0.5;
        push_covers(
            mesh,
            Vector2::zeros(),
            self.radius,
            half_height,
            Real::two_pi(),
            segments_u,
            (self.bottom_cover_segments, self.top_cover_segments),
            self.alternate_grid,
            modifier,
        );
    }
}

/// Pushes the horizontal covers closing a mantle at `y = -half_height` and `y = half_height`.
///
/// The rims of the covers follow the vertex modifier like the mantle rows they close.
pub(crate) fn push_covers(
    mesh: &mut TriangleMesh,
    inner_radius: Vector2<Real>,
    outer_radius: Vector2<Real>,
    half_height: Real,
    angle: Real,
    segments: u32,
    (bottom_rings, top_rings): (u32, u32),
    alternate_grid: bool,
    modifier: Option<&VertexModifier>,
) {
    let bottom_factor = |u: Real| modifier_factor(modifier, u, 0.0);
    let top_factor = |u: Real| modifier_factor(modifier, u, 1.0);

    let mut cover = Cover {
        center: Point::new(0.0, half_height, 0.0),
        x_axis: Vector::x(),
        z_axis: Vector::z(),
        normal: Vector::y(),
        inner_radius,
        outer_radius,
        angle,
        segments,
        rings: top_rings,
        mirror_u: false,
    };
    utils::push_cover(mesh, &cover, alternate_grid, Some(&top_factor));

    cover.center.y = -half_height;
    cover.normal = -Vector::y();
    cover.rings = bottom_rings;
    cover.mirror_u = true;
    utils::push_cover(mesh, &cover, alternate_grid, Some(&bottom_factor));
}
