use super::cylinder_generator::push_covers;
use super::revolution::{push_revolution, straight_profile};
use super::{MeshGenerator, VertexModifier};
use crate::math::Real;
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{RealField, Vector2};

/// Describes a hollow elliptic cylinder centered on the origin, with its axis along +Y.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PipeDescriptor {
    /// The radii of the hole along X and Z.
    pub inner_radius: Vector2<Real>,
    /// The radii of the outer wall along X and Z.
    pub outer_radius: Vector2<Real>,
    /// The height of the pipe along Y.
    pub height: Real,
    /// The number of subdivisions around the axis (`x`) and along it (`y`).
    pub mantle_segments: Vector2<u32>,
    /// The number of concentric rings of the top annulus. `0` leaves the top open.
    pub top_cover_segments: u32,
    /// The number of concentric rings of the bottom annulus. `0` leaves the bottom open.
    pub bottom_cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for PipeDescriptor {
    fn default() -> Self {
        Self {
            inner_radius: Vector2::repeat(0.5),
            outer_radius: Vector2::repeat(1.0),
            height: 1.0,
            mantle_segments: Vector2::new(20, 1),
            top_cover_segments: 1,
            bottom_cover_segments: 1,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for PipeDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("pipe mantle_segments.x", self.mantle_segments.x, 3);
        let segments_v = utils::clamp_segments("pipe mantle_segments.y", self.mantle_segments.y, 1);
        let profile = straight_profile(self.height, segments_v);

        for (radius, inward) in [(&self.outer_radius, false), (&self.inner_radius, true)] {
            push_revolution(
                mesh,
                radius,
                Real::two_pi(),
                segments_u,
                &profile,
                inward,
                self.alternate_grid,
                modifier,
            );
        }

        push_covers(
            mesh,
            self.inner_radius,
            self.outer_radius,
            self.height * 0.5,
            Real::two_pi(),
            segments_u,
            (self.bottom_cover_segments, self.top_cover_segments),
            self.alternate_grid,
            modifier,
        );
    }
}
