use super::{CurveDescriptor, FrameMode, MeshGenerator, VertexModifier};
use crate::math::{Point, Real};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes a tube swept along a `(p, q)` torus knot centered on the origin.
///
/// The knot winds `loops` times around the Y axis and `turns` times around the core circle
/// of the torus.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TorusKnotDescriptor {
    /// The radius of the core circle of the torus the knot lies on.
    pub ring_radius: Real,
    /// The distance from the core circle to the knot.
    pub loop_radius: Real,
    /// The radius of the tube.
    pub tube_radius: Real,
    /// The number of windings around the Y axis (`p`).
    pub loops: u32,
    /// The number of windings around the core circle (`q`).
    pub turns: u32,
    /// The number of subdivisions along the knot (`x`) and around the tube (`y`).
    pub segments: Vector2<u32>,
    /// How the cross-section is oriented along the knot.
    pub frame: FrameMode,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for TorusKnotDescriptor {
    fn default() -> Self {
        Self {
            ring_radius: 1.0,
            loop_radius: 0.5,
            tube_radius: 0.1,
            loops: 2,
            turns: 3,
            segments: Vector2::new(256, 12),
            frame: FrameMode::Projected,
            alternate_grid: false,
        }
    }
}

impl TorusKnotDescriptor {
    /// The point of the knot centerline at `t ∈ [0, 1]`.
    pub fn curve_point(&self, t: Real) -> Point<Real> {
        let loops = self.loops.max(1) as Real;
        let turns = self.turns.max(1) as Real;
        let angle = Real::two_pi() * t;
        let (sin_q, cos_q) = ComplexField::sin_cos(turns * angle);
        let (sin_p, cos_p) = ComplexField::sin_cos(loops * angle);
        let r = self.ring_radius + self.loop_radius * cos_q;

        Point::new(r * cos_p, self.loop_radius * sin_q, r * sin_p)
    }
}

impl MeshGenerator for TorusKnotDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let curve = CurveDescriptor {
            radius: self.tube_radius,
            segments: Vector2::new(
                utils::clamp_segments("torus knot segments.x", self.segments.x, 3),
                utils::clamp_segments("torus knot segments.y", self.segments.y, 3),
            ),
            closed: true,
            twist: 0.0,
            frame: self.frame,
            start_cover_segments: 0,
            end_cover_segments: 0,
            alternate_grid: self.alternate_grid,
        };

        curve.generate_along(|t| self.curve_point(t), mesh, modifier);
    }
}
