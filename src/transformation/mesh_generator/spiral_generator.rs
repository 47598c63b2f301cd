use super::curve_generator::{push_tube, push_tube_caps, TubeFrame};
use super::{MeshGenerator, VertexModifier};
use crate::math::{Point, Real, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes a tube swept along a helix around the Y axis, centered on the origin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SpiralDescriptor {
    /// The distance from the Y axis to the center of the tube.
    pub ring_radius: Real,
    /// The radius of the tube.
    pub tube_radius: Real,
    /// The number of turns around the Y axis.
    pub turns: Real,
    /// The rise of the helix along Y per turn.
    pub displacement: Real,
    /// The number of subdivisions along the helix (`x`) and around the tube (`y`).
    pub segments: Vector2<u32>,
    /// The number of concentric rings of the cover at the top end. `0` leaves it open.
    pub top_cover_segments: u32,
    /// The number of concentric rings of the cover at the bottom end. `0` leaves it open.
    pub bottom_cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for SpiralDescriptor {
    fn default() -> Self {
        Self {
            ring_radius: 1.0,
            tube_radius: 0.25,
            turns: 2.0,
            displacement: 1.0,
            segments: Vector2::new(64, 12),
            top_cover_segments: 1,
            bottom_cover_segments: 1,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for SpiralDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("spiral segments.x", self.segments.x, 3);
        let segments_v = utils::clamp_segments("spiral segments.y", self.segments.y, 3);
        let total_angle = self.turns * Real::two_pi();
        let total_rise = self.turns * self.displacement;
        let rise_per_radian = self.displacement / Real::two_pi();

        let frames: Vec<_> = (0..=segments_u)
            .map(|i| {
                let u = i as Real / segments_u as Real;
                let (sin, cos) = ComplexField::sin_cos(total_angle * u);
                let radial = Vector::new(cos, 0.0, sin);
                let tangent = utils::normalize_or(
                    Vector::new(-self.ring_radius * sin, rise_per_radian, self.ring_radius * cos),
                    Vector::y(),
                );
                // The radial direction stays orthogonal to the helix tangent.
                let normal = utils::normalize_or(
                    radial - tangent * tangent.dot(&radial),
                    utils::any_orthogonal(&tangent),
                );

                TubeFrame {
                    center: Point::new(
                        self.ring_radius * cos,
                        total_rise * (u - 0.5),
                        self.ring_radius * sin,
                    ),
                    tangent,
                    normal,
                    binormal: tangent.cross(&normal),
                }
            })
            .collect();

        push_tube(
            mesh,
            &frames,
            self.tube_radius,
            segments_v,
            self.alternate_grid,
            modifier,
        );
        push_tube_caps(
            mesh,
            &frames,
            self.tube_radius,
            segments_v,
            (self.bottom_cover_segments, self.top_cover_segments),
            self.alternate_grid,
            modifier,
        );
    }
}
