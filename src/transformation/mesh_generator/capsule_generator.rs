use super::revolution::{push_revolution, ProfileSample};
use super::{MeshGenerator, VertexModifier};
use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, RealField, Vector2};

/// Describes an elliptic capsule centered on the origin, with its axis along +Y.
///
/// The capsule is made of a cylindrical mantle of height `height` closed by two
/// half-ellipsoids.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CapsuleDescriptor {
    /// The radii of the mantle along X and Z, and the height of each dome along Y.
    pub radius: Vector<Real>,
    /// The height of the cylindrical part along Y.
    pub height: Real,
    /// The number of subdivisions around the axis (`x`) and along the mantle (`y`).
    pub mantle_segments: Vector2<u32>,
    /// The number of subdivisions of each dome from its rim to its pole.
    pub ellipsoid_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for CapsuleDescriptor {
    fn default() -> Self {
        Self {
            radius: Vector::new(1.0, 0.5, 1.0),
            height: 1.0,
            mantle_segments: Vector2::new(20, 1),
            ellipsoid_segments: 5,
            alternate_grid: false,
        }
    }
}

impl MeshGenerator for CapsuleDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = utils::clamp_segments("capsule mantle_segments.x", self.mantle_segments.x, 3);
        let segments_v = utils::clamp_segments("capsule mantle_segments.y", self.mantle_segments.y, 1);
        let segments_e = utils::clamp_segments("capsule ellipsoid_segments", self.ellipsoid_segments, 2);

        let radii = self.radius.xz();
        let half_height = self.height * 0.5;
        let dome_height = self.radius.y;
        let total_height = (self.height + 2.0 * dome_height).max(DEFAULT_EPSILON);

        // The modifier and texture `v` run along the whole capsule, from bottom to top.
        let sample = |radius: Real, y: Real, normal: Vector2<Real>| {
            let fraction = (y + half_height + dome_height) / total_height;
            ProfileSample {
                radius,
                y,
                normal,
                v: fraction,
                tex_v: 1.0 - fraction,
            }
        };

        let dome = |from: Real, top: bool| -> Vec<ProfileSample> {
            let center = if top { half_height } else { -half_height };
            (0..=segments_e)
                .map(|j| {
                    let phi = from + Real::frac_pi_2() * j as Real / segments_e as Real;
                    let (sin, cos) = ComplexField::sin_cos(phi);
                    let ny = sin / dome_height.abs().max(DEFAULT_EPSILON);
                    sample(cos, center + dome_height * sin, Vector2::new(cos, ny))
                })
                .collect()
        };

        let mantle: Vec<_> = (0..=segments_v)
            .map(|j| {
                let y = (j as Real / segments_v as Real - 0.5) * self.height;
                sample(1.0, y, Vector2::new(1.0, 0.0))
            })
            .collect();

        for profile in [mantle, dome(0.0, true), dome(-Real::frac_pi_2(), false)] {
            push_revolution(
                mesh,
                &radii,
                Real::two_pi(),
                segments_u,
                &profile,
                false,
                self.alternate_grid,
                modifier,
            );
        }
    }
}
