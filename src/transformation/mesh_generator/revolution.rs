use super::{modifier_factor, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{ComplexField, Vector2};

/// A sample of the half-profile of a surface of revolution around +Y.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProfileSample {
    /// Fraction of the radius at this height.
    pub radius: Real,
    pub y: Real,
    /// Radial and vertical components of the normal of a surface with unit radii.
    pub normal: Vector2<Real>,
    /// The `v` coordinate given to the vertex modifier.
    pub v: Real,
    pub tex_v: Real,
}

/// Sweeps `profile` around +Y over the angles `[0, angle]` and pushes the resulting grid.
///
/// The profile must be ordered bottom to top. Its samples are scaled by the elliptic radii
/// `radii` along X and Z. The grid faces outward, or toward the axis if `inward` is set.
pub(crate) fn push_revolution(
    mesh: &mut TriangleMesh,
    radii: &Vector2<Real>,
    angle: Real,
    segments: u32,
    profile: &[ProfileSample],
    inward: bool,
    alternate_grid: bool,
    modifier: Option<&VertexModifier>,
) {
    if profile.is_empty() {
        return;
    }

    let base = mesh.num_vertices() as u32;
    let inv_rx = 1.0 / radii.x.abs().max(DEFAULT_EPSILON);
    let inv_rz = 1.0 / radii.y.abs().max(DEFAULT_EPSILON);
    let sign = if inward { -1.0 } else { 1.0 };

    for i in 0..=segments {
        let u = i as Real / segments as Real;
        let (sin, cos) = ComplexField::sin_cos(angle * u);

        for sample in profile {
            let r = sample.radius * modifier_factor(modifier, u, sample.v);
            let position = Point::new(radii.x * r * cos, sample.y, radii.y * r * sin);
            let nr = sample.normal.x;
            let normal = utils::normalize_or(
                Vector::new(nr * cos * inv_rx, sample.normal.y, nr * sin * inv_rz),
                Vector::y(),
            );
            mesh.add_vertex(position, normal * sign, TexCoord::new(u, sample.tex_v));
        }
    }

    utils::push_grid_indices(
        mesh,
        base,
        segments,
        profile.len() as u32 - 1,
        alternate_grid,
        inward,
    );
}

/// The profile of a straight mantle of unit radius from `y = -height / 2` to
/// `y = height / 2`, split into `segments` rows.
pub(crate) fn straight_profile(height: Real, segments: u32) -> Vec<ProfileSample> {
    (0..=segments)
        .map(|j| {
            let v = j as Real / segments as Real;
            ProfileSample {
                radius: 1.0,
                y: (v - 0.5) * height,
                normal: Vector2::new(1.0, 0.0),
                v,
                tex_v: 1.0 - v,
            }
        })
        .collect()
}
