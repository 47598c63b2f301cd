//! Low-level utilities for mesh generation.
//!
//! These are the building blocks of the [`mesh_generator`](crate::transformation::mesh_generator)
//! module. They are exposed for users who need to assemble their own parametric surfaces.
//!
//! ## Index buffer generation
//! - [`push_quad_indices`] - Split one grid cell into two triangles
//! - [`push_grid_indices`] - Triangulate a whole `(u, v)` vertex grid
//!
//! ## Vertex and index generation
//! - [`push_cover`] - Generate a flat disk, annulus, or sector closing a mantle opening
//!
//! ## Misc
//! - [`clamp_segments`] - Raise a subdivision count to a minimum
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")]
//! # {
//! use meshgen3d::math::{Point, TexCoord, Vector};
//! use meshgen3d::shape::TriangleMesh;
//! use meshgen3d::transformation::utils::push_grid_indices;
//!
//! // A flat 2x3 grid on the XY plane, facing +z.
//! let (segs_u, segs_v) = (2, 3);
//! let mut mesh = TriangleMesh::new();
//!
//! for u in 0..=segs_u {
//!     for v in 0..=segs_v {
//!         mesh.add_vertex(
//!             Point::new(u as f32, v as f32, 0.0),
//!             Vector::z(),
//!             TexCoord::new(u as f32 / 2.0, v as f32 / 3.0),
//!         );
//!     }
//! }
//!
//! push_grid_indices(&mut mesh, 0, segs_u, segs_v, false, true);
//! assert_eq!(mesh.num_triangles(), 2 * 2 * 3);
//! assert!(mesh.triangle(0).normal().unwrap().z > 0.0);
//! # }
//! ```

use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use na::{ComplexField, Vector2};

/// Pushes the two triangles of a grid cell to `mesh`.
///
/// The `quad` vertices are given in cyclic order: bottom-left, top-left, top-right,
/// bottom-right. The cell is split along the `quad[0]`-`quad[2]` diagonal unless
/// `alternate_grid` is set and the grid coordinates `(u, v)` have opposite parities, in
/// which case it is split along the `quad[1]`-`quad[3]` diagonal. This checkerboard pattern
/// avoids diagonals aligning across curved surfaces.
///
/// `index_offset` is added to the four indices before the triangles are pushed.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")]
/// # {
/// use meshgen3d::math::{Point, TexCoord, Vector};
/// use meshgen3d::shape::TriangleMesh;
/// use meshgen3d::transformation::utils::push_quad_indices;
///
/// let mut mesh = TriangleMesh::new();
/// for _ in 0..4 {
///     mesh.add_vertex(Point::origin(), Vector::z(), TexCoord::zeros());
/// }
///
/// push_quad_indices(&mut mesh, [0, 1, 2, 3], (0, 1), true, 0);
/// assert_eq!(mesh.indices(), &[[0, 1, 3], [1, 2, 3]]);
/// # }
/// ```
#[inline]
pub fn push_quad_indices(
    mesh: &mut TriangleMesh,
    quad: [u32; 4],
    (u, v): (u32, u32),
    alternate_grid: bool,
    index_offset: u32,
) {
    let [v0, v1, v2, v3] = quad.map(|i| i + index_offset);

    if !alternate_grid || u % 2 == v % 2 {
        mesh.add_triangle(v0, v1, v2);
        mesh.add_triangle(v0, v2, v3);
    } else {
        mesh.add_triangle(v0, v1, v3);
        mesh.add_triangle(v1, v2, v3);
    }
}

/// Triangulates a grid of `(segments_u + 1) * (segments_v + 1)` vertices starting at the
/// index `base` of the vertex buffer of `mesh`.
///
/// The grid must be laid out column-major, i.e., the vertex at the grid coordinates
/// `(u, v)` has the index `base + u * (segments_v + 1) + v`. The triangles face the side
/// toward which `∂p/∂u × ∂p/∂v` points if `ccw_along_u` is `true`, and the opposite side
/// otherwise.
pub fn push_grid_indices(
    mesh: &mut TriangleMesh,
    base: u32,
    segments_u: u32,
    segments_v: u32,
    alternate_grid: bool,
    ccw_along_u: bool,
) {
    let column = segments_v + 1;

    for u in 0..segments_u {
        for v in 0..segments_v {
            let bottom_left = u * column + v;
            let top_left = bottom_left + 1;
            let top_right = top_left + column;
            let bottom_right = bottom_left + column;

            let quad = if ccw_along_u {
                [bottom_left, bottom_right, top_right, top_left]
            } else {
                [bottom_left, top_left, top_right, bottom_right]
            };

            push_quad_indices(mesh, quad, (u, v), alternate_grid, base);
        }
    }
}

/// Raises `segments` to `min` if it is smaller.
///
/// The `name` of the clamped descriptor field is logged if the value changes.
#[inline]
pub fn clamp_segments(name: &str, segments: u32, min: u32) -> u32 {
    if segments < min {
        log::debug!(
            "Clamping {} from {} to the minimum of {}.",
            name,
            segments,
            min
        );
        min
    } else {
        segments
    }
}

/// Normalizes `v`, or returns `fallback` if `v` is too small to be normalized.
#[inline]
pub(crate) fn normalize_or(v: Vector<Real>, fallback: Vector<Real>) -> Vector<Real> {
    v.try_normalize(DEFAULT_EPSILON).unwrap_or(fallback)
}

/// A unit vector orthogonal to the unit vector `v`.
#[inline]
pub(crate) fn any_orthogonal(v: &Vector<Real>) -> Vector<Real> {
    let helper = if v.x.abs() < 0.9 { Vector::x() } else { Vector::y() };
    normalize_or(v.cross(&helper), Vector::z())
}

/// A flat disk, annulus, or circular sector closing a mantle opening.
///
/// The cover lies on the plane spanned by `x_axis` and `z_axis` through `center`. The point
/// at the angle `θ` and radial fraction `s ∈ [0, 1]` is:
///
/// `center + lerp(inner(θ), outer(θ), s)`
///
/// where `outer(θ) = outer_radius.x * cos(θ) * x_axis + outer_radius.y * sin(θ) * z_axis`
/// (and similarly for `inner`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cover {
    /// The center of the cover.
    pub center: Point<Real>,
    /// The unit axis at angle `0`.
    pub x_axis: Vector<Real>,
    /// The unit axis at angle `π / 2`.
    pub z_axis: Vector<Real>,
    /// The unit normal the cover faces.
    pub normal: Vector<Real>,
    /// The radii of the inner rim along `x_axis` and `z_axis`. Zero for a disk.
    pub inner_radius: Vector2<Real>,
    /// The radii of the outer rim along `x_axis` and `z_axis`.
    pub outer_radius: Vector2<Real>,
    /// The angular extent of the cover, `2π` for a full disk.
    pub angle: Real,
    /// The number of angular subdivisions.
    pub segments: u32,
    /// The number of concentric rings.
    pub rings: u32,
    /// Mirrors the `u` texture coordinate.
    pub mirror_u: bool,
}

/// Pushes the vertices and triangles of `cover` to `mesh`.
///
/// A cover with `rings == 0` is skipped. A disk starts with a single center vertex, fanned
/// to the first ring. Every other ring is connected to the previous one with
/// [`push_quad_indices`].
///
/// `radial_factor(fu)`, if given, scales both rims at the angular fraction `fu ∈ [0, 1]`.
pub fn push_cover(
    mesh: &mut TriangleMesh,
    cover: &Cover,
    alternate_grid: bool,
    radial_factor: Option<&dyn Fn(Real) -> Real>,
) {
    if cover.rings == 0 || cover.segments == 0 {
        return;
    }

    let has_center = cover.inner_radius == Vector2::zeros();
    let first_ring = u32::from(has_center);
    // The cover faces `normal` if the rims are swept counter-clockwise around it.
    let ccw = cover.normal.dot(&cover.z_axis.cross(&cover.x_axis)) > 0.0;
    let column = cover.segments + 1;
    let base = mesh.num_vertices() as u32;
    let inner_rel = if cover.outer_radius.x > DEFAULT_EPSILON {
        cover.inner_radius.x / cover.outer_radius.x
    } else {
        0.0
    };

    if has_center {
        mesh.add_vertex(cover.center, cover.normal, TexCoord::new(0.5, 0.5));
    }

    for ring in first_ring..=cover.rings {
        let s = ring as Real / cover.rings as Real;

        for i in 0..=cover.segments {
            let fu = i as Real / cover.segments as Real;
            let theta = cover.angle * fu;
            let (sin, cos) = ComplexField::sin_cos(theta);
            let factor = radial_factor.map(|f| f(fu)).unwrap_or(1.0);
            let radius = cover.inner_radius.lerp(&cover.outer_radius, s) * factor;
            let position = cover.center
                + cover.x_axis * (radius.x * cos)
                + cover.z_axis * (radius.y * sin);

            // Texture coordinates map the unit disk to the unit square.
            let rel = inner_rel + (1.0 - inner_rel) * s;
            let tu = 0.5 * rel * cos;
            let tu = if cover.mirror_u { 0.5 - tu } else { 0.5 + tu };
            let tex_coord = TexCoord::new(tu, 0.5 + 0.5 * rel * sin);

            mesh.add_vertex(position, cover.normal, tex_coord);
        }
    }

    if has_center {
        let center = base;
        let ring_start = base + 1;

        for i in 0..cover.segments {
            let a = ring_start + i;
            let b = a + 1;

            if ccw {
                mesh.add_triangle(center, b, a);
            } else {
                mesh.add_triangle(center, a, b);
            }
        }
    }

    let first_quad_ring = base + first_ring;
    let num_quad_rings = cover.rings - first_ring;

    for ring in 0..num_quad_rings {
        for i in 0..cover.segments {
            let inner = ring * column + i;
            let outer = inner + column;
            let quad = if ccw {
                [inner, inner + 1, outer + 1, outer]
            } else {
                [inner, outer, outer + 1, inner + 1]
            };

            push_quad_indices(mesh, quad, (i, ring), alternate_grid, first_quad_ring);
        }
    }
}
