//! Procedural triangle mesh generation.
//!
//! Each shape is described by a plain descriptor struct with documented defaults. Every
//! descriptor implements [`MeshGenerator`], which samples the shape on a regular `(u, v)`
//! grid and appends the resulting vertices (position, normal, texture coordinates) and
//! triangles to a [`TriangleMesh`].
//!
//! All shapes are centered on the origin, with +Y as their axis of revolution. Triangles are
//! counter-clockwise when seen from outside the shape.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")]
//! # {
//! use meshgen3d::math::Point;
//! use meshgen3d::transformation::mesh_generator::{CuboidDescriptor, MeshGenerator};
//!
//! let cuboid = CuboidDescriptor::default();
//! let mesh = cuboid.to_trimesh();
//!
//! assert_eq!(mesh.num_vertices(), 24);
//! assert_eq!(mesh.num_triangles(), 12);
//! let aabb = mesh.bounding_box();
//! assert!((aabb.maxs - Point::new(0.5, 0.5, 0.5)).norm() < 1.0e-5);
//! # }
//! ```
//!
//! # Vertex modifiers
//!
//! [`MeshGenerator::generate_with`] accepts a [`VertexModifier`]: a function of the grid
//! coordinates `(u, v) ∈ [0, 1]²` returning a factor applied to the radial displacement of
//! each sample (`1.0` leaves the shape unchanged). This sculpts irregular variants of a shape
//! without changing its topology. Normals are not recomputed.

pub use self::bezier_patch_generator::{BezierNormals, BezierPatchDescriptor};
pub use self::capsule_generator::CapsuleDescriptor;
pub use self::cone_generator::ConeDescriptor;
pub use self::cuboid_generator::CuboidDescriptor;
pub use self::curve_generator::{CurveDescriptor, CurveSweep, FrameMode};
pub use self::cylinder_generator::CylinderDescriptor;
pub use self::ellipsoid_generator::EllipsoidDescriptor;
pub use self::pie_generator::PieDescriptor;
pub use self::pipe_generator::PipeDescriptor;
pub use self::spiral_generator::SpiralDescriptor;
pub use self::torus_generator::TorusDescriptor;
pub use self::torus_knot_generator::TorusKnotDescriptor;

use crate::math::{Point, Real};
use crate::shape::TriangleMesh;

mod bezier_patch_generator;
mod capsule_generator;
mod cone_generator;
mod cuboid_generator;
mod curve_generator;
mod cylinder_generator;
mod ellipsoid_generator;
mod pie_generator;
mod pipe_generator;
mod revolution;
mod spiral_generator;
mod torus_generator;
mod torus_knot_generator;

/// A function of the grid coordinates `(u, v) ∈ [0, 1]²` returning a displacement factor.
pub type VertexModifier = dyn Fn(Real, Real) -> Real;

/// A shape descriptor that can be sampled into a triangle mesh.
pub trait MeshGenerator {
    /// Appends the vertices and triangles of this shape to `mesh`, displacing each sample
    /// by the factor returned by `modifier`, if any.
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>);

    /// Appends the vertices and triangles of this shape to `mesh`.
    fn generate(&self, mesh: &mut TriangleMesh) {
        self.generate_with(mesh, None)
    }

    /// Generates a new triangle mesh for this shape.
    fn to_trimesh(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::new();
        self.generate(&mut mesh);
        mesh
    }
}

#[inline]
pub(crate) fn modifier_factor(modifier: Option<&VertexModifier>, u: Real, v: Real) -> Real {
    modifier.map(|f| f(u, v)).unwrap_or(1.0)
}

macro_rules! impl_generate_fn {
    ($($name: ident => $descriptor: ty, $shape: literal);* $(;)*) => {$(
        #[doc = concat!("Appends ", $shape, " described by `descriptor` to `mesh`.")]
        pub fn $name(
            descriptor: &$descriptor,
            mesh: &mut TriangleMesh,
            modifier: Option<&VertexModifier>,
        ) {
            descriptor.generate_with(mesh, modifier)
        }
    )*}
}

impl_generate_fn!(
    generate_cuboid => CuboidDescriptor, "a cuboid";
    generate_ellipsoid => EllipsoidDescriptor, "an ellipsoid";
    generate_cylinder => CylinderDescriptor, "a cylinder";
    generate_cone => ConeDescriptor, "a cone";
    generate_pipe => PipeDescriptor, "a pipe";
    generate_torus => TorusDescriptor, "a torus";
    generate_torus_knot => TorusKnotDescriptor, "a torus knot";
    generate_spiral => SpiralDescriptor, "a spiral";
    generate_pie => PieDescriptor, "a pie";
    generate_capsule => CapsuleDescriptor, "a capsule";
    generate_bezier_patch => BezierPatchDescriptor, "a Bezier patch";
);

/// Appends a tube swept along `curve` to `mesh`.
///
/// The curve is sampled at `t ∈ [0, 1]`.
pub fn generate_curve(
    descriptor: &CurveDescriptor,
    curve: impl Fn(Real) -> Point<Real>,
    mesh: &mut TriangleMesh,
    modifier: Option<&VertexModifier>,
) {
    descriptor.generate_along(curve, mesh, modifier)
}
