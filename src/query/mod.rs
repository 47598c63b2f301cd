//! Non-persistent geometric queries.
//!
//! * [`clip_triangle`] clips a single triangle by a plane, in barycentric coordinates.
//! * [`clip_mesh`] and [`TriangleMesh::clip`](crate::shape::TriangleMesh::clip) clip a whole
//!   triangle mesh by a plane, interpolating the vertex attributes.

pub use self::clip::{clip_triangle, ClippedPolygon, PlaneRelation, TriangleClip};
pub use self::split::clip_mesh;

mod clip;
mod split;
