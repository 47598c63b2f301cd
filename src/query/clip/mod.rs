//! Clipping of triangles by planes.

pub use self::clip_triangle_plane::{clip_triangle, ClippedPolygon, PlaneRelation, TriangleClip};

mod clip_triangle_plane;
