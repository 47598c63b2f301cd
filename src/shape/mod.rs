//! Shapes consumed and produced by the mesh generators and the mesh clipper.

pub(crate) use self::plane::classify_distance;
pub use self::plane::{Plane, PointPlaneRelation};
pub use self::triangle::Triangle;
#[cfg(feature = "parallel")]
pub use self::trimesh::MIN_VERTICES_PER_TASK;
pub use self::trimesh::{TriangleMesh, TriangleMeshError, Vertex};

mod plane;
mod triangle;
mod trimesh;
