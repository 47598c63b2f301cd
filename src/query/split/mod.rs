pub use self::split_trimesh::clip_mesh;

mod split_trimesh;
