//! Generation and triangulation of meshes.

pub use self::utils::{push_cover, push_grid_indices, push_quad_indices, Cover};

pub mod mesh_generator;
pub mod utils;
