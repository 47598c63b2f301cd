//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    #[cfg(feature = "parallel")]
    pub use super::aabb_utils::local_point_cloud_aabb_parallel;
    pub use super::aabb_utils::{local_point_cloud_aabb, point_cloud_aabb};
}
