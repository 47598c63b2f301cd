use core::iter::IntoIterator;

use crate::bounding_volume::Aabb;
use crate::math::{HomogeneousMatrix, Point, Real};

/// Computes the AABB of a set of points transformed by the homogeneous matrix `m`.
pub fn point_cloud_aabb<'a, I>(m: &HomogeneousMatrix<Real>, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    local_point_cloud_aabb(pts.into_iter().map(|pt| m.transform_point(pt)))
}

/// Computes the AABB of a set of points.
///
/// An empty set yields [`Aabb::new_invalid`].
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut aabb = Aabb::new_invalid();

    for pt in pts {
        aabb.take_point(pt);
    }

    aabb
}

/// Computes the AABB of the points `position` extracts from `items`, by splitting
/// `items` into `num_tasks` contiguous chunks bounded in parallel, then merging the
/// per-chunk boxes on the calling thread.
///
/// Falls back to [`local_point_cloud_aabb`] if `num_tasks < 2` or if a task would get
/// fewer than `min_items_per_task` items.
#[cfg(feature = "parallel")]
pub fn local_point_cloud_aabb_parallel<T, F>(
    items: &[T],
    position: F,
    num_tasks: usize,
    min_items_per_task: usize,
) -> Aabb
where
    T: Sync,
    F: Fn(&T) -> Point<Real> + Sync,
{
    use rayon::prelude::*;

    if num_tasks < 2 || items.len() < num_tasks * min_items_per_task.max(1) {
        return local_point_cloud_aabb(items.iter().map(&position));
    }

    let chunk_len = items.len().div_ceil(num_tasks);
    let chunk_aabbs: Vec<Aabb> = items
        .par_chunks(chunk_len)
        .map(|chunk| local_point_cloud_aabb(chunk.iter().map(&position)))
        .collect();

    chunk_aabbs
        .iter()
        .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(aabb))
}
