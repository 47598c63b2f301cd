//! Axis Aligned Bounding Box.

use crate::math::{HomogeneousMatrix, Point, Real, Vector, DIM};
use num::Bounded;

/// An Axis-Aligned Bounding Box.
///
/// An AABB is the tightest box, aligned with the coordinate axes, that encloses a set of
/// points. It is represented by its two opposite corners `mins` and `maxs`.
///
/// The mesh generators use it to report the extent of what they produced (see
/// [`TriangleMesh::bounding_box`](crate::shape::TriangleMesh::bounding_box)), and
/// renderers or animation code downstream use it for culling.
///
/// # Invariant
///
/// A valid AABB satisfies `mins[i] <= maxs[i]` for every axis `i`. The box returned by
/// [`Aabb::new_invalid`] purposely breaks this invariant so that it can be used as the
/// neutral element of [`Aabb::take_point`] and [`Aabb::merge`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use meshgen3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let mut aabb = Aabb::new_invalid();
/// aabb.take_point(Point3::new(1.0, 2.0, 3.0));
/// aabb.take_point(Point3::new(-1.0, 0.0, 2.0));
///
/// assert_eq!(aabb.mins, Point3::new(-1.0, 0.0, 2.0));
/// assert_eq!(aabb.maxs, Point3::new(1.0, 2.0, 3.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// The resulting AABB has `mins` set to maximum values and `maxs` set to
    /// minimum values. Inserting any point into it yields the AABB of that single point.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Does this AABB satisfy `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// Returns the full extents (size) of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this AABB so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// Returns the smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Computes the AABB enclosing the eight corners of `self` once transformed by the
    /// homogeneous matrix `m`.
    ///
    /// Note that the result is generally larger than the AABB of the transformed content
    /// of `self`. Use [`TriangleMesh::bounding_box_transformed`](crate::shape::TriangleMesh::bounding_box_transformed)
    /// to get a tight box for a mesh.
    pub fn transform_by(&self, m: &HomogeneousMatrix<Real>) -> Self {
        Self::from_points(self.vertices().iter().map(|pt| m.transform_point(pt)))
    }

    /// Checks whether this AABB contains a point, boundary included.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the vertices of this AABB.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new_invalid()
    }
}
