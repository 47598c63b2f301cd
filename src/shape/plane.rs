//! Definition of the plane shape.
use crate::math::{Point, Real, Vector};
use na::Unit;

/// The position of a point relative to a [`Plane`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PointPlaneRelation {
    /// The point is on the side the plane normal points toward.
    InFrontOf,
    /// The point is on the side opposite to the plane normal.
    Behind,
    /// The point lies on the plane, up to a tolerance.
    Onto,
}

/// An oriented plane, i.e., the set of points `p` such that `normal · p + distance = 0`.
///
/// The plane splits the space into a front half-space (toward which `normal` points) and
/// a back half-space.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal, pointing toward its front side.
    pub normal: Unit<Vector<Real>>,
    /// The plane's signed offset: the plane contains `-distance * normal`.
    pub distance: Real,
}

impl Plane {
    /// Builds a new plane from its normal and signed offset.
    ///
    /// The plane `x = 1` is `Plane::new(Vector::x_axis(), -1.0)`.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, distance: Real) -> Plane {
        Plane { normal, distance }
    }

    /// Builds the plane passing through `point` and oriented by `normal`.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: Unit<Vector<Real>>) -> Plane {
        Plane {
            normal,
            distance: -normal.dot(&point.coords),
        }
    }

    /// The signed distance from `point` to this plane.
    ///
    /// Positive in front of the plane, negative behind it.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.distance
    }

    /// Classifies `point` against this plane, considering it onto the plane if its
    /// distance is within `[-epsilon, epsilon]`.
    #[inline]
    pub fn classify_point(&self, point: &Point<Real>, epsilon: Real) -> PointPlaneRelation {
        classify_distance(self.signed_distance(point), epsilon)
    }

    /// The projection of `point` onto this plane.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        point - *self.normal * self.signed_distance(point)
    }

    /// The same plane with its front and back sides swapped.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: Unit::new_unchecked(-self.normal.into_inner()),
            distance: -self.distance,
        }
    }
}

#[inline]
pub(crate) fn classify_distance(dist: Real, epsilon: Real) -> PointPlaneRelation {
    if dist > epsilon {
        PointPlaneRelation::InFrontOf
    } else if dist < -epsilon {
        PointPlaneRelation::Behind
    } else {
        PointPlaneRelation::Onto
    }
}
