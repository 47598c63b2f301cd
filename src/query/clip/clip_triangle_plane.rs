use crate::math::{Real, Vector};
use crate::shape::{classify_distance, Plane, PointPlaneRelation, Triangle};
use arrayvec::ArrayVec;

/// A convex polygon resulting from the clipping of a triangle by a plane.
///
/// Each element is a barycentric coordinate relative to the vertices of the clipped
/// triangle. A triangle cut by a single plane yields at most a quadrilateral.
pub type ClippedPolygon = ArrayVec<Vector<Real>, 4>;

/// The position of a triangle relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PlaneRelation {
    /// The triangle has no vertex strictly behind the plane.
    InFrontOf,
    /// The triangle has no vertex strictly in front of the plane.
    Behind,
    /// The plane cuts the triangle.
    Clipped,
}

/// The result of [`clip_triangle`].
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleClip {
    /// No vertex is strictly behind the plane: the triangle belongs to the front side
    /// unchanged. This includes triangles lying entirely onto the plane.
    InFrontOf,
    /// No vertex is strictly in front of the plane: the triangle belongs to the back side
    /// unchanged.
    Behind,
    /// The plane cuts the triangle into two convex polygons.
    Clipped {
        /// The part of the triangle in front of the plane.
        front: ClippedPolygon,
        /// The part of the triangle behind the plane.
        back: ClippedPolygon,
    },
}

impl TriangleClip {
    /// The relation between the clipped triangle and the plane.
    pub fn relation(&self) -> PlaneRelation {
        match self {
            TriangleClip::InFrontOf => PlaneRelation::InFrontOf,
            TriangleClip::Behind => PlaneRelation::Behind,
            TriangleClip::Clipped { .. } => PlaneRelation::Clipped,
        }
    }
}

/// Clips a triangle by a plane.
///
/// A vertex closer than `epsilon` to the plane is considered to lie onto it. Such a vertex
/// is shared by both polygons of a [`TriangleClip::Clipped`] result. The polygons keep the
/// winding of `triangle`.
///
/// The front side is the half-space `plane.normal` points to. In the example below, the
/// corner beyond `x = 1` is in front and the quadrilateral is behind. Clipping by
/// [`Plane::flipped`] instead puts the quadrilateral in front.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use meshgen3d::math::{Point, Vector};
/// use meshgen3d::query::{clip_triangle, TriangleClip};
/// use meshgen3d::shape::{Plane, Triangle};
///
/// let triangle = Triangle::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(2.0, 0.0, 0.0),
///     Point::new(0.0, 2.0, 0.0),
/// );
/// let plane = Plane::new(Vector::x_axis(), -1.0);
///
/// if let TriangleClip::Clipped { front, back } = clip_triangle(&triangle, &plane, 1.0e-5) {
///     assert_eq!(front.len(), 3);
///     assert_eq!(back.len(), 4);
/// } else {
///     unreachable!();
/// }
/// # }
/// ```
pub fn clip_triangle(triangle: &Triangle, plane: &Plane, epsilon: Real) -> TriangleClip {
    let dists = triangle.vertices().map(|pt| plane.signed_distance(&pt));
    let relations = dists.map(|dist| classify_distance(dist, epsilon));

    if !relations.contains(&PointPlaneRelation::Behind) {
        return TriangleClip::InFrontOf;
    }

    if !relations.contains(&PointPlaneRelation::InFrontOf) {
        return TriangleClip::Behind;
    }

    let mut front = ClippedPolygon::new();
    let mut back = ClippedPolygon::new();

    for i in 0..3 {
        let j = (i + 1) % 3;
        let corner = Vector::ith(i, 1.0);

        match relations[i] {
            PointPlaneRelation::InFrontOf => front.push(corner),
            PointPlaneRelation::Behind => back.push(corner),
            PointPlaneRelation::Onto => {
                front.push(corner);
                back.push(corner);
            }
        }

        let crosses = matches!(
            (relations[i], relations[j]),
            (PointPlaneRelation::InFrontOf, PointPlaneRelation::Behind)
                | (PointPlaneRelation::Behind, PointPlaneRelation::InFrontOf)
        );

        if crosses {
            // Both distances are farther than `epsilon` from zero with opposite signs.
            let t = dists[i] / (dists[i] - dists[j]);
            let mut bcoords = Vector::zeros();
            bcoords[i] = 1.0 - t;
            bcoords[j] = t;
            front.push(bcoords);
            back.push(bcoords);
        }
    }

    TriangleClip::Clipped { front, back }
}
