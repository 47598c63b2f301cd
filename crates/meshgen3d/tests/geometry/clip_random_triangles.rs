use meshgen3d::math::{Point, Real, Vector};
use meshgen3d::query::{clip_triangle, ClippedPolygon, PlaneRelation, TriangleClip};
use meshgen3d::shape::{Plane, Triangle};
use na::Unit;
use oorandom::Rand32;

const EPSILON: Real = 1.0e-5;

fn random_point(rng: &mut Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    )
}

fn random_plane(rng: &mut Rand32) -> Plane {
    let normal = loop {
        let dir = random_point(rng).coords;
        if let Some(normal) = Unit::try_new(dir, 1.0e-3) {
            break normal;
        }
    };
    Plane::new(normal, rng.rand_float() as Real * 2.0 - 1.0)
}

fn polygon_points(triangle: &Triangle, polygon: &ClippedPolygon) -> Vec<Point<Real>> {
    polygon.iter().map(|b| triangle.point_at(b)).collect()
}

fn polygon_area(points: &[Point<Real>]) -> Real {
    (1..points.len() - 1)
        .map(|k| Triangle::new(points[0], points[k], points[k + 1]).area())
        .sum()
}

#[test]
fn clipping_conserves_area_and_sides() {
    let mut rng = Rand32::new(42);
    let mut num_clipped = 0;

    for _ in 0..1000 {
        let triangle = Triangle::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        let plane = random_plane(&mut rng);

        match clip_triangle(&triangle, &plane, EPSILON) {
            TriangleClip::Clipped { front, back } => {
                num_clipped += 1;
                assert!((3..=4).contains(&front.len()));
                assert!((3..=4).contains(&back.len()));

                for bcoords in front.iter().chain(back.iter()) {
                    assert_relative_eq!(bcoords.sum(), 1.0, epsilon = 1.0e-5);
                    assert!(bcoords.iter().all(|w| *w >= -1.0e-5));
                }

                let front = polygon_points(&triangle, &front);
                let back = polygon_points(&triangle, &back);

                for pt in &front {
                    assert!(plane.signed_distance(pt) >= -1.0e-4);
                }
                for pt in &back {
                    assert!(plane.signed_distance(pt) <= 1.0e-4);
                }

                let total = polygon_area(&front) + polygon_area(&back);
                assert_relative_eq!(total, triangle.area(), epsilon = 1.0e-3, max_relative = 1.0e-3);
            }
            TriangleClip::InFrontOf => {
                for pt in triangle.vertices() {
                    assert!(plane.signed_distance(&pt) >= -EPSILON);
                }
            }
            TriangleClip::Behind => {
                for pt in triangle.vertices() {
                    assert!(plane.signed_distance(&pt) <= EPSILON);
                }
            }
        }
    }

    assert!(num_clipped > 100);
}

#[test]
fn reclipping_a_part_keeps_it_on_its_side() {
    let mut rng = Rand32::new(7);

    for _ in 0..500 {
        let triangle = Triangle::new(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        let plane = random_plane(&mut rng);

        if let TriangleClip::Clipped { front, back } = clip_triangle(&triangle, &plane, EPSILON) {
            for (polygon, expected) in [
                (front, PlaneRelation::InFrontOf),
                (back, PlaneRelation::Behind),
            ] {
                let points = polygon_points(&triangle, &polygon);
                for k in 1..points.len() - 1 {
                    let part = Triangle::new(points[0], points[k], points[k + 1]);
                    // Slivers lying onto the plane always go to the front.
                    if part
                        .vertices()
                        .iter()
                        .all(|pt| plane.signed_distance(pt).abs() <= 1.0e-3)
                    {
                        continue;
                    }

                    let relation = clip_triangle(&part, &plane, 1.0e-3).relation();
                    assert_eq!(relation, expected);
                }
            }
        }
    }
}

#[test]
fn far_triangles_are_not_clipped() {
    let mut rng = Rand32::new(1234);
    let plane = Plane::new(Vector::y_axis(), 0.0);

    for _ in 0..100 {
        let offset = Vector::new(0.0, 3.0, 0.0);
        let triangle = Triangle::new(
            random_point(&mut rng) + offset,
            random_point(&mut rng) + offset,
            random_point(&mut rng) + offset,
        );
        let mirrored = Triangle::new(
            triangle.a - offset * 2.0,
            triangle.b - offset * 2.0,
            triangle.c - offset * 2.0,
        );

        assert_eq!(clip_triangle(&triangle, &plane, EPSILON), TriangleClip::InFrontOf);
        assert_eq!(clip_triangle(&mirrored, &plane, EPSILON), TriangleClip::Behind);
    }
}
