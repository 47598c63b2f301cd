use meshgen3d::math::{Point, Vector};
use meshgen3d::query::{clip_triangle, PlaneRelation, TriangleClip};
use meshgen3d::shape::{Plane, Triangle, TriangleMesh};
use meshgen3d::transformation::mesh_generator::{
    generate_cuboid, generate_cylinder, CuboidDescriptor, CylinderDescriptor,
};
use na::{Vector2, Vector3};

#[test]
fn unit_cuboid() {
    let descriptor = CuboidDescriptor {
        size: Vector::new(1.0, 1.0, 1.0),
        segments: Vector3::new(1, 1, 1),
        alternate_grid: false,
    };
    let mut mesh = TriangleMesh::new();
    generate_cuboid(&descriptor, &mut mesh, None);

    assert_eq!(mesh.num_vertices(), 24);
    assert_eq!(mesh.num_triangles(), 12);

    let aabb = mesh.bounding_box();
    assert_relative_eq!(aabb.mins, Point::new(-0.5, -0.5, -0.5), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point::new(0.5, 0.5, 0.5), epsilon = 1.0e-5);
}

#[test]
fn open_cylinder_mantle() {
    let descriptor = CylinderDescriptor {
        radius: Vector2::new(1.0, 1.0),
        height: 2.0,
        mantle_segments: Vector2::new(4, 1),
        top_cover_segments: 0,
        bottom_cover_segments: 0,
        alternate_grid: false,
    };
    let mut mesh = TriangleMesh::new();
    generate_cylinder(&descriptor, &mut mesh, None);

    assert_eq!(mesh.num_vertices(), (4 + 1) * (1 + 1));
    assert_eq!(mesh.num_triangles(), 4 * 2);
    assert!(mesh.vertices().iter().all(|v| v.normal.y == 0.0));
}

#[test]
fn triangle_cut_by_the_plane_x_equals_one() {
    let triangle = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    );

    // The front side is the one the normal points to: the corner at `x = 2`.
    let plane = Plane::new(Vector::x_axis(), -1.0);
    let TriangleClip::Clipped { front, back } = clip_triangle(&triangle, &plane, 1.0e-6) else {
        panic!("the triangle must be clipped");
    };
    assert_eq!((front.len(), back.len()), (3, 4));

    // Facing the origin, the quad is in front.
    let clip = clip_triangle(&triangle, &plane.flipped(), 1.0e-6);
    assert_eq!(clip.relation(), PlaneRelation::Clipped);
    let TriangleClip::Clipped { front, back } = clip else {
        unreachable!()
    };
    assert_eq!((front.len(), back.len()), (4, 3));

    for bcoords in front.iter().chain(back.iter()) {
        assert_relative_eq!(bcoords.sum(), 1.0, epsilon = 1.0e-6);
    }
}
