use meshgen3d::math::{Point, Real, Vector};
use meshgen3d::query::clip_mesh;
use meshgen3d::shape::{Plane, TriangleMesh};
use meshgen3d::transformation::mesh_generator::{
    CuboidDescriptor, EllipsoidDescriptor, MeshGenerator, TorusDescriptor,
};
use na::{Unit, Vector2};
use oorandom::Rand32;

fn area(mesh: &TriangleMesh) -> Real {
    mesh.triangles().map(|t| t.area()).sum()
}

fn random_plane(rng: &mut Rand32) -> Plane {
    let normal = loop {
        let dir = Vector::new(
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
            rng.rand_float() as Real - 0.5,
        );
        if let Some(normal) = Unit::try_new(dir, 1.0e-2) {
            break normal;
        }
    };
    Plane::from_point_and_normal(&Point::new(0.1, -0.05, 0.2), normal)
}

#[test]
fn clipped_halves_conserve_area() {
    let meshes = [
        EllipsoidDescriptor::default().to_trimesh(),
        TorusDescriptor {
            segments: Vector2::new(24, 12),
            ..Default::default()
        }
        .to_trimesh(),
        CuboidDescriptor {
            alternate_grid: true,
            ..Default::default()
        }
        .to_trimesh(),
    ];
    let mut rng = Rand32::new(3);

    for mesh in &meshes {
        for _ in 0..20 {
            let plane = random_plane(&mut rng);
            let (front, back) = mesh.clip(&plane, 1.0e-5);

            assert!(front.validate().is_ok());
            assert!(back.validate().is_ok());
            assert_relative_eq!(area(&front) + area(&back), area(mesh), max_relative = 1.0e-3);

            for vtx in front.vertices() {
                assert!(plane.signed_distance(&vtx.position) >= -1.0e-4);
                assert_relative_eq!(vtx.normal.norm(), 1.0, epsilon = 1.0e-3);
            }
            for vtx in back.vertices() {
                assert!(plane.signed_distance(&vtx.position) <= 1.0e-4);
            }
        }
    }
}

#[test]
fn clipping_reuses_output_buffers() {
    let mesh = CuboidDescriptor::default().to_trimesh();
    let plane = Plane::new(Vector::x_axis(), 0.0);
    let mut front = EllipsoidDescriptor::default().to_trimesh();
    let mut back = TriangleMesh::new();

    clip_mesh(&mesh, &plane, 1.0e-5, &mut front, &mut back);
    let first = (front.clone(), back.clone());
    clip_mesh(&mesh, &plane, 1.0e-5, &mut front, &mut back);
    assert_eq!((front, back), first);
}

#[test]
fn clipped_cuboid_halves_are_boxes() {
    let cuboid = CuboidDescriptor {
        size: Vector::new(2.0, 1.0, 1.0),
        ..Default::default()
    };
    let (front, back) = cuboid.to_trimesh().clip(&Plane::new(Vector::x_axis(), -0.5), 1.0e-5);

    let front_aabb = front.bounding_box();
    let back_aabb = back.bounding_box();
    assert_relative_eq!(front_aabb.mins, Point::new(0.5, -0.5, -0.5), epsilon = 1.0e-5);
    assert_relative_eq!(front_aabb.maxs, Point::new(1.0, 0.5, 0.5), epsilon = 1.0e-5);
    assert_relative_eq!(back_aabb.mins, Point::new(-1.0, -0.5, -0.5), epsilon = 1.0e-5);
    assert_relative_eq!(back_aabb.maxs, Point::new(0.5, 0.5, 0.5), epsilon = 1.0e-5);

    // The +X face and a quarter of each side face.
    assert_relative_eq!(area(&front), 1.0 + 4.0 * 0.5, epsilon = 1.0e-4);
}
