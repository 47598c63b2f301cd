use meshgen3d::math::{Point, Real, Vector};
use meshgen3d::shape::TriangleMesh;
use meshgen3d::transformation::mesh_generator::*;
use meshgen3d::utils::hashmap::HashMap;
use meshgen3d::utils::SortedPair;
use na::{ComplexField, Vector2, Vector3};

fn boxed(
    name: &'static str,
    generator: impl MeshGenerator + 'static,
) -> (&'static str, Box<dyn MeshGenerator>) {
    (name, Box::new(generator))
}

fn all_generators() -> Vec<(&'static str, Box<dyn MeshGenerator>)> {
    vec![
        boxed("cuboid", CuboidDescriptor::default()),
        boxed("ellipsoid", EllipsoidDescriptor::default()),
        boxed("cylinder", CylinderDescriptor::default()),
        boxed("cone", ConeDescriptor::default()),
        boxed("pipe", PipeDescriptor::default()),
        boxed("torus", TorusDescriptor::default()),
        boxed("torus knot", TorusKnotDescriptor::default()),
        boxed("spiral", SpiralDescriptor::default()),
        boxed("pie", PieDescriptor::default()),
        boxed("capsule", CapsuleDescriptor::default()),
        boxed("bezier patch", BezierPatchDescriptor::default()),
        boxed(
            "curve",
            CurveDescriptor::default().with_curve(|t: Real| {
                Point::new(ComplexField::cos(t * 3.0), t, ComplexField::sin(t * 3.0))
            }),
        ),
    ]
}

fn edge_uses(indices: &[[u32; 3]]) -> HashMap<SortedPair<u32>, usize> {
    let mut uses = HashMap::default();

    for idx in indices {
        for k in 0..3 {
            *uses
                .entry(SortedPair::new(idx[k], idx[(k + 1) % 3]))
                .or_insert(0) += 1;
        }
    }

    uses
}

// Index buffer of `mesh` once the vertices sharing a position are merged. The triangles
// collapsing in the process, like those touching a pole, are dropped.
fn welded_indices(mesh: &TriangleMesh) -> Vec<[u32; 3]> {
    let vertices = mesh.vertices();
    let mut welded: Vec<u32> = Vec::with_capacity(vertices.len());

    for (i, vtx) in vertices.iter().enumerate() {
        let id = vertices[..i]
            .iter()
            .position(|other| na::distance(&other.position, &vtx.position) < 1.0e-4)
            .map(|j| welded[j])
            .unwrap_or(i as u32);
        welded.push(id);
    }

    mesh.indices()
        .iter()
        .map(|idx| idx.map(|i| welded[i as usize]))
        .filter(|idx| idx[0] != idx[1] && idx[1] != idx[2] && idx[2] != idx[0])
        .collect()
}

#[test]
fn generated_meshes_are_valid() {
    for (name, generator) in all_generators() {
        let mesh = generator.to_trimesh();
        assert!(!mesh.is_empty(), "{} is empty", name);
        assert!(mesh.validate().is_ok(), "{} has invalid indices", name);

        for vtx in mesh.vertices() {
            assert!(
                vtx.position.coords.iter().all(|x| x.is_finite()),
                "{} has a non-finite position",
                name
            );
            assert_relative_eq!(vtx.normal.norm(), 1.0, epsilon = 1.0e-4);
            assert!(vtx.tex_coord.iter().all(|x| (-1.0e-5..=1.0 + 1.0e-5).contains(x)));
        }
    }
}

#[test]
fn generators_append_to_existing_meshes() {
    for (name, generator) in all_generators() {
        let alone = generator.to_trimesh();
        let mut mesh = CuboidDescriptor::default().to_trimesh();
        let offset = mesh.num_vertices() as u32;
        generator.generate(&mut mesh);

        assert!(mesh.validate().is_ok(), "{}", name);
        assert_eq!(&mesh.vertices()[offset as usize..], alone.vertices());
        for (a, b) in mesh.indices()[12..].iter().zip(alone.indices()) {
            assert_eq!(*a, [b[0] + offset, b[1] + offset, b[2] + offset]);
        }
    }
}

#[test]
fn edges_are_shared_by_at_most_two_triangles() {
    for (name, generator) in all_generators() {
        let mesh = generator.to_trimesh();
        for (edge, count) in edge_uses(mesh.indices()) {
            assert!(count <= 2, "{}: edge {:?} used {} times", name, *edge, count);
        }
    }
}

#[test]
fn closed_grids_only_open_on_seams() {
    // The torus grid is periodic in both directions: its open edges are the seam columns
    // and rows, whose endpoints coincide with the opposite seam.
    let torus = TorusDescriptor {
        segments: Vector2::new(12, 6),
        ..Default::default()
    };
    let mesh = torus.to_trimesh();

    for (edge, count) in edge_uses(mesh.indices()) {
        if count == 1 {
            let (a, b) = *edge;
            let (ua, va) = (a / 7, a % 7);
            let (ub, vb) = (b / 7, b % 7);
            let on_u_seam = (ua == ub) && (ua == 0 || ua == 12);
            let on_v_seam = (va == vb) && (va == 0 || va == 6);
            assert!(on_u_seam || on_v_seam, "open edge ({}, {}) off the seams", a, b);
        }
    }
}

#[test]
fn closed_surfaces_are_watertight() {
    let closed = vec![
        boxed("cuboid", CuboidDescriptor::default()),
        boxed(
            "ellipsoid",
            EllipsoidDescriptor {
                radius: Vector::new(1.0, 2.0, 0.5),
                segments: Vector2::new(16, 9),
                alternate_grid: true,
            },
        ),
        boxed(
            "cylinder",
            CylinderDescriptor {
                mantle_segments: Vector2::new(12, 3),
                top_cover_segments: 2,
                bottom_cover_segments: 1,
                ..Default::default()
            },
        ),
        boxed("cone", ConeDescriptor::default()),
        boxed("pipe", PipeDescriptor::default()),
        boxed("torus", TorusDescriptor::default()),
        boxed("pie", PieDescriptor::default()),
        boxed(
            "capsule",
            CapsuleDescriptor {
                mantle_segments: Vector2::new(10, 2),
                ellipsoid_segments: 4,
                ..Default::default()
            },
        ),
    ];

    for (name, generator) in closed {
        let indices = welded_indices(&generator.to_trimesh());
        assert!(!indices.is_empty(), "{} collapsed entirely", name);

        for (edge, count) in edge_uses(&indices) {
            assert_eq!(count, 2, "{}: edge {:?} used {} times", name, *edge, count);
        }
    }
}

#[test]
fn uncapped_cylinder_only_open_on_rims() {
    let cylinder = CylinderDescriptor {
        height: 2.0,
        mantle_segments: Vector2::new(12, 3),
        top_cover_segments: 0,
        bottom_cover_segments: 0,
        ..Default::default()
    };
    let mesh = cylinder.to_trimesh();
    let indices = welded_indices(&mesh);
    let mut num_open = 0;

    for (edge, count) in edge_uses(&indices) {
        assert!(count <= 2);

        if count == 1 {
            let (a, b) = *edge;
            let (ya, yb) = (mesh.vertex(a).position.y, mesh.vertex(b).position.y);
            assert_relative_eq!(ya.abs(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(ya, yb, epsilon = 1.0e-5);
            num_open += 1;
        }
    }

    assert_eq!(num_open, 2 * 12);
}

#[test]
fn segment_clamping_is_idempotent() {
    fn check<G: MeshGenerator>(low: G, minimum: G) {
        assert_eq!(low.to_trimesh(), minimum.to_trimesh());
    }

    check(
        EllipsoidDescriptor {
            segments: Vector2::new(0, 1),
            ..Default::default()
        },
        EllipsoidDescriptor {
            segments: Vector2::new(3, 2),
            ..Default::default()
        },
    );
    check(
        ConeDescriptor {
            mantle_segments: Vector2::new(2, 0),
            ..Default::default()
        },
        ConeDescriptor {
            mantle_segments: Vector2::new(3, 1),
            ..Default::default()
        },
    );
    check(
        CapsuleDescriptor {
            mantle_segments: Vector2::new(0, 0),
            ellipsoid_segments: 0,
            ..Default::default()
        },
        CapsuleDescriptor {
            mantle_segments: Vector2::new(3, 1),
            ellipsoid_segments: 2,
            ..Default::default()
        },
    );
    check(
        CuboidDescriptor {
            segments: Vector3::new(0, 0, 0),
            ..Default::default()
        },
        CuboidDescriptor::default(),
    );
    check(
        SpiralDescriptor {
            segments: Vector2::new(1, 1),
            ..Default::default()
        },
        SpiralDescriptor {
            segments: Vector2::new(3, 3),
            ..Default::default()
        },
    );
}

#[test]
fn bounding_boxes_are_tight() {
    let cuboid = CuboidDescriptor {
        size: Vector::new(2.0, 4.0, 6.0),
        segments: Vector3::new(2, 3, 4),
        alternate_grid: true,
    };
    let aabb = cuboid.to_trimesh().bounding_box();
    assert_relative_eq!(aabb.mins, Point::new(-1.0, -2.0, -3.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point::new(1.0, 2.0, 3.0), epsilon = 1.0e-5);

    // With even segment counts the samples hit the extremities of the ellipsoid.
    let ellipsoid = EllipsoidDescriptor {
        radius: Vector::new(1.0, 2.0, 3.0),
        segments: Vector2::new(20, 10),
        alternate_grid: false,
    };
    let mesh = ellipsoid.to_trimesh();
    let aabb = mesh.bounding_box();
    assert_relative_eq!(aabb.mins, Point::new(-1.0, -2.0, -3.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point::new(1.0, 2.0, 3.0), epsilon = 1.0e-5);
    assert!(mesh
        .vertices()
        .iter()
        .all(|vtx| aabb.contains_local_point(&vtx.position)));
}
