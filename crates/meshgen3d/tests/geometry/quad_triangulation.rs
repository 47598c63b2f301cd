use meshgen3d::math::{Point, Real, TexCoord, Vector};
use meshgen3d::shape::TriangleMesh;
use meshgen3d::transformation::utils::push_quad_indices;
use oorandom::Rand32;

fn random_vector(rng: &mut Rand32) -> Vector<Real> {
    Vector::new(
        rng.rand_float() as Real * 2.0 - 1.0,
        rng.rand_float() as Real * 2.0 - 1.0,
        rng.rand_float() as Real * 2.0 - 1.0,
    )
}

#[test]
fn quad_triangles_cover_the_quad() {
    let mut rng = Rand32::new(99);

    for _ in 0..200 {
        // A random parallelogram: convex and planar.
        let origin = Point::from(random_vector(&mut rng));
        let (a, b) = (random_vector(&mut rng), random_vector(&mut rng));
        let quad_area = a.cross(&b).norm();
        if quad_area < 1.0e-2 {
            continue;
        }

        for alternate_grid in [false, true] {
            for cell in [(0, 0), (0, 1), (1, 0), (3, 3)] {
                let mut mesh = TriangleMesh::new();
                for pt in [origin, origin + b, origin + a + b, origin + a] {
                    mesh.add_vertex(pt, a.cross(&b).normalize(), TexCoord::zeros());
                }

                push_quad_indices(&mut mesh, [0, 1, 2, 3], cell, alternate_grid, 0);
                assert_eq!(mesh.num_triangles(), 2);

                let mut used: Vec<u32> = mesh.indices().iter().flatten().copied().collect();
                used.sort_unstable();
                used.dedup();
                assert_eq!(used, vec![0, 1, 2, 3]);

                let area: Real = mesh.triangles().map(|t| t.area()).sum();
                assert_relative_eq!(area, quad_area, max_relative = 1.0e-4);

                // Both triangles keep the orientation of the quad.
                let first = mesh.triangle(0).scaled_normal();
                let second = mesh.triangle(1).scaled_normal();
                assert!(first.dot(&second) > 0.0);
            }
        }
    }
}

#[test]
fn index_offset_is_applied() {
    let mut mesh = TriangleMesh::new();
    for _ in 0..8 {
        mesh.add_vertex(Point::origin(), Vector::y(), TexCoord::zeros());
    }

    push_quad_indices(&mut mesh, [0, 1, 2, 3], (1, 0), true, 4);
    assert_eq!(mesh.indices(), &[[4, 5, 7], [5, 6, 7]]);
}
