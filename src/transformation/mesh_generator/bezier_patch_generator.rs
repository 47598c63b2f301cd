use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::TriangleMesh;
use crate::transformation::utils;
use na::{DMatrix, Vector2};

/// The finite difference step used to estimate the tangents of a Bezier patch.
const FINITE_DIFFERENCE_STEP: Real = 1.0e-3;

/// How the normals of a [`BezierPatchDescriptor`] are computed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BezierNormals {
    /// Central differences of the surface, with a step of `1e-3` in parameter space.
    #[default]
    FiniteDifference,
    /// Exact partial derivatives of the Bernstein polynomials.
    Analytic,
}

/// Describes a tensor-product Bezier surface.
///
/// The control points are stored in a matrix where each row is a curve along `u` and each
/// column a curve along `v`. The surface faces `∂P/∂u × ∂P/∂v`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BezierPatchDescriptor {
    /// The control net. `(i, j)` is the `j`-th point along `u` of the `i`-th row along `v`.
    pub control_points: DMatrix<Point<Real>>,
    /// The number of subdivisions along `u` (`x`) and `v` (`y`).
    pub segments: Vector2<u32>,
    /// How the vertex normals are computed.
    pub normals: BezierNormals,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for BezierPatchDescriptor {
    /// A flat unit square of the XZ plane, facing +Y, with a 4x4 control net.
    fn default() -> Self {
        Self {
            control_points: DMatrix::from_fn(4, 4, |i, j| {
                Point::new(-0.5 + j as Real / 3.0, 0.0, 0.5 - i as Real / 3.0)
            }),
            segments: Vector2::new(10, 10),
            normals: BezierNormals::FiniteDifference,
            alternate_grid: false,
        }
    }
}

impl BezierPatchDescriptor {
    /// The point of the surface at the parameters `(u, v) ∈ [0, 1]²`.
    pub fn point_at(&self, u: Real, v: Real) -> Point<Real> {
        self.blend(u, v, bernstein, bernstein)
    }

    /// The partial derivatives `(∂P/∂u, ∂P/∂v)` of the surface at `(u, v)`.
    pub fn derivatives_at(&self, u: Real, v: Real) -> (Vector<Real>, Vector<Real>) {
        let du = self.blend(u, v, bernstein_derivative, bernstein).coords;
        let dv = self.blend(u, v, bernstein, bernstein_derivative).coords;
        (du, dv)
    }

    /// Sums the control points weighted by `basis_u(degree_u, j, u) * basis_v(degree_v, i, v)`.
    fn blend(
        &self,
        u: Real,
        v: Real,
        basis_u: fn(usize, usize, Real) -> Real,
        basis_v: fn(usize, usize, Real) -> Real,
    ) -> Point<Real> {
        let (nrows, ncols) = self.control_points.shape();
        let mut result = Vector::zeros();

        for i in 0..nrows {
            let wv = basis_v(nrows - 1, i, v);
            if wv == 0.0 {
                continue;
            }

            for j in 0..ncols {
                result += self.control_points[(i, j)].coords * (wv * basis_u(ncols - 1, j, u));
            }
        }

        Point::from(result)
    }

    fn tangents_at(&self, u: Real, v: Real) -> (Vector<Real>, Vector<Real>) {
        match self.normals {
            BezierNormals::Analytic => self.derivatives_at(u, v),
            BezierNormals::FiniteDifference => {
                let h = FINITE_DIFFERENCE_STEP;
                let (u0, u1) = ((u - h).max(0.0), (u + h).min(1.0));
                let (v0, v1) = ((v - h).max(0.0), (v + h).min(1.0));
                let du = self.point_at(u1, v) - self.point_at(u0, v);
                let dv = self.point_at(u, v1) - self.point_at(u, v0);
                (du, dv)
            }
        }
    }
}

impl MeshGenerator for BezierPatchDescriptor {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        if self.control_points.is_empty() {
            log::warn!("Cannot generate a Bezier patch without control points.");
            return;
        }

        let segments_u = utils::clamp_segments("bezier patch segments.x", self.segments.x, 1);
        let segments_v = utils::clamp_segments("bezier patch segments.y", self.segments.y, 1);
        let base = mesh.num_vertices() as u32;

        for i in 0..=segments_u {
            let u = i as Real / segments_u as Real;

            for j in 0..=segments_v {
                let v = j as Real / segments_v as Real;
                let (du, dv) = self.tangents_at(u, v);
                let normal = utils::normalize_or(du.cross(&dv), Vector::y());
                let offset = modifier_factor(modifier, u, v) - 1.0;
                let position = self.point_at(u, v) + normal * offset;
                mesh.add_vertex(position, normal, TexCoord::new(u, v));
            }
        }

        utils::push_grid_indices(
            mesh,
            base,
            segments_u,
            segments_v,
            self.alternate_grid,
            true,
        );
    }
}

fn binomial(n: usize, k: usize) -> Real {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as Real / (i + 1) as Real)
}

/// The Bernstein polynomial `b_{i,n}(t)`.
fn bernstein(n: usize, i: usize, t: Real) -> Real {
    if i > n {
        return 0.0;
    }

    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

fn bernstein_derivative(n: usize, i: usize, t: Real) -> Real {
    if n == 0 {
        return 0.0;
    }

    let left = if i == 0 { 0.0 } else { bernstein(n - 1, i - 1, t) };
    n as Real * (left - bernstein(n - 1, i, t))
}

#[cfg(test)]
mod test {
    use super::{bernstein, BezierNormals, BezierPatchDescriptor};
    use crate::math::{Point, Real};
    use crate::shape::TriangleMesh;
    use crate::transformation::mesh_generator::MeshGenerator;
    use na::{DMatrix, Vector2};

    fn dome() -> BezierPatchDescriptor {
        BezierPatchDescriptor {
            control_points: DMatrix::from_fn(3, 3, |i, j| {
                let y = if i == 1 && j == 1 { 1.0 } else { 0.0 };
                Point::new(j as Real - 1.0, y, 1.0 - i as Real)
            }),
            segments: Vector2::new(8, 8),
            ..Default::default()
        }
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for n in 0..6 {
            for k in 0..=10 {
                let t = k as Real / 10.0;
                let sum: Real = (0..=n).map(|i| bernstein(n, i, t)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1.0e-5);
            }
        }
    }

    #[test]
    fn flat_patch() {
        let patch = BezierPatchDescriptor::default();
        let mesh = patch.to_trimesh();
        assert_eq!(mesh.num_vertices(), 11 * 11);
        assert_eq!(mesh.num_triangles(), 2 * 10 * 10);

        let aabb = mesh.bounding_box();
        assert_relative_eq!(aabb.mins, Point::new(-0.5, 0.0, -0.5), epsilon = 1.0e-5);
        assert_relative_eq!(aabb.maxs, Point::new(0.5, 0.0, 0.5), epsilon = 1.0e-5);

        for vtx in mesh.vertices() {
            assert_relative_eq!(vtx.normal.y, 1.0, epsilon = 1.0e-4);
        }
        for triangle in mesh.triangles() {
            assert!(triangle.normal().unwrap().y > 0.99);
        }
    }

    #[test]
    fn corners_interpolate_the_control_net() {
        let patch = dome();
        let net = &patch.control_points;
        assert_relative_eq!(patch.point_at(0.0, 0.0), net[(0, 0)], epsilon = 1.0e-6);
        assert_relative_eq!(patch.point_at(1.0, 0.0), net[(0, 2)], epsilon = 1.0e-6);
        assert_relative_eq!(patch.point_at(0.0, 1.0), net[(2, 0)], epsilon = 1.0e-6);
        assert_relative_eq!(patch.point_at(1.0, 1.0), net[(2, 2)], epsilon = 1.0e-6);
        assert_relative_eq!(patch.point_at(0.5, 0.5).y, 0.25, epsilon = 1.0e-6);
    }

    #[test]
    fn finite_difference_normals_match_analytic_ones() {
        let approximated = dome().to_trimesh();
        let analytic = BezierPatchDescriptor {
            normals: BezierNormals::Analytic,
            ..dome()
        }
        .to_trimesh();

        for (a, b) in approximated.vertices().iter().zip(analytic.vertices()) {
            assert_eq!(a.position, b.position);
            assert!(a.normal.dot(&b.normal) > 0.999);
        }
    }

    #[test]
    fn modifier_offsets_along_the_normal() {
        let patch = BezierPatchDescriptor::default();
        let mut mesh = TriangleMesh::new();
        let modifier = |_: Real, _: Real| 1.5;
        patch.generate_with(&mut mesh, Some(&modifier));
        assert!(mesh
            .vertices()
            .iter()
            .all(|v| (v.position.y - 0.5).abs() < 1.0e-4));

        let mut empty = TriangleMesh::new();
        BezierPatchDescriptor {
            control_points: DMatrix::from_element(0, 0, Point::origin()),
            ..Default::default()
        }
        .generate(&mut empty);
        assert!(empty.is_empty());
    }
}
