use super::{modifier_factor, MeshGenerator, VertexModifier};
use crate::math::{Point, Real, TexCoord, Vector, DEFAULT_EPSILON};
use crate::shape::TriangleMesh;
use crate::transformation::utils::{self, Cover};
use na::{ComplexField, RealField, Vector2};

/// How the cross-section of a swept tube is oriented along its centerline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FrameMode {
    /// Each ring reuses the normal of the previous ring, projected onto the plane orthogonal
    /// to the new tangent.
    ///
    /// This is cheap but only approximates a parallel transport: the cross-section may
    /// visibly twist along curves with a high curvature.
    #[default]
    Projected,
    /// Rotation-minimizing frames computed with the double reflection method.
    RotationMinimizing,
}

/// Describes a tube of constant radius swept along a parametric curve.
///
/// The curve itself is given when generating, see [`CurveDescriptor::generate_along`],
/// [`CurveDescriptor::generate_along_points`], and [`CurveDescriptor::with_curve`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CurveDescriptor {
    /// The radius of the tube.
    pub radius: Real,
    /// The number of subdivisions along the curve (`x`) and around the tube (`y`).
    pub segments: Vector2<u32>,
    /// Whether the end of the curve joins its start.
    pub closed: bool,
    /// The total rotation of the cross-section around the curve, in radians.
    pub twist: Real,
    /// How the cross-section is oriented along the curve.
    pub frame: FrameMode,
    /// The number of concentric rings of the cover at the start of an open tube.
    pub start_cover_segments: u32,
    /// The number of concentric rings of the cover at the end of an open tube.
    pub end_cover_segments: u32,
    /// Alternate the quad diagonals in a checkerboard pattern.
    pub alternate_grid: bool,
}

impl Default for CurveDescriptor {
    fn default() -> Self {
        Self {
            radius: 0.25,
            segments: Vector2::new(32, 12),
            closed: false,
            twist: 0.0,
            frame: FrameMode::Projected,
            start_cover_segments: 1,
            end_cover_segments: 1,
            alternate_grid: false,
        }
    }
}

/// A [`CurveDescriptor`] bundled with its centerline.
#[derive(Clone, Debug)]
pub struct CurveSweep<F> {
    /// The description of the tube.
    pub descriptor: CurveDescriptor,
    /// The centerline of the tube, sampled at `t ∈ [0, 1]`.
    pub curve: F,
}

impl<F: Fn(Real) -> Point<Real>> MeshGenerator for CurveSweep<F> {
    fn generate_with(&self, mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        self.descriptor.generate_along(&self.curve, mesh, modifier)
    }
}

/// The orthonormal frame of one ring of a tube.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TubeFrame {
    pub center: Point<Real>,
    pub tangent: Vector<Real>,
    pub normal: Vector<Real>,
    pub binormal: Vector<Real>,
}

impl CurveDescriptor {
    fn min_segments_u(&self) -> u32 {
        if self.closed {
            3
        } else {
            1
        }
    }

    /// Bundles this descriptor with a centerline so it can be used as a [`MeshGenerator`].
    pub fn with_curve<F: Fn(Real) -> Point<Real>>(self, curve: F) -> CurveSweep<F> {
        CurveSweep {
            descriptor: self,
            curve,
        }
    }

    /// Appends a tube swept along `curve` to `mesh`.
    ///
    /// The curve is sampled `segments.x + 1` times, evenly over `t ∈ [0, 1]`. A closed
    /// curve is expected to satisfy `curve(0) == curve(1)`.
    pub fn generate_along(
        &self,
        curve: impl Fn(Real) -> Point<Real>,
        mesh: &mut TriangleMesh,
        modifier: Option<&VertexModifier>,
    ) {
        let segments_u = utils::clamp_segments("curve segments.x", self.segments.x, self.min_segments_u());
        let mut points: Vec<_> = (0..=segments_u)
            .map(|i| curve(i as Real / segments_u as Real))
            .collect();

        if self.closed {
            points[segments_u as usize] = points[0];
        }

        self.sweep(&points, mesh, modifier);
    }

    /// Appends a tube swept along the polyline `points` to `mesh`.
    ///
    /// `segments.x` is ignored: the tube has one ring per point. A closed polyline is joined
    /// back to its first point.
    pub fn generate_along_points(
        &self,
        points: &[Point<Real>],
        mesh: &mut TriangleMesh,
        modifier: Option<&VertexModifier>,
    ) {
        let mut points = points.to_vec();

        if self.closed && points.len() > 1 && points.first() != points.last() {
            points.push(points[0]);
        }

        if points.len() < self.min_segments_u() as usize + 1 {
            log::warn!(
                "Cannot sweep a tube along {} points, at least {} are needed.",
                points.len(),
                self.min_segments_u() + 1
            );
            return;
        }

        self.sweep(&points, mesh, modifier);
    }

    fn sweep(&self, points: &[Point<Real>], mesh: &mut TriangleMesh, modifier: Option<&VertexModifier>) {
        let segments_u = points.len() as u32 - 1;
        let segments_v = utils::clamp_segments("curve segments.y", self.segments.y, 3);
        let mut frames = self.frames(points);

        if self.closed {
            frames[segments_u as usize] = frames[0];
        }

        push_tube(
            mesh,
            &frames,
            self.radius,
            segments_v,
            self.alternate_grid,
            modifier,
        );

        if !self.closed {
            push_tube_caps(
                mesh,
                &frames,
                self.radius,
                segments_v,
                (self.start_cover_segments, self.end_cover_segments),
                self.alternate_grid,
                modifier,
            );
        }
    }

    fn frames(&self, points: &[Point<Real>]) -> Vec<TubeFrame> {
        let n = points.len() - 1;
        let twist_step = self.twist / n as Real;
        let mut frames: Vec<TubeFrame> = Vec::with_capacity(points.len());

        for i in 0..=n {
            let (prev, next) = if self.closed && (i == 0 || i == n) {
                (points[n - 1], points[1])
            } else {
                (points[i.saturating_sub(1)], points[(i + 1).min(n)])
            };

            let fallback = frames.last().map(|f| f.tangent);
            let tangent = match (next - prev).try_normalize(DEFAULT_EPSILON) {
                Some(tangent) => tangent,
                None => {
                    log::warn!("Degenerate curve tangent at sample {}.", i);
                    fallback.unwrap_or_else(Vector::z)
                }
            };

            let normal = match frames.last() {
                None => utils::any_orthogonal(&tangent),
                Some(last) => {
                    let normal = match self.frame {
                        FrameMode::Projected => last.normal,
                        FrameMode::RotationMinimizing => {
                            double_reflection(last, &points[i], &tangent)
                        }
                    };
                    let projected = normal - tangent * tangent.dot(&normal);
                    let normal = utils::normalize_or(projected, utils::any_orthogonal(&tangent));
                    // Twist around the tangent.
                    let (sin, cos) = ComplexField::sin_cos(twist_step);
                    normal * cos + tangent.cross(&normal) * sin
                }
            };

            frames.push(TubeFrame {
                center: points[i],
                tangent,
                normal,
                binormal: tangent.cross(&normal),
            });
        }

        frames
    }
}

/// Transports the normal of `last` to the frame at `center` with the tangent `tangent`.
///
/// See "Computation of Rotation Minimizing Frames", Wang et al., 2008.
fn double_reflection(last: &TubeFrame, center: &Point<Real>, tangent: &Vector<Real>) -> Vector<Real> {
    let v1 = center - last.center;
    let c1 = v1.norm_squared();

    if c1 <= DEFAULT_EPSILON {
        return last.normal;
    }

    let reflected_normal = last.normal - v1 * (2.0 / c1 * v1.dot(&last.normal));
    let reflected_tangent = last.tangent - v1 * (2.0 / c1 * v1.dot(&last.tangent));
    let v2 = tangent - reflected_tangent;
    let c2 = v2.norm_squared();

    if c2 <= DEFAULT_EPSILON {
        reflected_normal
    } else {
        reflected_normal - v2 * (2.0 / c2 * v2.dot(&reflected_normal))
    }
}

/// Pushes one ring of `segments_v + 1` vertices per frame and triangulates them.
pub(crate) fn push_tube(
    mesh: &mut TriangleMesh,
    frames: &[TubeFrame],
    radius: Real,
    segments_v: u32,
    alternate_grid: bool,
    modifier: Option<&VertexModifier>,
) {
    if frames.len() < 2 {
        return;
    }

    let base = mesh.num_vertices() as u32;
    let segments_u = frames.len() as u32 - 1;

    for (i, frame) in frames.iter().enumerate() {
        let u = i as Real / segments_u as Real;

        for j in 0..=segments_v {
            let v = j as Real / segments_v as Real;
            let (sin, cos) = ComplexField::sin_cos(Real::two_pi() * v);
            let dir = frame.normal * cos + frame.binormal * sin;
            let position = frame.center + dir * (radius * modifier_factor(modifier, u, v));
            mesh.add_vertex(position, dir, TexCoord::new(u, v));
        }
    }

    utils::push_grid_indices(mesh, base, segments_u, segments_v, alternate_grid, false);
}

/// Pushes the covers closing the first and last ring of an open tube.
pub(crate) fn push_tube_caps(
    mesh: &mut TriangleMesh,
    frames: &[TubeFrame],
    radius: Real,
    segments_v: u32,
    (start_rings, end_rings): (u32, u32),
    alternate_grid: bool,
    modifier: Option<&VertexModifier>,
) {
    let (Some(first), Some(last)) = (frames.first(), frames.last()) else {
        return;
    };

    let start_factor: &dyn Fn(Real) -> Real = &|v| modifier_factor(modifier, 0.0, v);
    let end_factor: &dyn Fn(Real) -> Real = &|v| modifier_factor(modifier, 1.0, v);

    for (frame, normal, rings, mirror_u, factor) in [
        (first, -first.tangent, start_rings, true, start_factor),
        (last, last.tangent, end_rings, false, end_factor),
    ] {
        let cover = Cover {
            center: frame.center,
            x_axis: frame.normal,
            z_axis: frame.binormal,
            normal,
            inner_radius: Vector2::zeros(),
            outer_radius: Vector2::repeat(radius),
            angle: Real::two_pi(),
            segments: segments_v,
            rings,
            mirror_u,
        };
        utils::push_cover(mesh, &cover, alternate_grid, Some(factor));
    }
}
