//! Denavit–Hartenberg transforms.
//!
//! These are general utilities for serial chains, the planar arm computes
//! its own kinematics without them.
use nalgebra as na;

/// Homogeneous transform of the DH parameters `(θ, d, a, α)`.
///
/// The angles `theta` and `alpha` are in degrees.
///
/// ```text
/// [ cθ  -sθ·cα   sθ·sα  a·cθ ]
/// [ sθ   cθ·cα  -cθ·sα  a·sθ ]
/// [ 0    sα      cα     d    ]
/// [ 0    0       0      1    ]
/// ```
pub fn transform(theta: f64, d: f64, a: f64, alpha: f64) -> [[f64; 4]; 4] {
    let (st, ct) = theta.to_radians().sin_cos();
    let (sa, ca) = alpha.to_radians().sin_cos();
    [
        [ct, -st * ca, st * sa, a * ct],
        [st, ct * ca, -ct * sa, a * st],
        [0., sa, ca, d],
        [0., 0., 0., 1.],
    ]
}

/// Compose the transforms of a serial chain from the base outwards.
///
/// Returns the identity matrix for an empty chain.
pub fn chain<'a, I>(params: I) -> [[f64; 4]; 4]
where
    I: IntoIterator<Item = &'a DhParam>,
{
    let m = params
        .into_iter()
        .fold(na::Matrix4::identity(), |acc, p| acc * p.matrix());
    std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)]))
}

/// The DH parameters of a single link.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DhParam {
    /// Joint angle in degrees
    pub theta: f64,
    /// Link offset
    pub d: f64,
    /// Link length
    pub a: f64,
    /// Link twist in degrees
    pub alpha: f64,
}

impl DhParam {
    /// Create a new instance.
    pub const fn new(theta: f64, d: f64, a: f64, alpha: f64) -> Self {
        Self { theta, d, a, alpha }
    }

    /// The homogeneous transform of this link.
    pub fn transform(&self) -> [[f64; 4]; 4] {
        transform(self.theta, self.d, self.a, self.alpha)
    }

    fn matrix(&self) -> na::Matrix4<f64> {
        let m = self.transform();
        na::Matrix4::from_fn(|r, c| m[r][c])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_mat_eq(a: [[f64; 4]; 4], b: [[f64; 4]; 4]) {
        for (ra, rb) in a.iter().zip(&b) {
            for (x, y) in ra.iter().zip(rb) {
                assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn identity() {
        let eye = [
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ];
        assert_mat_eq(transform(0., 0., 0., 0.), eye);
        assert_mat_eq(chain(&[] as &[DhParam]), eye);
    }

    #[test]
    fn twist_and_offset() {
        let m = transform(90., 2., 3., 90.);
        assert_mat_eq(
            m,
            [
                [0., 0., 1., 0.],
                [1., 0., 0., 3.],
                [0., 1., 0., 2.],
                [0., 0., 0., 1.],
            ],
        );
    }

    #[test]
    fn planar_chain() {
        // Two planar links reproduce the arm's end effector
        let params = [DhParam::new(45., 0., 5., 0.), DhParam::new(30., 0., 3., 0.)];
        let m = chain(&params);
        let t75 = 75f64.to_radians();
        let t45 = 45f64.to_radians();
        assert_abs_diff_eq!(m[0][3], 5. * t45.cos() + 3. * t75.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(m[1][3], 5. * t45.sin() + 3. * t75.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(m[2][3], 0., epsilon = 1e-12);
        assert_abs_diff_eq!(m[0][0], t75.cos(), epsilon = 1e-12);
    }
}
