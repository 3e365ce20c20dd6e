//! Cramer's Rule on a fixed 3×3 system.
use std::fmt;

/// Determinant of a 3×3 matrix, expanded along the first row.
///
/// With rows `a`, `b` and `c`:
/// `a0(b1c2 − c1b2) − a1(b0c2 − b2c0) + a2(b0c1 − b1c0)`.
pub fn det3(m: &[[f64; 3]; 3]) -> f64 {
    let [a, b, c] = m;
    a[0] * (b[1] * c[2] - c[1] * b[2]) - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0])
}

/// Solve an augmented 3×4 matrix by Cramer's Rule.
///
/// Shortcut of [`LinearSystem::solve()`].
pub fn solve_cramer(rows: [[f64; 4]; 3]) -> Solution {
    LinearSystem::new(rows).solve()
}

/// Classified result of a 3×3 linear system.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solution {
    /// Unique solution `[x, y, z]`
    Unique([f64; 3]),
    /// The system is dependent
    Infinite,
    /// The system is inconsistent
    None,
}

impl Solution {
    /// Get the unique solution if any.
    pub fn unique(self) -> Option<[f64; 3]> {
        match self {
            Self::Unique(v) => Some(v),
            _ => None,
        }
    }

    /// Return true if the solution is unique.
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unique([x, y, z]) => write!(f, "x = {x}, y = {y}, z = {z}"),
            Self::Infinite => write!(f, "Infinite solutions"),
            Self::None => write!(f, "No solutions"),
        }
    }
}

/// An augmented matrix `[A|b]` of three equations.
///
/// Each row is `[a, b, c, d]` for `a·x + b·y + c·z = d`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LinearSystem {
    /// Augmented rows
    pub rows: [[f64; 4]; 3],
}

impl From<[[f64; 4]; 3]> for LinearSystem {
    fn from(rows: [[f64; 4]; 3]) -> Self {
        Self::new(rows)
    }
}

impl LinearSystem {
    /// Create a new system from the augmented rows.
    pub const fn new(rows: [[f64; 4]; 3]) -> Self {
        Self { rows }
    }

    /// The coefficient matrix `A`.
    pub fn coefficient(&self) -> [[f64; 3]; 3] {
        self.rows.map(|[a, b, c, _]| [a, b, c])
    }

    /// The coefficient matrix with column `col` replaced by the constants.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in `0..3`.
    pub fn substituted(&self, col: usize) -> [[f64; 3]; 3] {
        assert!(col < 3, "column out of range: {col}");
        self.rows.map(|row| {
            let mut m = [row[0], row[1], row[2]];
            m[col] = row[3];
            m
        })
    }

    /// Determinants `[D, D1, D2, D3]`.
    pub fn determinants(&self) -> [f64; 4] {
        [
            det3(&self.coefficient()),
            det3(&self.substituted(0)),
            det3(&self.substituted(1)),
            det3(&self.substituted(2)),
        ]
    }

    /// Solve the system with exact comparisons against zero.
    ///
    /// Near-singular systems may be reported as [`Solution::Unique`] with
    /// huge values, use [`LinearSystem::solve_eps()`] to classify them.
    pub fn solve(&self) -> Solution {
        self.solve_eps(0.)
    }

    /// Solve the system, any determinant with `|D| <= eps` counts as zero.
    pub fn solve_eps(&self, eps: f64) -> Solution {
        let is_zero = |v: f64| v.abs() <= eps;
        let [d, d1, d2, d3] = self.determinants();
        if !is_zero(d) {
            Solution::Unique([d1 / d, d2 / d, d3 / d])
        } else if is_zero(d1) && is_zero(d2) && is_zero(d3) {
            Solution::Infinite
        } else {
            Solution::None
        }
    }

    /// Residual `a·x + b·y + c·z − d` of each equation.
    pub fn residual(&self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        self.rows.map(|[a, b, c, d]| a * x + b * y + c * z - d)
    }
}
