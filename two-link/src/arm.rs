//! Two-link planar serial arm.
//!
//! The chain is `base → joint1 → link1 → joint2 → link2 → end effector`, all
//! motion in the XY plane with the base at the origin.
use crate::{Error, Joint, Link, Result};
use nalgebra as na;
use std::fmt;

/// Branch of the inverse kinematics.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Elbow {
    /// Principal branch, `θ2 = acos(..)`
    #[default]
    Up = 1,
    /// Mirrored branch, `θ2 = -acos(..)`
    Down = 2,
}

impl fmt::Display for Elbow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Up => write!(f, "Elbow up"),
            Self::Down => write!(f, "Elbow down"),
        }
    }
}

impl Elbow {
    /// Both branches in the order returned by
    /// [`PlanarArm::inverse_kinematics()`].
    pub const ALL: [Self; 2] = [Self::Up, Self::Down];

    /// Get the lowercase name.
    pub const fn name_lowercase(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Sign applied to the elbow angle.
    pub const fn sign(&self) -> f64 {
        match self {
            Self::Up => 1.,
            Self::Down => -1.,
        }
    }

    /// Switch to the other branch.
    pub fn flip(&mut self) {
        *self = match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        };
    }
}

/// Joint positions of the arm.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Pose {
    /// Position of the second joint
    pub elbow: [f64; 2],
    /// Position of the tip of the second link
    pub end_effector: [f64; 2],
}

/// Annular workspace of the arm.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Workspace {
    /// Inner radius `|l1 - l2|`
    pub min_reach: f64,
    /// Outer radius `l1 + l2`
    pub max_reach: f64,
}

impl Workspace {
    /// Create from two link lengths.
    pub fn from_lengths(l1: f64, l2: f64) -> Self {
        Self { min_reach: (l1 - l2).abs(), max_reach: l1 + l2 }
    }

    /// Return true if the distance lies in the annulus, boundaries included.
    pub fn contains_distance(&self, distance: f64) -> bool {
        (self.min_reach..=self.max_reach).contains(&distance)
    }

    /// Return true if the point lies in the annulus, boundaries included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_distance(distance(x, y))
    }

    /// Area of the annulus.
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * (self.max_reach.powi(2) - self.min_reach.powi(2))
    }

    /// Describe the workspace.
    pub fn summary(&self) -> WorkspaceSummary {
        let Self { min_reach, max_reach } = *self;
        WorkspaceSummary {
            min_reach,
            max_reach,
            description: format!("From {min_reach} to {max_reach} units from the base."),
        }
    }
}

/// Workspace bounds with a readable description.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceSummary {
    /// Minimum reachable distance
    pub min_reach: f64,
    /// Maximum reachable distance
    pub max_reach: f64,
    /// Reachable area
    pub description: String,
}

impl fmt::Display for WorkspaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Minimum Reach: {}", self.min_reach)?;
        writeln!(f, "Maximum Reach: {}", self.max_reach)?;
        write!(f, "Reachable Area: {}", self.description)
    }
}

/// A two-link planar arm with two revolute joints.
///
/// All methods are pure functions of the link lengths and joint angles.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PlanarArm {
    link1: Link,
    joint1: Joint,
    link2: Link,
    joint2: Joint,
}

impl PlanarArm {
    /// Assemble the arm.
    pub fn new(link1: Link, joint1: Joint, link2: Link, joint2: Joint) -> Self {
        Self { link1, joint1, link2, joint2 }
    }

    /// The first link, attached to the base.
    pub fn link1(&self) -> &Link {
        &self.link1
    }

    /// The base joint.
    pub fn joint1(&self) -> &Joint {
        &self.joint1
    }

    /// The second link, carrying the end effector.
    pub fn link2(&self) -> &Link {
        &self.link2
    }

    /// The elbow joint.
    pub fn joint2(&self) -> &Joint {
        &self.joint2
    }

    /// Link lengths `[l1, l2]`.
    pub fn lengths(&self) -> [f64; 2] {
        [self.link1.length(), self.link2.length()]
    }

    /// Joint angles `[θ1, θ2]` in degrees.
    pub fn angles(&self) -> [f64; 2] {
        [self.joint1.angle(), self.joint2.angle()]
    }

    fn angles_rad(&self) -> [f64; 2] {
        [self.joint1.angle_rad(), self.joint2.angle_rad()]
    }

    /// Build with other joint angles in degrees, checked by the joint limits.
    pub fn with_angles(&self, [t1, t2]: [f64; 2]) -> Result<Self> {
        Ok(Self {
            joint1: self.joint1.clone().with_angle(t1)?,
            joint2: self.joint2.clone().with_angle(t2)?,
            ..self.clone()
        })
    }

    /// Positions of the elbow and the end effector.
    pub fn forward_kinematics(&self) -> Pose {
        let [l1, l2] = self.lengths();
        let [t1, t2] = self.angles_rad();
        let elbow = angle(na::Point2::origin(), l1, t1);
        let end_effector = angle(elbow, l2, t1 + t2);
        Pose {
            elbow: [elbow.x, elbow.y],
            end_effector: [end_effector.x, end_effector.y],
        }
    }

    /// Joint angles in degrees reaching the target, ordered as
    /// [`Elbow::ALL`].
    ///
    /// Both solutions coincide on the workspace boundary.
    pub fn inverse_kinematics(&self, x: f64, y: f64) -> Result<[[f64; 2]; 2]> {
        self.check_reach(x, y)?;
        Ok(Elbow::ALL.map(|elbow| self.ik_unchecked(x, y, elbow)))
    }

    /// Joint angles in degrees of a single branch.
    pub fn inverse_kinematics_branch(&self, x: f64, y: f64, elbow: Elbow) -> Result<[f64; 2]> {
        self.check_reach(x, y)?;
        Ok(self.ik_unchecked(x, y, elbow))
    }

    /// The inverse kinematics branches allowed by the joint limits.
    ///
    /// The list can be empty for a reachable target.
    pub fn reachable_solutions(&self, x: f64, y: f64) -> Result<Vec<(Elbow, [f64; 2])>> {
        let solutions = self.inverse_kinematics(x, y)?;
        Ok(Elbow::ALL
            .into_iter()
            .zip(solutions)
            .filter(|(_, [t1, t2])| self.joint1.contains(*t1) && self.joint2.contains(*t2))
            .collect())
    }

    fn check_reach(&self, x: f64, y: f64) -> Result<()> {
        let ws = self.workspace();
        let distance = distance(x, y);
        if ws.contains_distance(distance) {
            Ok(())
        } else {
            Err(Error::Unreachable {
                x,
                y,
                distance,
                min: ws.min_reach,
                max: ws.max_reach,
            })
        }
    }

    fn ik_unchecked(&self, x: f64, y: f64, elbow: Elbow) -> [f64; 2] {
        let [l1, l2] = self.lengths();
        // Rounding on the workspace boundary can leave [-1, 1]
        let c2 = ((x * x + y * y - l1 * l1 - l2 * l2) / (2. * l1 * l2)).clamp(-1., 1.);
        let t2 = elbow.sign() * c2.acos();
        let t1 = y.atan2(x) - (l2 * t2.sin()).atan2(l1 + l2 * t2.cos());
        [t1.to_degrees(), t2.to_degrees()]
    }

    /// Velocity Jacobian of the end effector over `[θ1, θ2]` (per radian).
    pub fn jacobian(&self) -> [[f64; 2]; 2] {
        let [l1, l2] = self.lengths();
        let [t1, t2] = self.angles_rad();
        let (s1, c1) = t1.sin_cos();
        let (s12, c12) = (t1 + t2).sin_cos();
        [
            [-l1 * s1 - l2 * s12, -l2 * s12],
            [l1 * c1 + l2 * c12, l2 * c12],
        ]
    }

    fn jacobian_matrix(&self) -> na::Matrix2<f64> {
        let [[a, b], [c, d]] = self.jacobian();
        na::Matrix2::new(a, b, c, d)
    }

    /// Determinant of the Jacobian, equals to `l1·l2·sin(θ2)`.
    pub fn jacobian_det(&self) -> f64 {
        self.jacobian_matrix().determinant()
    }

    /// Return true if the Jacobian determinant is within `eps` of zero.
    ///
    /// The arm is fully stretched or folded at the singularities.
    pub fn is_singular(&self, eps: f64) -> bool {
        self.jacobian_det().abs() <= eps
    }

    /// End effector velocity from joint velocities `[ω1, ω2]` (rad/s).
    pub fn tip_velocity(&self, omega: [f64; 2]) -> [f64; 2] {
        let v = self.jacobian_matrix() * na::Vector2::from(omega);
        [v.x, v.y]
    }

    /// The annular workspace.
    pub fn workspace(&self) -> Workspace {
        let [l1, l2] = self.lengths();
        Workspace::from_lengths(l1, l2)
    }

    /// Reach bounds `[min, max]`.
    pub fn workspace_bounds(&self) -> [f64; 2] {
        let Workspace { min_reach, max_reach } = self.workspace();
        [min_reach, max_reach]
    }

    /// Reach bounds with a readable description.
    pub fn workspace_summary(&self) -> WorkspaceSummary {
        self.workspace().summary()
    }
}

fn angle(p: na::Point2<f64>, d: f64, a: f64) -> na::Point2<f64> {
    p + d * na::Vector2::new(a.cos(), a.sin())
}

fn distance(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}
