//! Two-link planar arm kinematics, with a 3×3 linear equation solver on the
//! side.
//!
//! ```
//! use two_link::*;
//!
//! let arm = PlanarArm::new(
//!     Link::new(5., "Link 1")?,
//!     Joint::new(45.)?,
//!     Link::new(3., "Link 2")?,
//!     Joint::new(30.)?,
//! );
//! let Pose { elbow, end_effector } = arm.forward_kinematics();
//! let [up, down] = arm.inverse_kinematics(end_effector[0], end_effector[1])?;
//! assert_eq!(arm.workspace_bounds(), [2., 8.]);
//! # let _ = (elbow, up, down);
//! # Ok::<(), two_link::Error>(())
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::{arm::*, dh::DhParam, error::*, joint::*, link::*, linear::*};

pub mod arm;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
pub mod dh;
mod error;
mod joint;
mod linear;
mod link;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
#[cfg(test)]
mod tests;
