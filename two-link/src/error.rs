/// Errors of the arm model.
///
/// The linear solver has no error path, degenerate systems are reported by
/// [`Solution`](crate::Solution) instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A constructor or setter received a value outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The inverse kinematics target lies outside the annular workspace.
    #[error("target ({x}, {y}) is unreachable: distance {distance} is outside [{min}, {max}]")]
    Unreachable {
        /// Target x
        x: f64,
        /// Target y
        y: f64,
        /// Distance from the base
        distance: f64,
        /// Minimum reach `|l1 - l2|`
        min: f64,
        /// Maximum reach `l1 + l2`
        max: f64,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Return true if the error is [`Error::Unreachable`].
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;
