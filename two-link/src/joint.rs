use crate::{Error, Result};

/// A revolute joint with angle limits, in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Joint {
    angle: f64,
    min_angle: f64,
    max_angle: f64,
}

impl Default for Joint {
    fn default() -> Self {
        Self {
            angle: 0.,
            min_angle: Self::MIN_ANGLE,
            max_angle: Self::MAX_ANGLE,
        }
    }
}

impl Joint {
    /// The default lower limit.
    pub const MIN_ANGLE: f64 = -180.;
    /// The default upper limit.
    pub const MAX_ANGLE: f64 = 180.;

    /// Create a joint with the default limits `[-180, 180]`.
    pub fn new(angle: f64) -> Result<Self> {
        Self::with_limits(angle, Self::MIN_ANGLE, Self::MAX_ANGLE)
    }

    /// Create a joint with custom limits.
    ///
    /// The limits are inclusive. Fails with [`Error::InvalidParameter`] if
    /// the limits are reversed or the angle is outside of them.
    pub fn with_limits(angle: f64, min_angle: f64, max_angle: f64) -> Result<Self> {
        if min_angle.is_nan() || max_angle.is_nan() || min_angle > max_angle {
            return Err(Error::invalid(format!(
                "invalid joint limits [{min_angle}, {max_angle}]"
            )));
        }
        let mut joint = Self { angle: 0., min_angle, max_angle };
        joint.set_angle(angle)?;
        Ok(joint)
    }

    /// Current angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }

    /// The inclusive limits `[min, max]`.
    pub fn limits(&self) -> [f64; 2] {
        [self.min_angle, self.max_angle]
    }

    /// Return true if the angle is within the limits.
    pub fn contains(&self, angle: f64) -> bool {
        (self.min_angle..=self.max_angle).contains(&angle)
    }

    /// Set the angle. The joint is left untouched on failure.
    pub fn set_angle(&mut self, angle: f64) -> Result<()> {
        if !self.contains(angle) {
            return Err(Error::invalid(format!(
                "joint angle must be between {} and {} degrees, got {angle}",
                self.min_angle, self.max_angle
            )));
        }
        self.angle = angle;
        Ok(())
    }

    /// Build with another angle.
    pub fn with_angle(mut self, angle: f64) -> Result<Self> {
        self.set_angle(angle)?;
        Ok(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Joint {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(default)]
        struct Raw {
            angle: f64,
            min_angle: f64,
            max_angle: f64,
        }
        impl Default for Raw {
            fn default() -> Self {
                Self {
                    angle: 0.,
                    min_angle: Joint::MIN_ANGLE,
                    max_angle: Joint::MAX_ANGLE,
                }
            }
        }
        let Raw { angle, min_angle, max_angle } = Raw::deserialize(deserializer)?;
        Self::with_limits(angle, min_angle, max_angle).map_err(serde::de::Error::custom)
    }
}
