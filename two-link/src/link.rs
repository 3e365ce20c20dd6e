use crate::{Error, Result};

/// A rigid link with a positive length and a label.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    length: f64,
    name: String,
}

impl Link {
    /// Create a new link.
    ///
    /// Fails with [`Error::InvalidParameter`] if the length is not positive
    /// (including NaN).
    pub fn new(length: f64, name: impl Into<String>) -> Result<Self> {
        // Also rejects NaN
        if !(length > 0.) {
            return Err(Error::invalid(format!(
                "link length must be positive, got {length}"
            )));
        }
        Ok(Self { length, name: name.into() })
    }

    /// Length of the link.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Label of the link.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Link {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            length: f64,
            #[serde(default)]
            name: String,
        }
        let Raw { length, name } = Raw::deserialize(deserializer)?;
        Self::new(length, name).map_err(serde::de::Error::custom)
    }
}

#[test]
fn non_positive_length() {
    for length in [0., -1., f64::NAN] {
        let err = Link::new(length, "bad").unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
    let link = Link::new(5., "Link 1").unwrap();
    assert_eq!(link.length(), 5.);
    assert_eq!(link.name(), "Link 1");
}
