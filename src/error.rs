//! Error type shared by every fallible operation in the crate.

/// Badge geometry or raster error.
///
/// All failures are deterministic: the same inputs always fail the same way,
/// so nothing here is worth retrying.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BadgeError {
    /// A parameter is out of its hard domain (dpi ≤ 0, scale ≤ 0, a
    /// physical length that rounds to zero pixels, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as the caller knows it.
        name: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The raster's channel layout cannot be normalized to opaque RGB.
    #[error("unsupported pixel format: {channels} channel(s), expected 3 or 4")]
    UnsupportedFormat {
        /// Channel count of the rejected raster.
        channels: u8,
    },
}

impl BadgeError {
    pub(crate) const fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn display_names_the_parameter() {
        let e = BadgeError::invalid("dpi", "must be positive");
        assert_eq!(e.to_string(), "invalid parameter `dpi`: must be positive");

        let e = BadgeError::UnsupportedFormat { channels: 1 };
        assert_eq!(
            e.to_string(),
            "unsupported pixel format: 1 channel(s), expected 3 or 4"
        );
    }

    #[test]
    fn invalid_helper_builds_variant() {
        assert_eq!(
            BadgeError::invalid("scale", "must be positive"),
            BadgeError::InvalidParameter {
                name: "scale",
                reason: "must be positive"
            }
        );
    }
}
