use thiserror::Error;

/// Errors raised when an optical configuration cannot be built.
///
/// Both variants are fatal to the evaluation that requested them and are
/// reported to the caller rather than substituted with a default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The requested mirror power is not one of the supported exponents.
    #[error("unsupported mirror power {0}; expected one of 1.0, 1.5, 2.0, 2.5, 3.0, 3.5 or 4.0")]
    UnsupportedPower(f64),
    /// A spherical mirror cannot have a negative radius of curvature.
    #[error("curvature radius must be non-negative, got {0} m")]
    NegativeCurvature(f64),
}
