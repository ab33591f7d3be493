//! Crate error type.

use std::fmt;

use crate::models::DroneEnergyModel;

/// Result alias used throughout the crate.
pub type RoutingResult<T> = Result<T, RoutingError>;

/// An error raised by a solver, evaluator, or configuration import.
///
/// Every variant is fatal to the call that raised it; no operation retries
/// internally or mutates shared state on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// The TSP solver was handed an empty city set.
    EmptyCitySet,
    /// A tour rotation targeted a city that is not part of the tour.
    AnchorNotFound {
        /// The requested anchor city.
        anchor: usize,
    },
    /// Parallel customer import arrays have different lengths.
    ArrayLengthMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Expected length (taken from the first array).
        expected: usize,
        /// Actual length of the offending array.
        actual: usize,
    },
    /// A truck config was built with an empty speed-coefficient list.
    EmptyCoefficients,
    /// A truck velocity or speed coefficient is zero or negative.
    NonPositiveVelocity {
        /// The offending value.
        value: f64,
    },
    /// A distance computation produced a negative or non-finite radicand.
    NegativeRadicand {
        /// The offending radicand.
        value: f64,
    },
    /// Timestamp evaluation requested a drone model the context lacks.
    DroneConfigMissing {
        /// The requested energy model.
        model: DroneEnergyModel,
    },
    /// A waiting-time calculation received mismatched inputs.
    TimestampLengthMismatch {
        /// Length of the route path.
        path_len: usize,
        /// Length of the arrival timestamp sequence.
        timestamps_len: usize,
    },
    /// A segment-swap was requested with a zero-length segment.
    EmptySegment {
        /// Requested first segment length.
        first_length: usize,
        /// Requested second segment length.
        second_length: usize,
    },
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCitySet => write!(f, "empty TSP city set"),
            Self::AnchorNotFound { anchor } => {
                write!(f, "anchor city {anchor} not found in tour")
            }
            Self::ArrayLengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "customer array `{field}` has length {actual}, expected {expected}"
            ),
            Self::EmptyCoefficients => {
                write!(f, "truck config requires at least one speed coefficient")
            }
            Self::NonPositiveVelocity { value } => {
                write!(f, "truck velocity must be positive, got {value}")
            }
            Self::NegativeRadicand { value } => {
                write!(f, "attempted to take the square root of {value}")
            }
            Self::DroneConfigMissing { model } => {
                write!(f, "no {model} drone config in context")
            }
            Self::TimestampLengthMismatch {
                path_len,
                timestamps_len,
            } => write!(
                f,
                "arrival timestamps length {timestamps_len} does not match path length {path_len}"
            ),
            Self::EmptySegment {
                first_length,
                second_length,
            } => write!(
                f,
                "segment lengths must be at least 1, got {first_length} and {second_length}"
            ),
        }
    }
}

impl std::error::Error for RoutingError {}
