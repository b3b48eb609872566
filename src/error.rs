//! Error types for maze configuration and generation.

use std::fmt;

/// Errors that can occur while configuring, generating or reading a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A configuration parameter failed validation.
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: usize,
        /// Explanation of why the value is invalid
        reason: &'static str,
    },

    /// The occupancy grid was requested before generation completed.
    NotGenerated,

    /// `generate` was called on a maze that is already generated.
    AlreadyGenerated,

    /// The random source ran out of values mid-generation.
    RandomSourceExhausted {
        /// Number of values successfully drawn before exhaustion
        draws: usize,
    },

    /// The random source produced a value outside the requested range.
    RandomOutOfRange {
        /// The value produced
        value: usize,
        /// Exclusive upper bound that was requested
        bound: usize,
    },

    /// A fill or wall removal targeted an origin outside the grid.
    OutOfBounds {
        /// Requested x coordinate
        x: usize,
        /// Requested y coordinate
        y: usize,
        /// Grid width in units
        width: usize,
        /// Grid depth in units
        depth: usize,
    },
}

impl MazeError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::NotGenerated => "NOT_GENERATED",
            Self::AlreadyGenerated => "ALREADY_GENERATED",
            Self::RandomSourceExhausted { .. } => "RANDOM_EXHAUSTED",
            Self::RandomOutOfRange { .. } => "RANDOM_OUT_OF_RANGE",
            Self::OutOfBounds { .. } => "OUT_OF_BOUNDS",
        }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = {value}: {reason}"),
            Self::NotGenerated => write!(f, "Maze has not been generated yet"),
            Self::AlreadyGenerated => write!(f, "Maze has already been generated"),
            Self::RandomSourceExhausted { draws } => {
                write!(f, "Random source exhausted after {draws} draws")
            }
            Self::RandomOutOfRange { value, bound } => {
                write!(f, "Random source returned {value}, expected a value below {bound}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                depth,
            } => write!(f, "Position ({x}, {y}) is outside the {width}x{depth} grid"),
        }
    }
}

impl std::error::Error for MazeError {}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MazeError::InvalidConfig {
            parameter: "corridor_width",
            value: 0,
            reason: "must be at least 1",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'corridor_width' = 0: must be at least 1"
        );

        let err = MazeError::OutOfBounds {
            x: 7,
            y: 1,
            width: 5,
            depth: 3,
        };
        assert_eq!(err.to_string(), "Position (7, 1) is outside the 5x3 grid");
    }

    #[test]
    fn test_error_code() {
        assert_eq!(MazeError::NotGenerated.code(), "NOT_GENERATED");
        assert_eq!(
            MazeError::RandomOutOfRange { value: 4, bound: 2 }.code(),
            "RANDOM_OUT_OF_RANGE"
        );
    }
}
