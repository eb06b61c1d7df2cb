//! Error types for trace generation, playback and configuration
//!
//! The domain is closed: there is no I/O and no untrusted input inside the
//! engine. Errors are therefore either precondition violations detected
//! before a run starts ([`TraceError`]), illegal cursor transitions
//! ([`PlaybackError`]) or bad user-supplied settings ([`ConfigError`]).
//! Empty structures are never an error; they produce a trivial trace.

use crate::algorithm::{Algorithm, Family};
use crate::structures::NodeId;
use std::fmt;

/// Errors raised while producing a step trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Traversal requested from a node that is not part of the structure
    InvalidStartNode { id: NodeId },

    /// Algorithm run against a structure of the wrong family
    StructureMismatch {
        algorithm: Algorithm,
        expected: Family,
        got: Family,
    },

    /// Algorithm name not recognised
    UnknownAlgorithm { name: String },

    /// Step log grew past its memory budget
    StepLimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::InvalidStartNode { id } => {
                write!(f, "Start node {} does not exist in the current structure", id)
            }
            TraceError::StructureMismatch {
                algorithm,
                expected,
                got,
            } => {
                write!(
                    f,
                    "{} expects a {} structure, got {}",
                    algorithm.info().name,
                    expected,
                    got
                )
            }
            TraceError::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "Unknown algorithm '{}' (expected one of: {})",
                    name,
                    Algorithm::ALL
                        .iter()
                        .map(|a| a.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            TraceError::StepLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Step log memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Illegal playback cursor transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// A run is already playing; it must be paused or stopped first
    Busy,

    /// No step sequence is loaded
    NoTrace,

    /// Already at the first step
    AtStart,

    /// Already at the last step
    AtEnd,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Busy => write!(f, "A run is already playing"),
            PlaybackError::NoTrace => write!(f, "No step sequence loaded"),
            PlaybackError::AtStart => write!(f, "Already at the first step"),
            PlaybackError::AtEnd => write!(f, "Already at the last step"),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A count or size that must be positive was zero
    Zero { field: &'static str },

    /// A value fell outside its allowed range
    InvalidRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Lower bound of a value range is above its upper bound
    InvertedRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero { field } => write!(f, "{} must be greater than zero", field),
            ConfigError::InvalidRange {
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} = {} is out of range (allowed {}..={})",
                    field, value, min, max
                )
            }
            ConfigError::InvertedRange { field, min, max } => {
                write!(f, "{} range is inverted: min {} > max {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_start_node_message() {
        let err = TraceError::InvalidStartNode { id: NodeId(7) };
        assert_eq!(
            err.to_string(),
            "Start node node-7 does not exist in the current structure"
        );
    }

    #[test]
    fn test_unknown_algorithm_lists_choices() {
        let err = TraceError::UnknownAlgorithm {
            name: "bogo".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'bogo'"));
        assert!(message.contains("bubble"));
        assert!(message.contains("bfs-tree"));
    }

    #[test]
    fn test_structure_mismatch_message() {
        let err = TraceError::StructureMismatch {
            algorithm: Algorithm::InOrder,
            expected: Family::Tree,
            got: Family::Sorting,
        };
        assert_eq!(
            err.to_string(),
            "In-order Traversal expects a tree structure, got array"
        );
    }
}
