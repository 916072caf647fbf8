//! Error handling logic

use std::fmt;

/// Unique identifier for a qubit within a circuit.
/// Its uniqueness is context-dependent within a simulation; the id doubles
/// as the qubit's position when outcomes are rendered as bitstrings
/// (smallest id leftmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Error types for the teaching toolkit.
///
/// The taxonomy mirrors the three ways the demo can fail: bad numeric
/// parameters at an input boundary, malformed message text, and backend
/// failures while a circuit is being simulated.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QirsError {
    /// A code or circuit parameter is outside its allowed range
    /// (e.g. `k >= n`, or a qubit count outside the supported window).
    InvalidParameter {
        /// InvalidParameter failure message
        message: String
    },

    /// A message-symbol token could not be read as an integer.
    /// Callers present this as a single generic banner; the variant still
    /// carries the offending token for diagnostics.
    ParseError {
        /// ParseError failure message
        message: String
    },

    /// The simulation backend failed while executing a circuit
    /// (dimension overflow, unknown qubit, normalization loss).
    /// There is no retry policy; this propagates to the caller.
    ExecutionError {
        /// ExecutionError failure message
        message: String
    },

    /// An applied operation is inconsistent with the current state
    /// (e.g. an entangling gate whose control and target coincide).
    InvalidOperation {
        /// InvalidOperation failure message
        message: String
    },
}

impl fmt::Display for QirsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QirsError::InvalidParameter { message } => write!(f, "Invalid Parameter: {}", message),
            QirsError::ParseError { message } => write!(f, "Parse Error: {}", message),
            QirsError::ExecutionError { message } => write!(f, "Execution Error: {}", message),
            QirsError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QirsError {}
