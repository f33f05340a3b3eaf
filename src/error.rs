//! Centralized error handling for leap
//! Defines the error type and category codes shared across the crate

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pattern construction or regex engine errors
    Search,
    /// Marker label allocation errors (exhausted or unusable alphabet)
    Allocation,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => write!(f, "Search"),
            Self::Allocation => write!(f, "Allocation"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in leap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeapError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "LABEL_CAPACITY")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl LeapError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a search error
    pub fn search(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Search, code, message)
    }

    /// Create an allocation error
    pub fn allocation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Allocation, code, message)
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for LeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for LeapError {}

/// Result alias for leap operations
pub type Result<T> = std::result::Result<T, LeapError>;
