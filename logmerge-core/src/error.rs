// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the merge drivers.
//!
//! Every failure aborts the merge: nothing is retried and nothing is swallowed.
//! Records emitted before the failure stay emitted, and the sink never
//! receives its completion signal.
//!
//! # Examples
//!
//! ```
//! use logmerge_core::{MergeError, Result};
//!
//! fn check_capacity(capacity: usize) -> Result<()> {
//!     if capacity == 0 {
//!         return Err(MergeError::invalid_config("capacity must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_capacity(0).is_err());
//! ```

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Root error type for all merge operations
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Popping the next record from a source failed
    ///
    /// The merge stops at the failing pop; the source is not polled again.
    #[error("Source {index} failed to fetch the next record")]
    SourceFetch {
        /// Position of the failing source in the slice handed to the driver
        index: usize,
        /// The error reported by the source
        #[source]
        source: BoxError,
    },

    /// The sink rejected an emitted record or the completion signal
    #[error("Sink failure: {0}")]
    SinkFailure(#[source] BoxError),

    /// Input broke an ordering assumption the merge relies on
    #[error("Invariant violation: {context}")]
    InvariantViolation {
        /// What was observed
        context: String,
    },

    /// A configuration value was rejected before any work started
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Which value and why
        message: String,
    },
}

impl MergeError {
    /// Wrap the error of the source at `index`
    pub fn source_fetch(
        index: usize,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SourceFetch {
            index,
            source: Box::new(error),
        }
    }

    /// Wrap a sink error
    pub fn sink(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SinkFailure(Box::new(error))
    }

    /// Create an invariant violation with the given context
    pub fn invariant_violation(context: impl Into<String>) -> Self {
        Self::InvariantViolation {
            context: context.into(),
        }
    }

    /// Create a configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Index of the failing source, if a pop caused this error
    #[must_use]
    pub const fn source_index(&self) -> Option<usize> {
        match self {
            Self::SourceFetch { index, .. } => Some(*index),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::SourceFetch { .. })
    }
}

/// Specialized Result type for merge operations
///
/// ```
/// use logmerge_core::Result;
///
/// fn merged() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, MergeError>;
