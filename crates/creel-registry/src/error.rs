//! Registry-specific error types.

use std::error::Error;
use std::fmt;

use creel_core::{Generation, RegistryId};

/// Errors that can occur during registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Heap memory for an array block could not be obtained.
    AllocationFailed {
        /// Number of bytes the block would have occupied.
        requested_bytes: usize,
    },
    /// A fallible constructor reported an error; nothing was registered.
    ConstructorFailed {
        /// Human-readable description of the constructor failure.
        reason: String,
    },
    /// A zero-length array was requested. Empty requests create no entry.
    EmptyArray,
    /// The configured entry limit was reached.
    CapacityExceeded {
        /// Number of entries currently held.
        entries: usize,
        /// The configured limit.
        max_entries: usize,
    },
    /// A handle from a release cycle that has already ended.
    StaleHandle {
        /// The generation encoded in the handle.
        handle_generation: Generation,
        /// The registry's current generation.
        current: Generation,
    },
    /// A handle minted by a different registry instance.
    ForeignHandle {
        /// The registry the handle belongs to.
        handle_registry: RegistryId,
        /// The registry the handle was presented to.
        registry: RegistryId,
    },
    /// A configuration value was rejected at registry construction.
    InvalidConfig {
        /// Description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation failed: requested {requested_bytes} bytes")
            }
            Self::ConstructorFailed { reason } => {
                write!(f, "constructor failed: {reason}")
            }
            Self::EmptyArray => write!(f, "zero-length array request"),
            Self::CapacityExceeded {
                entries,
                max_entries,
            } => {
                write!(
                    f,
                    "entry capacity exceeded: {entries} entries held, limit {max_entries}"
                )
            }
            Self::StaleHandle {
                handle_generation,
                current,
            } => {
                write!(
                    f,
                    "stale handle: generation {handle_generation}, current {current}"
                )
            }
            Self::ForeignHandle {
                handle_registry,
                registry,
            } => {
                write!(
                    f,
                    "foreign handle: minted by registry {handle_registry}, presented to {registry}"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid config: {reason}")
            }
        }
    }
}

impl Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_handle_display_names_both_generations() {
        let err = RegistryError::StaleHandle {
            handle_generation: Generation(2),
            current: Generation(5),
        };
        let msg = err.to_string();
        assert!(msg.contains('2'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn constructor_failure_carries_reason() {
        let err = RegistryError::ConstructorFailed {
            reason: "negative width".into(),
        };
        assert!(err.to_string().contains("negative width"));
    }
}
