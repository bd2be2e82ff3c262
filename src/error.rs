//! Error types for boundary parsing.
//!
//! The engine itself has no failure modes: the rank alphabet is a closed
//! set, and commands issued in a phase that does not accept them are
//! silently ignored. Parsing text input into a [`Rank`](crate::Rank) is the
//! one fallible boundary.

use thiserror::Error;

/// Error returned when a string is not a recognized card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized card rank")]
pub struct ParseRankError;
