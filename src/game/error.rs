//! Error types for position construction and notation parsing.

use std::fmt;

use crate::game::types::Color;

/// Error type for location parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            LocationError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            LocationError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for building an invalid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color has no king on the board
    MissingKing { color: Color },
    /// A color has more than one king on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => {
                write!(f, "{color} has no king on the board")
            }
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king on the board")
            }
        }
    }
}

impl std::error::Error for PositionError {}
