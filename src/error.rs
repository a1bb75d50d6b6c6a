//! Error types for card parsing.

use thiserror::Error;

/// Errors that can occur when reading a card from its codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Unknown color code.
    #[error("unknown color code {0:?}")]
    InvalidColor(char),
    /// Unknown rank code.
    #[error("unknown rank code {0:?}")]
    InvalidRank(char),
    /// The short form must be exactly two characters.
    #[error("expected a two-character card, got {0} characters")]
    InvalidLength(usize),
}
