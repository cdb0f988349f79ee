//! Erreurs de lecture et de validation d'un labyrinthe.

use std::fmt;
use thiserror::Error;

use crate::maze::Coordinate;

/// Résultat de la construction d'un labyrinthe.
pub type MazeResult<T> = Result<T, MazeError>;

/// Extrémité concernée par une erreur (départ ou arrivée).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Catégorie stable d'une [`MazeError`], utilisée dans les rapports JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Shape,
    InvalidCell,
    OutOfBounds,
    BlockedEndpoint,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::Shape => "ShapeError",
            ErrorKind::InvalidCell => "InvalidCellError",
            ErrorKind::OutOfBounds => "OutOfBoundsError",
            ErrorKind::BlockedEndpoint => "BlockedEndpointError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Erreurs levées pendant la construction d'un [`Maze`](crate::Maze).
///
/// Une arrivée inaccessible n'en fait pas partie : le solveur renvoie alors une absence de chemin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Texte mal formé : en-tête manquant, coordonnée invalide, nom vide.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// Grille vide ou non rectangulaire.
    #[error("grid is not rectangular: {message}")]
    Shape { message: String },

    /// Symbole de case autre que `P` ou `W`.
    #[error("invalid cell {symbol:?} at {at}, expected P or W")]
    InvalidCell { symbol: String, at: Coordinate },

    /// Départ ou arrivée hors de la grille.
    #[error("{endpoint} {at} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        at: Coordinate,
        rows: usize,
        cols: usize,
    },

    /// Départ ou arrivée sur un mur.
    #[error("{endpoint} {at} is a wall")]
    BlockedEndpoint { endpoint: Endpoint, at: Coordinate },
}

impl MazeError {
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MazeError::Format { .. } => ErrorKind::Format,
            MazeError::Shape { .. } => ErrorKind::Shape,
            MazeError::InvalidCell { .. } => ErrorKind::InvalidCell,
            MazeError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            MazeError::BlockedEndpoint { .. } => ErrorKind::BlockedEndpoint,
        }
    }
}
