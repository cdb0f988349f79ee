//! Lecture, validation et résolution de labyrinthes sur grille.
//!
//! ```
//! use rusty_maze::{parse_maze, path_report};
//!
//! let maze = parse_maze("Demo\nStart: 0-0\nEnd: 1-1\nP,P\nW,P").unwrap();
//! let solved = maze.solve();
//! assert_eq!(path_report(&solved), "Demo\nMoves: 3\nStart\n0-0\n0-1\n1-1\nEnd");
//! ```

use tracing_subscriber::EnvFilter;

pub mod ascii_utils;
pub mod cell;
pub mod direction;
pub mod error;
pub mod json_utils;
pub mod maze;
pub mod network;
pub mod parser;
pub mod path;
pub mod solver;

pub use ascii_utils::{path_report, render_ascii, NO_SOLUTION};
pub use cell::Cell;
pub use direction::Direction;
pub use error::{Endpoint, ErrorKind, MazeError, MazeResult};
pub use maze::{Coordinate, Grid, Maze, SolvedMaze};
pub use parser::parse_maze;
pub use path::Path;
pub use solver::solve;

pub const ADDRESS: &str = "localhost:8778";

/// Variable d'environnement qui remplace [`ADDRESS`].
pub const ADDRESS_ENV: &str = "RUSTY_MAZE_ADDR";

/// Adresse du serveur de résolution.
pub fn server_address() -> String {
    std::env::var(ADDRESS_ENV).unwrap_or_else(|_| ADDRESS.to_string())
}

/// Installe le subscriber `tracing` des binaires, sur stderr.
///
/// Le niveau se règle avec `RUST_LOG` (par défaut `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
