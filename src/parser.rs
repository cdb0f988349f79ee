/*!
 * # Lecture du format texte
 *
 * ```text
 * <nom>
 * Start: <ligne>-<colonne>
 * End: <ligne>-<colonne>
 * P,W,P,...
 * ```
 *
 * Les erreurs de format (en-têtes, coordonnées) sont détectées ici, la
 * validation de la grille est déléguée à [`Maze::from_symbols`].
 */

use tracing::trace;

use crate::error::{MazeError, MazeResult};
use crate::maze::{Coordinate, Maze};

const START_PREFIX: &str = "Start: ";
const END_PREFIX: &str = "End: ";

/// Nombre minimal de lignes : nom, départ, arrivée et au moins une ligne de grille.
const MIN_LINES: usize = 4;

/// Analyse un labyrinthe complet à partir de son texte.
pub fn parse_maze(text: &str) -> MazeResult<Maze> {
    let mut lines: Vec<&str> = text.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.len() < MIN_LINES {
        return Err(MazeError::format(
            lines.len() + 1,
            "incomplete maze data, expected a name, a start, an end and at least one grid row",
        ));
    }

    let name = lines[0];
    if name.is_empty() {
        return Err(MazeError::format(1, "maze does not have a name"));
    }

    let start = parse_header(lines[1], START_PREFIX, 2)?;
    let end = parse_header(lines[2], END_PREFIX, 3)?;

    let symbols: Vec<Vec<&str>> = lines[3..]
        .iter()
        .map(|line| line.split(',').collect())
        .collect();
    trace!(name, %start, %end, rows = symbols.len(), "maze text parsed");

    Maze::from_symbols(name, &symbols, start, end)
}

fn parse_header(line: &str, prefix: &str, line_no: usize) -> MazeResult<Coordinate> {
    let value = line.strip_prefix(prefix).ok_or_else(|| {
        MazeError::format(line_no, format!("expected a line starting with {:?}", prefix))
    })?;
    parse_coordinate(value).map_err(|message| MazeError::format(line_no, message))
}

/// Analyse une position `<ligne>-<colonne>`.
pub fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 2 {
        return Err(format!(
            "invalid position {:?}, expected <row>-<col>",
            value
        ));
    }
    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| format!("position {:?} must use non-negative integers", value))
    };
    Ok(Coordinate::new(parse(parts[0])?, parse(parts[1])?))
}
