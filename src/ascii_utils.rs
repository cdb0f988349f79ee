/*!
 * # Rendus texte d'un labyrinthe résolu
 *
 * - `path_report` : le rapport de solution (nom, nombre de cases, liste des positions).
 * - `render_ascii` : la grille dessinée avec le chemin superposé.
 */

use std::fmt::Write;

use crate::cell::Cell;
use crate::maze::{Coordinate, SolvedMaze};

/// Texte du rapport quand aucun chemin n'existe.
pub const NO_SOLUTION: &str = "No solution found.";

/// Génère le rapport de solution.
///
/// ```text
/// <nom>
/// Moves: <N>
/// Start
/// 0-0
/// ...
/// End
/// ```
///
/// `N` compte les cases du chemin, départ compris. Pas de retour à la ligne final.
pub fn path_report(solved: &SolvedMaze) -> String {
    let Some(path) = solved.path() else {
        return NO_SOLUTION.to_string();
    };

    let mut out = String::new();
    // write! sur une String ne peut pas échouer
    let _ = writeln!(out, "{}", solved.maze().name());
    let _ = writeln!(out, "Moves: {}", path.len());
    out.push_str("Start\n");
    for step in path {
        let _ = writeln!(out, "{}", step);
    }
    out.push_str("End");
    out
}

/// Dessine la grille : `#` mur, `.` case libre, `*` chemin, `S` départ, `E` arrivée.
pub fn render_ascii(solved: &SolvedMaze) -> String {
    let maze = solved.maze();
    let mut out = String::new();
    for (r, row) in maze.grid().iter_rows().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        for (c, cell) in row.iter().enumerate() {
            let at = Coordinate::new(r, c);
            let ch = if at == maze.start() {
                'S'
            } else if at == maze.end() {
                'E'
            } else if solved.path().is_some_and(|p| p.contains(at)) {
                '*'
            } else {
                match cell {
                    Cell::Wall => '#',
                    Cell::Passable => '.',
                }
            };
            out.push(ch);
        }
    }
    out
}
