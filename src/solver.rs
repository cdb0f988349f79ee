//! Recherche du plus court chemin par parcours en largeur (BFS).

use std::collections::VecDeque;

use tracing::{debug, error};

use crate::direction::Direction;
use crate::maze::{Coordinate, Maze};
use crate::path::Path;

/// Calcule le plus court chemin du départ à l'arrivée.
///
/// Les voisins sont explorés dans l'ordre droite, bas, gauche, haut : parmi
/// plusieurs plus courts chemins, c'est toujours le même qui est retourné.
/// `None` signifie qu'aucun chemin n'existe, ce n'est pas une erreur.
pub fn solve(maze: &Maze) -> Option<Path> {
    let start = maze.start();
    let end = maze.end();
    if start == end {
        debug!(maze = maze.name(), "start equals end");
        return Some(Path::new(vec![start]));
    }

    let grid = maze.grid();
    let (rows, cols) = (grid.rows(), grid.cols());
    let index = |at: Coordinate| at.row * cols + at.col;

    // predecessors[i] est fixé une seule fois, à la première visite de la case i.
    let mut visited = vec![false; rows * cols];
    let mut predecessors: Vec<Option<Coordinate>> = vec![None; rows * cols];
    let mut queue = VecDeque::new();

    visited[index(start)] = true;
    queue.push_back(start);

    let mut explored = 0usize;
    let mut found = false;
    while let Some(current) = queue.pop_front() {
        explored += 1;
        if current == end {
            found = true;
            break;
        }

        for direction in Direction::EXPANSION_ORDER {
            let Some(next) = direction.step(current, rows, cols) else {
                continue;
            };
            let i = index(next);
            if visited[i] || !grid.is_passable(next) {
                continue;
            }
            visited[i] = true;
            predecessors[i] = Some(current);
            queue.push_back(next);
        }
    }

    if !found {
        debug!(maze = maze.name(), explored, "no path found");
        return None;
    }

    let path = reconstruct(&predecessors, cols, start, end);
    match &path {
        Some(p) => debug!(maze = maze.name(), explored, moves = p.moves(), "path found"),
        None => error!(maze = maze.name(), "predecessor chain does not lead back to start"),
    }
    path
}

/// Remonte les prédécesseurs depuis l'arrivée puis inverse la liste.
///
/// Renvoie `None` si la chaîne ne se termine pas exactement sur le départ.
fn reconstruct(
    predecessors: &[Option<Coordinate>],
    cols: usize,
    start: Coordinate,
    end: Coordinate,
) -> Option<Path> {
    let mut steps = vec![end];
    let mut current = end;
    while current != start {
        // une chaîne plus longue que la grille ne peut pas être un arbre
        if steps.len() > predecessors.len() {
            return None;
        }
        current = predecessors[current.row * cols + current.col]?;
        steps.push(current);
    }
    steps.reverse();
    Some(Path::new(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[&str], start: (usize, usize), end: (usize, usize)) -> Maze {
        let symbols: Vec<Vec<&str>> = rows.iter().map(|r| r.split(',').collect()).collect();
        Maze::from_symbols("test", &symbols, start.into(), end.into()).unwrap()
    }

    fn coords(path: &Path) -> Vec<(usize, usize)> {
        path.coordinates().iter().map(|c| (c.row, c.col)).collect()
    }

    #[test]
    fn solves_reference_maze() {
        let m = maze(&["P,P,W", "W,P,P", "W,W,P"], (0, 0), (2, 2));
        let path = solve(&m).unwrap();
        assert_eq!(coords(&path), vec![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);
        assert_eq!(path.len(), 5);
        assert!(path.is_valid_for(&m));
    }

    #[test]
    fn start_equal_to_end_gives_single_cell() {
        let m = maze(&["P,W", "W,P"], (1, 1), (1, 1));
        let path = solve(&m).unwrap();
        assert_eq!(coords(&path), vec![(1, 1)]);
        assert_eq!(path.moves(), 0);
    }

    #[test]
    fn wall_barrier_gives_no_path() {
        let m = maze(&["P,P,W,P", "P,P,W,P", "P,P,W,P"], (0, 0), (2, 3));
        assert_eq!(solve(&m), None);
    }

    #[test]
    fn isolated_start_gives_no_path() {
        let m = maze(&["P,W", "W,P"], (0, 0), (1, 1));
        assert_eq!(solve(&m), None);
    }

    #[test]
    fn ties_prefer_right_then_down() {
        let m = maze(&["P,P,P", "P,P,P", "P,P,P"], (0, 0), (2, 2));
        let path = solve(&m).unwrap();
        assert_eq!(coords(&path), vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(
            path.directions(),
            vec![
                Direction::East,
                Direction::East,
                Direction::South,
                Direction::South
            ]
        );
    }

    #[test]
    fn ties_prefer_left_before_up() {
        let m = maze(&["P,P,P", "P,P,P", "P,P,P"], (2, 2), (0, 0));
        let path = solve(&m).unwrap();
        assert_eq!(coords(&path), vec![(2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn finds_shortest_among_detours() {
        // Long corridor on top, short cut through the middle row.
        let m = maze(
            &["P,P,P,P,P", "P,W,W,W,P", "P,P,P,P,P", "W,W,W,W,P"],
            (2, 0),
            (3, 4),
        );
        let path = solve(&m).unwrap();
        assert_eq!(path.moves(), 5);
        assert_eq!(path.end(), Coordinate::new(3, 4));
        assert!(path.is_valid_for(&m));
    }

    #[test]
    fn solving_twice_is_idempotent() {
        let m = maze(&["P,P,P,W", "P,W,P,P", "P,P,P,P"], (0, 0), (2, 3));
        assert_eq!(solve(&m), solve(&m));
    }

    #[test]
    fn reconstruct_rejects_broken_chain() {
        let predecessors = vec![None, None, None, None];
        let got = reconstruct(&predecessors, 2, Coordinate::new(0, 0), Coordinate::new(1, 1));
        assert_eq!(got, None);
    }
}
