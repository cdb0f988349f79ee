use crate::direction::Direction;
use crate::maze::{Coordinate, Maze};

/// Chemin calculé par le solveur, du départ jusqu'à l'arrivée inclus.
///
/// Un `Path` n'est jamais vide : départ et arrivée confondus donnent un chemin
/// d'une seule case, sans déplacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Coordinate>,
}

impl Path {
    pub(crate) fn new(steps: Vec<Coordinate>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    /// Nombre de cases du chemin, départ compris (la valeur `Moves:` du rapport).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Nombre de déplacements, soit `len() - 1`.
    pub fn moves(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn start(&self) -> Coordinate {
        self.steps[0]
    }

    pub fn end(&self) -> Coordinate {
        self.steps[self.steps.len() - 1]
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.steps
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.steps.contains(&at)
    }

    /// Directions successives empruntées par le chemin.
    pub fn directions(&self) -> Vec<Direction> {
        self.steps
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
            .collect()
    }

    /// Vérifie que le chemin relie le départ à l'arrivée de `maze`, par pas
    /// unitaires, sur des cases praticables.
    pub fn is_valid_for(&self, maze: &Maze) -> bool {
        let grid = maze.grid();
        self.start() == maze.start()
            && self.end() == maze.end()
            && self.steps.len() <= grid.rows() * grid.cols()
            && self.steps.iter().all(|&at| grid.is_passable(at))
            && self
                .steps
                .windows(2)
                .all(|w| Direction::between(w[0], w[1]).is_some())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell::{Passable as P, Wall as W};
    use crate::maze::Grid;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn counts_cells_and_moves() {
        let path = Path::new(vec![c(0, 0), c(0, 1), c(1, 1)]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.moves(), 2);
        assert_eq!(path.start(), c(0, 0));
        assert_eq!(path.end(), c(1, 1));
        assert_eq!(path.directions(), vec![Direction::East, Direction::South]);

        let single = Path::new(vec![c(2, 2)]);
        assert_eq!(single.len(), 1);
        assert_eq!(single.moves(), 0);
        assert!(single.directions().is_empty());
    }

    #[test]
    fn validity_checks_steps_and_walls() {
        let grid = Grid::new(vec![vec![P, P], vec![W, P]]).unwrap();
        let maze = Maze::new("m", grid, c(0, 0), c(1, 1)).unwrap();

        assert!(Path::new(vec![c(0, 0), c(0, 1), c(1, 1)]).is_valid_for(&maze));
        // diagonal jump
        assert!(!Path::new(vec![c(0, 0), c(1, 1)]).is_valid_for(&maze));
        // through the wall
        assert!(!Path::new(vec![c(0, 0), c(1, 0), c(1, 1)]).is_valid_for(&maze));
        // wrong end
        assert!(!Path::new(vec![c(0, 0), c(0, 1)]).is_valid_for(&maze));
    }
}
