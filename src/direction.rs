use crate::maze::Coordinate;

/// Direction absolue d'un déplacement sur la grille.
///
/// Les lignes croissent vers le bas : `North` diminue `row`, `East` augmente `col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre d'expansion des voisins pendant le BFS : droite, bas, gauche, haut.
    ///
    /// Cet ordre décide quel plus court chemin est retourné quand il y en a plusieurs.
    pub const EXPANSION_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Fait demi tour (par ex. North -> South)
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage (drow, dcol) d'un pas dans cette direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Nouvelle position après un pas, si elle reste dans une grille `rows` x `cols`.
    pub fn step(self, from: Coordinate, rows: usize, cols: usize) -> Option<Coordinate> {
        let (dr, dc) = self.offset();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Coordinate::new(row, col))
        } else {
            None
        }
    }

    /// Direction qui mène de `from` à `to` s'ils sont voisins directs.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Self> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;
        match (dr, dc) {
            (-1, 0) => Some(Direction::North),
            (0, 1) => Some(Direction::East),
            (1, 0) => Some(Direction::South),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }
}
