use std::fmt;

use crate::cell::Cell;
use crate::error::{Endpoint, MazeError, MazeResult};
use crate::path::Path;
use crate::solver;

/// Position (ligne, colonne) dans la grille, à partir de 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Format `<row>-<col>`, celui du fichier et du rapport.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Grille rectangulaire de cellules, jamais vide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    cols: usize,
}

impl Grid {
    /// Construit une grille en vérifiant qu'elle est rectangulaire et non vide.
    pub fn new(rows: Vec<Vec<Cell>>) -> MazeResult<Self> {
        let cols = check_shape(&rows)?;
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.row < self.rows() && at.col < self.cols
    }

    /// Récupère une cellule, `None` hors de la grille.
    pub fn get(&self, at: Coordinate) -> Option<Cell> {
        self.rows.get(at.row)?.get(at.col).copied()
    }

    pub fn is_passable(&self, at: Coordinate) -> bool {
        self.get(at).is_some_and(Cell::is_passable)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Renvoie la largeur commune des lignes, ou une `ShapeError`.
fn check_shape<T>(rows: &[Vec<T>]) -> MazeResult<usize> {
    let first = rows
        .first()
        .ok_or_else(|| MazeError::shape("grid has no rows"))?;
    let cols = first.len();
    if cols == 0 {
        return Err(MazeError::shape("grid has no columns"));
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(MazeError::shape(format!(
            "row {} has {} cells, expected {}",
            index,
            row.len(),
            cols
        )));
    }
    Ok(cols)
}

/// Labyrinthe validé : nom, grille, départ et arrivée.
///
/// Une fois construit, un `Maze` respecte toujours ses invariants : le départ et
/// l'arrivée sont dans la grille et sur des cases praticables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    name: String,
    grid: Grid,
    start: Coordinate,
    end: Coordinate,
}

impl Maze {
    /// Construit un labyrinthe à partir d'une grille déjà typée.
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        start: Coordinate,
        end: Coordinate,
    ) -> MazeResult<Self> {
        let name = name.into();
        check_name(&name)?;
        Self::with_checked_name(name, grid, start, end)
    }

    /// Vérifie les bornes puis les cases du départ et de l'arrivée, le nom étant déjà validé.
    fn with_checked_name(
        name: String,
        grid: Grid,
        start: Coordinate,
        end: Coordinate,
    ) -> MazeResult<Self> {
        for (endpoint, at) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.contains(at) {
                return Err(MazeError::OutOfBounds {
                    endpoint,
                    at,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }
        for (endpoint, at) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.is_passable(at) {
                return Err(MazeError::BlockedEndpoint { endpoint, at });
            }
        }

        Ok(Self {
            name,
            grid,
            start,
            end,
        })
    }

    /// Construit un labyrinthe à partir des symboles bruts du fichier.
    ///
    /// Les vérifications se font dans cet ordre : forme de la grille, symboles,
    /// bornes du départ et de l'arrivée, puis cases bloquées.
    pub fn from_symbols<S: AsRef<str>>(
        name: impl Into<String>,
        symbols: &[Vec<S>],
        start: Coordinate,
        end: Coordinate,
    ) -> MazeResult<Self> {
        let name = name.into();
        check_name(&name)?;
        check_shape(symbols)?;

        let mut rows = Vec::with_capacity(symbols.len());
        for (r, line) in symbols.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, symbol) in line.iter().enumerate() {
                let symbol = symbol.as_ref();
                let cell = Cell::from_symbol(symbol).ok_or_else(|| MazeError::InvalidCell {
                    symbol: symbol.to_string(),
                    at: Coordinate::new(r, c),
                })?;
                row.push(cell);
            }
            rows.push(row);
        }

        Self::with_checked_name(name, Grid::new(rows)?, start, end)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Résout le labyrinthe et lui associe le chemin trouvé.
    pub fn solve(self) -> SolvedMaze {
        let path = solver::solve(&self);
        self.with_path(path)
    }

    /// Associe un chemin déjà calculé au labyrinthe.
    ///
    /// Le labyrinthe est consommé : deux résolutions concurrentes ne peuvent pas
    /// écrire sur la même instance.
    pub fn with_path(self, path: Option<Path>) -> SolvedMaze {
        debug_assert!(path.as_ref().map_or(true, |p| p.is_valid_for(&self)));
        SolvedMaze { maze: self, path }
    }
}

fn check_name(name: &str) -> MazeResult<()> {
    if name.trim().is_empty() {
        return Err(MazeError::format(1, "maze does not have a name"));
    }
    Ok(())
}

/// Reproduit le format d'entrée (sans retour à la ligne final).
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Start: {}", self.start)?;
        write!(f, "End: {}", self.end)?;
        for row in self.grid.iter_rows() {
            f.write_str("\n")?;
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Un labyrinthe accompagné du résultat de sa résolution.
///
/// `path` vaut `None` quand aucun chemin n'existe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedMaze {
    maze: Maze,
    path: Option<Path>,
}

impl SolvedMaze {
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    pub fn into_parts(self) -> (Maze, Option<Path>) {
        (self.maze, self.path)
    }
}
