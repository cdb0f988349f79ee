/// Nature d'une case de la grille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Case praticable (`P`).
    Passable,
    /// Mur (`W`).
    Wall,
}

impl Cell {
    /// Convertit un symbole du fichier en cellule.
    ///
    /// Seuls `P` et `W` sont reconnus, un symbole vide ou de plusieurs
    /// caractères renvoie `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "P" => Some(Cell::Passable),
            "W" => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Passable => 'P',
            Cell::Wall => 'W',
        }
    }

    pub fn is_passable(self) -> bool {
        self == Cell::Passable
    }
}
