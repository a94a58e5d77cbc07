use crate::{palette, PadPosition};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The palette color this player's marks are drawn in
    pub fn color(self) -> u8 {
        match self {
            Player::One => palette::RED,
            Player::Two => palette::BLUE,
        }
    }
}

/// A logical board cell, `(row, col)` with row 0 at the top
pub type Cell = (usize, usize);

/// The authoritative 3x3 board
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Board {
    cells: [[Option<Player>; 3]; 3],
}

impl Board {
    const LINES: [[Cell; 3]; 8] = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from owner numbers: 0 is empty, 1 and 2 are the players. Any other number
    /// is treated as empty.
    ///
    /// ```rust
    /// # use padgames::games::tic_tac_toe::{Board, Player};
    /// let board = Board::from_rows([[1, 2, 0], [0, 1, 2], [0, 0, 1]]);
    /// assert!(board.check_winner(Player::One));
    /// ```
    pub fn from_rows(rows: [[u8; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, owners) in rows.iter().enumerate() {
            for (col, owner) in owners.iter().enumerate() {
                board.cells[row][col] = match owner {
                    1 => Some(Player::One),
                    2 => Some(Player::Two),
                    _ => None,
                };
            }
        }
        board
    }

    pub fn get(&self, (row, col): Cell) -> Option<Player> {
        self.cells[row][col]
    }

    pub fn set(&mut self, (row, col): Cell, owner: Option<Player>) {
        self.cells[row][col] = owner;
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Number of marks on the board
    pub fn marks(&self) -> usize {
        self.cells.iter().flatten().filter(|owner| owner.is_some()).count()
    }

    /// Whether `player` owns a full row, column or diagonal
    pub fn check_winner(&self, player: Player) -> bool {
        Self::LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.get(cell) == Some(player)))
    }
}

/// Maps one physical axis onto a board axis. The pads on 3 and 6 are the separator lines.
fn band(value: u8) -> Option<usize> {
    match value {
        1 | 2 => Some(0),
        4 | 5 => Some(1),
        7 | 8 => Some(2),
        _ => None,
    }
}

/// The board cell a physical pad belongs to. Physical rows count from the bottom while board
/// rows count from the top, so the row axis is flipped.
pub fn cell_at(position: PadPosition) -> Option<Cell> {
    let row = 2 - band(position.row)?;
    let col = band(position.col)?;
    Some((row, col))
}

/// The four pads covering a board cell
pub fn cell_pads((row, col): Cell) -> [PadPosition; 4] {
    let bottom = 7 - 3 * row as u8;
    let left = 1 + 3 * col as u8;
    [
        PadPosition::new(bottom, left),
        PadPosition::new(bottom, left + 1),
        PadPosition::new(bottom + 1, left),
        PadPosition::new(bottom + 1, left + 1),
    ]
}

/// The pads making up the two horizontal and two vertical separator lines
pub fn separator_pads() -> impl Iterator<Item = PadPosition> {
    (1..=8).flat_map(|i| {
        [
            PadPosition::new(3, i),
            PadPosition::new(6, i),
            PadPosition::new(i, 3),
            PadPosition::new(i, 6),
        ]
    })
}
