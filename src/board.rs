//! Board state as one occupancy mask per mark.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Player};
use crate::config::{BOARD_SIZE, WIN_LINES};

type BB = BitBoard<u16, BOARD_SIZE>;

/// `WIN_LINES` packed into row-major masks.
const LINE_MASKS: [u16; WIN_LINES.len()] = line_masks();

const fn line_masks() -> [u16; WIN_LINES.len()] {
    let mut masks = [0u16; WIN_LINES.len()];
    let mut i = 0;
    while i < WIN_LINES.len() {
        let mut j = 0;
        while j < BOARD_SIZE {
            let (r, c) = WIN_LINES[i][j];
            masks[i] |= 1 << (r * BOARD_SIZE + c);
            j += 1;
        }
        i += 1;
    }
    masks
}

/// Serializable board contents, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

/// 3×3 grid. Each cell is empty or holds exactly one mark: the two masks
/// never overlap, and their combined population is the number of moves
/// played.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    fn marks(&self, player: Player) -> BB {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Put `player`'s mark at (row, col).
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if self.occupied().get(row, col)? {
            return Err(BoardError::Occupied { row, col });
        }
        match player {
            Player::X => self.x.set(row, col)?,
            Player::O => self.o.set(row, col)?,
        }
        Ok(())
    }

    /// Mark at (row, col); `None` for an empty or out-of-range cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        if self.x.get(row, col).unwrap_or(false) {
            Some(Player::X)
        } else if self.o.get(row, col).unwrap_or(false) {
            Some(Player::O)
        } else {
            None
        }
    }

    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        matches!(self.occupied().get(row, col), Ok(false))
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (!self.occupied()).iter_set_bits()
    }

    pub fn empty_count(&self) -> usize {
        (!self.occupied()).count_ones()
    }

    /// True when `player` holds a complete row, column or diagonal.
    pub fn has_line(&self, player: Player) -> bool {
        let marks = self.marks(player);
        LINE_MASKS
            .iter()
            .any(|&mask| marks.contains(BB::from_raw(mask)))
    }

    /// Owner of a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        [Player::X, Player::O].into_iter().find(|p| self.has_line(*p))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board[")?;
        for r in 0..BOARD_SIZE {
            if r > 0 {
                write!(f, "/")?;
            }
            for c in 0..BOARD_SIZE {
                let ch = self.cell(r, c).map(Player::symbol).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
        }
        write!(f, "]")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            cells: core::array::from_fn(|r| core::array::from_fn(|c| b.cell(r, c))),
        }
    }
}
