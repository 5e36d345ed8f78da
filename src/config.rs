/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Every line that wins the game: three rows, three columns, two diagonals.
pub const WIN_LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Score of a won position before the ply-distance adjustment.
pub const WIN_SCORE: i32 = 10;

/// Search depth used by the medium tier (own move plus the reply).
pub const MEDIUM_SEARCH_DEPTH: u8 = 2;

/// Search depth that always reaches a terminal position.
pub const FULL_SEARCH_DEPTH: u8 = CELL_COUNT as u8;

/// Environment variable read by `init_logging`.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";
