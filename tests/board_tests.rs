use tictactoe::{Board, BoardError, BoardState, Player, BOARD_SIZE, CELL_COUNT};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.empty_count(), CELL_COUNT);
    assert!(!board.is_full());
    assert_eq!(board.winner(), None);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.cell(r, c), None);
            assert!(board.is_empty_cell(r, c));
        }
    }
}

#[test]
fn test_place_and_reject_occupied() {
    let mut board = Board::new();
    board.place(1, 2, Player::O).unwrap();
    assert_eq!(board.cell(1, 2), Some(Player::O));
    assert_eq!(
        board.place(1, 2, Player::X).unwrap_err(),
        BoardError::Occupied { row: 1, col: 2 }
    );
    assert_eq!(board.cell(1, 2), Some(Player::O));
    assert_eq!(board.move_count(), 1);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new();
    assert!(matches!(
        board.place(0, 3, Player::X),
        Err(BoardError::BitBoardError(_))
    ));
    assert_eq!(board.cell(5, 5), None);
    assert!(!board.is_empty_cell(5, 5));
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_every_line_wins() {
    for line in tictactoe::WIN_LINES {
        let mut board = Board::new();
        for (r, c) in line {
            board.place(r, c, Player::O).unwrap();
        }
        assert!(board.has_line(Player::O), "line {:?}", line);
        assert!(!board.has_line(Player::X));
        assert_eq!(board.winner(), Some(Player::O));
    }
}

#[test]
fn test_broken_line_does_not_win() {
    let mut board = Board::new();
    board.place(0, 0, Player::X).unwrap();
    board.place(0, 1, Player::X).unwrap();
    board.place(0, 2, Player::O).unwrap();
    assert_eq!(board.winner(), None);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place(0, 0, Player::X).unwrap();
    board.place(1, 1, Player::O).unwrap();
    let cells: Vec<_> = board.empty_cells().collect();
    assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
}

#[test]
fn test_board_state_snapshot() {
    let mut board = Board::new();
    board.place(2, 0, Player::X).unwrap();
    let state = BoardState::from(&board);
    assert_eq!(state.cells[2][0], Some(Player::X));
    assert_eq!(state.cells[0][2], None);
}
