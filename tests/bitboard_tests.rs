use tictactoe::{BitBoard, BitBoardError};

type Bb = BitBoard<u16, 3>;

fn cells(list: &[(usize, usize)]) -> Bb {
    let mut bb = Bb::new();
    for &(r, c) in list {
        bb.set(r, c).unwrap();
    }
    bb
}

#[test]
fn test_get_set() {
    let mut bb = Bb::new();
    assert_eq!(bb.count_ones(), 0);

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(0, 1).unwrap());
    assert_eq!(bb.count_ones(), 1);

    // setting twice is a no-op
    bb.set(1, 1).unwrap();
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = Bb::new();
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 3).is_err());
    assert_eq!(bb.count_ones(), 0);
}

#[test]
fn test_complement_stays_on_board() {
    let bb = cells(&[(0, 0), (2, 2)]);
    let rest = !bb;
    assert_eq!(rest.count_ones(), 7);
    assert!(!rest.get(0, 0).unwrap());
    assert!((bb | rest).is_full());
    assert_eq!((!(bb | rest)).count_ones(), 0);
}

#[test]
fn test_from_raw_masks_off_board_bits() {
    let bb = Bb::from_raw(u16::MAX);
    assert!(bb.is_full());
    assert_eq!(bb.count_ones(), 9);
}

#[test]
fn test_contains_and_iter() {
    let diag = cells(&[(0, 0), (1, 1), (2, 2)]);
    let more = diag | cells(&[(0, 2)]);
    assert!(more.contains(diag));
    assert!(!diag.contains(more));
    let bits: Vec<_> = more.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 0), (0, 2), (1, 1), (2, 2)]);
}
