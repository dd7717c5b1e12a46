use super::*;
use proptest::prelude::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_display() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
    assert_eq!(Mark::Empty.to_string(), " ");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(3), 5);
    assert_eq!(Pos::from_index(5, 3), pos);
    assert_eq!(Pos::from_index(0, 4), Pos::new(0, 0));
    assert_eq!(Pos::from_index(15, 4), Pos::new(3, 3));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
}

#[test]
fn test_oversized_board_rejected() {
    assert_eq!(
        Board::new(MAX_BOARD_SIZE + 1),
        Err(BoardError::TooLarge(MAX_BOARD_SIZE + 1))
    );
    assert_eq!(Board::new(1usize << 33), Err(BoardError::TooLarge(1usize << 33)));
    assert_eq!(Board::new(usize::MAX), Err(BoardError::TooLarge(usize::MAX)));
}

#[test]
fn test_max_size_board() {
    let board = Board::new(MAX_BOARD_SIZE).unwrap();
    assert_eq!(board.size(), MAX_BOARD_SIZE);
    assert!(board.is_valid_move(MAX_BOARD_SIZE as i64 - 1, MAX_BOARD_SIZE as i64 - 1));
}

#[test]
fn test_one_by_one_board() {
    let mut board = Board::new(1).unwrap();
    assert!(!board.is_full());
    board.place(Pos::new(0, 0), Mark::X);
    assert!(board.is_full());
}

#[test]
fn test_is_valid_move_occupied() {
    let mut board = Board::new(3).unwrap();
    board.place(Pos::new(1, 1), Mark::O);
    assert!(!board.is_valid_move(1, 1));
    assert!(board.is_valid_move(1, 2));
}

#[test]
fn test_is_valid_move_out_of_bounds() {
    let board = Board::new(3).unwrap();
    assert!(!board.is_valid_move(-1, 0));
    assert!(!board.is_valid_move(0, -1));
    assert!(!board.is_valid_move(3, 0));
    assert!(!board.is_valid_move(0, 3));
    assert!(!board.is_valid_move(5, 5));
}

#[test]
fn test_is_full_after_filling() {
    let mut board = Board::new(2).unwrap();
    let marks = [Mark::X, Mark::O, Mark::O, Mark::X];
    for (pos, mark) in board.positions().collect::<Vec<_>>().into_iter().zip(marks) {
        assert!(!board.is_full());
        board.place(pos, mark);
    }
    assert!(board.is_full());
    assert_eq!(board.mark_count(), 4);
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new(3).unwrap();
    board.place(Pos::new(2, 0), Mark::X);
    board.place(Pos::new(0, 2), Mark::O);
    let occupied: Vec<_> = board.occupied().collect();
    assert_eq!(
        occupied,
        vec![(Pos::new(0, 2), Mark::O), (Pos::new(2, 0), Mark::X)]
    );
}

#[test]
fn test_diff() {
    let before = Board::new(3).unwrap();
    let mut after = before.clone();
    after.place(Pos::new(2, 1), Mark::O);
    assert_eq!(before.diff(&after), vec![Pos::new(2, 1)]);
    assert!(before.diff(&before).is_empty());
}

proptest! {
    #[test]
    fn prop_fresh_board_is_empty(size in 1usize..10) {
        let board = Board::new(size).unwrap();
        prop_assert!(!board.is_full());
        prop_assert_eq!(board.mark_count(), 0);
        prop_assert!(board.positions().all(|pos| board.is_empty(pos)));
    }

    #[test]
    fn prop_valid_move_iff_in_bounds_and_empty(
        size in 1usize..8,
        row in -3i64..12,
        col in -3i64..12,
        occupy in any::<bool>(),
    ) {
        let mut board = Board::new(size).unwrap();
        let in_bounds = row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size;
        if in_bounds && occupy {
            board.place(Pos::new(row as usize, col as usize), Mark::X);
        }
        prop_assert_eq!(board.is_valid_move(row, col), in_bounds && !occupy);
    }

    #[test]
    fn prop_place_then_clear_restores(size in 1usize..8, idx in 0usize..64, x in any::<bool>()) {
        let mut board = Board::new(size).unwrap();
        let pos = Pos::from_index(idx % (size * size), size);
        let before = board.clone();
        board.place(pos, if x { Mark::X } else { Mark::O });
        prop_assert!(!board.is_valid_move(pos.row as i64, pos.col as i64));
        board.clear(pos);
        prop_assert!(board.is_valid_move(pos.row as i64, pos.col as i64));
        prop_assert_eq!(board, before);
    }
}
