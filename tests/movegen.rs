use tabia::{movegen, position, Board, Color, MoveError, Position, Role};

fn assert_contains_all(haystack: &[Position], needles: &[Position]) {
    for needle in needles {
        assert!(
            haystack.contains(needle),
            "{needle} missing from {haystack:?}"
        );
    }
}

#[test]
fn pawn_moves_and_attacks() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E2).unwrap();
    board.add(Color::Black, Role::Pawn, position::D3).unwrap();

    let wpawn = board.at(position::E2).unwrap().unwrap();
    let bpawn = board.at(position::D3).unwrap().unwrap();

    assert_eq!(
        wpawn.possible_moves().as_slice(),
        &[position::E3, position::E4]
    );
    assert_eq!(bpawn.possible_moves().as_slice(), &[position::D2]);

    assert_eq!(wpawn.possible_attacks().as_slice(), &[position::D3]);
    assert_eq!(bpawn.possible_attacks().as_slice(), &[position::E2]);
}

#[test]
fn pawn_single_step_blocked() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E2).unwrap();
    board.add(Color::Black, Role::Rook, position::E3).unwrap();

    let pawn = board.at(position::E2).unwrap().unwrap();
    assert!(pawn.possible_moves().is_empty());
    // Straight ahead is never an attack.
    assert!(pawn.possible_attacks().is_empty());
}

#[test]
fn pawn_double_step_blocked_at_destination() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E2).unwrap();
    board.add(Color::Black, Role::Rook, position::E4).unwrap();

    let pawn = board.at(position::E2).unwrap().unwrap();
    assert_eq!(pawn.possible_moves().as_slice(), &[position::E3]);
}

#[test]
fn pawn_double_step_requires_starting_rank() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E3).unwrap();
    board.add(Color::Black, Role::Pawn, position::D6).unwrap();

    let wpawn = board.at(position::E3).unwrap().unwrap();
    assert_eq!(wpawn.possible_moves().as_slice(), &[position::E4]);

    let bpawn = board.at(position::D6).unwrap().unwrap();
    assert_eq!(bpawn.possible_moves().as_slice(), &[position::D5]);
}

#[test]
fn pawn_black_double_step_from_starting_rank() {
    let mut board = Board::new();
    board.add(Color::Black, Role::Pawn, position::D7).unwrap();

    let pawn = board.at(position::D7).unwrap().unwrap();
    assert_eq!(
        pawn.possible_moves().as_slice(),
        &[position::D6, position::D5]
    );
}

#[test]
fn pawn_on_last_rank_has_nowhere_to_go() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E8).unwrap();

    let pawn = board.at(position::E8).unwrap().unwrap();
    assert!(pawn.possible_moves().is_empty());
    assert!(pawn.possible_attacks().is_empty());
}

#[test]
fn pawn_empty_diagonal_is_no_move() {
    let mut board = Board::new();
    board.add(Color::White, Role::Pawn, position::E2).unwrap();

    let pawn = board.at(position::E2).unwrap().unwrap();
    assert!(!pawn.possible_moves().contains(&position::D3));
    assert!(pawn.possible_attacks().is_empty());
}

// Five rooks with one contested square: exact mobility counts and the
// attack relations around D5.
fn five_rooks() -> Board {
    Board::from_notation(&[
        ["", "", "", "", "", "", "", ""],
        ["", "WR", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "WR", "", "BR", "", "WR", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", "BR"],
        ["", "", "", "", "", "", "", ""],
    ])
    .unwrap()
}

#[test]
fn rook_moves() {
    let board = five_rooks();

    let upper = movegen::moves(&board, position::B2).unwrap();
    assert_eq!(upper.len(), 10);
    assert_contains_all(&upper, &[position::B3, position::B4, position::B1, position::A2]);
    assert_contains_all(
        &upper,
        &[
            position::C2,
            position::D2,
            position::E2,
            position::F2,
            position::G2,
            position::H2,
        ],
    );

    let left = movegen::moves(&board, position::B5).unwrap();
    assert_eq!(left.len(), 7);
    assert_contains_all(
        &left,
        &[
            position::B6,
            position::B7,
            position::B8,
            position::B4,
            position::B3,
            position::A5,
            position::C5,
        ],
    );
    assert!(!left.contains(&position::D5));

    let middle = movegen::moves(&board, position::D5).unwrap();
    assert_eq!(middle.len(), 9);
    assert_contains_all(&middle, &[position::C5, position::E5]);
    assert_contains_all(
        &middle,
        &[position::D1, position::D2, position::D3, position::D4],
    );
    assert_contains_all(&middle, &[position::D6, position::D7, position::D8]);

    let right = movegen::moves(&board, position::F5).unwrap();
    assert_eq!(right.len(), 10);
    assert_contains_all(&right, &[position::E5, position::G5, position::H5]);

    let lower = movegen::moves(&board, position::H7).unwrap();
    assert_eq!(lower.len(), 14);
    assert_contains_all(&lower, &[position::H8, position::H1, position::A7, position::G7]);
}

#[test]
fn rook_attacks() {
    let board = five_rooks();

    assert!(movegen::attacks(&board, position::B2).unwrap().is_empty());
    assert_eq!(
        movegen::attacks(&board, position::B5).unwrap().as_slice(),
        &[position::D5]
    );
    assert_eq!(
        movegen::attacks(&board, position::F5).unwrap().as_slice(),
        &[position::D5]
    );

    let middle: Vec<Position> = movegen::attacks(&board, position::D5).unwrap().to_vec();
    assert_eq!(middle.len(), 2);
    assert_contains_all(&middle, &[position::B5, position::F5]);

    assert!(movegen::attacks(&board, position::H7).unwrap().is_empty());
}

#[test]
fn sliding_stops_at_first_obstruction() {
    let board = five_rooks();

    // Nothing on the D file beyond D5 is reachable for the left rook,
    // and nothing beyond F5 either.
    let left = movegen::moves(&board, position::B5).unwrap();
    assert!(!left.contains(&position::E5));
    assert!(!left.contains(&position::F5));
    let attacks = movegen::attacks(&board, position::B5).unwrap();
    assert!(!attacks.contains(&position::F5));
}

#[test]
fn knight_leaps_over_pieces() {
    let mut board = Board::new();
    board.add(Color::White, Role::Knight, position::B1).unwrap();
    // Surround the knight; leapers ignore intervening squares.
    board.add(Color::White, Role::Pawn, position::A2).unwrap();
    board.add(Color::White, Role::Pawn, position::B2).unwrap();
    board.add(Color::White, Role::Pawn, position::C2).unwrap();

    let knight = board.at(position::B1).unwrap().unwrap();
    let moves = knight.possible_moves();
    assert_eq!(moves.len(), 3);
    assert_contains_all(&moves, &[position::A3, position::C3, position::D2]);
}

#[test]
fn knight_attacks_enemy_only() {
    let mut board = Board::new();
    board.add(Color::White, Role::Knight, position::D4).unwrap();
    board.add(Color::Black, Role::Pawn, position::C6).unwrap();
    board.add(Color::White, Role::Pawn, position::E6).unwrap();

    let knight = board.at(position::D4).unwrap().unwrap();
    assert_eq!(knight.possible_attacks().as_slice(), &[position::C6]);
    assert_eq!(knight.possible_moves().len(), 6);
}

#[test]
fn king_moves_one_step() {
    let mut board = Board::new();
    board.add(Color::White, Role::King, position::D4).unwrap();
    let king = board.at(position::D4).unwrap().unwrap();
    assert_eq!(king.possible_moves().len(), 8);

    let mut corner = Board::new();
    corner.add(Color::Black, Role::King, position::A1).unwrap();
    let king = corner.at(position::A1).unwrap().unwrap();
    let moves = king.possible_moves();
    assert_eq!(moves.len(), 3);
    assert_contains_all(&moves, &[position::A2, position::B1, position::B2]);
}

#[test]
fn bishop_blocked_by_both_colors() {
    let mut board = Board::new();
    board.add(Color::White, Role::Bishop, position::C1).unwrap();
    board.add(Color::White, Role::Pawn, position::B2).unwrap();
    board.add(Color::Black, Role::Pawn, position::E3).unwrap();

    let bishop = board.at(position::C1).unwrap().unwrap();
    assert_eq!(bishop.possible_moves().as_slice(), &[position::D2]);
    assert_eq!(bishop.possible_attacks().as_slice(), &[position::E3]);
}

#[test]
fn queen_covers_both_direction_sets() {
    let mut board = Board::new();
    board.add(Color::White, Role::Queen, position::D4).unwrap();

    let queen = board.at(position::D4).unwrap().unwrap();
    let rook_part = {
        let mut other = Board::new();
        other.add(Color::White, Role::Rook, position::D4).unwrap();
        movegen::moves(&other, position::D4).unwrap().len()
    };
    let bishop_part = {
        let mut other = Board::new();
        other.add(Color::White, Role::Bishop, position::D4).unwrap();
        movegen::moves(&other, position::D4).unwrap().len()
    };
    assert_eq!(queen.possible_moves().len(), rook_part + bishop_part);
    assert_eq!(queen.possible_moves().len(), 27);
}

#[test]
fn generated_sets_match_occupancy() {
    let board = Board::standard();
    for placed in board.pieces() {
        for to in placed.possible_moves() {
            assert_eq!(board.is_empty(to), Ok(true));
        }
        for to in placed.possible_attacks() {
            let target = board.at(to).unwrap().expect("attack target occupied");
            assert_eq!(target.color(), !placed.color());
        }
    }
}

#[test]
fn empty_square_generates_nothing() {
    let board = Board::new();
    assert!(movegen::moves(&board, position::D4).unwrap().is_empty());
    assert!(movegen::attacks(&board, position::D4).unwrap().is_empty());
}

#[test]
fn out_of_bounds_is_an_error() {
    let board = Board::new();
    let outside = Position::new(3, 8);
    assert_eq!(movegen::moves(&board, outside), Err(MoveError::OutOfBounds));
    assert_eq!(
        movegen::attacks(&board, outside),
        Err(MoveError::OutOfBounds)
    );
}
