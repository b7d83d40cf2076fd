use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 42;

fn alive_count(board: &Board) -> usize {
    board.cells().iter().filter(|c| c.is_alive()).count()
}

#[test]
fn test_blank_rejects_empty_dimensions() {
    assert_eq!(Board::blank(0, 5), Err(ConfigError::InvalidWidth(0)));
    assert_eq!(Board::blank(5, 0), Err(ConfigError::InvalidHeight(0)));
    assert_eq!(
        Board::blank(usize::MAX, 2),
        Err(ConfigError::BoardTooLarge {
            width: usize::MAX,
            height: 2
        })
    );
}

#[test]
fn test_random_rejects_percentage_above_100() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    assert_eq!(
        Board::random(10, 10, 101, &mut rng),
        Err(ConfigError::PopulationPercentage(101))
    );
}

#[test]
fn test_random_population_matches_target() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    for (w, h, percentage, expected) in [
        (10, 10, 40, 40),
        (50, 30, 25, 375),
        (7, 3, 50, 10),
        (3, 3, 0, 0),
        (3, 3, 99, 8),
        (3, 3, 100, 9),
        (1, 1, 100, 1),
    ] {
        let board = Board::random(w, h, percentage, &mut rng).unwrap();
        assert_eq!(board.size(), (w, h));
        assert_eq!(board.population(), expected, "{w}x{h} at {percentage}%");
        assert_eq!(alive_count(&board), expected, "{w}x{h} at {percentage}%");
    }
}

#[test]
fn test_seeded_is_reproducible() {
    let a = Board::seeded(40, 20, 30, Some(SEED)).unwrap();
    let b = Board::seeded(40, 20, 30, Some(SEED)).unwrap();
    let c = Board::seeded(40, 20, 30, Some(SEED + 1)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_neighbors_stop_at_edges() {
    let board = Board::parse(
        ". . .
         . @ .
         . . .",
    )
    .unwrap();
    for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2), (1, 0), (0, 1)] {
        assert_eq!(board.count_living_neighbors(x, y), 1, "({x}, {y})");
    }
    assert_eq!(board.count_living_neighbors(1, 1), 0);
}

#[test]
fn test_neighbors_of_full_board() {
    let board = Board::random(4, 3, 100, &mut ChaCha8Rng::seed_from_u64(SEED)).unwrap();
    assert_eq!(board.count_living_neighbors(0, 0), 3);
    assert_eq!(board.count_living_neighbors(1, 0), 5);
    assert_eq!(board.count_living_neighbors(1, 1), 8);
    assert_eq!(board.count_living_neighbors(3, 2), 3);
}

#[test]
fn test_neighbors_do_not_wrap() {
    let board = Board::parse(
        "@ . . @
         . . . .
         @ . . @",
    )
    .unwrap();
    assert_eq!(board.count_living_neighbors(0, 0), 0);
    assert_eq!(board.count_living_neighbors(3, 2), 0);
    assert_eq!(board.count_living_neighbors(0, 1), 2);
}

#[test]
fn test_single_row_and_column_boards() {
    let row = Board::parse("@@.@").unwrap();
    assert_eq!(row.size(), (4, 1));
    assert_eq!(row.count_living_neighbors(0, 0), 1);
    assert_eq!(row.count_living_neighbors(2, 0), 2);

    let column = Board::parse("@\n@\n@").unwrap();
    assert_eq!(column.count_living_neighbors(0, 1), 2);
}

#[test]
fn test_parse_errors() {
    assert_eq!(Board::parse(""), Err(ParseError::Empty));
    assert_eq!(Board::parse("\n  \n"), Err(ParseError::Empty));
    assert_eq!(
        Board::parse(". .\n. . ."),
        Err(ParseError::RaggedRow {
            row: 1,
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        Board::parse(". @\n. #"),
        Err(ParseError::UnknownGlyph {
            glyph: '#',
            row: 1,
            col: 1
        })
    );
}

#[test]
fn test_from_cells_checks_length() {
    assert_eq!(
        Board::from_cells(2, 2, vec![CellState::Alive; 3]),
        Err(ParseError::LengthMismatch {
            expected: 4,
            found: 3
        })
    );
    let board = Board::from_cells(2, 2, vec![CellState::Alive; 4]).unwrap();
    assert_eq!(board.population(), 4);
}

#[test]
fn test_display_and_text() {
    let board = Board::parse(
        "@ . .
         . @ @",
    )
    .unwrap();
    assert_eq!(board.to_string(), "@ . .\n. @ @");

    let text = board.to_text();
    assert_eq!((text.width, text.height, text.population), (3, 2, 3));
    assert_eq!(text.rows, vec![vec!['@', '.', '.'], vec!['.', '@', '@']]);
    assert_eq!(text.to_string(), board.to_string());

    let reparsed: Board = board.to_string().parse().unwrap();
    assert_eq!(reparsed, board);
}

#[test]
#[should_panic(expected = "outside the board")]
fn test_neighbors_outside_panics() {
    let board = Board::blank(3, 2).unwrap();
    board.count_living_neighbors(0, 2);
}

#[test]
#[should_panic]
fn test_get_outside_panics() {
    let board = Board::blank(3, 3).unwrap();
    board.get(3, 0);
}
