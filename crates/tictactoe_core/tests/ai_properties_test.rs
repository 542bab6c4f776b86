//! Behavioural guarantees of the computer opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::ai::{count_potential_wins, easy_move, hard_move, medium_move};
use tictactoe_core::{Board, Difficulty, Engine, Mark, Position, select_move};

fn board(marks: &[(usize, usize, Mark)]) -> Board {
    let mut board = Board::new();
    for &(row, col, mark) in marks {
        assert!(board.place(row, col, mark));
    }
    board
}

#[test]
fn test_hard_opens_in_center() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(hard_move(&Board::new(), Mark::X, &mut rng), Some(Position::Center));
    }
}

#[test]
fn test_hard_takes_win_over_block() {
    // Both sides threaten; O must finish its own row.
    let b = board(&[
        (0, 0, Mark::X),
        (0, 1, Mark::X),
        (1, 0, Mark::O),
        (1, 1, Mark::O),
        (2, 2, Mark::X),
    ]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(hard_move(&b, Mark::O, &mut rng), Some(Position::MiddleRight));
}

#[test]
fn test_hard_blocks_the_threatened_cell() {
    let b = board(&[(0, 0, Mark::X), (1, 1, Mark::O), (0, 1, Mark::X)]);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(hard_move(&b, Mark::O, &mut rng), Some(Position::TopRight));
}

#[test]
fn test_medium_blocks_but_never_forks() {
    let threatened = board(&[(0, 0, Mark::O), (1, 1, Mark::X), (2, 0, Mark::X)]);
    assert_eq!(medium_move(&threatened, Mark::O), Some(Position::TopRight));

    // O could fork at top-right; medium plays the first edge instead.
    let fork_available = board(&[(0, 0, Mark::O), (1, 1, Mark::X), (2, 2, Mark::O)]);
    assert_eq!(medium_move(&fork_available, Mark::O), Some(Position::TopCenter));
}

#[test]
fn test_easy_misses_available_wins() {
    // O wins at top-right; four other cells are open.
    let b = board(&[
        (0, 0, Mark::O),
        (0, 1, Mark::O),
        (1, 1, Mark::X),
        (2, 0, Mark::X),
    ]);

    let picks: Vec<_> = (0..50)
        .map(|seed| easy_move(&b, &mut StdRng::seed_from_u64(seed), 20).unwrap())
        .collect();

    assert!(picks.iter().all(|&pos| b.is_empty(pos)));
    assert!(picks.iter().any(|&pos| pos != Position::TopRight));
}

#[test]
fn test_hard_completes_diagonal_when_offered() {
    // O holds both ends of the main diagonal with the center open.
    let mut b = board(&[(0, 0, Mark::O), (2, 2, Mark::O), (0, 2, Mark::X)]);
    let mut engine = Engine::seeded(Difficulty::Hard, 20, 11);

    assert_eq!(engine.make_move(&mut b, Mark::O), Some(Position::Center));
    assert!(b.check_win(Mark::O));
}

#[test]
fn test_hard_creates_two_threats() {
    let mut b = board(&[(0, 0, Mark::O), (1, 1, Mark::X), (2, 2, Mark::O)]);
    let mut engine = Engine::seeded(Difficulty::Hard, 20, 11);

    let pos = engine.make_move(&mut b, Mark::O).unwrap();

    assert_eq!(pos, Position::TopRight);
    assert!(count_potential_wins(&b, Mark::O) >= 2);
}

#[test]
fn test_select_move_dispatches_by_difficulty() {
    let b = board(&[(0, 0, Mark::O), (1, 1, Mark::X), (2, 2, Mark::O)]);
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(
        select_move(&b, Difficulty::Medium, Mark::O, &mut rng, 20),
        Some(Position::TopCenter)
    );
    assert_eq!(
        select_move(&b, Difficulty::Hard, Mark::O, &mut rng, 20),
        Some(Position::TopRight)
    );
}

#[test]
fn test_engine_never_touches_a_full_board() {
    let full = board(&[
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (0, 2, Mark::X),
        (1, 0, Mark::X),
        (1, 1, Mark::O),
        (1, 2, Mark::O),
        (2, 0, Mark::O),
        (2, 1, Mark::X),
        (2, 2, Mark::X),
    ]);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut b = full;
        let mut engine = Engine::seeded(difficulty, 20, 0);
        assert_eq!(engine.make_move(&mut b, Mark::O), None);
        assert_eq!(b, full);
    }
}
