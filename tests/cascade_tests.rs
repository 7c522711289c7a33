//! Rotation and cascade integration tests.
//!
//! These tests drive small hand-built boards through complete cascades and
//! check propagation, turn passing, win detection and counter balance.

use std::time::Duration;

use bio_battle::Direction::{East as E, North as N, South as S, West as W};
use bio_battle::{
    Board, BoardBuilder, BoardConfig, BoardEvent, CellPos, Direction, EventLog, Player,
};

const STEP: Duration = Duration::from_millis(50);

fn build(rows: &[&[Direction]], owners: &[(CellPos, Player)], first: Player) -> Board {
    let config = BoardConfig::new().with_dimensions(rows.len(), rows[0].len());
    let mut builder = BoardBuilder::new(config).directions(rows).current_player(first);
    for &(pos, player) in owners {
        builder = builder.owner(pos, player);
    }
    builder.build().unwrap()
}

/// 3×3 board where rotating (0,0) to East reaches (0,1), which faces South
/// and reaches (1,1).
fn propagation_board() -> Board {
    build(
        &[&[N, S, E], &[W, N, E], &[W, W, E]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(2, 2), Player::B),
        ],
        Player::A,
    )
}

// =============================================================================
// Propagation
// =============================================================================

/// Test the direct-then-delayed propagation scenario end to end.
#[test]
fn test_propagation_through_continuation() {
    let mut board = propagation_board();

    board.rotate(CellPos::new(0, 0));

    // Direct target converts synchronously.
    assert_eq!(board.direction_at(CellPos::new(0, 0)), Some(E));
    assert_eq!(board.owner_at(CellPos::new(0, 1)), Some(Player::A));
    assert_eq!(board.owner_at(CellPos::new(1, 1)), None);
    assert_eq!(board.pending_infections(), 1);

    // (0,1) spreads once its delay elapses.
    board.advance(STEP);
    assert_eq!(board.owner_at(CellPos::new(1, 1)), Some(Player::A));

    board.settle();

    assert_eq!(board.owner_at(CellPos::new(0, 1)), Some(Player::A));
    assert_eq!(board.owner_at(CellPos::new(1, 1)), Some(Player::A));
    assert_eq!(board.pending_infections(), 0);
    assert_eq!(board.score(Player::A), 3);
    assert_eq!(board.score(Player::B), 1);

    // Untouched cells keep their owners.
    assert_eq!(board.owner_at(CellPos::new(1, 0)), None);
    assert_eq!(board.owner_at(CellPos::new(2, 2)), Some(Player::B));
}

/// Test that a target listed twice (direct and indirect) converts once.
#[test]
fn test_duplicate_target_converts_once() {
    let mut board = propagation_board();
    let log = EventLog::new();
    board.subscribe(Box::new(log.clone()));

    board.rotate(CellPos::new(0, 0));
    board.settle();

    let infected: Vec<_> = log
        .events()
        .into_iter()
        .filter_map(|e| match e {
            BoardEvent::Infected { pos, .. } => Some(pos),
            _ => None,
        })
        .collect();

    assert_eq!(infected, vec![CellPos::new(0, 1), CellPos::new(1, 1)]);
}

/// Test that indirect infection pulls in neighbors facing the source.
#[test]
fn test_indirect_infection() {
    // (0,0) rotates West→North: no direct target. (1,0) faces North at it
    // and (0,1) faces West at it, so both convert.
    let mut board = build(
        &[&[W, W, E], &[N, E, E], &[E, E, E]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(2, 2), Player::B),
        ],
        Player::A,
    );

    board.rotate(CellPos::new(0, 0));

    assert_eq!(board.owner_at(CellPos::new(1, 0)), Some(Player::A));
    assert_eq!(board.owner_at(CellPos::new(0, 1)), Some(Player::A));
    assert_eq!(board.pending_infections(), 2);
}

/// Test that opponent cells are converted, not only unowned ones.
#[test]
fn test_infection_takes_opponent_cells() {
    let mut board = build(
        &[&[N, E, E], &[E, E, E]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(0, 1), Player::B),
            (CellPos::new(1, 2), Player::B),
        ],
        Player::A,
    );

    board.rotate(CellPos::new(0, 0));
    board.settle();

    assert_eq!(board.owner_at(CellPos::new(0, 1)), Some(Player::A));
    assert_eq!(board.score(Player::B), 1);
}

// =============================================================================
// Turns
// =============================================================================

/// Test that a rotate with no conversions passes the turn exactly once.
#[test]
fn test_quiet_rotate_toggles_turn() {
    let mut board = build(
        &[&[W, E], &[S, N]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(1, 1), Player::B),
        ],
        Player::A,
    );
    let log = EventLog::new();
    board.subscribe(Box::new(log.clone()));

    board.rotate(CellPos::new(0, 0));

    assert_eq!(board.pending_infections(), 0);
    assert_eq!(board.current_player(), Player::B);
    assert_eq!(
        log.events(),
        vec![
            BoardEvent::Rotated {
                pos: CellPos::new(0, 0),
                direction: N
            },
            BoardEvent::TurnPassed { player: Player::B },
        ]
    );

    board.rotate(CellPos::new(1, 1));
    assert_eq!(board.current_player(), Player::A);
}

/// Test that the turn only passes after the cascade settles.
#[test]
fn test_turn_waits_for_cascade() {
    let mut board = propagation_board();

    board.rotate(CellPos::new(0, 0));
    assert_eq!(board.current_player(), Player::A);

    board.advance(STEP);
    assert_eq!(board.current_player(), Player::A);

    board.advance(STEP);
    assert_eq!(board.current_player(), Player::B);
}

/// Test that players cannot rotate cells they do not own.
#[test]
fn test_rotate_requires_ownership() {
    let mut board = propagation_board();
    let before = board.snapshot();

    board.rotate(CellPos::new(2, 2)); // Player B's cell on A's turn
    board.rotate(CellPos::new(1, 1)); // unowned

    assert_eq!(board.snapshot(), before);
}

// =============================================================================
// Win Detection
// =============================================================================

/// Test that Player A wins once the cascade that wiped out B settles.
#[test]
fn test_player_a_wins_after_settle() {
    let mut board = build(
        &[&[N, S], &[W, N]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(1, 1), Player::B),
        ],
        Player::A,
    );

    board.rotate(CellPos::new(0, 0));
    assert_eq!(board.winner(), None);

    // B's last cell falls here, but a continuation is still pending.
    board.advance(STEP);
    assert_eq!(board.score(Player::B), 0);
    assert_eq!(board.pending_infections(), 1);
    assert_eq!(board.winner(), None);

    board.advance(STEP);
    assert_eq!(board.pending_infections(), 0);
    assert_eq!(board.winner(), Some(Player::A));
    assert!(board.is_over());
    assert_eq!(board.current_player(), Player::A);
}

/// Test that nothing moves once the game is over.
#[test]
fn test_rotate_after_win_is_ignored() {
    let mut board = build(
        &[&[N, S], &[W, N]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(1, 1), Player::B),
        ],
        Player::A,
    );
    board.rotate(CellPos::new(0, 0));
    board.settle();
    assert_eq!(board.winner(), Some(Player::A));

    let before = board.snapshot();
    for pos in [CellPos::new(0, 0), CellPos::new(0, 1), CellPos::new(1, 1)] {
        board.rotate(pos);
    }

    assert_eq!(board.snapshot(), before);
    assert!(board.legal_moves().is_empty());
    assert!(!board.accepts_input());
}

/// Test that Player B can win too.
#[test]
fn test_player_b_wins() {
    let mut board = build(
        &[&[W, E], &[N, S]],
        &[
            (CellPos::new(0, 0), Player::A),
            (CellPos::new(1, 1), Player::B),
        ],
        Player::B,
    );
    let log = EventLog::new();
    board.subscribe(Box::new(log.clone()));

    board.rotate(CellPos::new(1, 1));
    board.settle();

    assert_eq!(board.winner(), Some(Player::B));
    assert_eq!(board.score(Player::A), 0);
    assert_eq!(board.score(Player::B), 3);

    let events = log.events();
    assert_eq!(events.last(), Some(&BoardEvent::GameWon { winner: Player::B }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, BoardEvent::TurnPassed { .. })));
}

// =============================================================================
// Counter Balance
// =============================================================================

/// Test that every conversion is matched by exactly one fired continuation.
#[test]
fn test_counter_balance_on_reference_board() {
    for seed in 0..20 {
        let mut board = Board::new(BoardConfig::new().with_seed(seed)).unwrap();
        let log = EventLog::new();
        board.subscribe(Box::new(log.clone()));

        let mut fired = 0;
        for _ in 0..30 {
            let Some(&pos) = board.legal_moves().first() else {
                break;
            };
            board.rotate(pos);
            fired += board.settle();
            assert_eq!(board.pending_infections(), 0);
        }

        let conversions = log
            .events()
            .iter()
            .filter(|e| matches!(e, BoardEvent::Infected { .. }))
            .count();
        assert_eq!(fired, conversions, "seed {seed}");
    }
}
