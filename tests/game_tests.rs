//! Whole-game behaviour through the public API.
//!
//! These tests drive games only through `RulesEngine` and the read accessors
//! on `GameState`, the way a presenter would.

use tres_uno_dos::{
    new_game, Game, GameState, MoveError, MoveKind, Outcome, PatternSet, Phase, Position, Role,
    RulesEngine,
};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y).unwrap()
}

/// The role a cell is meant to end up with in the exhaustion game:
/// Uno on odd rows, Tres on even rows. No listed line is single-coloured.
fn striped_owner(cell: Position) -> Role {
    if cell.y() % 2 == 1 {
        Role::Uno
    } else {
        Role::Tres
    }
}

/// Pick the next move for a game that should fill the board without a line.
///
/// Placers take their own stripe first. Dos removes a piece sitting on the
/// wrong stripe, or failing that the piece Uno just placed.
fn striped_move(game: &Game, state: &GameState) -> Position {
    let targets = game.legal_targets(state);

    if state.phase().is_placement() {
        let role = state.to_move();
        targets
            .iter()
            .copied()
            .find(|&cell| striped_owner(cell) == role)
            .unwrap_or(targets[0])
    } else {
        targets
            .iter()
            .copied()
            .find(|&cell| state.owner_of(cell) != Some(striped_owner(cell)))
            .unwrap_or_else(|| state.history().last().unwrap().position)
    }
}

/// Fresh game: Tres places (2,2), Uno places (1,1), Dos fails on the free
/// (3,3) and then takes (2,2) back.
#[test]
fn test_opening_scenario() {
    let (game, mut state) = new_game();

    assert!(game.try_move(&mut state, pos(2, 2)));
    assert_eq!(state.phase(), Phase::FirstPlaces);

    assert!(game.try_move(&mut state, pos(1, 1)));
    assert_eq!(state.phase(), Phase::ThirdRemoves);

    assert!(!game.try_move(&mut state, pos(3, 3)));
    assert!(state.is_free(pos(3, 3)));
    assert_eq!(state.phase(), Phase::ThirdRemoves);

    assert!(game.try_move(&mut state, pos(2, 2)));
    assert!(state.is_free(pos(2, 2)));
    assert!(state.uno().contains(pos(1, 1)));
    assert!(state.tres().is_empty());
    assert_eq!(state.phase(), Phase::SecondPlaces);
    assert!(!state.is_terminal());
}

/// The phase only advances on accepted moves, always A -> B -> C -> A.
#[test]
fn test_phase_cycle_over_many_plies() {
    let (game, mut state) = new_game();
    let mut expected = Phase::SecondPlaces;

    for _ in 0..30 {
        if state.is_terminal() {
            break;
        }
        assert_eq!(state.phase(), expected);

        // Rejected moves never change the phase
        assert!(!game.try_move_xy(&mut state, 0, 5));
        if let Some(blocked) = Position::all().find(|&cell| !game.is_legal(&state, cell)) {
            assert!(!game.try_move(&mut state, blocked));
        }
        assert_eq!(state.phase(), expected);

        let next = striped_move(&game, &state);
        assert!(game.try_move(&mut state, next));
        expected = expected.next();
    }
}

#[test]
fn test_exhaustion_gives_dos_the_win() {
    let (game, mut state) = new_game();
    let mut plies = 0;

    while !state.is_terminal() {
        let next = striped_move(&game, &state);
        assert!(game.try_move(&mut state, next), "ply {plies}: {next} refused");
        assert!(state.partition_holds());
        plies += 1;
        assert!(plies < 200, "game did not end");
    }

    assert!(state.free().is_empty());
    assert!(!game.detector().has_line(state.uno()));
    assert!(!game.detector().has_line(state.tres()));
    assert_eq!(state.outcome(), Some(Outcome::DosWins));
    assert_eq!(game.outcome(&state), Some(Outcome::DosWins));
    assert_eq!(state.ply(), 44);

    // The board filled on a placement
    assert_eq!(state.history().last().unwrap().kind, MoveKind::Place);
}

#[test]
fn test_terminal_state_refuses_moves() {
    let (game, mut state) = new_game();
    while !state.is_terminal() {
        let next = striped_move(&game, &state);
        assert!(game.try_move(&mut state, next));
    }
    let finished = state.clone();

    for cell in Position::all() {
        assert_eq!(game.apply_move(&mut state, cell), Err(MoveError::GameOver));
    }
    assert_eq!(state, finished);
}

#[test]
fn test_main_diagonal_win_is_configurable() {
    // Tres builds the main diagonal while Dos keeps clearing Uno's cell
    let script = [
        (1, 1), (2, 1), (2, 1),
        (2, 2), (2, 1), (2, 1),
        (3, 3), (2, 1), (2, 1),
        (4, 4),
    ];

    let (canonical, mut state) = Game::builder().preset(PatternSet::Canonical).build();
    for (x, y) in script {
        assert!(canonical.try_move(&mut state, pos(x, y)));
    }
    assert_eq!(state.outcome(), Some(Outcome::TresWins));

    let (reduced, mut state) = Game::builder()
        .preset(PatternSet::WithoutMainDiagonal)
        .build();
    for (x, y) in script {
        assert!(reduced.try_move(&mut state, pos(x, y)));
    }
    assert!(!state.is_terminal());
    assert_eq!(state.to_move(), Role::Uno);
}

/// One `Game` drives several independent states.
#[test]
fn test_independent_games() {
    let (game, mut first) = new_game();
    let mut second = GameState::new();

    assert!(game.try_move(&mut first, pos(1, 1)));
    assert!(game.try_move(&mut second, pos(4, 4)));

    assert!(first.tres().contains(pos(1, 1)));
    assert!(!first.tres().contains(pos(4, 4)));
    assert!(second.tres().contains(pos(4, 4)));
    assert!(second.is_free(pos(1, 1)));
}

#[test]
fn test_raw_coordinates_checked_before_phase() {
    let (game, mut state) = new_game();
    let before = state.clone();

    for (x, y) in [(0, 0), (5, 1), (1, 5), (-1, 2), (100, 100)] {
        assert!(!game.try_move_xy(&mut state, x, y));
    }
    assert_eq!(state, before);
}

#[test]
fn test_history_tracks_removals() {
    let (game, mut state) = new_game();
    for (x, y) in [(2, 2), (1, 1), (2, 2)] {
        assert!(game.try_move(&mut state, pos(x, y)));
    }

    let kinds: Vec<_> = state.history().iter().map(|r| (r.role, r.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (Role::Tres, MoveKind::Place),
            (Role::Uno, MoveKind::Place),
            (Role::Dos, MoveKind::Remove { owner: Role::Tres }),
        ]
    );
}
