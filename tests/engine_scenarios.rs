//! End-to-end games driven through the public engine API.

use std::{cell::RefCell, rc::Rc};

use tictactoe_learner::{
    Board, Cell, Error, GameEngine, GameState, Learner, Outcome, Result, Winner,
    experience::ExperienceStore,
};

fn key(engine: &GameEngine) -> String {
    engine.board().key()
}

#[test]
fn test_human_wins_then_computer_avoids_losing_line() {
    let mut engine = GameEngine::new(ExperienceStore::new());
    engine.reset();

    assert_eq!(engine.human_move(0).unwrap(), Some(1));
    assert_eq!(key(&engine), "XO       ");
    assert_eq!(engine.human_move(4).unwrap(), Some(2));
    assert_eq!(key(&engine), "XOO X    ");
    assert_eq!(engine.human_move(8).unwrap(), None);

    assert_eq!(engine.winner(), Some(Winner::Human));
    assert_eq!(engine.state(), GameState::Over);

    let store = engine.learner();
    assert_eq!(store.table().get("XO       "), -1);
    assert_eq!(store.table().get("XOO X   X"), -4);
    assert_eq!(store.score(&Board::from_key("OX       ").unwrap()), 2);
    assert!(store.trajectory().is_empty());

    engine.reset();
    assert_eq!(engine.human_move(0).unwrap(), Some(2));
    assert_eq!(key(&engine), "X O      ");
}

#[test]
fn test_computer_completes_its_line() {
    let mut engine = GameEngine::new(ExperienceStore::new());
    engine.resume(Board::from_key("OO XX    ").unwrap());

    assert_eq!(engine.computer_move().unwrap(), Some(2));
    assert_eq!(engine.winner(), Some(Winner::Computer));
    assert!(matches!(engine.human_move(5), Err(Error::GameOver)));
    assert_eq!(engine.computer_move().unwrap(), None);
}

#[test]
fn test_full_board_without_winner_has_no_open_cell() {
    let mut engine = GameEngine::new(ExperienceStore::new());
    engine.resume(Board::from_key("XOXXOOOXX").unwrap());

    assert_eq!(engine.first_open_cell(), None);
    assert!(matches!(engine.computer_move(), Err(Error::NoOpenCell)));
    assert_eq!(engine.detect_terminal(), Some(Winner::Draw));
}

#[test]
fn test_rejected_moves_leave_board_untouched() {
    let mut engine = GameEngine::new(ExperienceStore::new());
    engine.reset();
    engine.human_move(0).unwrap();
    let before = key(&engine);

    assert!(matches!(
        engine.apply_move(0, Cell::Human),
        Err(Error::CellOccupied { position: 0 })
    ));
    assert!(matches!(
        engine.apply_move(9, Cell::Human),
        Err(Error::InvalidPosition { position: 9 })
    ));
    assert!(matches!(engine.apply_move(5, Cell::Empty), Err(Error::InvalidMark)));
    assert_eq!(key(&engine), before);
}

#[test]
fn test_start_game_only_acts_on_blank_board() {
    for seed in 0..16 {
        let mut engine = GameEngine::new(ExperienceStore::new()).with_seed(seed);
        engine.reset();
        match engine.start_game().unwrap() {
            Some(cell) => {
                assert_eq!(cell, 0);
                assert_eq!(key(&engine), "O        ");
            }
            None => assert!(engine.board().is_blank()),
        }
        // A second call never places another mark.
        let occupied = engine.board().occupied_count();
        assert_eq!(engine.start_game().unwrap(), None);
        assert_eq!(engine.board().occupied_count(), occupied);
    }
}

#[test]
fn test_observers_see_state_before_game_over() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut engine = GameEngine::new(ExperienceStore::new());

    let log = Rc::clone(&events);
    engine.on_state_changed(move |board| log.borrow_mut().push(format!("state {}", board.key())));
    let log = Rc::clone(&events);
    engine.on_game_over(move |winner, _| log.borrow_mut().push(format!("over {winner}")));

    engine.resume(Board::from_key("XO  X    ").unwrap());
    engine.human_move(8).unwrap();

    let events = events.borrow();
    assert_eq!(
        events.as_slice(),
        [
            "state XO  X    ".to_string(),
            "state XO  X   X".to_string(),
            "over human".to_string(),
        ]
    );
}

#[test]
fn test_handlers_of_one_kind_run_in_registration_order() {
    let states = Rc::new(RefCell::new(Vec::new()));
    let overs = Rc::new(RefCell::new(Vec::new()));
    let mut engine = GameEngine::new(ExperienceStore::new());

    for id in 0..3 {
        let log = Rc::clone(&states);
        engine.on_state_changed(move |_| log.borrow_mut().push(id));
    }
    for id in 0..3 {
        let log = Rc::clone(&overs);
        engine.on_game_over(move |_, _| log.borrow_mut().push(id));
    }

    engine.reset();
    assert_eq!(*states.borrow(), [0, 1, 2]);

    states.borrow_mut().clear();
    engine.resume(Board::from_key("XO  X    ").unwrap());
    engine.human_move(8).unwrap();
    assert_eq!(*states.borrow(), [0, 1, 2, 0, 1, 2]);
    assert_eq!(*overs.borrow(), [0, 1, 2]);
}

#[derive(Default)]
struct CountingLearner {
    observed: usize,
    outcomes: Vec<Outcome>,
}

impl Learner for CountingLearner {
    fn select_move(&mut self, board: &Board) -> Result<usize> {
        board.first_open_cell().ok_or(Error::NoCandidate)
    }

    fn observe(&mut self, _board: &Board) {
        self.observed += 1;
    }

    fn learn(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn test_game_over_fires_once_and_learner_credited_once() {
    let overs = Rc::new(RefCell::new(0));
    let mut engine = GameEngine::new(CountingLearner::default());
    let counter = Rc::clone(&overs);
    engine.on_game_over(move |_, _| *counter.borrow_mut() += 1);

    engine.resume(Board::from_key("XO  X    ").unwrap());
    engine.human_move(8).unwrap();
    assert_eq!(engine.detect_terminal(), Some(Winner::Human));
    assert!(engine.human_move(2).is_err());
    assert_eq!(engine.detect_terminal(), Some(Winner::Human));

    assert_eq!(*overs.borrow(), 1);
    assert_eq!(engine.learner().outcomes, vec![Outcome::Lose]);
    assert_eq!(engine.learner().observed, 1);
}
