use crate::error::IllegalMove;
use crate::eval::Evaluator;
use crate::game::{GameEngine, Outcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// What the evaluation panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalDisplay {
    /// Solver scores for the current position, shown verbatim.
    Scores(Vec<i64>),
    /// The solver was unreachable or answered nonsense; the game goes on.
    Unavailable(String),
}

pub struct App {
    engine: GameEngine,
    evaluator: Option<Box<dyn Evaluator>>,
    selected_column: usize,
    show_evaluation: bool,
    evaluation: Option<EvalDisplay>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Build the app around a game and an optional solver connection.
    /// With no evaluator the evaluation panel simply stays empty.
    pub fn new(engine: GameEngine, evaluator: Option<Box<dyn Evaluator>>) -> Self {
        App {
            engine,
            evaluator,
            selected_column: COLS / 2, // Start in the middle
            show_evaluation: false,
            evaluation: None,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('e') => {
                self.toggle_evaluation();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
                self.refresh_evaluation();
            }
            _ => {}
        }
    }

    /// Drop a disc in the selected column
    fn drop_disc(&mut self) {
        match self.engine.apply_move(self.selected_column) {
            Ok(_) => {
                match self.engine.outcome() {
                    Outcome::Win(player) => {
                        self.message =
                            Some(format!("{} wins! Press 'r' to restart.", player.name()));
                    }
                    Outcome::Draw => {
                        self.message = Some("It's a draw! Press 'r' to restart.".to_string());
                    }
                    Outcome::InProgress => {}
                }
                self.refresh_evaluation();
            }
            Err(IllegalMove::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(IllegalMove::ColumnOutOfRange(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(IllegalMove::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    fn toggle_evaluation(&mut self) {
        if self.evaluator.is_none() {
            self.message = Some("Evaluation is disabled.".to_string());
            return;
        }
        self.show_evaluation = !self.show_evaluation;
        if self.show_evaluation {
            self.refresh_evaluation();
        } else {
            self.evaluation = None;
        }
    }

    /// Ask the solver about the current position. Best effort only: a
    /// failure becomes a panel message and the newest answer always
    /// replaces whatever was shown before.
    fn refresh_evaluation(&mut self) {
        if !self.show_evaluation {
            return;
        }
        let Some(evaluator) = &self.evaluator else {
            return;
        };
        self.evaluation = Some(match evaluator.evaluate(&self.engine.position()) {
            Ok(scores) => EvalDisplay::Scores(scores),
            Err(err) => EvalDisplay::Unavailable(err.to_string()),
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.evaluation,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FixedEvaluator {
        scores: Vec<i64>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FixedEvaluator {
        fn new(scores: Vec<i64>) -> Self {
            FixedEvaluator {
                scores,
                requests: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl Evaluator for FixedEvaluator {
        fn evaluate(&self, position: &str) -> Result<Vec<i64>, EvalError> {
            self.requests.borrow_mut().push(position.to_string());
            Ok(self.scores.clone())
        }
    }

    struct FailingEvaluator;

    impl Evaluator for FailingEvaluator {
        fn evaluate(&self, _position: &str) -> Result<Vec<i64>, EvalError> {
            Err(EvalError::Malformed("empty body".into()))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_drop_and_win_message() {
        let mut app = App::new(GameEngine::new(), None);
        // Red stacks column 4 (the initial selection), Blue plays column 5.
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Left));
        }
        app.handle_key(key(KeyCode::Enter));

        assert!(app.engine.is_terminal());
        assert_eq!(app.message.as_deref(), Some("Red wins! Press 'r' to restart."));

        // Further drops are refused without disturbing the finished game.
        let before = app.engine.clone();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine, before);
        assert_eq!(app.message.as_deref(), Some("Game over! Press 'r' to restart."));
    }

    #[test]
    fn test_full_column_shows_message() {
        let mut app = App::new(GameEngine::new(), None);
        for _ in 0..7 {
            app.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert!(!app.engine.is_terminal());
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = App::new(GameEngine::new(), None);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 0);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_evaluation_toggle_shows_scores() {
        let mut app = App::new(
            GameEngine::new(),
            Some(Box::new(FixedEvaluator::new(vec![1, 2, 3, 4, 3, 2, 1]))),
        );

        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(
            app.evaluation,
            Some(EvalDisplay::Scores(vec![1, 2, 3, 4, 3, 2, 1]))
        );
    }

    #[test]
    fn test_evaluation_positions_follow_moves() {
        let fixed = FixedEvaluator::new(vec![0; 7]);
        let requests = fixed.requests.clone();
        let mut app = App::new(GameEngine::new(), Some(Box::new(fixed)));

        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Enter)); // column 4 (1-based 5)
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(*requests.borrow(), vec!["", "4", "44"]);
    }

    #[test]
    fn test_toggle_off_clears_panel() {
        let mut app = App::new(
            GameEngine::new(),
            Some(Box::new(FixedEvaluator::new(vec![0; 7]))),
        );
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.evaluation.is_some());
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.evaluation.is_none());
    }

    #[test]
    fn test_solver_failure_leaves_game_playable() {
        let mut app = App::new(GameEngine::new(), Some(Box::new(FailingEvaluator)));
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(
            app.evaluation,
            Some(EvalDisplay::Unavailable(
                "malformed evaluation response: empty body".into()
            ))
        );

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.moves(), &[3]);
        assert!(!app.engine.is_terminal());
    }

    #[test]
    fn test_reset_starts_fresh() {
        let mut app = App::new(GameEngine::new(), None);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char('r')));

        assert_eq!(app.engine, GameEngine::new());
        assert_eq!(app.selected_column, COLS / 2);
        assert_eq!(app.message.as_deref(), Some("New game started!"));
    }
}
