use crate::ai::{Difficulty, HeuristicWeights, Mover};
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameResult, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsCpu,
}

impl GameMode {
    fn label(self, difficulty: Difficulty) -> String {
        match self {
            GameMode::TwoPlayer => "Local 2 player".to_string(),
            GameMode::VsCpu => format!("vs CPU ({difficulty})"),
        }
    }
}

/// Status line for a finished game, `None` while it is still running.
pub fn result_message(result: GameResult, mode: GameMode, cpu_player: Player) -> Option<String> {
    match result {
        GameResult::InProgress => None,
        GameResult::Draw => Some("This game is a tie!".to_string()),
        GameResult::Win(winner) if mode == GameMode::VsCpu && winner == cpu_player => {
            Some("The CPU has won!".to_string())
        }
        GameResult::Win(winner) => Some(format!(
            "Congratulations {}! You've won!",
            winner.name()
        )),
    }
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    mode: GameMode,
    difficulty: Difficulty,
    cpu_player: Player,
    seed: Option<u64>,
    weights: HeuristicWeights,
    cpu: Box<dyn Mover>,
    should_quit: bool,
    show_rules: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = App {
            game_state: GameState::initial(),
            selected_column: COLS / 2, // Start in middle
            mode: GameMode::VsCpu,
            difficulty: config.cpu.difficulty,
            cpu_player: config.cpu.cpu_player,
            seed: config.cpu.seed,
            weights: config.heuristic.clone(),
            cpu: config.cpu.difficulty.mover(config.cpu.seed, &config.heuristic),
            should_quit: false,
            show_rules: false,
            message: None,
        };
        app.cpu_turn();
        app
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
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
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_rules {
            self.show_rules = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart("New game started!");
            }
            KeyCode::Char('m') => {
                self.mode = match self.mode {
                    GameMode::TwoPlayer => GameMode::VsCpu,
                    GameMode::VsCpu => GameMode::TwoPlayer,
                };
                let label = self.mode.label(self.difficulty);
                self.restart(&format!("Mode: {label}"));
            }
            KeyCode::Char(c @ '1'..='3') => {
                if let Ok(difficulty) = c.to_string().parse::<Difficulty>() {
                    self.difficulty = difficulty;
                    self.cpu = difficulty.mover(self.seed, &self.weights);
                    self.mode = GameMode::VsCpu;
                    self.restart(&format!("CPU difficulty set to {difficulty}"));
                }
            }
            KeyCode::Char('?') => {
                self.show_rules = true;
            }
            _ => {}
        }
    }

    fn restart(&mut self, message: &str) {
        self.game_state = GameState::initial();
        self.selected_column = COLS / 2;
        self.message = Some(message.to_string());
        self.cpu_turn();
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                let who = match self.mode {
                    GameMode::VsCpu => "You".to_string(),
                    GameMode::TwoPlayer => player.name().to_string(),
                };
                self.message = Some(format!(
                    "{who} dropped a piece into column {}",
                    self.selected_column + 1
                ));
                self.cpu_turn();
                self.report_result();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("That column is full, please try again.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Let the CPU answer if it is its turn in a vs-CPU game.
    fn cpu_turn(&mut self) {
        if self.mode != GameMode::VsCpu
            || self.game_state.is_terminal()
            || self.game_state.current_player() != self.cpu_player
        {
            return;
        }

        match self.game_state.play_with(self.cpu.as_mut()) {
            Ok(column) => {
                debug!("CPU ({}) played column {}", self.difficulty, column);
                let note = format!("CPU dropped a piece into column {column}");
                self.message = Some(match self.message.take() {
                    Some(previous) => format!("{previous}  |  {note}"),
                    None => note,
                });
            }
            Err(err) => {
                self.message = Some(format!("CPU could not move: {err}"));
            }
        }
        self.report_result();
    }

    fn report_result(&mut self) {
        if let Some(text) = result_message(self.game_state.result(), self.mode, self.cpu_player) {
            self.message = Some(text);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode.label(self.difficulty),
            self.show_rules,
        );
    }
}
