//! TUI application state and key handling

use crate::commands::save_game;
use crate::game::{
    Action, Game, GameMode, GameStatus, Modal, Outcome, daily, messages, share_text,
};
use crate::storage::Store;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, SystemTime};

/// Redraw interval while idle, so the countdown keeps ticking
const TICK: Duration = Duration::from_millis(500);

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub store: Option<Store>,
    pub messages: Vec<Message>,
    /// Share texts collected during the session, printed on exit
    pub shared: Vec<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>, store: Option<Store>) -> Self {
        let mut app = Self {
            game,
            store,
            messages: Vec::new(),
            shared: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!("Modalità: {}", app.game.state().mode()),
            MessageStyle::Info,
        );
        if app.game.state().status().is_finished() {
            app.add_message(messages::DAILY_ONLY_ONCE, MessageStyle::Info);
        }
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Countdown to the next daily word
    #[must_use]
    pub fn countdown(&self) -> String {
        daily::format_countdown(daily::time_until_next(SystemTime::now()))
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        match (self.game.state().modal(), key.code) {
            (_, KeyCode::Tab) => self.apply(Action::ToggleGameMode),
            (_, KeyCode::F(1)) => self.apply(Action::OpenModal(Modal::Info)),

            (Some(_), KeyCode::Esc | KeyCode::Enter) => self.apply(Action::CloseModal),
            (Some(Modal::Stats), KeyCode::Char('g' | 'n')) => self.new_game(),
            (Some(Modal::Stats), KeyCode::Char('c' | 's')) => self.share(),
            (Some(_), _) => {}

            (None, KeyCode::Esc) => self.should_quit = true,
            (None, KeyCode::Char('?')) => self.apply(Action::OpenModal(Modal::Info)),
            (None, KeyCode::Char(c)) => self.apply(Action::AddLetter(c)),
            (None, KeyCode::Backspace) => self.apply(Action::DeleteLetter),
            (None, KeyCode::Enter) if self.game.state().status().is_finished() => {
                self.apply(Action::OpenModal(Modal::Stats));
            }
            (None, KeyCode::Enter) => self.apply(Action::NextRow),
            _ => {}
        }
    }

    fn new_game(&mut self) {
        if self.game.state().mode() == GameMode::Daily {
            self.add_message(messages::DAILY_ONLY_ONCE, MessageStyle::Error);
            return;
        }
        self.apply(Action::Reset);
    }

    /// Queue the daily result for printing on exit
    pub fn share(&mut self) {
        if let Some(text) = share_text(self.game.state()) {
            self.shared.push(text);
            self.add_message(messages::SHARE_READY, MessageStyle::Success);
        }
    }

    fn apply(&mut self, action: Action) {
        match self.game.dispatch(action) {
            Outcome::Rejected(rejection) => {
                self.add_message(messages::rejection(rejection), MessageStyle::Error);
            }
            Outcome::Evaluated { status, .. } => {
                let state = self.game.state();
                match status {
                    GameStatus::Win => {
                        let text = messages::celebration(state.current_row());
                        self.add_message(text, MessageStyle::Success);
                    }
                    GameStatus::Fail => {
                        let text = messages::fail(state.solution());
                        self.add_message(&text, MessageStyle::Error);
                    }
                    GameStatus::InProgress => {}
                }
                self.save();
            }
            Outcome::NewGame => self.add_message(messages::NEW_GAME, MessageStyle::Info),
            Outcome::ModeChanged(mode) => {
                self.add_message(&format!("Modalità: {mode}"), MessageStyle::Info);
                self.save();
            }
            _ => {}
        }
    }

    /// Write progress to the store, reporting failures in the message panel
    pub fn save(&mut self) {
        if let Err(e) = save_game(self.store.as_ref(), &self.game) {
            warn!("Could not save progress: {e}");
            self.add_message(
                &format!("Salvataggio non riuscito: {e}"),
                MessageStyle::Error,
            );
        }
    }
}

/// Run the TUI application
///
/// Returns the share texts collected during the session.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Vec<String>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Vec<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only key presses; Windows also reports releases
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    app.save();
    Ok(app.shared)
}
