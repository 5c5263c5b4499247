//! TUI rendering with ratatui
//!
//! Board, keyboard, message panel and the two dialogs.

use super::app::{App, MessageStyle};
use crate::core::{LetterState, WORD_LENGTH};
use crate::game::{
    GameMode, GameState, GameStatus, KEYBOARD_ROWS, KeyHint, KeyHints, Modal, Row, key_hints,
    messages,
};
use crate::output::formatters::{distribution_bars, stats_summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(18),   // Board, keyboard and messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let play_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(13), // Six rows with gaps
            Constraint::Length(5),  // Keyboard
            Constraint::Min(0),
        ])
        .split(main_chunks[0]);

    let state = app.game.state();
    render_board(f, state, play_chunks[0]);
    render_keyboard(f, &key_hints(state), play_chunks[1]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    match state.modal() {
        Some(Modal::Stats) => render_stats_modal(f, app, f.area()),
        Some(Modal::Info) => render_info_modal(f, f.area()),
        None => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mode = match app.game.state().mode() {
        GameMode::Daily => format!("parola del giorno #{}", app.game.today()),
        GameMode::Random => "parola casuale".to_string(),
    };
    let header = Paragraph::new(format!("{}  ·  {mode}", messages::TITLE))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn board_line<'a>(row: &Row, states: Option<&[LetterState; WORD_LENGTH]>) -> Line<'a> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for col in 0..WORD_LENGTH {
        if col > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match (row.letter(col), states) {
            (Some(letter), Some(states)) => Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(states[col]),
            ),
            (Some(letter), None) => Span::styled(
                format!("[{}]", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            (None, _) => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        };
        spans.push(span);
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let mut lines = Vec::new();
    for (i, row) in state.board().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let states = state.evaluations()[i].as_ref().map(|e| e.states());
        lines.push(board_line(row, states));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(hint: KeyHint) -> Style {
    match hint {
        KeyHint::Unused => Style::default().fg(Color::White),
        KeyHint::Absent => Style::default().fg(Color::DarkGray),
        KeyHint::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyHint::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_keyboard(f: &mut Frame, hints: &KeyHints, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::raw("⏎ "));
            }
            for c in row.chars() {
                spans.push(Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    key_style(hints.get(c)),
                ));
            }
            if i == last {
                spans.push(Span::raw(" ⌫"));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messaggi ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = Paragraph::new(stats_summary(app.game.stats())).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Tab: modalità | F1/?: info | Ctrl-N: nuova | Esc: esci")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_stats_modal(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let stats = app.game.stats();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    if let Some(title) = messages::result(state.status(), state.current_row(), state.solution()) {
        lines.push(Line::styled(title, bold));
        lines.push(Line::default());
    }
    lines.push(Line::from(stats_summary(stats)));
    lines.push(Line::default());

    let won_in = (state.status() == GameStatus::Win).then(|| state.current_row());
    for (guesses, count, bar) in distribution_bars(stats, 20) {
        let style = if won_in == Some(guesses) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses} ")),
            Span::styled(bar, style),
            Span::raw(format!(" {count}")),
        ]));
    }

    if state.status().is_finished() {
        lines.push(Line::default());
        match state.mode() {
            GameMode::Daily => {
                lines.push(Line::styled(format!("[c] {}", messages::SHARE), bold));
                lines.push(Line::from(format!(
                    "{} {}",
                    messages::NEXT_WORD,
                    app.countdown()
                )));
            }
            GameMode::Random => {
                lines.push(Line::styled(format!("[g] {}", messages::PLAY_AGAIN), bold));
            }
        }
    }
    lines.push(Line::styled("[Esc] chiudi", Style::default().fg(Color::DarkGray)));

    render_modal(f, " Statistiche ", lines, centered_rect(60, 70, area));
}

fn render_info_modal(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for paragraph in messages::INFO {
        lines.push(Line::from(*paragraph));
        lines.push(Line::default());
    }
    lines.push(Line::styled(
        "[Esc] chiudi",
        Style::default().fg(Color::DarkGray),
    ));

    render_modal(f, " Info ", lines, centered_rect(70, 70, area));
}

fn render_modal(f: &mut Frame, title: &str, lines: Vec<Line>, area: Rect) {
    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Rectangle of the given percentage size in the middle of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Game};
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 34)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app(words: &WordBank, mode: GameMode) -> App<'_> {
        App::new(Game::new(words, mode, 4, StdRng::seed_from_u64(2)), None)
    }

    #[test]
    fn renders_typed_letters() {
        let words = WordBank::embedded();
        let mut app = new_app(&words, GameMode::Daily);
        for c in "pas".chars() {
            app.game.dispatch(Action::AddLetter(c));
        }

        let screen = screen(&app);
        assert!(screen.contains("WORDLE"));
        assert!(screen.contains("parola del giorno #4"));
        assert!(screen.contains("[P] [A] [S]"));
        assert!(screen.contains(" Q  W  E "));
    }

    #[test]
    fn renders_win_dialog() {
        let words = WordBank::embedded();
        let mut app = new_app(&words, GameMode::Random);
        let solution = app.game.state().solution().text().to_string();
        for c in solution.chars() {
            app.game.dispatch(Action::AddLetter(c));
        }
        app.game.dispatch(Action::NextRow);

        let screen = screen(&app);
        assert!(screen.contains("Statistiche"));
        assert!(screen.contains(messages::PLAY_AGAIN));
        assert!(!screen.contains(messages::SHARE));
    }

    #[test]
    fn renders_info_dialog() {
        let words = WordBank::embedded();
        let mut app = new_app(&words, GameMode::Daily);
        app.game.dispatch(Action::OpenModal(Modal::Info));

        let screen = screen(&app);
        assert!(screen.contains(" Info "));
        assert!(screen.contains("Josh Wardle"));
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, area);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
