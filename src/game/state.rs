//! Game state and its pure transitions
//!
//! `GameState` holds one board: the hidden solution, typed letters,
//! evaluations of submitted rows and the cursor. Transitions that need a word
//! source or randomness (new games, mode toggling) live on
//! [`Game`](super::Game); everything here is deterministic.

use crate::core::{Evaluation, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of guesses before the game is lost
pub const MAX_ATTEMPTS: usize = 6;

/// How the solution is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Same word for everyone, derived from the date
    Daily,
    /// A fresh word every game
    Random,
}

impl GameMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Random => "random",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Random,
            Self::Random => Self::Daily,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Win,
    Fail,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Dialog shown on top of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modal {
    /// End-of-game result
    Stats,
    /// About and how to play
    Info,
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddLetter(char),
    DeleteLetter,
    NextRow,
    Reset,
    ToggleGameMode,
    OpenModal(Modal),
    CloseModal,
}

/// Why a submitted row was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotEnoughLetters,
    NotInWordList,
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    LetterAdded(char),
    LetterDeleted,
    Rejected(Rejection),
    /// A row was evaluated; `status` is the status after it
    Evaluated {
        evaluation: Evaluation,
        status: GameStatus,
    },
    NewGame,
    ModeChanged(GameMode),
    ModalChanged(Option<Modal>),
}

/// One board row of typed letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Row([Option<u8>; WORD_LENGTH]);

impl Row {
    /// Letter at a column, if typed
    #[must_use]
    pub fn letter(&self, col: usize) -> Option<char> {
        self.0.get(col).copied().flatten().map(char::from)
    }

    /// The typed word, once the row is full
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, letter) in letters.iter_mut().zip(self.0) {
            *slot = letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// Whether no letter has been typed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    fn filled(&self) -> usize {
        self.0.iter().take_while(|slot| slot.is_some()).count()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter.map_or(' ', char::from))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Row {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(format!("Invalid row length: {value:?}"));
        }

        let mut row = [None; WORD_LENGTH];
        let mut gap = false;
        for (slot, &b) in row.iter_mut().zip(bytes) {
            match b {
                b' ' => gap = true,
                b'a'..=b'z' if !gap => *slot = Some(b),
                _ => return Err(format!("Invalid row: {value:?}")),
            }
        }
        Ok(Self(row))
    }
}

impl From<Row> for String {
    fn from(row: Row) -> Self {
        row.to_string()
    }
}

/// Complete state of one game
///
/// Deserializing checks that the cursor, the rows and the evaluations agree,
/// so a loaded state is always safe to keep playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    solution: Word,
    board: [Row; MAX_ATTEMPTS],
    evaluations: [Option<Evaluation>; MAX_ATTEMPTS],
    current_row: usize,
    current_col: usize,
    status: GameStatus,
    mode: GameMode,
    modal: Option<Modal>,
    day: Option<u64>,
}

/// `GameState` as read from disk, before its fields are checked
#[derive(Deserialize)]
struct RawGameState {
    solution: Word,
    board: [Row; MAX_ATTEMPTS],
    evaluations: [Option<Evaluation>; MAX_ATTEMPTS],
    current_row: usize,
    current_col: usize,
    status: GameStatus,
    mode: GameMode,
    modal: Option<Modal>,
    day: Option<u64>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            solution: raw.solution,
            board: raw.board,
            evaluations: raw.evaluations,
            current_row: raw.current_row,
            current_col: raw.current_col,
            status: raw.status,
            mode: raw.mode,
            modal: raw.modal,
            day: raw.day,
        };
        state.check()?;
        Ok(state)
    }
}

impl GameState {
    /// Fresh board for today's word
    #[must_use]
    pub fn daily(solution: Word, day: u64) -> Self {
        Self::new(solution, GameMode::Daily, Some(day))
    }

    /// Fresh board for a randomly chosen word
    #[must_use]
    pub fn random(solution: Word) -> Self {
        Self::new(solution, GameMode::Random, None)
    }

    fn new(solution: Word, mode: GameMode, day: Option<u64>) -> Self {
        Self {
            solution,
            board: [Row::default(); MAX_ATTEMPTS],
            evaluations: [None; MAX_ATTEMPTS],
            current_row: 0,
            current_col: 0,
            status: GameStatus::InProgress,
            mode,
            modal: None,
            day,
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn board(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.board
    }

    #[must_use]
    pub const fn evaluations(&self) -> &[Option<Evaluation>; MAX_ATTEMPTS] {
        &self.evaluations
    }

    /// Index of the row being typed; equals the number of submitted rows
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn modal(&self) -> Option<Modal> {
        self.modal
    }

    /// Daily index, for daily games only
    #[must_use]
    pub const fn day(&self) -> Option<u64> {
        self.day
    }

    /// Submitted rows paired with their evaluations
    pub fn submitted(&self) -> impl Iterator<Item = (&Row, &Evaluation)> {
        self.board
            .iter()
            .zip(&self.evaluations)
            .filter_map(|(row, evaluation)| evaluation.as_ref().map(|e| (row, e)))
    }

    fn check(&self) -> Result<(), String> {
        let row = self.current_row;
        if row > MAX_ATTEMPTS || (row == MAX_ATTEMPTS && !self.status.is_finished()) {
            return Err(format!(
                "current_row {row} out of range for a {:?} game",
                self.status
            ));
        }
        if (self.mode == GameMode::Daily) != self.day.is_some() {
            return Err(format!("{} game with day {:?}", self.mode, self.day));
        }

        for (i, (board_row, evaluation)) in self.board.iter().zip(&self.evaluations).enumerate() {
            if evaluation.is_some() != (i < row) {
                return Err(format!(
                    "evaluation of row {i} does not match current_row {row}"
                ));
            }
            if i < row && board_row.word().is_none() {
                return Err(format!("submitted row {i} is not a full word"));
            }
            if i > row && !board_row.is_empty() {
                return Err(format!("row {i} has letters past current_row {row}"));
            }
        }

        let typed = self.board.get(row).map_or(0, Row::filled);
        if self.current_col != typed {
            return Err(format!(
                "current_col {} but row {row} holds {typed} letters",
                self.current_col
            ));
        }
        if self.status.is_finished() && typed != 0 {
            return Err(format!("finished game has letters in row {row}"));
        }

        // Only the last submitted row may be a win
        let wins = self.submitted().filter(|(_, e)| e.is_win()).count();
        let last_won = row > 0 && self.evaluations[row - 1].is_some_and(|e| e.is_win());
        let consistent = match self.status {
            GameStatus::InProgress => wins == 0,
            GameStatus::Win => wins == 1 && last_won,
            GameStatus::Fail => wins == 0 && row == MAX_ATTEMPTS,
        };
        if !consistent {
            return Err(format!(
                "status {:?} does not match the submitted rows",
                self.status
            ));
        }
        Ok(())
    }

    /// Type a letter into the current row
    pub fn add_letter(&mut self, letter: char) -> Outcome {
        let letter = letter.to_ascii_lowercase();
        if self.status.is_finished()
            || !letter.is_ascii_lowercase()
            || self.current_col >= WORD_LENGTH
        {
            return Outcome::Ignored;
        }

        self.board[self.current_row].0[self.current_col] = Some(letter as u8);
        self.current_col += 1;
        Outcome::LetterAdded(letter)
    }

    /// Remove the last letter of the current row
    pub fn delete_letter(&mut self) -> Outcome {
        if self.status.is_finished() || self.current_col == 0 {
            return Outcome::Ignored;
        }

        self.current_col -= 1;
        self.board[self.current_row].0[self.current_col] = None;
        Outcome::LetterDeleted
    }

    /// Submit the current row
    ///
    /// `accept` decides whether a full row is a known word; a refused row is
    /// left in place so the player can edit it.
    pub fn submit_row(&mut self, accept: impl FnOnce(&Word) -> bool) -> Outcome {
        if self.status.is_finished() {
            return Outcome::Ignored;
        }

        let Some(guess) = self.board[self.current_row].word() else {
            return Outcome::Rejected(Rejection::NotEnoughLetters);
        };
        if !accept(&guess) {
            return Outcome::Rejected(Rejection::NotInWordList);
        }

        let evaluation = Evaluation::calculate(&guess, &self.solution);
        self.evaluations[self.current_row] = Some(evaluation);
        self.current_row += 1;
        self.current_col = 0;

        if evaluation.is_win() {
            self.status = GameStatus::Win;
        } else if self.current_row == MAX_ATTEMPTS {
            self.status = GameStatus::Fail;
        }
        if self.status.is_finished() {
            self.modal = Some(Modal::Stats);
        }

        Outcome::Evaluated {
            evaluation,
            status: self.status,
        }
    }

    pub fn open_modal(&mut self, modal: Modal) -> Outcome {
        if self.modal == Some(modal) {
            return Outcome::Ignored;
        }
        self.modal = Some(modal);
        Outcome::ModalChanged(self.modal)
    }

    pub fn close_modal(&mut self) -> Outcome {
        if self.modal.take().is_none() {
            return Outcome::Ignored;
        }
        Outcome::ModalChanged(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(solution: &str) -> GameState {
        GameState::random(Word::new(solution).unwrap())
    }

    fn type_word(state: &mut GameState, word: &str) {
        for c in word.chars() {
            state.add_letter(c);
        }
    }

    #[test]
    fn new_state_is_empty() {
        let s = GameState::daily(Word::new("pasta").unwrap(), 42);
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_col(), 0);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.mode(), GameMode::Daily);
        assert_eq!(s.day(), Some(42));
        assert!(s.board().iter().all(Row::is_empty));
        assert!(s.evaluations().iter().all(Option::is_none));
    }

    #[test]
    fn add_letter_lowercases_and_advances() {
        let mut s = state("pasta");
        assert_eq!(s.add_letter('P'), Outcome::LetterAdded('p'));
        assert_eq!(s.current_col(), 1);
        assert_eq!(s.board()[0].letter(0), Some('p'));
    }

    #[test]
    fn add_letter_rejects_non_letters() {
        let mut s = state("pasta");
        assert_eq!(s.add_letter('1'), Outcome::Ignored);
        assert_eq!(s.add_letter('\u{e8}'), Outcome::Ignored);
        assert_eq!(s.add_letter(' '), Outcome::Ignored);
        assert_eq!(s.current_col(), 0);
    }

    #[test]
    fn add_letter_ignored_when_row_full() {
        let mut s = state("pasta");
        type_word(&mut s, "pizza");
        assert_eq!(s.add_letter('x'), Outcome::Ignored);
        assert_eq!(s.board()[0].to_string(), "pizza");
    }

    #[test]
    fn delete_letter() {
        let mut s = state("pasta");
        assert_eq!(s.delete_letter(), Outcome::Ignored);
        type_word(&mut s, "pi");
        assert_eq!(s.delete_letter(), Outcome::LetterDeleted);
        assert_eq!(s.current_col(), 1);
        assert_eq!(s.board()[0].to_string(), "p    ");
    }

    #[test]
    fn submit_incomplete_row() {
        let mut s = state("pasta");
        type_word(&mut s, "pas");
        assert_eq!(
            s.submit_row(|_| true),
            Outcome::Rejected(Rejection::NotEnoughLetters)
        );
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_col(), 3);
    }

    #[test]
    fn submit_unknown_word_keeps_row() {
        let mut s = state("pasta");
        type_word(&mut s, "zzzzz");
        assert_eq!(
            s.submit_row(|_| false),
            Outcome::Rejected(Rejection::NotInWordList)
        );
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_col(), 5);
        assert_eq!(s.board()[0].to_string(), "zzzzz");
    }

    #[test]
    fn submit_evaluates_and_advances() {
        let mut s = state("pasta");
        type_word(&mut s, "carta");
        let outcome = s.submit_row(|_| true);

        let expected = Evaluation::from_code("acacc").unwrap();
        assert_eq!(
            outcome,
            Outcome::Evaluated {
                evaluation: expected,
                status: GameStatus::InProgress
            }
        );
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.current_col(), 0);
        assert_eq!(s.evaluations()[0], Some(expected));
        assert_eq!(s.modal(), None);
    }

    #[test]
    fn winning_row_finishes_game() {
        let mut s = state("pasta");
        type_word(&mut s, "carta");
        s.submit_row(|_| true);
        type_word(&mut s, "pasta");
        let outcome = s.submit_row(|_| true);

        assert!(matches!(
            outcome,
            Outcome::Evaluated {
                status: GameStatus::Win,
                ..
            }
        ));
        assert_eq!(s.status(), GameStatus::Win);
        assert_eq!(s.current_row(), 2);
        assert_eq!(s.modal(), Some(Modal::Stats));

        // Board is frozen afterwards
        assert_eq!(s.add_letter('a'), Outcome::Ignored);
        assert_eq!(s.delete_letter(), Outcome::Ignored);
        assert_eq!(s.submit_row(|_| true), Outcome::Ignored);
    }

    #[test]
    fn sixth_miss_fails_game() {
        let mut s = state("pasta");
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut s, "mucca");
            s.submit_row(|_| true);
        }
        assert_eq!(s.status(), GameStatus::Fail);
        assert_eq!(s.current_row(), MAX_ATTEMPTS);
        assert_eq!(s.modal(), Some(Modal::Stats));
        assert_eq!(s.add_letter('a'), Outcome::Ignored);
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let mut s = state("pasta");
        for _ in 0..MAX_ATTEMPTS - 1 {
            type_word(&mut s, "mucca");
            s.submit_row(|_| true);
        }
        type_word(&mut s, "pasta");
        s.submit_row(|_| true);
        assert_eq!(s.status(), GameStatus::Win);
    }

    #[test]
    fn modals() {
        let mut s = state("pasta");
        assert_eq!(s.close_modal(), Outcome::Ignored);
        assert_eq!(
            s.open_modal(Modal::Info),
            Outcome::ModalChanged(Some(Modal::Info))
        );
        assert_eq!(s.open_modal(Modal::Info), Outcome::Ignored);
        assert_eq!(s.close_modal(), Outcome::ModalChanged(None));
        assert_eq!(s.modal(), None);
    }

    #[test]
    fn submitted_rows() {
        let mut s = state("pasta");
        type_word(&mut s, "carta");
        s.submit_row(|_| true);
        type_word(&mut s, "pi");

        let rows: Vec<String> = s.submitted().map(|(row, _)| row.to_string()).collect();
        assert_eq!(rows, ["carta"]);
    }

    #[test]
    fn row_serde() {
        let mut s = state("pasta");
        type_word(&mut s, "pi");
        let row = s.board()[0];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, "\"pi   \"");
        assert_eq!(serde_json::from_str::<Row>(&json).unwrap(), row);

        assert!(serde_json::from_str::<Row>("\"p i  \"").is_err());
        assert!(serde_json::from_str::<Row>("\"pi\"").is_err());
    }

    #[test]
    fn state_serde_round_trip() {
        let mut s = GameState::daily(Word::new("pasta").unwrap(), 7);
        type_word(&mut s, "carta");
        s.submit_row(|_| true);
        type_word(&mut s, "pa");

        let json = serde_json::to_string(&s).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    fn with_field(s: &GameState, field: &str, value: serde_json::Value) -> serde_json::Value {
        let mut json = serde_json::to_value(s).unwrap();
        json[field] = value;
        json
    }

    #[test]
    fn impossible_states_do_not_deserialize() {
        let mut s = GameState::daily(Word::new("pasta").unwrap(), 7);
        type_word(&mut s, "carta");
        s.submit_row(|_| true);
        type_word(&mut s, "pa");

        let broken = [
            with_field(&s, "current_row", 6.into()),
            with_field(&s, "current_col", 4.into()),
            with_field(&s, "current_row", 2.into()),
            with_field(&s, "status", "win".into()),
            with_field(&s, "day", serde_json::Value::Null),
            with_field(
                &s,
                "evaluations",
                serde_json::json!([null, null, null, null, null, null]),
            ),
        ];
        for json in broken {
            assert!(
                serde_json::from_value::<GameState>(json.clone()).is_err(),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn finished_states_deserialize() {
        let mut lost = state("pasta");
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut lost, "mucca");
            lost.submit_row(|_| true);
        }
        let json = serde_json::to_value(&lost).unwrap();
        assert_eq!(serde_json::from_value::<GameState>(json).unwrap(), lost);

        let mut won = state("pasta");
        type_word(&mut won, "pasta");
        won.submit_row(|_| true);
        let json = serde_json::to_value(&won).unwrap();
        assert_eq!(serde_json::from_value::<GameState>(json).unwrap(), won);

        // Six submitted rows cannot still be in progress
        let reopened = with_field(&lost, "status", "in_progress".into());
        assert!(serde_json::from_value::<GameState>(reopened).is_err());
    }
}
