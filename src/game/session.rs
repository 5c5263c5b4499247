//! A playing session: the state machine wired to a word bank
//!
//! `Game::dispatch` is the single entry point for player input. It forwards
//! board edits to [`GameState`] and handles the transitions that need a new
//! solution (reset, mode toggle) or touch statistics.

use super::state::{Action, GameMode, GameState, GameStatus, Outcome};
use crate::stats::Statistics;
use crate::wordlists::WordBank;
use log::{debug, info};
use rand::rngs::StdRng;

pub struct Game<'a> {
    words: &'a WordBank,
    state: GameState,
    stats: Statistics,
    rng: StdRng,
    today: u64,
    /// Today's daily board while random mode is active
    daily_stash: Option<GameState>,
    check_words: bool,
}

impl<'a> Game<'a> {
    /// Start a session in `mode`; `today` is the current daily index
    pub fn new(words: &'a WordBank, mode: GameMode, today: u64, mut rng: StdRng) -> Self {
        let state = match mode {
            GameMode::Daily => GameState::daily(words.daily_answer(today).clone(), today),
            GameMode::Random => GameState::random(words.random_answer(&mut rng).clone()),
        };
        debug!("New {mode} game (day {today})");

        Self {
            words,
            state,
            stats: Statistics::default(),
            rng,
            today,
            daily_stash: None,
            check_words: true,
        }
    }

    /// Accept any five-letter word, not only the word list
    #[must_use]
    pub fn with_word_check(mut self, check_words: bool) -> Self {
        self.check_words = check_words;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Statistics) -> Self {
        self.stats = stats;
        self
    }

    /// Resume a saved daily board
    ///
    /// Boards from another day, or whose solution is not today's word in
    /// this word list, are dropped. Returns whether the board was taken.
    pub fn restore_daily(&mut self, saved: GameState) -> bool {
        if saved.mode() != GameMode::Daily || saved.day() != Some(self.today) {
            debug!("Ignoring saved board for day {:?}", saved.day());
            return false;
        }
        if saved.solution() != self.words.daily_answer(self.today) {
            debug!("Ignoring saved board from another word list");
            return false;
        }

        info!("Resuming daily game {}", self.today);
        if self.state.mode() == GameMode::Daily {
            self.state = saved;
        } else {
            self.daily_stash = Some(saved);
        }
        true
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn today(&self) -> u64 {
        self.today
    }

    /// Today's daily board, whichever mode is showing
    #[must_use]
    pub fn daily_state(&self) -> Option<&GameState> {
        match self.state.mode() {
            GameMode::Daily => Some(&self.state),
            GameMode::Random => self.daily_stash.as_ref(),
        }
    }

    /// Apply a player action
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::AddLetter(letter) => self.state.add_letter(letter),
            Action::DeleteLetter => self.state.delete_letter(),
            Action::NextRow => self.next_row(),
            Action::Reset => self.reset(),
            Action::ToggleGameMode => self.toggle_mode(),
            Action::OpenModal(modal) => self.state.open_modal(modal),
            Action::CloseModal => self.state.close_modal(),
        };
        debug!("{action:?} -> {outcome:?}");
        outcome
    }

    fn next_row(&mut self) -> Outcome {
        let words = self.words;
        let check_words = self.check_words;
        let outcome = self
            .state
            .submit_row(|guess| !check_words || words.is_accepted(guess));

        if let Outcome::Evaluated { status, .. } = outcome {
            match status {
                GameStatus::Win => {
                    self.stats.record_win(self.state.current_row());
                    info!("Won in {} guesses", self.state.current_row());
                }
                GameStatus::Fail => {
                    self.stats.record_loss();
                    info!("Lost, solution was {}", self.state.solution());
                }
                GameStatus::InProgress => {}
            }
        }
        outcome
    }

    /// New random word; the daily word can't be re-rolled
    fn reset(&mut self) -> Outcome {
        if self.state.mode() == GameMode::Daily {
            return Outcome::Ignored;
        }
        self.state = self.new_random();
        Outcome::NewGame
    }

    fn toggle_mode(&mut self) -> Outcome {
        let mode = self.state.mode().toggled();
        match mode {
            GameMode::Random => {
                let random = self.new_random();
                self.daily_stash = Some(std::mem::replace(&mut self.state, random));
            }
            GameMode::Daily => {
                self.state = match self.daily_stash.take() {
                    Some(stashed) if stashed.day() == Some(self.today) => stashed,
                    _ => self.new_daily(),
                };
            }
        }
        debug!("Switched to {mode} mode");
        Outcome::ModeChanged(mode)
    }

    fn new_random(&mut self) -> GameState {
        GameState::random(self.words.random_answer(&mut self.rng).clone())
    }

    fn new_daily(&self) -> GameState {
        GameState::daily(self.words.daily_answer(self.today).clone(), self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{Modal, Rejection};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn bank() -> WordBank {
        WordBank::new(
            words_from_slice(&["pasta", "pizza", "gatto"]),
            words_from_slice(&["carta", "mucca"]),
        )
        .unwrap()
    }

    fn type_word(game: &mut Game, word: &str) -> Outcome {
        for c in word.chars() {
            game.dispatch(Action::AddLetter(c));
        }
        game.dispatch(Action::NextRow)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn daily_game_uses_daily_answer() {
        let words = bank();
        let game = Game::new(&words, GameMode::Daily, 5, rng());
        assert_eq!(game.state().solution(), words.daily_answer(5));
        assert_eq!(game.state().day(), Some(5));
    }

    #[test]
    fn unknown_word_rejected_unless_check_disabled() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Daily, 0, rng());
        assert_eq!(
            type_word(&mut game, "zzzzz"),
            Outcome::Rejected(Rejection::NotInWordList)
        );

        let mut game = Game::new(&words, GameMode::Daily, 0, rng()).with_word_check(false);
        assert!(matches!(
            type_word(&mut game, "zzzzz"),
            Outcome::Evaluated { .. }
        ));
    }

    #[test]
    fn win_records_stats() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Daily, 0, rng());
        let solution = game.state().solution().text().to_string();

        type_word(&mut game, "mucca");
        type_word(&mut game, &solution);

        assert_eq!(game.state().status(), GameStatus::Win);
        assert_eq!(game.state().modal(), Some(Modal::Stats));
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().guess_distribution[2], 1);
    }

    #[test]
    fn loss_records_stats() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Random, 0, rng()).with_word_check(false);
        for _ in 0..6 {
            type_word(&mut game, "zzzzz");
        }
        assert_eq!(game.state().status(), GameStatus::Fail);
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.stats().games_won, 0);
    }

    #[test]
    fn reset_only_in_random_mode() {
        let words = bank();
        let mut daily = Game::new(&words, GameMode::Daily, 0, rng());
        daily.dispatch(Action::AddLetter('p'));
        assert_eq!(daily.dispatch(Action::Reset), Outcome::Ignored);
        assert_eq!(daily.state().current_col(), 1);

        let mut random = Game::new(&words, GameMode::Random, 0, rng());
        random.dispatch(Action::AddLetter('p'));
        assert_eq!(random.dispatch(Action::Reset), Outcome::NewGame);
        assert_eq!(random.state().current_col(), 0);
        assert!(words.answers().contains(random.state().solution()));
    }

    #[test]
    fn toggle_keeps_daily_progress() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Daily, 0, rng());
        type_word(&mut game, "mucca");

        assert_eq!(
            game.dispatch(Action::ToggleGameMode),
            Outcome::ModeChanged(GameMode::Random)
        );
        assert_eq!(game.state().mode(), GameMode::Random);
        assert_eq!(game.state().current_row(), 0);
        assert_eq!(game.daily_state().unwrap().current_row(), 1);

        assert_eq!(
            game.dispatch(Action::ToggleGameMode),
            Outcome::ModeChanged(GameMode::Daily)
        );
        assert_eq!(game.state().mode(), GameMode::Daily);
        assert_eq!(game.state().current_row(), 1);
    }

    #[test]
    fn toggle_from_random_starts_today() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Random, 9, rng());
        assert!(game.daily_state().is_none());

        game.dispatch(Action::ToggleGameMode);
        assert_eq!(game.state().day(), Some(9));
        assert_eq!(game.state().solution(), words.daily_answer(9));
    }

    #[test]
    fn restore_daily_only_for_today() {
        let words = bank();
        let mut saved = GameState::daily(words.daily_answer(3).clone(), 3);
        saved.add_letter('p');

        let mut game = Game::new(&words, GameMode::Daily, 4, rng());
        assert!(!game.restore_daily(saved.clone()));
        assert_eq!(game.state().day(), Some(4));

        let mut game = Game::new(&words, GameMode::Daily, 3, rng());
        assert!(game.restore_daily(saved.clone()));
        assert_eq!(game.state(), &saved);
    }

    #[test]
    fn restore_daily_needs_todays_word() {
        let words = bank();
        let other = ["pasta", "pizza", "gatto"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .find(|w| w != words.daily_answer(5))
            .unwrap();
        let saved = GameState::daily(other, 5);

        let mut game = Game::new(&words, GameMode::Daily, 5, rng());
        assert!(!game.restore_daily(saved));
        assert_eq!(game.state().solution(), words.daily_answer(5));
        assert_eq!(game.state().current_row(), 0);
    }

    #[test]
    fn restore_daily_while_in_random_mode() {
        let words = bank();
        let saved = GameState::daily(words.daily_answer(2).clone(), 2);

        let mut game = Game::new(&words, GameMode::Random, 2, rng());
        assert!(game.restore_daily(saved.clone()));
        assert_eq!(game.state().mode(), GameMode::Random);
        assert_eq!(game.daily_state(), Some(&saved));
    }

    #[test]
    fn modal_actions() {
        let words = bank();
        let mut game = Game::new(&words, GameMode::Daily, 0, rng());
        game.dispatch(Action::OpenModal(Modal::Info));
        assert_eq!(game.state().modal(), Some(Modal::Info));
        game.dispatch(Action::CloseModal);
        assert_eq!(game.state().modal(), None);
    }
}
