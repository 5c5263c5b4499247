//! Share text for finished daily games

use super::state::{GameMode, GameState, MAX_ATTEMPTS};

/// Title of the shared result
pub const SHARE_TITLE: &str = "Wordle🇮🇹";

/// Result text for a finished daily game
///
/// The first line carries the day number and the attempts used, followed by
/// one row of tiles per submitted guess. Random games and games still in
/// progress have nothing to share.
///
/// # Examples
/// ```
/// use wordle_it::core::Word;
/// use wordle_it::game::{GameState, share_text};
///
/// let mut state = GameState::daily(Word::new("pasta").unwrap(), 12);
/// for c in "pasta".chars() {
///     state.add_letter(c);
/// }
/// state.submit_row(|_| true);
///
/// assert_eq!(share_text(&state).unwrap(), "Wordle🇮🇹 12 1/6 \n\n🟩🟩🟩🟩🟩\n");
/// ```
#[must_use]
pub fn share_text(state: &GameState) -> Option<String> {
    if state.mode() != GameMode::Daily || !state.status().is_finished() {
        return None;
    }
    let day = state.day()?;

    let mut text = format!(
        "{SHARE_TITLE} {day} {}/{MAX_ATTEMPTS} \n\n",
        state.current_row()
    );
    for (_, evaluation) in state.submitted() {
        text.push_str(&evaluation.to_emoji());
        text.push('\n');
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn play(state: &mut GameState, words: &[&str]) {
        for word in words {
            for c in word.chars() {
                state.add_letter(c);
            }
            state.submit_row(|_| true);
        }
    }

    #[test]
    fn nothing_to_share_while_playing() {
        let mut state = GameState::daily(Word::new("pasta").unwrap(), 3);
        play(&mut state, &["carta"]);
        assert!(share_text(&state).is_none());
    }

    #[test]
    fn nothing_to_share_in_random_mode() {
        let mut state = GameState::random(Word::new("pasta").unwrap());
        play(&mut state, &["pasta"]);
        assert!(share_text(&state).is_none());
    }

    #[test]
    fn win_after_three_rows() {
        let mut state = GameState::daily(Word::new("pasta").unwrap(), 100);
        play(&mut state, &["mucca", "carta", "pasta"]);

        let text = share_text(&state).unwrap();
        assert_eq!(
            text,
            "Wordle🇮🇹 100 3/6 \n\n⬜⬜⬜⬜🟩\n⬜🟩⬜🟩🟩\n🟩🟩🟩🟩🟩\n"
        );
    }

    #[test]
    fn failed_game_lists_all_rows() {
        let mut state = GameState::daily(Word::new("pasta").unwrap(), 5);
        play(&mut state, &["mucca"; MAX_ATTEMPTS]);

        let text = share_text(&state).unwrap();
        assert!(text.starts_with("Wordle🇮🇹 5 6/6 \n\n"));
        assert_eq!(text.lines().filter(|l| l.contains('⬜')).count(), 6);
    }
}
