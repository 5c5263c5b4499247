//! Player-facing Italian text

use super::state::{GameStatus, Rejection};
use crate::core::Word;

pub const TITLE: &str = "WORDLE 🇮🇹";
pub const PLAY_AGAIN: &str = "GIOCA ANCORA";
pub const SHARE: &str = "CONDIVIDI";
pub const NEXT_WORD: &str = "Prossima parola tra";
pub const SHARE_READY: &str = "Risultato copiato: verrà stampato all'uscita";
pub const NEW_GAME: &str = "Nuova partita!";
pub const DAILY_ONLY_ONCE: &str = "La parola del giorno si gioca una volta sola";

/// Body of the info dialog, one paragraph per entry
pub const INFO: &[&str] = &[
    "Clone in lingua italiana del gioco Wordle (https://www.powerlanguage.co.uk/wordle/).",
    "Idea originale di Josh Wardle (Powerlanguage).",
    "Indovina la parola di 5 lettere in 6 tentativi. Dopo ogni tentativo le lettere \
     diventano verdi se sono al posto giusto, gialle se sono nella parola ma in un'altra \
     posizione, grigie se non ci sono.",
    "La lista di parole è stata estratta da https://github.com/napolux/paroleitaliane",
];

/// Dialog title after a win
#[must_use]
pub fn win(attempts: usize) -> String {
    format!("Complimenti, hai indovinato la parola corretta in {attempts} tentativi!")
}

/// Dialog title after the sixth miss
#[must_use]
pub fn fail(solution: &Word) -> String {
    format!("Non hai indovinato, la parola corretta è {solution}")
}

/// Dialog title for a finished game
#[must_use]
pub fn result(status: GameStatus, attempts: usize, solution: &Word) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Win => Some(win(attempts)),
        GameStatus::Fail => Some(fail(solution)),
    }
}

/// Notice for a refused row
#[must_use]
pub const fn rejection(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::NotEnoughLetters => "Lettere insufficienti",
        Rejection::NotInWordList => "Parola non nella lista",
    }
}

/// Short praise shown in the message panel after a win
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "🎯 Geniale!",
        2 => "🔥 Magnifico!",
        3 => "✨ Splendido!",
        4 => "👏 Ottimo!",
        5 => "🎉 Bene!",
        _ => "😅 Per un pelo!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_titles() {
        let solution = Word::new("pasta").unwrap();
        assert_eq!(result(GameStatus::InProgress, 2, &solution), None);
        assert_eq!(
            result(GameStatus::Win, 3, &solution).unwrap(),
            "Complimenti, hai indovinato la parola corretta in 3 tentativi!"
        );
        assert_eq!(
            result(GameStatus::Fail, 6, &solution).unwrap(),
            "Non hai indovinato, la parola corretta è pasta"
        );
    }
}
