/// Player-facing text.

use crate::config::{MAX_ATTEMPTS, TARGET_MAX, TARGET_MIN};
use crate::entities::Outcome;

pub const TITLE: &str = "Natural Style Guess the Number";
pub const RESTART_HINT: &str = "Press Space to Restart";

/// Colour family of a feedback line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tone {
    Correct,
    High,
    Low,
}

pub fn rules_line() -> String {
    format!(
        "Guess a number between {}-{}, {} attempts in total.",
        TARGET_MIN, TARGET_MAX, MAX_ATTEMPTS
    )
}

pub fn attempts_line(attempts: u32) -> String {
    format!("Current attempts: {}/{}", attempts, MAX_ATTEMPTS)
}

/// Feedback for the latest guess, or `None` before the first one.
pub fn outcome_message(outcome: &Outcome) -> Option<(String, Tone)> {
    match outcome {
        Outcome::NoMessage => None,
        Outcome::Correct { guess, attempts } => Some((
            format!(
                "Congratulations! {} is the correct answer! It took {} attempts.",
                guess, attempts
            ),
            Tone::Correct,
        )),
        Outcome::TooHigh { guess, remaining } => Some((
            format!("{} is too high! {} attempts left.", guess, remaining),
            Tone::High,
        )),
        Outcome::TooLow { guess, remaining } => Some((
            format!("{} is too low! {} attempts left.", guess, remaining),
            Tone::Low,
        )),
        Outcome::OutOfAttempts { target } => Some((
            format!("Out of attempts! The correct answer is {}.", target),
            Tone::High,
        )),
    }
}
