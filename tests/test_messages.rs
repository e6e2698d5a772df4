use leafy_guess::entities::Outcome;
use leafy_guess::messages::*;

#[test]
fn no_message_before_first_guess() {
    assert_eq!(outcome_message(&Outcome::NoMessage), None);
}

#[test]
fn feedback_texts_and_tones() {
    assert_eq!(
        outcome_message(&Outcome::TooHigh { guess: 80, remaining: 7 }),
        Some(("80 is too high! 7 attempts left.".to_string(), Tone::High))
    );
    assert_eq!(
        outcome_message(&Outcome::TooLow { guess: 20, remaining: 6 }),
        Some(("20 is too low! 6 attempts left.".to_string(), Tone::Low))
    );
    assert_eq!(
        outcome_message(&Outcome::Correct { guess: 50, attempts: 3 }),
        Some((
            "Congratulations! 50 is the correct answer! It took 3 attempts.".to_string(),
            Tone::Correct
        ))
    );
}

#[test]
fn out_of_attempts_uses_the_warning_tone() {
    assert_eq!(
        outcome_message(&Outcome::OutOfAttempts { target: 42 }),
        Some(("Out of attempts! The correct answer is 42.".to_string(), Tone::High))
    );
}

#[test]
fn instruction_lines() {
    assert_eq!(rules_line(), "Guess a number between 1-100, 8 attempts in total.");
    assert_eq!(attempts_line(3), "Current attempts: 3/8");
}
