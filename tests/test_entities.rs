use leafy_guess::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(Phase::Guessing, Phase::Guessing);
    assert_ne!(Phase::Guessing, Phase::Won);
    assert_eq!(GameEvent::AppendDigit('1'), GameEvent::AppendDigit('1'));
    assert_ne!(GameEvent::AppendDigit('1'), GameEvent::AppendDigit('2'));
    assert_ne!(
        Outcome::TooHigh { guess: 5, remaining: 1 },
        Outcome::TooLow { guess: 5, remaining: 1 }
    );

    let outcome = Outcome::OutOfAttempts { target: 9 };
    assert_eq!(outcome.clone(), Outcome::OutOfAttempts { target: 9 });
}

#[test]
fn world_clone_is_independent() {
    let original = World {
        game: GameState {
            target: 50,
            attempts: 0,
            input: String::new(),
            outcome: Outcome::NoMessage,
            phase: Phase::Guessing,
        },
        leaves: Vec::new(),
        fireworks: Vec::new(),
        show_fireworks: false,
        frame: 0,
        width: 800.0,
        height: 600.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.game.input.push('4');
    cloned.game.attempts = 3;
    cloned.fireworks.push(FireworkParticle {
        x: 1.0,
        y: 2.0,
        speed_x: 0.0,
        speed_y: 0.0,
        size: 3,
        color: (255, 255, 255),
        life: 60,
        alpha: 255,
    });

    assert!(original.game.input.is_empty());
    assert_eq!(original.game.attempts, 0);
    assert!(original.fireworks.is_empty());
}
