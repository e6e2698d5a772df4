/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (and, where needed, an RNG handle) and returns a brand-new
/// `World`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::config::{LEAF_COUNT, MAX_ATTEMPTS, MAX_INPUT_LEN, TARGET_MAX, TARGET_MIN};
use crate::entities::{GameEvent, GameState, Outcome, Phase, World};
use crate::particles::{create_burst, spawn_leaf_field, update_burst, update_leaf_field};

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn sample_target(rng: &mut impl Rng) -> u32 {
    rng.gen_range(TARGET_MIN..=TARGET_MAX)
}

/// A fresh round: new target, no attempts, empty buffer, no message.
pub fn new_round(rng: &mut impl Rng) -> GameState {
    let target = sample_target(rng);
    log::debug!("new round, target = {target}");
    GameState {
        target,
        attempts: 0,
        input: String::new(),
        outcome: Outcome::NoMessage,
        phase: Phase::Guessing,
    }
}

/// Build the initial world for a logical screen of `width` × `height`.
pub fn init_world(width: f32, height: f32, rng: &mut impl Rng) -> World {
    World {
        game: new_round(rng),
        leaves: spawn_leaf_field(LEAF_COUNT, width, rng),
        fireworks: Vec::new(),
        show_fireworks: false,
        frame: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions ───────────────────────────────────────────

/// Append a typed character to the guess buffer.  Non-digits and a full
/// buffer are ignored, as is everything outside `Guessing`.
pub fn append_digit(world: &World, c: char) -> World {
    let game = &world.game;
    if game.phase != Phase::Guessing || !c.is_ascii_digit() || game.input.len() >= MAX_INPUT_LEN
    {
        return world.clone();
    }
    let mut input = game.input.clone();
    input.push(c);
    World {
        game: GameState {
            input,
            ..game.clone()
        },
        ..world.clone()
    }
}

pub fn delete_digit(world: &World) -> World {
    let game = &world.game;
    if game.phase != Phase::Guessing {
        return world.clone();
    }
    let mut input = game.input.clone();
    input.pop();
    World {
        game: GameState {
            input,
            ..game.clone()
        },
        ..world.clone()
    }
}

/// Evaluate a guess against the target, without side effects.
pub fn judge(guess: u32, target: u32, attempts: u32) -> Outcome {
    let remaining = MAX_ATTEMPTS.saturating_sub(attempts);
    if guess == target {
        Outcome::Correct { guess, attempts }
    } else if guess > target {
        Outcome::TooHigh { guess, remaining }
    } else {
        Outcome::TooLow { guess, remaining }
    }
}

/// Submit the buffered guess.
///
/// A correct guess wins the round and launches a burst at the centre of the
/// screen.  Running out of attempts only replaces the feedback line; the
/// player may keep guessing.
pub fn confirm_guess(world: &World, rng: &mut impl Rng) -> World {
    let game = &world.game;
    if game.phase != Phase::Guessing
        || game.input.is_empty()
        || !game.input.chars().all(|c| c.is_ascii_digit())
    {
        return world.clone();
    }
    // At most three ASCII digits, so this cannot fail.
    let Ok(guess) = game.input.parse::<u32>() else {
        return world.clone();
    };

    let attempts = game.attempts + 1;
    let mut outcome = judge(guess, game.target, attempts);
    let won = matches!(outcome, Outcome::Correct { .. });

    if !won && attempts >= MAX_ATTEMPTS {
        log::info!("out of attempts after {attempts} guesses");
        outcome = Outcome::OutOfAttempts {
            target: game.target,
        };
    }

    let (phase, fireworks, show_fireworks) = if won {
        log::info!("guessed {guess} in {attempts} attempts");
        let burst = create_burst(world.width / 2.0, world.height / 2.0, rng);
        (Phase::Won, burst, true)
    } else {
        (Phase::Guessing, world.fireworks.clone(), world.show_fireworks)
    };

    World {
        game: GameState {
            attempts,
            input: String::new(),
            outcome,
            phase,
            ..game.clone()
        },
        fireworks,
        show_fireworks,
        ..world.clone()
    }
}

/// Start a new round after a win.  Any burst still in flight is discarded.
pub fn restart(world: &World, rng: &mut impl Rng) -> World {
    if world.game.phase != Phase::Won {
        return world.clone();
    }
    log::info!("restarting");
    World {
        game: new_round(rng),
        fireworks: Vec::new(),
        show_fireworks: false,
        ..world.clone()
    }
}

/// Route one input event through the state machine.  `Quit` is handled by
/// the frame driver and leaves the world untouched here.
pub fn apply_event(world: &World, event: &GameEvent, rng: &mut impl Rng) -> World {
    match event {
        GameEvent::AppendDigit(c) => append_digit(world, *c),
        GameEvent::Delete => delete_digit(world),
        GameEvent::Confirm => confirm_guess(world, rng),
        GameEvent::Restart => restart(world, rng),
        GameEvent::Quit => world.clone(),
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance both particle systems by one frame.  All randomness comes
/// through `rng` so callers control determinism.
pub fn tick(world: &World, rng: &mut impl Rng) -> World {
    let leaves = update_leaf_field(&world.leaves, world.width, world.height, rng);

    let (fireworks, show_fireworks) = if world.show_fireworks {
        let fireworks = update_burst(&world.fireworks);
        let alive = !fireworks.is_empty();
        if !alive {
            log::debug!("firework burst finished");
        }
        (fireworks, alive)
    } else {
        (world.fireworks.clone(), false)
    };

    World {
        leaves,
        fireworks,
        show_fireworks,
        frame: world.frame + 1,
        ..world.clone()
    }
}
