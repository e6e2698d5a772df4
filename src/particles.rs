/// Leaf field and firework burst simulation.
///
/// Spawning draws everything from the injected RNG; the per-tick advance
/// functions are deterministic.

use rand::Rng;

use crate::config::{
    ALPHA_DECAY, FIREWORK_COUNT, FIREWORK_LIFE, FIREWORK_SIZE, FIREWORK_SPEED, GRAVITY,
    LEAF_DRIFT_SPEED, LEAF_FALL_SPEED, LEAF_RESPAWN_BELOW, LEAF_SIZE, LEAF_SPAWN_MARGIN_X,
    LEAF_SPAWN_Y, LEAF_SPIN_SPEED,
};
use crate::entities::{FireworkParticle, LeafParticle};

// ── Leaves ────────────────────────────────────────────────────────────────────

/// Fold an angle into `[0, 360)`.  `rem_euclid` alone can round a tiny
/// negative angle up to exactly 360 in f32.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Random spawn point above the top edge.  Coordinates are whole units.
fn leaf_spawn_point(width: f32, rng: &mut impl Rng) -> (f32, f32) {
    let x = rng.gen_range(-LEAF_SPAWN_MARGIN_X..=width as i32 + LEAF_SPAWN_MARGIN_X);
    let y = rng.gen_range(LEAF_SPAWN_Y.0..=LEAF_SPAWN_Y.1);
    (x as f32, y as f32)
}

pub fn spawn_leaf(width: f32, rng: &mut impl Rng) -> LeafParticle {
    let size = rng.gen_range(LEAF_SIZE.0..=LEAF_SIZE.1);
    let (x, y) = leaf_spawn_point(width, rng);
    let speed_y = rng.gen_range(LEAF_FALL_SPEED.0..=LEAF_FALL_SPEED.1);
    let speed_x = rng.gen_range(LEAF_DRIFT_SPEED.0..=LEAF_DRIFT_SPEED.1);
    let rotation = rng.gen_range(0_u32..360) as f32;
    let rot_speed = rng.gen_range(LEAF_SPIN_SPEED.0..=LEAF_SPIN_SPEED.1);
    // Light greens
    let color = (
        rng.gen_range(100..=160),
        rng.gen_range(180..=220),
        rng.gen_range(80..=140),
    );
    LeafParticle {
        x,
        y,
        speed_x,
        speed_y,
        size,
        color,
        rotation,
        rot_speed,
    }
}

/// Populate a field of `count` independent leaves.
pub fn spawn_leaf_field(count: usize, width: f32, rng: &mut impl Rng) -> Vec<LeafParticle> {
    (0..count).map(|_| spawn_leaf(width, rng)).collect()
}

/// Advance one leaf by a tick.  A leaf that sinks past the bottom margin is
/// re-randomised above the top edge; its other attributes are kept.
pub fn advance_leaf(
    leaf: &LeafParticle,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> LeafParticle {
    let y = leaf.y + leaf.speed_y;
    let x = leaf.x + leaf.speed_x;
    let rotation = wrap_degrees(leaf.rotation + leaf.rot_speed);

    let (x, y) = if y > height + LEAF_RESPAWN_BELOW {
        leaf_spawn_point(width, rng)
    } else {
        (x, y)
    };

    LeafParticle {
        x,
        y,
        rotation,
        ..leaf.clone()
    }
}

/// Advance the whole field.  The field never grows or shrinks.
pub fn update_leaf_field(
    leaves: &[LeafParticle],
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Vec<LeafParticle> {
    leaves
        .iter()
        .map(|leaf| advance_leaf(leaf, width, height, rng))
        .collect()
}

// ── Fireworks ─────────────────────────────────────────────────────────────────

pub fn spawn_firework(x: f32, y: f32, rng: &mut impl Rng) -> FireworkParticle {
    let size = rng.gen_range(FIREWORK_SIZE.0..=FIREWORK_SIZE.1);
    // Bright colours
    let color = (
        rng.gen_range(180..=255),
        rng.gen_range(80..=255),
        rng.gen_range(80..=255),
    );
    let angle = (rng.gen_range(0_u32..360) as f32).to_radians();
    let speed = rng.gen_range(FIREWORK_SPEED.0..=FIREWORK_SPEED.1);
    let life = rng.gen_range(FIREWORK_LIFE.0..=FIREWORK_LIFE.1);
    FireworkParticle {
        x,
        y,
        speed_x: angle.cos() * speed,
        speed_y: angle.sin() * speed,
        size,
        color,
        life,
        alpha: u8::MAX,
    }
}

/// A fresh burst of `FIREWORK_COUNT` particles centred on `(x, y)`.
/// Callers replace any previous burst with the result.
pub fn create_burst(x: f32, y: f32, rng: &mut impl Rng) -> Vec<FireworkParticle> {
    log::debug!("firework burst at ({x}, {y})");
    (0..FIREWORK_COUNT).map(|_| spawn_firework(x, y, rng)).collect()
}

/// Advance one spark: gravity first, then position, then decay.
pub fn advance_firework(spark: &FireworkParticle) -> FireworkParticle {
    let speed_y = spark.speed_y + GRAVITY;
    FireworkParticle {
        x: spark.x + spark.speed_x,
        y: spark.y + speed_y,
        speed_y,
        life: spark.life - 1,
        alpha: spark.alpha.saturating_sub(ALPHA_DECAY),
        ..spark.clone()
    }
}

/// Advance every spark and drop the ones whose life ran out this tick.
/// Invisible sparks (alpha 0) keep simulating until their life expires.
pub fn update_burst(sparks: &[FireworkParticle]) -> Vec<FireworkParticle> {
    sparks
        .iter()
        .map(advance_firework)
        .filter(|s| s.life > 0)
        .collect()
}
