mod cli;
mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::{event, terminal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, LevelFilter, WriteLogger};

use leafy_guess::compute::{apply_event, init_world, tick};
use leafy_guess::config::{frame_duration, SCREEN_HEIGHT, SCREEN_WIDTH};
use leafy_guess::entities::{GameEvent, World};
use leafy_guess::geometry::Viewport;
use leafy_guess::input::map_event;
use leafy_guess::screen::with_screen;

use cli::Args;

// ── Frame driver ──────────────────────────────────────────────────────────────

/// Run ticks until a quit event arrives.
///
/// Each tick drains every pending input in arrival order, then advances the
/// leaves and (while a burst is live) the fireworks, then redraws.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    rx: &mpsc::Receiver<event::Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let frame = frame_duration();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match map_event(&ev) {
                Some(GameEvent::Quit) => {
                    log::info!("quit after {} frames", world.frame);
                    return Ok(());
                }
                Some(game_event) => *world = apply_event(world, &game_event, rng),
                None => {}
            }
        }

        *world = tick(world, rng);

        // Re-read every frame so a resized terminal is picked up
        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, world.width, world.height);
        display::render(out, world, &view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .context("could not install logger")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("starting, seed = {:?}", args.seed);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("could not enable raw mode")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<event::Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::warn!("input thread stopped: {err}");
                break;
            }
        }
    });

    let mut world = init_world(SCREEN_WIDTH, SCREEN_HEIGHT, &mut rng);
    let result = with_screen(&mut out, |out| game_loop(out, &mut world, &rx, &mut rng));

    // Always restore the terminal
    let _ = terminal::disable_raw_mode();

    result.context("game loop failed")
}
