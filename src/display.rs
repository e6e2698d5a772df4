/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer, the viewport and an immutable
/// view of the world.  No game logic is performed; this module only
/// translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};
use leafy_guess::config::{
    COLOR_BG, COLOR_PROMPT_CORRECT, COLOR_PROMPT_HIGH, COLOR_PROMPT_LOW, COLOR_TEXT, COLOR_WOOD,
    COLOR_WOOD_LIGHT,
};
use leafy_guess::entities::{FireworkParticle, LeafParticle, Phase, Rgb, World};
use leafy_guess::geometry::{blend, leaf_glyph, Viewport};
use leafy_guess::messages::{
    attempts_line, outcome_message, rules_line, Tone, RESTART_HINT, TITLE,
};

// ── Layout (world units, matching the 800×600 logical screen) ────────────────

const TITLE_Y: f32 = 80.0;
const RULES_Y: f32 = 150.0;
const ATTEMPTS_Y: f32 = 190.0;
const INPUT_BOX_Y: (f32, f32) = (250.0, 310.0);
const INPUT_BOX_HALF_WIDTH: f32 = 120.0;
const PROMPT_Y: f32 = 350.0;
const RESTART_Y: f32 = 420.0;

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Correct => rgb(COLOR_PROMPT_CORRECT),
        Tone::High => rgb(COLOR_PROMPT_HIGH),
        Tone::Low => rgb(COLOR_PROMPT_LOW),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World, view: &Viewport) -> std::io::Result<()> {
    draw_background(out, view)?;

    for leaf in &world.leaves {
        draw_leaf(out, leaf, view)?;
    }

    draw_title(out, view)?;
    draw_instructions(out, world, view)?;
    draw_input_box(out, world, view)?;
    draw_prompt(out, world, view)?;

    if world.show_fireworks {
        for spark in &world.fireworks {
            draw_firework(out, spark, view)?;
        }
    }

    if world.game.phase == Phase::Won && !world.show_fireworks {
        draw_centered(out, view, view.row(RESTART_Y), RESTART_HINT, rgb(COLOR_PROMPT_CORRECT))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let blank = " ".repeat(view.cols as usize);
    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

// ── Particles ─────────────────────────────────────────────────────────────────

fn draw_leaf<W: Write>(out: &mut W, leaf: &LeafParticle, view: &Viewport) -> std::io::Result<()> {
    let Some((col, row)) = view.to_cell(leaf.x, leaf.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(rgb(leaf.color)))?;
    out.queue(Print(leaf_glyph(leaf)))?;
    Ok(())
}

/// Terminal cells have no alpha channel, so the spark colour is faded
/// toward the background instead.
fn draw_firework<W: Write>(
    out: &mut W,
    spark: &FireworkParticle,
    view: &Viewport,
) -> std::io::Result<()> {
    if spark.alpha == 0 {
        return Ok(());
    }
    let Some((col, row)) = view.to_cell(spark.x, spark.y) else {
        return Ok(());
    };
    let glyph = if spark.size >= 5 { '●' } else { '•' };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    out.queue(style::SetForegroundColor(rgb(blend(spark.color, COLOR_BG, spark.alpha))))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(view.centered_col(text.chars().count()), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let row = view.row(TITLE_Y);
    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    draw_centered(out, view, row, TITLE, rgb(COLOR_WOOD))?;
    out.queue(style::SetAttribute(Attribute::NormalIntensity))?;

    // Underline, a little wider than the title
    let rule = "━".repeat(TITLE.chars().count() + 4);
    draw_centered(out, view, row + 1, &rule, rgb(COLOR_WOOD))
}

fn draw_instructions<W: Write>(
    out: &mut W,
    world: &World,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    draw_centered(out, view, view.row(RULES_Y), &rules_line(), rgb(COLOR_TEXT))?;
    draw_centered(
        out,
        view,
        view.row(ATTEMPTS_Y),
        &attempts_line(world.game.attempts),
        rgb(COLOR_TEXT),
    )
}

// ── Input box ─────────────────────────────────────────────────────────────────

fn draw_input_box<W: Write>(out: &mut W, world: &World, view: &Viewport) -> std::io::Result<()> {
    let mid_x = world.width / 2.0;
    let left = view
        .to_cell(mid_x - INPUT_BOX_HALF_WIDTH, INPUT_BOX_Y.0)
        .map(|(c, _)| c)
        .unwrap_or(0);
    let right = view
        .to_cell(mid_x + INPUT_BOX_HALF_WIDTH, INPUT_BOX_Y.0)
        .map(|(c, _)| c)
        .unwrap_or(view.cols.saturating_sub(1));
    let top = view.row(INPUT_BOX_Y.0);
    // Always leave at least one interior row
    let bottom = view.row(INPUT_BOX_Y.1).max(top + 2);
    let inner = right.saturating_sub(left + 1) as usize;

    out.queue(style::SetForegroundColor(rgb(COLOR_WOOD)))?;
    out.queue(style::SetBackgroundColor(rgb(COLOR_WOOD_LIGHT)))?;

    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("╭{}╮", "─".repeat(inner))))?;
    for row in top + 1..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(format!("│{}│", " ".repeat(inner))))?;
    }
    out.queue(cursor::MoveTo(left, bottom))?;
    out.queue(Print(format!("╰{}╯", "─".repeat(inner))))?;

    // Buffer text, centred in the box
    let text = &world.game.input;
    let mid_row = (top + bottom) / 2;
    let col = left + 1 + (inner.saturating_sub(text.len()) / 2) as u16;
    out.queue(cursor::MoveTo(col, mid_row))?;
    out.queue(style::SetForegroundColor(rgb(COLOR_TEXT)))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    out.queue(Print(text))?;
    out.queue(style::SetAttribute(Attribute::NormalIntensity))?;

    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    Ok(())
}

// ── Feedback line ─────────────────────────────────────────────────────────────

fn draw_prompt<W: Write>(out: &mut W, world: &World, view: &Viewport) -> std::io::Result<()> {
    let Some((text, tone)) = outcome_message(&world.game.outcome) else {
        return Ok(());
    };
    // Padded plate so leaves behind the text don't break it up
    let plate = format!("  {}  ", text);
    out.queue(style::SetBackgroundColor(rgb(COLOR_BG)))?;
    draw_centered(out, view, view.row(PROMPT_Y), &plate, tone_color(tone))
}
