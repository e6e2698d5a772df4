/// Alternate-screen session around the game loop.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

/// Switch to the alternate screen and hide the cursor.  Returns whether the
/// terminal accepted keyboard enhancement, which turns on key-repeat and
/// key-release events (Ghostty, kitty, etc.); other terminals keep sending
/// plain presses.
fn enter_screen<W: Write>(out: &mut W) -> io::Result<bool> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    Ok(keyboard_enhanced)
}

/// Best-effort restore; every step runs even if an earlier one failed.
fn leave_screen<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
}

/// Run `body` on the alternate screen.  The screen is restored whether
/// setup, `body`, or neither fails.  Raw mode is the caller's concern.
pub fn with_screen<W, T>(
    out: &mut W,
    body: impl FnOnce(&mut W) -> io::Result<T>,
) -> io::Result<T>
where
    W: Write,
{
    let (result, keyboard_enhanced) = match enter_screen(out) {
        Ok(keyboard_enhanced) => (body(&mut *out), keyboard_enhanced),
        Err(err) => (Err(err), false),
    };
    leave_screen(out, keyboard_enhanced);
    result
}
