use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine::{Generator, StepResult};
use rand::Rng;

use crate::render;

/// Animates the generator to completion in the alternate screen, one step
/// per frame. Returns once the user quits or, after completion, presses any
/// key. The terminal is restored on every exit path.
pub fn run<R: Rng>(generator: Generator<'_, R>, delay: Duration) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, Hide)?;

    let outcome = animate(&mut out, generator, delay);

    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    outcome
}

fn animate<R: Rng>(
    out: &mut impl Write,
    mut generator: Generator<'_, R>,
    delay: Duration,
) -> io::Result<()> {
    draw(out, &generator)?;

    while generator.step() != StepResult::Complete {
        draw(out, &generator)?;
        if quit_requested(delay)? {
            return Ok(());
        }
    }

    draw(out, &generator)?;
    queue!(
        out,
        Print(format!(
            "{}x{} maze, {} passages. Press any key to exit.\r\n",
            generator.grid().width(),
            generator.grid().height(),
            generator.grid().passage_count()
        ))
    )?;
    out.flush()?;

    // Block until any key arrives.
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

fn draw<R: Rng>(out: &mut impl Write, generator: &Generator<'_, R>) -> io::Result<()> {
    let frame = render::frame(generator.grid(), generator.current());

    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in frame.lines() {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}

// Uses the frame delay as the polling window, so pacing and input share one
// wait.
fn quit_requested(delay: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + delay;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !event::poll(remaining)? {
            return Ok(false);
        }

        if let Event::Key(key) = event::read()? {
            if is_quit_key(key) {
                return Ok(true);
            }
        }
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    if key.modifiers == KeyModifiers::CONTROL {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'));
    }

    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_escape_and_control_c_all_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let escape = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let control_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let control_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);

        assert!(is_quit_key(q));
        assert!(is_quit_key(escape));
        assert!(is_quit_key(control_c));
        assert!(is_quit_key(control_d));
    }

    #[test]
    fn ordinary_keys_do_not_quit() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let shift_q = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);

        assert!(!is_quit_key(space));
        assert!(!is_quit_key(plain_c));
        assert!(!is_quit_key(shift_q));
    }
}
