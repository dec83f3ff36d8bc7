use std::io;
use std::io::Stdout;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::queue;
use crossterm::style::Color;
use crossterm::style::Print;
use crossterm::style::ResetColor;
use crossterm::style::SetBackgroundColor;
use crossterm::style::SetForegroundColor;
use crossterm::terminal;
use crossterm::terminal::BeginSynchronizedUpdate;
use crossterm::terminal::EndSynchronizedUpdate;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;

use crate::canvas::Canvas;
use crate::canvas::Rgb;
use crate::fps::FrameTimer;
use crate::io::Viewport;
use crate::playback::Playback;

/// The upper half block. One terminal cell shows two vertically stacked
/// canvas pixels: the foreground colors the top one, the background the
/// bottom one.
const HALF_BLOCK: char = '▀';

/// Screen rows reserved above the canvas for the status line, the key help
/// line, and the five-line FPS block.
pub const HUD_ROWS: u16 = 7;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb { r, g, b }
    }
}

/// Puts the terminal into raw mode with mouse capture on construction and
/// restores it on drop, so a panic or early return cannot leave the shell
/// unusable.
pub struct TermGuard {
    pub out: Stdout,
}

impl TermGuard {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;

        Ok(Self { out })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Present the canvas at its viewport position, two pixel rows per screen
/// row.
///
/// The whole surface is written every call; color changes are batched by
/// only re-issuing escape codes when the pixel pair differs from the
/// previous one.
pub fn present(out: &mut Stdout, canvas: &Canvas, viewport: &Viewport) -> io::Result<()> {
    let rows = canvas.height().div_ceil(2);
    let mut current: Option<(Rgb, Rgb)> = None;

    queue!(out, BeginSynchronizedUpdate)?;

    for row in 0..rows {
        queue!(out, cursor::MoveTo(viewport.x, viewport.y + row as u16))?;

        for x in 0..canvas.width() {
            let top = canvas.pixel(x, 2 * row);
            let bottom = if 2 * row + 1 < canvas.height() {
                canvas.pixel(x, 2 * row + 1)
            } else {
                top
            };

            if current != Some((top, bottom)) {
                queue!(
                    out,
                    SetForegroundColor(top.into()),
                    SetBackgroundColor(bottom.into())
                )?;
                current = Some((top, bottom));
            }

            queue!(out, Print(HALF_BLOCK))?;
        }
    }

    queue!(out, ResetColor, EndSynchronizedUpdate)?;
    out.flush()
}

/// Redraw the HUD: play state, generation counter, speed, key help, and the
/// FrameTimer summary block.
pub fn draw_hud(out: &mut Stdout, playback: &Playback, timer: &FrameTimer) -> io::Result<()> {
    let state = if playback.is_running() {
        "running"
    } else {
        "paused "
    };

    let status = format!(
        "lifeterm  [{}]  generation {}  speed {} step/frame",
        state,
        playback.generation(),
        playback.speed(),
    );
    let help = "space play/pause  r random  d clear  1-9 speed  \
                click toggle  ctrl+click glider  shift+click pulsar  q quit";

    queue!(out, ResetColor)?;
    print_line(out, 0, &status)?;
    print_line(out, 1, help)?;

    for (i, line) in timer.summary().lines().enumerate() {
        print_line(out, 2 + i as u16, line)?;
    }

    out.flush()
}

/// Print one HUD line, cleared to the end of the row.
fn print_line(out: &mut Stdout, row: u16, text: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, row),
        terminal::Clear(terminal::ClearType::UntilNewLine),
        Print(text)
    )
}
