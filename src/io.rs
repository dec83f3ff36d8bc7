use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;

use tracing::debug;

use crate::events::AppEvent;
use crate::events::EditCommand;
use crate::geometry::GridGeometry;

/// Where the canvas sits on screen, and how screen cells scale to canvas
/// pixels.
///
/// Terminal cells are not square and the canvas is presented two pixel rows
/// per terminal row, so a click position must be corrected by the stored
/// scale factors before it can be mapped through [`GridGeometry`]. This is
/// the same correction a browser front end applies for the CSS-vs-canvas
/// pixel mismatch of a responsive layout.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Leftmost screen column of the canvas.
    pub x: u16,

    /// Topmost screen row of the canvas.
    pub y: u16,

    /// Canvas pixels per screen column.
    pub scale_x: f64,

    /// Canvas pixels per screen row.
    pub scale_y: f64,
}

impl Viewport {
    /// Convert a screen position to canvas-pixel coordinates.
    ///
    /// Positions outside the canvas produce out-of-range pixels; the
    /// geometry clamps them, so clicks are never rejected.
    pub fn to_canvas(&self, column: u16, row: u16) -> (f64, f64) {
        let x = (column as f64 - self.x as f64) * self.scale_x;
        let y = (row as f64 - self.y as f64) * self.scale_y;

        (x, y)
    }
}

/// Pick the edit for the given modifier state.
///
/// The priority is a fixed total order: meta beats shift beats plain, so at
/// most one command fires per click. Terminal emulators rarely forward the
/// super key, so control is accepted as the platform-meta equivalent.
pub fn edit_for_modifiers(modifiers: KeyModifiers) -> EditCommand {
    let meta = KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::CONTROL;

    if modifiers.intersects(meta) {
        EditCommand::InsertGlider
    } else if modifiers.contains(KeyModifiers::SHIFT) {
        EditCommand::InsertPulsar
    } else {
        EditCommand::Toggle
    }
}

/// Convert a crossterm event into an application event.
///
/// Returns `None` for events the application does not react to.
pub fn convert_event(
    event: CrossTermEvent,
    viewport: &Viewport,
    geometry: &GridGeometry,
) -> Option<AppEvent> {
    match event {
        CrossTermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(AppEvent::Exit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppEvent::Exit)
            }
            KeyCode::Char(' ') => Some(AppEvent::TogglePlayback),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(AppEvent::NewRandom),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(AppEvent::NewDead),
            KeyCode::Char(c @ '1'..='9') => Some(AppEvent::SetSpeed(c as u32 - '0' as u32)),
            _ => None,
        },

        CrossTermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = viewport.to_canvas(mouse.column, mouse.row);
                let (row, col) = geometry.pixel_to_cell(x, y);
                let cmd = edit_for_modifiers(mouse.modifiers);

                debug!(row, col, ?cmd, "pointer edit");

                Some(AppEvent::Edit { row, col, cmd })
            }
            _ => None,
        },

        _ => None,
    }
}
