/// A pointer edit, selected by the modifier keys held at click time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Flip the clicked cell.
    Toggle,

    /// Stamp a glider anchored at the clicked cell.
    InsertGlider,

    /// Stamp a pulsar centered on the clicked cell.
    InsertPulsar,
}

/// Commands produced by the input layer and consumed by the event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// Flip between Running and Paused.
    TogglePlayback,

    /// Replace the universe with a freshly randomized one.
    NewRandom,

    /// Replace the universe with an all-dead one.
    NewDead,

    /// Set the number of generations advanced per rendered frame.
    SetSpeed(u32),

    /// Apply one pointer edit at the given cell.
    Edit {
        row: u32,
        col: u32,
        cmd: EditCommand,
    },

    /// Exit the application.
    Exit,
}
