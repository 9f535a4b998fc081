//! Front-end state: focus, help overlay and the status line.
//!
//! Field values live in the element tree; this module only tracks what the
//! terminal needs on top of it.

use minesettings_constraints::GameSettings;

/// The form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The grid-size input.
    #[default]
    GridSize,
    /// The "random grid size" checkbox.
    RandomGridSize,
    /// The "use default mines" checkbox.
    UseDefaultMines,
    /// The mines input. Skipped while hidden.
    Mines,
    /// The submit button.
    Submit,
}

impl Field {
    /// All fields in tab order.
    pub const ALL: [Self; 5] = [
        Self::GridSize,
        Self::RandomGridSize,
        Self::UseDefaultMines,
        Self::Mines,
        Self::Submit,
    ];

    /// Returns the next focusable field, wrapping around.
    #[must_use]
    pub fn next(self, mines_hidden: bool) -> Self {
        self.step(1, mines_hidden)
    }

    /// Returns the previous focusable field, wrapping around.
    #[must_use]
    pub fn prev(self, mines_hidden: bool) -> Self {
        self.step(Self::ALL.len() - 1, mines_hidden)
    }

    fn step(self, by: usize, mines_hidden: bool) -> Self {
        let len = Self::ALL.len();
        let mut index = self.index();
        loop {
            index = (index + by) % len;
            let field = Self::ALL[index];
            if !(mines_hidden && field == Self::Mines) {
                return field;
            }
        }
    }

    fn index(self) -> usize {
        match self {
            Self::GridSize => 0,
            Self::RandomGridSize => 1,
            Self::UseDefaultMines => 2,
            Self::Mines => 3,
            Self::Submit => 4,
        }
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GridSize => "Grid size",
            Self::RandomGridSize => "Random grid size",
            Self::UseDefaultMines => "Use default mines",
            Self::Mines => "Mines",
            Self::Submit => "Start game",
        }
    }

    /// Returns `true` for fields that accept typed text.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::GridSize | Self::Mines)
    }

    /// Returns `true` for checkboxes.
    #[must_use]
    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::RandomGridSize | Self::UseDefaultMines)
    }
}

/// Outcome of the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The form was accepted.
    Accepted(GameSettings),
    /// The form was rejected.
    Rejected(String),
}

/// State of the terminal front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// The focused field.
    pub focus: Field,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Outcome of the last submission, if any.
    pub status: Option<Status>,
}

impl FormState {
    /// Creates the initial state, focused on the grid size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves focus forward.
    pub fn focus_next(&mut self, mines_hidden: bool) {
        self.focus = self.focus.next(mines_hidden);
    }

    /// Moves focus backward.
    pub fn focus_prev(&mut self, mines_hidden: bool) {
        self.focus = self.focus.prev(mines_hidden);
    }

    /// Moves focus off the mines field once it gets hidden.
    pub fn ensure_focusable(&mut self, mines_hidden: bool) {
        if mines_hidden && self.focus == Field::Mines {
            self.focus = Field::UseDefaultMines;
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }
}
