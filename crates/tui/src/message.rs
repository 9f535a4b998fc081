//! Messages produced by terminal input and consumed by [`crate::App`].

/// A user intent, decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Type a character into the focused input.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused input.
    Backspace,
    /// Flip the focused checkbox.
    Toggle,
    /// Submit the form.
    Submit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Close help, or clear the status line.
    Escape,
}
