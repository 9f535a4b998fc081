//! Centralized layout measurements for the TUI.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the form panel, including borders.
pub const FORM_WIDTH: u16 = 72;

/// Height of the form panel, including borders.
///
/// Eight inner rows: two grid-size rows, a spacer, the checkbox, the mines
/// input and its hint, a spacer and the submit button.
pub const FORM_HEIGHT: u16 = 10;

/// Width of the label column inside the form.
pub const LABEL_WIDTH: u16 = 20;

/// Height of the status line in rows.
pub const STATUS_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering.
pub const MIN_HEIGHT: u16 = FORM_HEIGHT + STATUS_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this, the header is hidden.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Labels plus a checkbox or a short input must fit on one row.
pub const MIN_WIDTH: u16 = 40;
