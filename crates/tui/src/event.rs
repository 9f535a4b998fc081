//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::message::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled. Releases and repeats reported by some
/// terminals are dropped so each keystroke fires once.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Tab` or `Down` | Next field |
/// | `Shift+Tab` or `Up` | Previous field |
/// | `Space` | Toggle checkbox |
/// | `Enter` | Submit |
/// | `Backspace` | Delete character |
/// | `?` | Toggle help |
/// | `Esc` | Close help or clear status |
/// | Any other char | Input |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab | KeyCode::Down => Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FocusPrev),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(' ') => Some(Message::Toggle),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        // Plain 'c' is text
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('c'))),
            Some(Message::Input { ch: 'c' })
        );
    }

    #[test]
    fn other_control_chords_ignored() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL
            )),
            None
        );
    }

    #[test]
    fn focus_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::FocusNext)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::FocusNext)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::BackTab,
                KeyModifiers::SHIFT
            )),
            Some(Message::FocusPrev)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::FocusPrev)
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('7'))),
            Some(Message::Input { ch: '7' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace)),
            Some(Message::Backspace)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Toggle)
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Submit)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Left)), None);
    }

    #[test]
    fn event_to_message_ignores_releases() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: event::KeyEventState::NONE,
        });
        assert_eq!(event_to_message(&release), None);

        let press = Event::Key(make_key(KeyCode::Char('1')));
        assert_eq!(event_to_message(&press), Some(Message::Input { ch: '1' }));
    }

    #[test]
    fn event_to_message_ignores_resize_events() {
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
