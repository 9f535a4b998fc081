//! The settings form panel and status line.

use minesettings_constraints::FieldValidity;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::document::{Document, Element, GRID_SIZE_FIELD, MINES_FIELD, RANDOM_GRID_SIZE_FIELD};
use crate::handlers::SettingsForm;
use crate::layout::{FORM_HEIGHT, FORM_WIDTH, LABEL_WIDTH};
use crate::state::{Field, FormState, Status};
use crate::widgets::centered_rect;

/// Inner width of a text input box, excluding brackets.
const INPUT_WIDTH: usize = 8;

/// Renders the form panel centered in `area`.
///
/// ```text
/// > Grid size           [10_     ]  max 22
///   Random grid size    [ ]
///
///   Use default mines   [ ]
///   Mines               [        ]  Enter number of mines (max: 80)
///
///
///   [ Start game ]
/// ```
pub fn render_form(form: &SettingsForm<Document>, state: &FormState, area: Rect, buf: &mut Buffer) {
    let panel = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(panel, buf);

    let block = Block::default()
        .title(Span::styled(
            " New game ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let doc = form.document();
    let grid = doc.get(GRID_SIZE_FIELD);
    let mines = doc.get(MINES_FIELD);
    let mines_hidden = mines.is_none_or(|m| m.hidden);

    let grid_hint = grid
        .and_then(|g| g.max.as_deref())
        .map(|max| format!("max {max}"))
        .unwrap_or_default();

    let mut lines = vec![
        text_line(Field::GridSize, grid, &grid_hint, state),
        checkbox_line(Field::RandomGridSize, doc.get(RANDOM_GRID_SIZE_FIELD), state),
        Line::from(""),
        checkbox_line(Field::UseDefaultMines, doc.get(form.checkbox_id()), state),
    ];

    if mines_hidden {
        lines.push(Line::from(Span::styled(
            "  Mines               (default amount)",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    } else {
        let placeholder = mines
            .filter(|m| m.value.is_empty())
            .and_then(|m| m.placeholder.clone())
            .unwrap_or_default();
        lines.push(text_line(Field::Mines, mines, &placeholder, state));
        lines.push(validity_line(form));
    }

    lines.push(Line::from(""));
    lines.push(submit_line(state));

    Paragraph::new(lines).block(block).render(panel, buf);
}

/// Renders the outcome of the last submission, or key hints.
pub fn render_status_line(state: &FormState, area: Rect, buf: &mut Buffer) {
    let span = match &state.status {
        Some(Status::Accepted(settings)) => Span::styled(
            format!(
                "Starting a {size}x{size} game with {} mines",
                settings.mines_amount,
                size = settings.grid_size
            ),
            Style::default().fg(Color::Green),
        ),
        Some(Status::Rejected(reason)) => {
            Span::styled(reason.clone(), Style::default().fg(Color::Red))
        }
        None => Span::styled(
            "Tab: next field | Space: toggle | Enter: start | ?: help",
            Style::default().fg(Color::DarkGray),
        ),
    };

    Paragraph::new(Line::from(span))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn label_spans(field: Field, focused: bool) -> [Span<'static>; 2] {
    let prefix = if focused { "> " } else { "  " };
    [
        Span::styled(prefix, field_style(focused)),
        Span::styled(
            format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
            Style::default().fg(Color::Gray),
        ),
    ]
}

fn text_line(
    field: Field,
    element: Option<&Element>,
    hint: &str,
    state: &FormState,
) -> Line<'static> {
    let focused = state.focus == field;
    let value = element.map_or("", |e| e.value.as_str());
    let cursor = if focused { "_" } else { "" };
    let shown: String = format!("{value}{cursor}")
        .chars()
        .rev()
        .take(INPUT_WIDTH)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let [prefix, label] = label_spans(field, focused);
    Line::from(vec![
        prefix,
        label,
        Span::styled(
            format!("[{shown:<INPUT_WIDTH$}]"),
            field_style(focused),
        ),
        Span::styled(format!("  {hint}"), Style::default().fg(Color::DarkGray)),
    ])
}

fn checkbox_line(field: Field, element: Option<&Element>, state: &FormState) -> Line<'static> {
    let focused = state.focus == field;
    let mark = if element.is_some_and(|e| e.checked) {
        "[x]"
    } else {
        "[ ]"
    };
    let [prefix, label] = label_spans(field, focused);
    Line::from(vec![prefix, label, Span::styled(mark, field_style(focused))])
}

fn validity_line(form: &SettingsForm<Document>) -> Line<'static> {
    let range = form.mines().range();
    let message = match form.mines().validity() {
        FieldValidity::Empty | FieldValidity::Valid(_) => return Line::from(""),
        FieldValidity::RangeUnderflow => format!("must be at least {}", range.min),
        FieldValidity::RangeOverflow => format!("must be at most {}", range.max),
        FieldValidity::BadInput => "must be a whole number".to_string(),
    };
    let indent = " ".repeat(2 + LABEL_WIDTH as usize);
    Line::from(Span::styled(
        format!("{indent}{message}"),
        Style::default().fg(Color::Red),
    ))
}

fn submit_line(state: &FormState) -> Line<'static> {
    let focused = state.focus == Field::Submit;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {} ]", Field::Submit.label()), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::UiTree;
    use crate::handlers::FormEvent;
    use crate::test_utils::buffer_to_string;
    use minesettings_config::Config;
    use minesettings_constraints::GameSettings;

    fn loaded_form() -> SettingsForm {
        let config = Config::default();
        let mut form =
            SettingsForm::new(Document::settings_form(&config.default_mines_checkbox), &config);
        form.handle(&FormEvent::Load {
            viewport_width_px: 1024,
        })
        .unwrap();
        form
    }

    fn render(form: &SettingsForm, state: &FormState) -> String {
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        render_form(form, state, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_all_fields() {
        let content = render(&loaded_form(), &FormState::new());
        assert!(content.contains("New game"));
        assert!(content.contains("> Grid size"));
        assert!(content.contains("max 22"));
        assert!(content.contains("Random grid size"));
        assert!(content.contains("Use default mines"));
        assert!(content.contains("Enter number of mines"));
        assert!(content.contains("[ Start game ]"));
    }

    #[test]
    fn renders_derived_placeholder() {
        let mut form = loaded_form();
        form.document_mut().element_mut(GRID_SIZE_FIELD).unwrap().value = "10".to_string();
        form.handle(&FormEvent::input(GRID_SIZE_FIELD)).unwrap();

        let content = render(&form, &FormState::new());
        assert!(content.contains("[10_"));
        assert!(content.contains("Enter number of mines (max: 80)"));
    }

    #[test]
    fn hidden_mines_show_default_note() {
        let mut form = loaded_form();
        let checkbox = form.checkbox_id().to_string();
        form.document_mut().element_mut(&checkbox).unwrap().checked = true;
        form.handle(&FormEvent::change(checkbox)).unwrap();

        let content = render(&form, &FormState::new());
        assert!(content.contains("[x]"));
        assert!(content.contains("(default amount)"));
        assert!(!content.contains("Enter number of mines"));
    }

    #[test]
    fn out_of_range_mines_show_hint() {
        let mut form = loaded_form();
        form.document_mut().element_mut(GRID_SIZE_FIELD).unwrap().value = "5".to_string();
        form.handle(&FormEvent::input(GRID_SIZE_FIELD)).unwrap();
        form.document_mut().element_mut(MINES_FIELD).unwrap().value = "99".to_string();
        form.handle(&FormEvent::input(MINES_FIELD)).unwrap();

        let content = render(&form, &FormState::new());
        assert!(content.contains("must be at most 20"));
    }

    #[test]
    fn long_values_keep_the_tail_visible() {
        let mut form = loaded_form();
        form.document_mut().element_mut(GRID_SIZE_FIELD).unwrap().value =
            "1234567890".to_string();
        let content = render(&form, &FormState::new());
        assert!(content.contains("[4567890_]"));
    }

    #[test]
    fn handles_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        render_form(&loaded_form(), &FormState::new(), area, &mut buf);
    }

    #[test]
    fn status_line_variants() {
        let area = Rect::new(0, 0, 70, 1);

        let mut buf = Buffer::empty(area);
        render_status_line(&FormState::new(), area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Enter: start"));

        let state = FormState {
            status: Some(Status::Accepted(GameSettings {
                grid_size: 10,
                mines_amount: 12,
            })),
            ..Default::default()
        };
        let mut buf = Buffer::empty(area);
        render_status_line(&state, area, &mut buf);
        assert!(buffer_to_string(&buf).contains("Starting a 10x10 game with 12 mines"));

        let state = FormState {
            status: Some(Status::Rejected("invalid grid size: 'x'".to_string())),
            ..Default::default()
        };
        let mut buf = Buffer::empty(area);
        render_status_line(&state, area, &mut buf);
        assert!(buffer_to_string(&buf).contains("invalid grid size"));
    }
}
