//! Main application struct and run loop.
//!
//! [`App`] turns [`Message`]s into element edits and [`FormEvent`]s, the way
//! a browser turns keystrokes into DOM updates and events, then renders the
//! element tree.

use minesettings_config::Config;
use minesettings_constraints::{SubmissionLimits, validate_submission};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    document::{Document, GRID_SIZE_FIELD, MINES_FIELD, RANDOM_GRID_SIZE_FIELD, UiTree},
    error::Result,
    event::{event_to_message, poll_event},
    handlers::{FormEvent, SettingsForm},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_HEIGHT},
    message::Message,
    state::{Field, FormState, Status},
    terminal::AppTerminal,
    widgets::{render_form, render_help_overlay, render_status_line},
};

/// The main application struct.
#[derive(Debug)]
pub struct App {
    form: SettingsForm<Document>,
    state: FormState,
    limits: SubmissionLimits,
    should_quit: bool,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates the application and loads the form for the given viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if the form fails to load.
    ///
    /// # Examples
    ///
    /// ```
    /// use minesettings_config::Config;
    /// use minesettings_tui::App;
    ///
    /// let app = App::new(&Config::default(), 1024).unwrap();
    /// assert_eq!(app.form().max_grid_size(), Some(22));
    /// ```
    pub fn new(config: &Config, viewport_width_px: u32) -> Result<Self> {
        let document = Document::settings_form(&config.default_mines_checkbox);
        let mut form = SettingsForm::new(document, config);
        form.handle(&FormEvent::Load { viewport_width_px })?;

        Ok(Self {
            form,
            state: FormState::new(),
            limits: config.limits,
            should_quit: false,
            header_visible: true,
        })
    }

    /// Returns the bound form.
    #[must_use]
    pub fn form(&self) -> &SettingsForm<Document> {
        &self.form
    }

    /// Returns the front-end state.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns `true` if the header was drawn in the last render.
    #[must_use]
    pub fn header_visible(&self) -> bool {
        self.header_visible
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, any message other than `Quit`
    /// only dismisses it.
    ///
    /// # Errors
    ///
    /// Returns an error if a form element is missing.
    pub fn update(&mut self, msg: Message) -> Result<()> {
        if msg == Message::Quit {
            self.should_quit = true;
            return Ok(());
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return Ok(());
        }

        let mines_hidden = self.form.mines().is_hidden();
        match msg {
            Message::FocusNext => self.state.focus_next(mines_hidden),
            Message::FocusPrev => self.state.focus_prev(mines_hidden),
            Message::Input { ch } => self.edit_focused(|value| value.push(ch))?,
            Message::Backspace => self.edit_focused(|value| {
                value.pop();
            })?,
            Message::Toggle => match self.state.focus {
                Field::Submit => self.submit()?,
                field if field.is_checkbox() => self.toggle_checkbox(field)?,
                _ => {}
            },
            Message::Submit => self.submit()?,
            Message::ToggleHelp => self.state.toggle_help(),
            Message::Escape => self.state.status = None,
            Message::Quit => {}
        }
        Ok(())
    }

    fn element_id(&self, field: Field) -> Option<&str> {
        match field {
            Field::GridSize => Some(GRID_SIZE_FIELD),
            Field::RandomGridSize => Some(RANDOM_GRID_SIZE_FIELD),
            Field::UseDefaultMines => Some(self.form.checkbox_id()),
            Field::Mines => Some(MINES_FIELD),
            Field::Submit => None,
        }
    }

    /// Applies `edit` to the focused input and fires its input event.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) -> Result<()> {
        let field = self.state.focus;
        if !field.is_text() {
            return Ok(());
        }
        let Some(id) = self.element_id(field).map(str::to_string) else {
            return Ok(());
        };

        edit(&mut self.form.document_mut().element_mut(&id)?.value);
        self.form.handle(&FormEvent::Input { element_id: id })
    }

    /// Flips a checkbox and fires its change event.
    fn toggle_checkbox(&mut self, field: Field) -> Result<()> {
        let Some(id) = self.element_id(field).map(str::to_string) else {
            return Ok(());
        };

        let element = self.form.document_mut().element_mut(&id)?;
        element.checked = !element.checked;
        self.form.handle(&FormEvent::Change { element_id: id })?;
        self.state.ensure_focusable(self.form.mines().is_hidden());
        Ok(())
    }

    /// Validates the form and records the outcome in the status line.
    ///
    /// The grid size is also held to the cap chosen at load, as a browser
    /// holds a number input to its `max`.
    fn submit(&mut self) -> Result<()> {
        let submission = self.form.submission()?;
        let mut limits = self.limits;
        if let Some(cap) = self.form.max_grid_size() {
            limits.max_grid_size = limits.max_grid_size.min(cap).max(limits.min_grid_size);
        }

        let status = match validate_submission(&submission, &limits, &mut rand::thread_rng()) {
            Ok(settings) => {
                tracing::info!(
                    grid_size = settings.grid_size,
                    mines_amount = settings.mines_amount,
                    "settings accepted"
                );
                Status::Accepted(settings)
            }
            Err(err) => {
                tracing::info!(error = %err, "settings rejected");
                Status::Rejected(err.to_string())
            }
        };
        self.state.status = Some(status);
        Ok(())
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum size a "terminal too small" message is shown; when
    /// height is tight the header is dropped.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let [header_area, form_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        if show_header {
            render_header(frame, header_area);
        }

        let buf = frame.buffer_mut();
        render_form(&self.form, &self.state, form_area, buf);
        render_status_line(&self.state, status_area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use minesettings_config::Config;
    /// use minesettings_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(&Config::default(), 1024)?;
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg)?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };

    frame.render_widget(paragraph, centered_area);
}

/// Renders the header bar with title and help cue.
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "minesweeper",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Game settings", Style::default().fg(Color::White)),
    ]));
    frame.render_widget(title, title_area);

    let help_cue = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(help_cue, help_area);
}
