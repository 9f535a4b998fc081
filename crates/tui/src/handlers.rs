//! Form event handlers.
//!
//! [`SettingsForm`] owns the authoritative [`MinesField`] and projects it
//! onto the element tree after every event. Three events matter:
//!
//! | Event | Element | Effect |
//! |-------|---------|--------|
//! | load | | grid-size `max` from the viewport width, initial mines range |
//! | change | default mines checkbox | hide (and reset) or show the mines field |
//! | input | grid size | recompute the mines range |
//!
//! Input on the mines field only syncs its value into the engine state.

use minesettings_config::Config;
use minesettings_constraints::{
    Breakpoints, FieldOptions, MinesField, SettingsSubmission, compute_max_grid_size,
};

use crate::document::{Document, GRID_SIZE_FIELD, MINES_FIELD, RANDOM_GRID_SIZE_FIELD, UiTree};
use crate::error::Result;

/// Events dispatched to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The form finished loading.
    Load {
        /// Viewport width in pixels at load time.
        viewport_width_px: u32,
    },
    /// A checkbox changed state. Its `checked` flag is already updated.
    Change {
        /// Id of the element that changed.
        element_id: String,
    },
    /// The text of an input changed. Its `value` is already updated.
    Input {
        /// Id of the element that changed.
        element_id: String,
    },
}

impl FormEvent {
    /// Creates a change event for `element_id`.
    #[must_use]
    pub fn change(element_id: impl Into<String>) -> Self {
        Self::Change {
            element_id: element_id.into(),
        }
    }

    /// Creates an input event for `element_id`.
    #[must_use]
    pub fn input(element_id: impl Into<String>) -> Self {
        Self::Input {
            element_id: element_id.into(),
        }
    }
}

/// The settings form bound to an element tree.
///
/// # Examples
///
/// ```
/// use minesettings_config::Config;
/// use minesettings_tui::document::{Document, GRID_SIZE_FIELD, MINES_FIELD, UiTree};
/// use minesettings_tui::handlers::{FormEvent, SettingsForm};
///
/// let config = Config::default();
/// let doc = Document::settings_form(&config.default_mines_checkbox);
/// let mut form = SettingsForm::new(doc, &config);
/// form.handle(&FormEvent::Load { viewport_width_px: 1024 }).unwrap();
///
/// form.document_mut().element_mut(GRID_SIZE_FIELD).unwrap().value = "10".to_string();
/// form.handle(&FormEvent::input(GRID_SIZE_FIELD)).unwrap();
///
/// let mines = form.document().element(MINES_FIELD).unwrap();
/// assert_eq!(mines.max.as_deref(), Some("80"));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsForm<T: UiTree = Document> {
    document: T,
    mines: MinesField,
    options: FieldOptions,
    breakpoints: Breakpoints,
    checkbox_id: String,
    max_grid_size: Option<u32>,
}

impl<T: UiTree> SettingsForm<T> {
    /// Binds the form to `document` using the given configuration.
    #[must_use]
    pub fn new(document: T, config: &Config) -> Self {
        Self {
            document,
            mines: MinesField::default(),
            options: config.field_options(),
            breakpoints: config.breakpoints,
            checkbox_id: config.default_mines_checkbox.clone(),
            max_grid_size: None,
        }
    }

    /// Returns the element tree.
    #[must_use]
    pub fn document(&self) -> &T {
        &self.document
    }

    /// Returns the element tree for modification.
    ///
    /// Dispatch the matching [`FormEvent`] after changing an element.
    pub fn document_mut(&mut self) -> &mut T {
        &mut self.document
    }

    /// Returns the engine state of the mines field.
    #[must_use]
    pub fn mines(&self) -> &MinesField {
        &self.mines
    }

    /// Returns the id of the default mines checkbox.
    #[must_use]
    pub fn checkbox_id(&self) -> &str {
        &self.checkbox_id
    }

    /// Returns the grid-size cap chosen at load, if the form was loaded.
    #[must_use]
    pub fn max_grid_size(&self) -> Option<u32> {
        self.max_grid_size
    }

    /// Dispatches an event to its handler.
    ///
    /// Events for elements the form does not watch are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::ElementNotFound`] if a required element is
    /// missing.
    pub fn handle(&mut self, event: &FormEvent) -> Result<()> {
        tracing::debug!(?event, "handling form event");
        match event {
            FormEvent::Load { viewport_width_px } => self.on_load(*viewport_width_px),
            FormEvent::Change { element_id } if *element_id == self.checkbox_id => {
                self.on_default_mines_changed()
            }
            FormEvent::Input { element_id } if element_id == GRID_SIZE_FIELD => {
                self.on_grid_size_input()
            }
            FormEvent::Input { element_id } if element_id == MINES_FIELD => self.on_mines_input(),
            _ => Ok(()),
        }
    }

    /// Caps the grid size for the viewport and sets the initial mines range.
    ///
    /// The cap is chosen once. Later loads, such as a redraw after a
    /// resize, leave it untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid-size, mines or checkbox element is
    /// missing.
    pub fn on_load(&mut self, viewport_width_px: u32) -> Result<()> {
        self.document.element(&self.checkbox_id)?;
        self.document.element(MINES_FIELD)?;

        if self.max_grid_size.is_some() {
            tracing::debug!("form already loaded, keeping grid-size cap");
            return Ok(());
        }

        let max = compute_max_grid_size(viewport_width_px, &self.breakpoints);
        let grid = self.document.element_mut(GRID_SIZE_FIELD)?;
        grid.max = Some(max.to_string());
        let grid_size = grid.value.clone();
        self.max_grid_size = Some(max);
        tracing::debug!(viewport_width_px, max, "capped grid size");

        self.mines = MinesField::initial(&grid_size, &self.options);
        self.project_mines()
    }

    /// Shows or hides the mines field according to the checkbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkbox, grid-size or mines element is
    /// missing.
    pub fn on_default_mines_changed(&mut self) -> Result<()> {
        let use_default = self.document.element(&self.checkbox_id)?.checked;
        let grid_size = self.grid_size_text()?;
        self.mines
            .toggle_default(use_default, &grid_size, &self.options);
        tracing::debug!(use_default, "toggled mines field");
        self.project_mines()
    }

    /// Recomputes the mines range from the grid-size text.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid-size or mines element is missing.
    pub fn on_grid_size_input(&mut self) -> Result<()> {
        let grid_size = self.grid_size_text()?;
        let range = self.mines.recompute(&grid_size, self.options.validation);
        tracing::debug!(
            grid_size = %grid_size,
            min = range.min,
            max = %range.max,
            "recomputed mines range"
        );
        self.project_mines()
    }

    fn on_mines_input(&mut self) -> Result<()> {
        let value = self.document.element(MINES_FIELD)?.value.clone();
        self.mines.set_value(value);
        Ok(())
    }

    /// Collects the current element values into a submission.
    ///
    /// A missing random grid size checkbox counts as unchecked.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid-size, mines or checkbox element is
    /// missing.
    pub fn submission(&self) -> Result<SettingsSubmission> {
        let random_grid_size = self
            .document
            .element(RANDOM_GRID_SIZE_FIELD)
            .is_ok_and(|e| e.checked);

        Ok(SettingsSubmission {
            grid_size: self.grid_size_text()?,
            mines_amount: self.mines.value().to_string(),
            random_grid_size,
            use_default_mines: self.document.element(&self.checkbox_id)?.checked,
        })
    }

    fn grid_size_text(&self) -> Result<String> {
        Ok(self.document.element(GRID_SIZE_FIELD)?.value.clone())
    }

    /// Writes the engine state of the mines field onto its element.
    fn project_mines(&mut self) -> Result<()> {
        let range = self.mines.range();
        let element = self.document.element_mut(MINES_FIELD)?;
        element.min = Some(range.min.to_string());
        element.max = Some(range.max.to_string());
        element.placeholder = Some(range.placeholder.clone());
        element.value = self.mines.value().to_string();
        element.hidden = self.mines.is_hidden();
        Ok(())
    }
}
