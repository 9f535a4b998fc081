//! A minimal element tree for the settings form.
//!
//! Handlers never touch rendering directly. They read and write element
//! attributes through [`UiTree`], the same way a page script manipulates
//! inputs by id, and the widgets draw whatever the tree holds.

use std::collections::HashMap;

use crate::error::{Result, UiError};

/// Id of the grid-size input.
pub const GRID_SIZE_FIELD: &str = "grid-size-input-field";

/// Id of the mines amount input.
pub const MINES_FIELD: &str = "mines-input-field";

/// Id of the "random grid size" checkbox.
pub const RANDOM_GRID_SIZE_FIELD: &str = "random-grid-size";

/// Attributes of a single form element.
///
/// Numeric attributes are kept as text, as they would be on an HTML input,
/// so a `NaN` maximum can be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Current text of an input.
    pub value: String,
    /// The `min` attribute, if set.
    pub min: Option<String>,
    /// The `max` attribute, if set.
    pub max: Option<String>,
    /// Hint shown while the input is empty.
    pub placeholder: Option<String>,
    /// Whether the element is hidden.
    pub hidden: bool,
    /// Checked state of a checkbox.
    pub checked: bool,
}

impl Element {
    /// Creates an input holding `value`.
    #[must_use]
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Creates an unchecked checkbox.
    #[must_use]
    pub fn checkbox() -> Self {
        Self::default()
    }
}

/// Lookup of form elements by id.
pub trait UiTree {
    /// Returns the element with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ElementNotFound`] if no element has that id.
    fn element(&self, id: &str) -> Result<&Element>;

    /// Returns the element with the given id for modification.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ElementNotFound`] if no element has that id.
    fn element_mut(&mut self, id: &str) -> Result<&mut Element>;
}

/// An in-memory [`UiTree`].
///
/// # Examples
///
/// ```
/// use minesettings_tui::document::{Document, GRID_SIZE_FIELD, UiTree};
///
/// let doc = Document::settings_form("use-default-mines");
/// assert_eq!(doc.element(GRID_SIZE_FIELD).unwrap().value, "");
/// assert!(doc.element("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the settings form: grid size, random grid size, the default
    /// mines checkbox with the given id, and the mines input.
    #[must_use]
    pub fn settings_form(checkbox_id: &str) -> Self {
        Self::new()
            .with_element(GRID_SIZE_FIELD, Element::input(""))
            .with_element(RANDOM_GRID_SIZE_FIELD, Element::checkbox())
            .with_element(checkbox_id, Element::checkbox())
            .with_element(MINES_FIELD, Element::input(""))
    }

    /// Adds an element, builder style.
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    /// Adds or replaces an element.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        self.elements.insert(id.into(), element);
    }

    /// Removes an element, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    /// Returns the element with the given id, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }
}

impl UiTree for Document {
    fn element(&self, id: &str) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| UiError::ElementNotFound { id: id.to_string() })
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| UiError::ElementNotFound { id: id.to_string() })
    }
}
