//! Search Input State
//!
//! Focus tracking and affordance callbacks for a search field. Every action
//! is forwarded to the owner as exactly one [`SearchInputEvent`]; the field
//! itself only remembers whether it is focused, and only when it draws a
//! background that reacts to focus.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchVariant {
    #[default]
    Small,
    Large,
}

/// An interaction on the search field or one of its affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputAction {
    Change(String),
    Focus,
    Blur,
    SelectSearchIcon,
    Clear,
    Cancel,
}

/// What the owner is told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputEvent {
    Changed(String),
    Focused,
    Blurred,
    SearchIconSelected,
    ClearRequested,
    CancelRequested,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInputState {
    pub variant: SearchVariant,
    pub placeholder: String,
    /// Controlled value; the owner writes it back after `Changed`.
    pub value: String,
    pub has_background: bool,
    pub is_input_visible: bool,
    pub is_suggest_opened: bool,
    #[serde(skip)]
    is_focused: bool,
}

impl Default for SearchInputState {
    fn default() -> Self {
        Self {
            variant: SearchVariant::default(),
            placeholder: String::new(),
            value: String::new(),
            has_background: false,
            is_input_visible: true,
            is_suggest_opened: false,
            is_focused: false,
        }
    }
}

impl SearchInputState {
    pub fn new(variant: SearchVariant, placeholder: impl Into<String>) -> Self {
        Self {
            variant,
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    pub fn with_background(mut self) -> Self {
        self.has_background = true;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// The clear affordance is shown for a visible, non-empty field.
    pub fn shows_clear(&self) -> bool {
        self.is_input_visible && !self.value.is_empty()
    }

    /// Every action maps to exactly one outgoing event.
    pub fn apply(&mut self, action: SearchInputAction) -> SearchInputEvent {
        match action {
            SearchInputAction::Change(text) => SearchInputEvent::Changed(text),
            SearchInputAction::Focus => {
                if self.has_background {
                    self.is_focused = true;
                }
                SearchInputEvent::Focused
            }
            SearchInputAction::Blur => {
                if self.has_background {
                    self.is_focused = false;
                }
                SearchInputEvent::Blurred
            }
            SearchInputAction::SelectSearchIcon => SearchInputEvent::SearchIconSelected,
            SearchInputAction::Clear => SearchInputEvent::ClearRequested,
            SearchInputAction::Cancel => SearchInputEvent::CancelRequested,
        }
    }
}
