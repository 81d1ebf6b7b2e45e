//! Link Flyout State
//!
//! A link whose children beyond the label form a sub-menu. The sub-menu opens
//! on hover (pointer devices only), closes when the pointer leaves, and
//! toggles on click. Links without a sub-menu never change state.

use serde::{Deserialize, Serialize};
use tracing::trace;

const DEFAULT_TARGET: &str = "_self";
const BLANK_TARGET: &str = "_blank";
const BLANK_REL: &str = "noopener noreferrer";

/// Whether the link renders as a navigating anchor or an inert button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Anchor,
    Button,
}

/// Owner-supplied link attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkProps {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl Default for LinkProps {
    fn default() -> Self {
        Self {
            href: None,
            target: default_target(),
            rel: None,
            role: None,
        }
    }
}

impl LinkProps {
    pub fn anchor(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> LinkKind {
        if self.href.is_some() {
            LinkKind::Anchor
        } else {
            LinkKind::Button
        }
    }

    /// Explicit role, or the one implied by [`LinkProps::kind`].
    pub fn role(&self) -> &str {
        match (&self.role, self.kind()) {
            (Some(role), _) => role.as_str(),
            (None, LinkKind::Anchor) => "link",
            (None, LinkKind::Button) => "button",
        }
    }

    /// `rel` attribute for anchors. Buttons have none.
    pub fn rel(&self) -> Option<&str> {
        if self.kind() == LinkKind::Button {
            return None;
        }
        match &self.rel {
            Some(rel) => Some(rel.as_str()),
            None if self.target == BLANK_TARGET => Some(BLANK_REL),
            None => None,
        }
    }
}

/// `aria-haspopup` / `aria-expanded` pair for links with a sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriaPopup {
    pub has_popup: bool,
    pub expanded: bool,
}

/// An interaction on the link's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFlyoutAction {
    PointerEnter,
    PointerLeave,
    Click,
}

/// Open/closed state of a link's sub-menu.
#[derive(Debug, Clone, Default)]
pub struct LinkFlyoutState {
    has_submenu: bool,
    open: bool,
    /// Hover-open is disabled on touch devices; taps toggle instead.
    touch_events: bool,
}

impl LinkFlyoutState {
    pub fn new(has_submenu: bool) -> Self {
        Self {
            has_submenu,
            ..Self::default()
        }
    }

    /// Record whether the device delivers touch events. Call once on mount.
    pub fn detect_touch(&mut self, touch_events: bool) {
        self.touch_events = touch_events;
    }

    pub fn has_submenu(&self) -> bool {
        self.has_submenu
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Children changed: a link that lost its sub-menu is closed.
    pub fn set_has_submenu(&mut self, has_submenu: bool) {
        self.has_submenu = has_submenu;
        if !has_submenu {
            self.open = false;
        }
    }

    pub fn open(&mut self) {
        if self.has_submenu {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        if self.has_submenu {
            self.open = false;
        }
    }

    pub fn toggle(&mut self) {
        if self.has_submenu {
            self.open = !self.open;
        }
    }

    /// Apply an interaction. Returns whether the open state changed.
    pub fn apply(&mut self, action: LinkFlyoutAction) -> bool {
        let was_open = self.open;
        match action {
            LinkFlyoutAction::PointerEnter if !self.touch_events => self.open(),
            LinkFlyoutAction::PointerEnter => {}
            LinkFlyoutAction::PointerLeave => self.close(),
            LinkFlyoutAction::Click => self.toggle(),
        }
        let changed = was_open != self.open;
        if changed {
            trace!(?action, open = self.open, "link flyout changed");
        }
        changed
    }

    pub fn aria(&self) -> Option<AriaPopup> {
        self.has_submenu.then_some(AriaPopup {
            has_popup: true,
            expanded: self.open,
        })
    }

    /// Classes for the link element, in render order.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut classes = vec!["link"];
        if self.has_submenu {
            classes.push("link--has-other");
        }
        if self.open {
            classes.push("link--open");
        }
        classes
    }

    /// Class for the wrapper holding the link and its sub-menu.
    pub fn container_class(&self) -> &'static str {
        if self.open {
            "list-container list-container--open"
        } else {
            "list-container list-container--closed"
        }
    }
}
