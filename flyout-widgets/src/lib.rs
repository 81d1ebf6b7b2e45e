//! Flyout Widgets: interaction state for the components around the overlay.
//!
//! These are view-agnostic state holders in the same spirit as a text input
//! or scroll state: the view layer feeds them actions and renders whatever
//! they report. Nothing here draws.

pub mod link_flyout;
pub mod search_input_state;

pub use link_flyout::{AriaPopup, LinkFlyoutAction, LinkFlyoutState, LinkKind, LinkProps};
pub use search_input_state::{SearchInputAction, SearchInputEvent, SearchInputState, SearchVariant};
