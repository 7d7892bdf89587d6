//! Rendering surfaces.
//!
//! A [`WidgetSurface`] is the widget's view of the host page's DOM
//! contract: the launcher, the panel, the text input and the message list.
//! The controller only ever talks to this trait.
//!
//! - [`MemorySurface`]: records state in plain data; used by tests and
//!   headless hosts
//! - `DomSurface` (wasm32 only): drives real `web_sys` elements

mod memory;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use memory::{MemorySurface, SurfaceEntry};

use crate::message::Message;

/// Whether a `keypress` with this `KeyboardEvent.key` submits the input.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Operations the controller performs on the page.
///
/// All methods are infallible: a surface that has been constructed holds
/// every element it needs.
pub trait WidgetSurface {
    /// Show or hide the panel.
    fn set_panel_visible(&mut self, visible: bool);

    /// Show or hide the launcher button.
    fn set_launcher_visible(&mut self, visible: bool);

    /// Append a message bubble to the end of the list.
    fn append_message(&mut self, message: &Message);

    /// Append the typing indicator to the end of the list.
    fn show_typing_indicator(&mut self);

    /// Remove the typing indicator, if present.
    fn remove_typing_indicator(&mut self);

    /// Current raw value of the text input.
    fn input_value(&self) -> String;

    /// Empty the text input.
    fn clear_input(&mut self);

    /// Move keyboard focus to the text input.
    fn focus_input(&mut self);

    /// Scroll the message list to its bottom.
    fn scroll_to_bottom(&mut self);
}
