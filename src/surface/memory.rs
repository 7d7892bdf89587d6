//! In-memory surface.

use super::WidgetSurface;
use crate::message::Message;

/// One child of the message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEntry {
    /// A rendered message bubble.
    Message(Message),
    /// The typing indicator.
    TypingIndicator,
}

/// Surface that keeps the page state in plain data.
///
/// Starts in the same state as the host markup: launcher shown, panel
/// hidden, empty list and input.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    panel_visible: bool,
    launcher_visible: bool,
    entries: Vec<SurfaceEntry>,
    input: String,
    input_focused: bool,
    /// List length at the last scroll, if any.
    scrolled_at: Option<usize>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            panel_visible: false,
            launcher_visible: true,
            entries: Vec::new(),
            input: String::new(),
            input_focused: false,
            scrolled_at: None,
        }
    }
}

impl MemorySurface {
    /// Create a surface in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the visitor typing into the input.
    pub fn type_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Whether the launcher is shown.
    #[must_use]
    pub fn launcher_visible(&self) -> bool {
        self.launcher_visible
    }

    /// Whether the input currently has focus.
    #[must_use]
    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// All list children in order.
    #[must_use]
    pub fn entries(&self) -> &[SurfaceEntry] {
        &self.entries
    }

    /// Message bubbles in order, skipping the indicator.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            SurfaceEntry::Message(message) => Some(message),
            SurfaceEntry::TypingIndicator => None,
        })
    }

    /// Number of typing indicators in the list.
    #[must_use]
    pub fn typing_indicator_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, SurfaceEntry::TypingIndicator))
            .count()
    }

    /// Whether the list was scrolled after its last change.
    #[must_use]
    pub fn is_scrolled_to_bottom(&self) -> bool {
        self.scrolled_at == Some(self.entries.len())
    }
}

impl WidgetSurface for MemorySurface {
    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = visible;
        if !visible {
            self.input_focused = false;
        }
    }

    fn set_launcher_visible(&mut self, visible: bool) {
        self.launcher_visible = visible;
    }

    fn append_message(&mut self, message: &Message) {
        self.entries.push(SurfaceEntry::Message(message.clone()));
    }

    fn show_typing_indicator(&mut self) {
        self.entries.push(SurfaceEntry::TypingIndicator);
    }

    fn remove_typing_indicator(&mut self) {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|entry| matches!(entry, SurfaceEntry::TypingIndicator))
        {
            self.entries.remove(pos);
        }
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolled_at = Some(self.entries.len());
    }
}
