//! Widget state snapshot and submit outcomes.

/// Snapshot of the controller's transient UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Whether the panel is open.
    pub panel_visible: bool,
    /// Whether at least one request is awaiting settlement.
    pub typing_indicator_active: bool,
}

impl WidgetState {
    /// The launcher is shown exactly when the panel is not.
    #[must_use]
    pub fn launcher_visible(self) -> bool {
        !self.panel_visible
    }
}

/// What a submission rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing rendered or sent.
    Ignored,
    /// The service's answer was rendered.
    Answered(String),
    /// The request failed and the fallback text was rendered.
    Fallback,
}

impl SubmitOutcome {
    /// Whether a request was dispatched.
    #[must_use]
    pub fn was_sent(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
