//! The widget controller.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, error, info};

use super::state::{SubmitOutcome, WidgetState};
use crate::answer::AnswerService;
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::message::{Message, Sender};
use crate::surface::WidgetSurface;

/// Chat widget controller.
///
/// Cheap to clone; clones share the same surface, service and state, so an
/// event handler can hold its own handle while earlier submissions are
/// still awaiting their answers.
pub struct ChatWidget<S, A> {
    inner: Rc<WidgetInner<S, A>>,
}

struct WidgetInner<S, A> {
    /// Never borrowed across an `.await`.
    surface: RefCell<S>,
    service: A,
    fallback_message: String,
    greeting: Option<String>,
    panel_visible: Cell<bool>,
    /// Requests dispatched but not yet settled.
    pending: Cell<usize>,
}

impl<S, A> Clone for ChatWidget<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, A> fmt::Debug for ChatWidget<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatWidget")
            .field("panel_visible", &self.inner.panel_visible.get())
            .field("pending", &self.inner.pending.get())
            .finish_non_exhaustive()
    }
}

impl<S: WidgetSurface, A: AnswerService> ChatWidget<S, A> {
    /// Create a controller over an already-initialized surface.
    pub fn new(surface: S, service: A, config: &WidgetConfig) -> Self {
        Self {
            inner: Rc::new(WidgetInner {
                surface: RefCell::new(surface),
                service,
                fallback_message: config.fallback_message.clone(),
                greeting: config.greeting.clone(),
                panel_visible: Cell::new(false),
                pending: Cell::new(0),
            }),
        }
    }

    /// Current UI state.
    pub fn state(&self) -> WidgetState {
        WidgetState {
            panel_visible: self.inner.panel_visible.get(),
            typing_indicator_active: self.inner.pending.get() > 0,
        }
    }

    /// Number of requests awaiting settlement.
    pub fn pending(&self) -> usize {
        self.inner.pending.get()
    }

    /// Inspect the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.surface.borrow())
    }

    /// Mutate the surface directly, e.g. to simulate typing.
    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.surface.borrow_mut())
    }

    /// Show the panel, hide the launcher, and focus the input.
    pub fn open_panel(&self) {
        {
            let mut surface = self.inner.surface.borrow_mut();
            surface.set_panel_visible(true);
            surface.set_launcher_visible(false);
            surface.scroll_to_bottom();
            surface.focus_input();
        }
        self.inner.panel_visible.set(true);
        debug!(name: "widget.panel.opened", "Chat panel opened");
    }

    /// Hide the panel and show the launcher.
    pub fn close_panel(&self) {
        {
            let mut surface = self.inner.surface.borrow_mut();
            surface.set_panel_visible(false);
            surface.set_launcher_visible(true);
        }
        self.inner.panel_visible.set(false);
        debug!(name: "widget.panel.closed", "Chat panel closed");
    }

    /// Append a bubble and keep the list scrolled to the bottom.
    pub fn render_message(&self, text: &str, sender: Sender) {
        let message = Message {
            text: text.to_string(),
            sender,
        };
        let mut surface = self.inner.surface.borrow_mut();
        surface.append_message(&message);
        surface.scroll_to_bottom();
    }

    /// Render the configured greeting, if any.
    pub fn greet(&self) {
        if let Some(greeting) = &self.inner.greeting {
            self.render_message(greeting, Sender::Bot);
        }
    }

    /// Submit whatever is currently in the text input.
    pub async fn submit_from_input(&self) -> SubmitOutcome {
        let text = self.inner.surface.borrow().input_value();
        self.submit_user_message(&text).await
    }

    /// Submit one visitor message and render its reply.
    ///
    /// Blank text is ignored. Otherwise exactly one user bubble is rendered
    /// before the request and exactly one bot bubble after it settles.
    /// Concurrent calls are all dispatched.
    pub async fn submit_user_message(&self, text: &str) -> SubmitOutcome {
        let question = text.trim();
        if question.is_empty() {
            debug!(name: "widget.message.ignored", "Ignoring blank message");
            return SubmitOutcome::Ignored;
        }

        self.render_message(question, Sender::User);
        self.inner.surface.borrow_mut().clear_input();
        self.begin_request();

        info!(
            name: "widget.message.submitted",
            chars = question.chars().count(),
            pending = self.inner.pending.get(),
            "Question submitted"
        );

        let result = self.inner.service.ask(question).await;
        self.settle(result)
    }

    fn begin_request(&self) {
        let pending = self.inner.pending.get();
        self.inner.pending.set(pending + 1);
        if pending == 0 {
            let mut surface = self.inner.surface.borrow_mut();
            surface.show_typing_indicator();
            surface.scroll_to_bottom();
        }
    }

    fn settle(&self, result: Result<String>) -> SubmitOutcome {
        let remaining = self.inner.pending.get().saturating_sub(1);
        self.inner.pending.set(remaining);
        {
            let mut surface = self.inner.surface.borrow_mut();
            surface.remove_typing_indicator();
            surface.scroll_to_bottom();
        }

        let outcome = match result {
            Ok(answer) => {
                info!(
                    name: "widget.answer.received",
                    chars = answer.chars().count(),
                    "Answer received"
                );
                self.render_message(&answer, Sender::Bot);
                SubmitOutcome::Answered(answer)
            }
            Err(err) => {
                error!(
                    name: "widget.answer.failed",
                    error = %err,
                    service_reported = err.is_service_reported(),
                    "Answer request failed"
                );
                self.render_message(&self.inner.fallback_message, Sender::Bot);
                SubmitOutcome::Fallback
            }
        };

        // Keep the single indicator below the newest bubble while other
        // requests are still in flight.
        if remaining > 0 {
            let mut surface = self.inner.surface.borrow_mut();
            surface.show_typing_indicator();
            surface.scroll_to_bottom();
        }

        outcome
    }
}
