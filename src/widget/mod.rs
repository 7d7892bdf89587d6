//! Chat widget controller.
//!
//! [`ChatWidget`] mediates between the visitor, a
//! [`WidgetSurface`](crate::surface::WidgetSurface) and an
//! [`AnswerService`](crate::answer::AnswerService). Each submission walks `idle -> awaiting -> idle`:
//!
//! 1. Render the user bubble and clear the input
//! 2. Show the typing indicator
//! 3. Ask the service and wait for settlement
//! 4. Remove the indicator and render exactly one bot bubble
//!
//! Failures never escape: they are logged and replaced by the fallback text.
//!
//! # Example
//!
//! ```rust
//! use chat_widget::{ChatWidget, MemorySurface, WidgetConfig};
//! # use chat_widget::{AnswerService, Result};
//! # struct Echo;
//! # #[async_trait::async_trait(?Send)]
//! # impl AnswerService for Echo {
//! #     async fn ask(&self, question: &str) -> Result<String> { Ok(question.to_string()) }
//! # }
//!
//! let widget = ChatWidget::new(MemorySurface::new(), Echo, &WidgetConfig::default());
//! widget.open_panel();
//! assert!(widget.state().panel_visible);
//! ```

mod controller;
mod state;

pub use controller::ChatWidget;
pub use state::{SubmitOutcome, WidgetState};
