//! Answer service abstraction.
//!
//! The [`AnswerService`] trait is the only seam between the widget
//! controller and the network. [`HttpAnswerService`] is the production
//! implementation posting `{"question": ...}` to the configured endpoint;
//! tests substitute scripted services.
//!
//! Futures are not `Send`: the widget lives on the browser's single UI
//! thread, and `reqwest`'s fetch backend is `!Send` on wasm32.

mod http;

pub use http::HttpAnswerService;

use std::rc::Rc;

use crate::error::Result;

/// Produces a reply for a visitor question.
#[async_trait::async_trait(?Send)]
pub trait AnswerService {
    /// Ask one question and wait for its settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the service reports one, or if the request
    /// cannot complete or decode.
    async fn ask(&self, question: &str) -> Result<String>;
}

#[async_trait::async_trait(?Send)]
impl<T: AnswerService + ?Sized> AnswerService for Rc<T> {
    async fn ask(&self, question: &str) -> Result<String> {
        (**self).ask(question).await
    }
}
