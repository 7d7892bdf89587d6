//! Embeddable chat widget.
//!
//! A floating launcher button opens a popup panel; visitor questions are
//! posted as `{"question": ...}` to an answer service and the reply is
//! rendered as a bot bubble.
//!
//! # Architecture
//!
//! - **Controller**: [`ChatWidget`], a single-threaded state machine per request
//! - **Answer service**: [`AnswerService`] trait with an HTTP implementation
//! - **Surface**: [`WidgetSurface`], the page's DOM contract, with an
//!   in-memory implementation and a `web_sys` one on wasm32
//! - **Markup**: Leptos SSR rendering of the DOM contract (native only)
//!
//! # Modules
//!
//! - [`answer`]: answer service trait and HTTP client
//! - [`config`]: layered widget configuration
//! - [`error`]: error types
//! - [`message`]: message and wire types
//! - [`surface`]: rendering surfaces
//! - [`telemetry`]: tracing setup
//! - `ui`: server-side widget markup (native only)
//! - [`widget`]: the controller

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]

pub mod answer;
pub mod config;
pub mod error;
pub mod message;
pub mod surface;
pub mod telemetry;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;
pub mod widget;

pub use answer::{AnswerService, HttpAnswerService};
pub use config::{DEFAULT_FALLBACK_MESSAGE, ElementIds, WidgetConfig};
pub use error::{Result, WidgetError};
pub use message::{ChatReply, ChatRequest, Message, Sender};
pub use surface::{MemorySurface, SurfaceEntry, WidgetSurface};
pub use widget::{ChatWidget, SubmitOutcome, WidgetState};

#[cfg(not(target_arch = "wasm32"))]
pub use ui::{ChatWidgetMarkup, render_widget_html};

#[cfg(target_arch = "wasm32")]
pub use surface::dom::{DomChatWidget, DomSurface, mount, mount_chat_widget};
