//! Server-side markup for the widget.
//!
//! The widget only attaches behavior; the host page provides the elements.
//! This module renders a matching structure with Leptos SSR for hosts that
//! want it.
//!
//! - [`ChatWidgetMarkup`]: the DOM contract as a Leptos component
//! - [`render_widget_html`]: the same, as an HTML string

mod icons;
mod widget;

pub use widget::{ChatWidgetMarkup, render_widget_html};
