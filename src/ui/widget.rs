//! Widget markup component.

use leptos::prelude::*;

use super::icons::{ChatIcon, CloseIcon, SendIcon};
use crate::config::{ElementIds, WidgetConfig};

/// Host-page structure the widget binds to.
///
/// Renders the launcher, the panel (initially hidden) with its header and
/// close control, an empty message list, and the input row. Element ids
/// come from [`WidgetConfig::elements`].
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatWidgetMarkup config=WidgetConfig::default() />
/// }
/// ```
#[component]
pub fn ChatWidgetMarkup(
    /// Widget configuration providing ids and the panel title.
    config: WidgetConfig,
) -> impl IntoView {
    let WidgetConfig {
        title, elements, ..
    } = config;
    let ElementIds {
        launcher,
        panel,
        close,
        input,
        send,
        messages,
    } = elements;
    let aria_title = title.clone();

    view! {
        <div class="chat-widget">
            <button
                type="button"
                id=launcher
                class="chat-launcher"
                aria-label="Open chat"
            >
                <ChatIcon />
            </button>

            <section
                id=panel
                class="chat-panel"
                role="dialog"
                aria-label=aria_title
                hidden=true
            >
                <header class="chat-header">
                    <h2 class="chat-title">{title}</h2>
                    <button
                        type="button"
                        id=close
                        class="chat-close"
                        aria-label="Close chat"
                    >
                        <CloseIcon />
                    </button>
                </header>

                <div id=messages class="chat-messages" aria-live="polite"></div>

                <div class="chat-input-row">
                    <input
                        type="text"
                        id=input
                        class="chat-input"
                        placeholder="Type your question..."
                        autocomplete="off"
                    />
                    <button
                        type="button"
                        id=send
                        class="chat-send"
                        aria-label="Send message"
                    >
                        <SendIcon />
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Render the widget markup to an HTML fragment for embedding in a page.
pub fn render_widget_html(config: &WidgetConfig) -> String {
    let config = config.clone();
    let owner = Owner::new();
    owner.with(|| view! { <ChatWidgetMarkup config=config /> }.to_html())
}
