//! Browser surface and event wiring (wasm32 only).

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use super::{WidgetSurface, is_submit_key};
use crate::answer::HttpAnswerService;
use crate::config::{ElementIds, WidgetConfig};
use crate::error::{Result, WidgetError};
use crate::message::Message;
use crate::widget::ChatWidget;

/// Widget controller bound to the live page.
pub type DomChatWidget = ChatWidget<DomSurface, HttpAnswerService>;

/// Surface backed by the host page's elements.
///
/// Visibility is toggled with the `hidden` attribute; bubble text is set
/// through `textContent` and never parsed as HTML.
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    launcher: HtmlElement,
    panel: HtmlElement,
    input: HtmlInputElement,
    messages: Element,
    indicator: Option<Element>,
}

fn js_err(err: JsValue) -> WidgetError {
    WidgetError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn lookup(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
}

fn lookup_as<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    lookup(document, id)?
        .dyn_into::<T>()
        .map_err(|el| WidgetError::Dom(format!("#{id} has unexpected type <{}>", el.tag_name())))
}

fn log_dom_failure(op: &'static str, result: std::result::Result<(), JsValue>) {
    if let Err(err) = result {
        warn!(name: "widget.dom.failed", op, error = ?err, "DOM operation failed");
    }
}

impl DomSurface {
    /// Resolve every element of the contract.
    pub fn bind(document: Document, ids: &ElementIds) -> Result<Self> {
        Ok(Self {
            launcher: lookup_as(&document, &ids.launcher)?,
            panel: lookup_as(&document, &ids.panel)?,
            input: lookup_as(&document, &ids.input)?,
            messages: lookup(&document, &ids.messages)?,
            indicator: None,
            document,
        })
    }

    fn bubble(&self, class: &str) -> std::result::Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.set_class_name(class);
        Ok(element)
    }

    fn build_indicator(&self) -> std::result::Result<Element, JsValue> {
        let indicator = self.bubble("message bot-message typing-indicator")?;
        for _ in 0..3 {
            let dot = self.document.create_element("span")?;
            dot.set_class_name("dot");
            indicator.append_child(&dot)?;
        }
        self.messages.append_child(&indicator)?;
        Ok(indicator)
    }
}

impl WidgetSurface for DomSurface {
    fn set_panel_visible(&mut self, visible: bool) {
        self.panel.set_hidden(!visible);
    }

    fn set_launcher_visible(&mut self, visible: bool) {
        self.launcher.set_hidden(!visible);
    }

    fn append_message(&mut self, message: &Message) {
        let result = self
            .bubble(&format!("message {}", message.sender.css_class()))
            .and_then(|bubble| {
                bubble.set_text_content(Some(&message.text));
                self.messages.append_child(&bubble).map(|_| ())
            });
        log_dom_failure("append_message", result);
    }

    fn show_typing_indicator(&mut self) {
        if self.indicator.is_some() {
            return;
        }
        match self.build_indicator() {
            Ok(indicator) => self.indicator = Some(indicator),
            Err(err) => log_dom_failure("show_typing_indicator", Err(err)),
        }
    }

    fn remove_typing_indicator(&mut self) {
        if let Some(indicator) = self.indicator.take() {
            indicator.remove();
        }
    }

    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn focus_input(&mut self) {
        log_dom_failure("focus_input", self.input.focus());
    }

    fn scroll_to_bottom(&mut self) {
        self.messages.set_scroll_top(self.messages.scroll_height());
    }
}

/// Attach a listener that lives as long as the page.
fn listen(
    document: &Document,
    id: &str,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<()> {
    let target = lookup(document, id)?;
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn spawn_submit(widget: &DomChatWidget) {
    let widget = widget.clone();
    wasm_bindgen_futures::spawn_local(async move {
        widget.submit_from_input().await;
    });
}

/// Bind the widget to the current page.
///
/// Every configured element must already exist. The greeting, if any, is
/// rendered once.
pub fn mount(config: &WidgetConfig) -> Result<DomChatWidget> {
    let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WidgetError::Dom("no document".into()))?;
    let base = window.location().href().map_err(js_err)?;

    let service = HttpAnswerService::from_config(config, &base)?;
    let surface = DomSurface::bind(document.clone(), &config.elements)?;
    let widget = ChatWidget::new(surface, service, config);
    let ids = &config.elements;

    let w = widget.clone();
    listen(&document, &ids.launcher, "click", move |_| w.open_panel())?;

    let w = widget.clone();
    listen(&document, &ids.close, "click", move |_| w.close_panel())?;

    let w = widget.clone();
    listen(&document, &ids.send, "click", move |_| spawn_submit(&w))?;

    let w = widget.clone();
    listen(&document, &ids.input, "keypress", move |event| {
        let is_enter = event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .is_some_and(|key| is_submit_key(&key.key()));
        if is_enter {
            event.prevent_default();
            spawn_submit(&w);
        }
    })?;

    widget.greet();

    info!(name: "widget.mounted", endpoint = %config.endpoint, "Chat widget mounted");
    Ok(widget)
}

/// JavaScript entry point.
///
/// `config_json` is an optional, possibly partial, [`WidgetConfig`] object.
#[wasm_bindgen]
pub fn mount_chat_widget(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::telemetry::init_tracing();

    let config = match config_json.as_deref() {
        Some(json) => WidgetConfig::from_json(json),
        None => Ok(WidgetConfig::default()),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;

    mount(&config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}
