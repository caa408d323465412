//! Browser DOM adapter using web-sys

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use todoform_ports::outbound::{
    ClickHandler, DocumentPort, ElementPort, ElementRef, ListenerError,
};

const DISPLAY_PROPERTY: &str = "display";

/// Wrapper around a live DOM element.
#[derive(Clone)]
pub struct WebElement {
    element: Element,
}

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.element.dyn_ref::<HtmlElement>()
    }
}

impl ElementPort for WebElement {
    fn id(&self) -> String {
        self.element.id()
    }

    fn inline_display(&self) -> String {
        self.html()
            .and_then(|el| el.style().get_property_value(DISPLAY_PROPERTY).ok())
            .unwrap_or_default()
    }

    fn set_inline_display(&self, value: &str) {
        // Non-HTML elements have no inline style to write, and a rejected
        // write leaves the form as it was: the toggle path stays silent.
        if let Some(el) = self.html() {
            el.style().set_property(DISPLAY_PROPERTY, value).ok();
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn on_click(&self, mut handler: ClickHandler) -> Result<(), ListenerError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok());
            if let Some(target) = target {
                handler(Rc::new(WebElement::new(target)));
            }
        });

        self.element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| ListenerError::click(format!("{e:?}")))?;

        // The listener lives as long as the page.
        closure.forget();
        Ok(())
    }
}

/// Wrapper around the page's `document`.
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if running in a page.
    pub fn current() -> Option<Self> {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            tracing::warn!("No window document available");
        }
        document.map(Self::new)
    }
}

impl DocumentPort for WebDocument {
    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.document
            .get_element_by_id(id)
            .map(|el| Rc::new(WebElement::new(el)) as ElementRef)
    }
}
