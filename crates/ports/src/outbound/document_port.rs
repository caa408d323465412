//! Document and element access.
//!
//! Everything runs on the single browser UI thread, so handles are `Rc`
//! and the traits carry no `Send`/`Sync` bounds.

use std::rc::Rc;

use thiserror::Error;

/// Shared handle to an element of the hosting document.
pub type ElementRef = Rc<dyn ElementPort>;

/// Click callback. Receives the element the click originated on.
pub type ClickHandler = Box<dyn FnMut(ElementRef)>;

/// The browser refused to register a listener.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to register {event} listener: {reason}")]
pub struct ListenerError {
    pub event: &'static str,
    pub reason: String,
}

impl ListenerError {
    pub fn click(reason: impl Into<String>) -> Self {
        Self {
            event: "click",
            reason: reason.into(),
        }
    }
}

/// A single element of the hosting document.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ElementPort {
    /// The element's `id` attribute, empty when unset
    fn id(&self) -> String;

    /// Current inline `style.display`, empty when unset
    fn inline_display(&self) -> String;

    /// Overwrite inline `style.display`
    fn set_inline_display(&self, value: &str);

    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Register a click listener for the lifetime of the page.
    ///
    /// The handler is called with the event target, which may be this
    /// element or any of its descendants.
    fn on_click(&self, handler: ClickHandler) -> Result<(), ListenerError>;
}

/// Document-wide lookups.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DocumentPort {
    fn element_by_id(&self, id: &str) -> Option<ElementRef>;
}
