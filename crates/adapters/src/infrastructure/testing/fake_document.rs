//! In-memory document tree.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use todoform_ports::outbound::{
    ClickHandler, DocumentPort, ElementPort, ElementRef, ListenerError,
};

#[derive(Default)]
struct Node {
    id: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    display: String,
    display_writes: usize,
    children: Vec<FakeElement>,
    parent: Weak<RefCell<Node>>,
    handlers: Vec<ClickHandler>,
    reject_listeners: bool,
}

/// Element of the in-memory document.
///
/// Clones share the same node, like two JS references to one element.
#[derive(Clone, Default)]
pub struct FakeElement {
    node: Rc<RefCell<Node>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.node.borrow_mut().id = id.into();
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.node.borrow_mut().classes.push(class.into());
        self
    }

    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
        self
    }

    /// Initial inline display; does not count as a write.
    pub fn with_display(self, display: impl Into<String>) -> Self {
        self.node.borrow_mut().display = display.into();
        self
    }

    /// Make every later `on_click` registration fail.
    pub fn rejecting_listeners(self) -> Self {
        self.node.borrow_mut().reject_listeners = true;
        self
    }

    pub fn append_child(&self, child: &FakeElement) {
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child.clone());
    }

    /// Detach from the parent, like `Element.remove()`.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .node
            .borrow_mut()
            .children
            .retain(|c| !Rc::ptr_eq(&c.node, &self.node));
        self.node.borrow_mut().parent = Weak::new();
    }

    pub fn parent(&self) -> Option<FakeElement> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| FakeElement { node })
    }

    pub fn display(&self) -> String {
        self.node.borrow().display.clone()
    }

    /// Number of inline display writes since construction
    pub fn display_writes(&self) -> usize {
        self.node.borrow().display_writes
    }

    pub fn listener_count(&self) -> usize {
        self.node.borrow().handlers.len()
    }

    /// Dispatch a click with this element as target, bubbling to the root.
    pub fn click(&self) {
        let target: ElementRef = Rc::new(self.clone());
        let mut current = Some(self.node.clone());
        while let Some(node) = current {
            // Handlers run without the node borrowed so they can touch it.
            let mut handlers = std::mem::take(&mut node.borrow_mut().handlers);
            for handler in handlers.iter_mut() {
                handler(target.clone());
            }
            let mut node_ref = node.borrow_mut();
            handlers.append(&mut node_ref.handlers);
            node_ref.handlers = handlers;
            current = node_ref.parent.upgrade();
        }
    }

    fn find_by_id(&self, id: &str) -> Option<FakeElement> {
        if self.node.borrow().id == id {
            return Some(self.clone());
        }
        self.node
            .borrow()
            .children
            .iter()
            .find_map(|child| child.find_by_id(id))
    }
}

impl ElementPort for FakeElement {
    fn id(&self) -> String {
        self.node.borrow().id.clone()
    }

    fn inline_display(&self) -> String {
        self.display()
    }

    fn set_inline_display(&self, value: &str) {
        let mut node = self.node.borrow_mut();
        node.display = value.to_string();
        node.display_writes += 1;
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let node = self.node.borrow();
        if name == "id" && !node.id.is_empty() {
            return Some(node.id.clone());
        }
        node.attributes.get(name).cloned()
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), ListenerError> {
        let mut node = self.node.borrow_mut();
        if node.reject_listeners {
            return Err(ListenerError::click("listeners rejected"));
        }
        node.handlers.push(handler);
        Ok(())
    }
}

/// In-memory document rooted at a `body` element.
#[derive(Clone)]
pub struct FakeDocument {
    body: FakeElement,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            body: FakeElement::new().with_id("body"),
        }
    }

    pub fn body(&self) -> &FakeElement {
        &self.body
    }

    /// First element with `id` in document order, like `getElementById`.
    pub fn get(&self, id: &str) -> Option<FakeElement> {
        self.body.find_by_id(id)
    }
}

impl DocumentPort for FakeDocument {
    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.get(id).map(|el| Rc::new(el) as ElementRef)
    }
}
