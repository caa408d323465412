//! Scenario tests against the in-memory document.

mod edit_form_tests;

use std::rc::Rc;

use todoform_adapters::infrastructure::testing::{FakeDocument, FakeElement};
use todoform_ports::ControllerConfig;

use super::FormVisibilityController;

/// A page with a `todo-list` root holding the given rows.
///
/// Each row is an edit button plus its `update-form-{id}` form.
pub(crate) struct TodoPage {
    pub doc: FakeDocument,
    pub root: FakeElement,
}

impl TodoPage {
    pub fn new() -> Self {
        let doc = FakeDocument::new();
        let root = FakeElement::new().with_id("todo-list");
        doc.body().append_child(&root);
        Self { doc, root }
    }

    pub fn with_create_section(self) -> Self {
        let button = FakeElement::new().with_id("create-todo-btn");
        let form = FakeElement::new()
            .with_id("create-todo-form")
            .with_display("none");
        self.doc.body().append_child(&button);
        self.doc.body().append_child(&form);
        self
    }

    /// Append a row; returns (edit button, edit form).
    pub fn add_row(&self, id: &str, display: &str) -> (FakeElement, FakeElement) {
        let row = FakeElement::new();
        let button = FakeElement::new()
            .with_class("btn")
            .with_class("edit-button")
            .with_attribute("data-todo-id", id);
        let form = FakeElement::new()
            .with_id(format!("update-form-{id}"))
            .with_display(display);
        row.append_child(&button);
        row.append_child(&form);
        self.root.append_child(&row);
        (button, form)
    }

    pub fn attach(&self) -> Rc<FormVisibilityController> {
        self.attach_with(ControllerConfig::default())
    }

    pub fn attach_with(&self, config: ControllerConfig) -> Rc<FormVisibilityController> {
        let root: todoform_ports::outbound::ElementRef = Rc::new(self.root.clone());
        FormVisibilityController::attach(Rc::new(self.doc.clone()), &root, config)
            .expect("attach succeeds")
    }
}
