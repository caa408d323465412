//! Mapping from to-do item to its edit form element.

use std::collections::HashMap;

use todoform_domain::TodoId;
use todoform_ports::outbound::ElementRef;

/// Explicit item -> form mapping, filled by the host as it renders rows.
///
/// Rows the host does not register are resolved through the document on
/// each toggle and never stored here.
#[derive(Default)]
pub(crate) struct EditFormRegistry {
    forms: HashMap<TodoId, ElementRef>,
}

impl EditFormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previously registered form for `id`, if any.
    pub fn insert(&mut self, id: TodoId, form: ElementRef) -> Option<ElementRef> {
        self.forms.insert(id, form)
    }

    pub fn get(&self, id: &TodoId) -> Option<ElementRef> {
        self.forms.get(id).cloned()
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<ElementRef> {
        self.forms.remove(id)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }
}
