//! Form visibility controller for the to-do page.
//!
//! Two behaviors are bound when the controller is attached:
//! - a single delegated click listener on the root element that toggles an
//!   item's edit form whenever an edit trigger is clicked, including triggers
//!   rendered after attach;
//! - a click listener on the create button that reveals the create form.
//!
//! Both listeners stay bound for the lifetime of the page, whether or not
//! the host keeps the returned handle. Only inline `style.display` is read
//! or written.

use std::cell::RefCell;
use std::rc::Rc;

use todoform_domain::{TodoId, Visibility};
use todoform_ports::outbound::{DocumentPort, ElementPort, ElementRef};
use todoform_ports::{ControllerConfig, MissingElementPolicy};

use super::{AttachError, EditFormRegistry};

pub struct FormVisibilityController {
    document: Rc<dyn DocumentPort>,
    config: ControllerConfig,
    forms: RefCell<EditFormRegistry>,
}

impl FormVisibilityController {
    /// Attach the controller to `root` and bind its listeners.
    ///
    /// The create button and create form are looked up in the document; when
    /// either is missing the configured [`MissingElementPolicy`] decides
    /// between skipping the reveal binding and failing before anything is
    /// bound.
    pub fn attach(
        document: Rc<dyn DocumentPort>,
        root: &ElementRef,
        config: ControllerConfig,
    ) -> Result<Rc<Self>, AttachError> {
        config.validate()?;

        let create_button = document.element_by_id(&config.create_button_id);
        let create_form = document.element_by_id(&config.create_form_id);

        let reveal = match (create_button, create_form) {
            (Some(button), Some(form)) => Some((button, form)),
            (button, _) => {
                let missing = if button.is_none() {
                    &config.create_button_id
                } else {
                    &config.create_form_id
                };
                match config.missing_create_elements {
                    MissingElementPolicy::Fail => {
                        return Err(AttachError::missing_element(missing.as_str()));
                    }
                    MissingElementPolicy::Ignore => {
                        tracing::debug!(
                            element_id = %missing,
                            "Create form element not found, reveal binding skipped"
                        );
                        None
                    }
                }
            }
        };

        let controller = Rc::new(Self {
            document,
            config,
            forms: RefCell::new(EditFormRegistry::new()),
        });

        // The listener owns the controller: the page may drop the handle.
        let delegate = Rc::clone(&controller);
        root.on_click(Box::new(move |target: ElementRef| {
            delegate.handle_click(&*target);
        }))?;

        if let Some((button, form)) = reveal {
            button.on_click(Box::new(move |_: ElementRef| reveal_form(&*form)))?;
        }

        tracing::info!(root_id = %root.id(), "Form visibility controller attached");

        Ok(controller)
    }

    /// Delegated click entry point.
    ///
    /// Only the exact event target is inspected; clicks on anything without
    /// the edit trigger class, or without an item id, do nothing.
    pub fn handle_click(&self, target: &dyn ElementPort) {
        if !target.has_class(&self.config.edit_trigger_class) {
            return;
        }
        if let Some(item_id) = target.attribute(&self.config.todo_id_attribute) {
            self.toggle_edit_form(&item_id);
        }
    }

    /// Flip the edit form of `item_id` between hidden and visible.
    ///
    /// An unknown or empty id is a silent no-op.
    pub fn toggle_edit_form(&self, item_id: &str) {
        let Ok(id) = TodoId::new(item_id) else {
            return;
        };
        let Some(form) = self.resolve_form(&id) else {
            return;
        };
        let next = Visibility::from_inline_display(&form.inline_display()).toggled();
        form.set_inline_display(next.as_display());
    }

    /// Current visibility of the edit form of `id`, if it has one.
    pub fn edit_form_visibility(&self, id: &TodoId) -> Option<Visibility> {
        self.resolve_form(id)
            .map(|form| Visibility::from_inline_display(&form.inline_display()))
    }

    /// Map a row rendered by the host to its edit form.
    ///
    /// Registered forms take precedence over the conventional id until
    /// forgotten.
    pub fn register_edit_form(&self, id: TodoId, form: ElementRef) {
        self.forms.borrow_mut().insert(id, form);
    }

    /// Drop the mapping of a removed row.
    pub fn forget_edit_form(&self, id: &TodoId) -> Option<ElementRef> {
        self.forms.borrow_mut().remove(id)
    }

    pub fn registered_forms(&self) -> usize {
        self.forms.borrow().len()
    }

    /// Registered form first, otherwise the conventional id through the
    /// document. The lookup is repeated on every call so re-rendered rows
    /// resolve to their current form.
    fn resolve_form(&self, id: &TodoId) -> Option<ElementRef> {
        if let Some(form) = self.forms.borrow().get(id) {
            return Some(form);
        }
        self.document
            .element_by_id(&id.form_element_id(&self.config.edit_form_id_prefix))
    }
}

/// One-way reveal: repeated clicks keep the form shown.
fn reveal_form(form: &dyn ElementPort) {
    form.set_inline_display(Visibility::Visible.as_display());
}
