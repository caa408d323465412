//! JS entry points.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use todoform_adapters::infrastructure::{WebDocument, WebElement};
use todoform_app::FormVisibilityController;
use todoform_domain::TodoId;
use todoform_ports::outbound::ElementRef;
use todoform_ports::ControllerConfig;

#[wasm_bindgen(start)]
pub fn start() {
    crate::init_logging();
}

/// Handle returned to the page by `attachHandlers`.
#[wasm_bindgen]
pub struct AttachedHandlers {
    controller: Rc<FormVisibilityController>,
}

#[wasm_bindgen]
impl AttachedHandlers {
    #[wasm_bindgen(js_name = toggleEditForm)]
    pub fn toggle_edit_form(&self, item_id: &str) {
        self.controller.toggle_edit_form(item_id);
    }

    #[wasm_bindgen(js_name = registerEditForm)]
    pub fn register_edit_form(&self, item_id: &str, form: Element) -> Result<(), JsError> {
        let id = TodoId::new(item_id)?;
        self.controller
            .register_edit_form(id, Rc::new(WebElement::new(form)));
        Ok(())
    }

    /// Returns whether a form was registered for the item.
    #[wasm_bindgen(js_name = forgetEditForm)]
    pub fn forget_edit_form(&self, item_id: &str) -> bool {
        TodoId::new(item_id)
            .ok()
            .and_then(|id| self.controller.forget_edit_form(&id))
            .is_some()
    }

    #[wasm_bindgen(getter, js_name = registeredForms)]
    pub fn registered_forms(&self) -> usize {
        self.controller.registered_forms()
    }
}

/// Bind the to-do page behavior under `root`.
///
/// `config` is an optional object overriding the markup contract; `undefined`
/// or `null` selects the defaults.
#[wasm_bindgen(js_name = attachHandlers)]
pub fn attach_handlers(root: Element, config: JsValue) -> Result<AttachedHandlers, JsError> {
    crate::init_logging();

    let config = if config.is_undefined() || config.is_null() {
        None
    } else {
        let config: ControllerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid controller configuration: {e}")))?;
        Some(config)
    };

    let document = WebDocument::current()
        .ok_or_else(|| JsError::new("attachHandlers requires a browser document"))?;
    let root: ElementRef = Rc::new(WebElement::new(root));

    let controller = crate::attach_handlers(Rc::new(document), &root, config)?;
    Ok(AttachedHandlers { controller })
}
