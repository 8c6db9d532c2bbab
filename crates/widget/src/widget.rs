//! The `EmailsInput` widget class exposed to JavaScript.
//!
//! An explicit constructor instantiated per container by the caller; no
//! process-wide registration is involved. The constructor bootstraps initial values
//! from pre-existing `input[name="email"]` fields, builds the interactive
//! markup, wires the model to the DOM reconciler, and installs the event
//! listeners that translate user gestures into model mutations.

use crate::convert::entries_to_js;
use crate::surface::DomSurface;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use pillbox_model::EntryModel;
use pillbox_reconcile::ListReconciler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

/// The embeddable multi-value email input.
///
/// ```javascript
/// const widget = new EmailsInput(document.querySelector('#emails-input'));
/// ```
#[wasm_bindgen]
pub struct EmailsInput {
    model: Rc<RefCell<EntryModel>>,
    /// Event listener closures; kept alive for the widget's lifetime.
    _listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl EmailsInput {
    /// Mounts the widget on `node`.
    ///
    /// Values of pre-existing `input[name="email"]` descendants seed the
    /// collection; those inputs are hidden and disabled. The immediate
    /// subscribe-time delivery renders the seeded values before the
    /// constructor returns.
    #[wasm_bindgen(constructor)]
    pub fn new(node: Element) -> Result<EmailsInput, JsValue> {
        let document = node
            .owner_document()
            .ok_or_else(|| JsValue::from_str("node is not attached to a document"))?;

        // Collect pre-existing values and retire their inputs.
        let seeds = node.query_selector_all("input[name=\"email\"]")?;
        let mut initial: Vec<String> = Vec::new();
        for i in 0..seeds.length() {
            if let Some(input) = seeds
                .get(i)
                .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
            {
                initial.push(input.value());
                input.set_attribute("hidden", "hidden")?;
                input.set_attribute("disabled", "disabled")?;
            }
        }

        // Prepare the interactive markup.
        node.class_list().add_1("interactive-input-host")?;
        let container = document.create_element("div")?;
        container.class_list().add_1("interactive-input-container")?;
        node.append_child(&container)?;

        // Init the data model and wire it to the DOM reconciler.
        let model = Rc::new(RefCell::new(EntryModel::new(
            initial.iter().map(|s| s.as_str()),
        )));
        let surface = DomSurface::new(document, container)?;
        let reconciler = Rc::new(RefCell::new(ListReconciler::new(surface)));
        {
            let reconciler = reconciler.clone();
            model.borrow().subscribe(move |entries| {
                reconciler.borrow_mut().update(entries);
                Ok(())
            });
        }

        let mut listeners = Vec::new();

        // click: delegated removal via the per-entry delete control.
        {
            let model = model.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    if target.name() == "delete-value" {
                        event.prevent_default();
                        if let Some(value) = target.get_attribute("data-value") {
                            model.borrow_mut().delete_entries(&value).ok();
                        }
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // keydown: Enter commits the text input.
        {
            let model = model.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    let is_enter = event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .map(|e| e.key() == "Enter")
                        .unwrap_or(false);
                    if target.name() == "text-input" && is_enter {
                        event.prevent_default();
                        commit_text_input(&model, &target);
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            node.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // input: a trailing comma commits what was typed so far.
        {
            let model = model.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    if target.name() == "text-input" && target.value().trim().ends_with(',') {
                        commit_text_input(&model, &target);
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            node.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        // focusout: leaving the field commits it.
        {
            let model = model.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(target) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                {
                    if target.name() == "text-input" {
                        commit_text_input(&model, &target);
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            node.add_event_listener_with_callback("focusout", closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        Ok(EmailsInput {
            model,
            _listeners: listeners,
        })
    }

    /// Adds the entries found in `raw_input` (comma-separated).
    ///
    /// Resolves with the new collection as `{ value, valid }` objects;
    /// rejects with a message if entry construction fails.
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&self, raw_input: &str) -> js_sys::Promise {
        match self.model.borrow_mut().add_entries(raw_input) {
            Ok(entries) => js_sys::Promise::resolve(&entries_to_js(&entries)),
            Err(err) => js_sys::Promise::reject(&JsValue::from_str(&err.to_string())),
        }
    }

    /// Removes every entry whose value equals `value` exactly.
    ///
    /// Resolves with the new collection; deleting an absent value resolves
    /// with the unchanged collection.
    #[wasm_bindgen(js_name = deleteItem)]
    pub fn delete_item(&self, value: &str) -> js_sys::Promise {
        match self.model.borrow_mut().delete_entries(value) {
            Ok(entries) => js_sys::Promise::resolve(&entries_to_js(&entries)),
            Err(err) => js_sys::Promise::reject(&JsValue::from_str(&err.to_string())),
        }
    }

    /// Returns the number of entries.
    #[wasm_bindgen(js_name = getCount)]
    pub fn get_count(&self) -> usize {
        self.model.borrow().len()
    }

    /// Returns the current collection as `{ value, valid }` objects.
    #[wasm_bindgen(js_name = getItems)]
    pub fn get_items(&self) -> JsValue {
        entries_to_js(&self.model.borrow().entries())
    }

    /// Subscribes a JavaScript callback to collection changes.
    ///
    /// The callback is invoked immediately with the current collection and
    /// again after every mutation. Returns an unsubscribe function.
    pub fn subscribe(&self, callback: js_sys::Function) -> js_sys::Function {
        let handle = self.model.borrow().subscribe(move |entries| {
            callback.call1(&JsValue::NULL, &entries_to_js(entries)).ok();
            Ok(())
        });

        let called = Rc::new(RefCell::new(false));
        let called_c = called.clone();
        let unsubscribe = Closure::wrap(Box::new(move || {
            let mut c = called_c.borrow_mut();
            if !*c {
                *c = true;
                handle.cancel();
            }
        }) as Box<dyn FnMut()>);
        let js_fn: js_sys::Function = unsubscribe
            .as_ref()
            .unchecked_ref::<js_sys::Function>()
            .clone();
        unsubscribe.forget();
        js_fn
    }
}

/// Pushes the text input's content into the model and clears the field.
fn commit_text_input(model: &Rc<RefCell<EntryModel>>, input: &HtmlInputElement) {
    model.borrow_mut().add_entries(&input.value()).ok();
    input.set_value("");
}
