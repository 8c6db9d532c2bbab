//! DOM rendering surface for the reconciler.
//!
//! Owns the interactive container and its fixed trailing text input, and
//! builds one `div.interactive-input-value` per entry. Everything the host
//! page's event layer needs to route a removal is stamped onto the remove
//! control (`name="delete-value"`, `data-value`).

use pillbox_core::Entry;
use pillbox_reconcile::RenderSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// Render surface over a DOM container element.
pub struct DomSurface {
    document: Document,
    container: Element,
    /// Fixed trailing control; entry nodes are inserted before it.
    text_input: HtmlInputElement,
}

impl DomSurface {
    /// Builds the surface inside `container`, appending the fixed trailing
    /// text input.
    pub fn new(document: Document, container: Element) -> Result<Self, JsValue> {
        let text_input: HtmlInputElement = document.create_element("input")?.unchecked_into();
        text_input.set_name("text-input");
        text_input.set_type("text");
        text_input.set_class_name("interactive-input-new-value");
        text_input.set_placeholder("add more people...");
        container.append_child(&text_input)?;

        Ok(Self {
            document,
            container,
            text_input,
        })
    }

    /// Returns the trailing text input the host wires its events to.
    pub fn text_input(&self) -> &HtmlInputElement {
        &self.text_input
    }

    /// Builds the rendered node for one entry.
    fn build_node(&self, entry: &Entry) -> Result<Element, JsValue> {
        let node = self.document.create_element("div")?;
        node.class_list().add_1("interactive-input-value")?;
        node.set_text_content(Some(entry.value()));
        if !entry.is_valid() {
            node.class_list().add_1("interactive-input-value__invalid")?;
        }

        let delete_btn: HtmlInputElement = self.document.create_element("input")?.unchecked_into();
        delete_btn.set_value("\u{d7}");
        delete_btn.set_type("button");
        delete_btn.set_name("delete-value");
        delete_btn.class_list().add_1("interactive-input-delete-btn")?;
        delete_btn.set_attribute("data-value", entry.value())?;
        node.append_child(&delete_btn)?;

        if entry.is_valid() {
            let data_input: HtmlInputElement =
                self.document.create_element("input")?.unchecked_into();
            data_input.set_value(entry.value());
            data_input.set_type("hidden");
            data_input.set_name("email");
            node.append_child(&data_input)?;
        }

        Ok(node)
    }
}

impl RenderSurface for DomSurface {
    type Node = Element;

    fn insert(&mut self, entry: &Entry) -> Element {
        // Element names and class tokens are fixed valid strings, so the
        // only JS failure mode here is a detached container.
        let node = self.build_node(entry).unwrap_throw();
        self.container
            .insert_before(&node, Some(self.text_input.as_ref()))
            .unwrap_throw();
        node
    }

    fn remove(&mut self, node: &Element) {
        self.container.remove_child(node).unwrap_throw();
    }
}
