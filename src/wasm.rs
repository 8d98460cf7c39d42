//! WASM bindings for section-nav
//!
//! Captures the current document's nav items and sections, registers one click handler per nav
//! item and exposes the activator to JavaScript.
//!
//! ## Usage
//!
//! ```javascript,ignore
//! import init, { SectionNav, enable_logging } from './section_nav.js';
//!
//! async function main() {
//!     await init();
//!     enable_logging(); // optional, routes tracing output to the console
//!
//!     // Defaults: .nav-item / .section / "active" / data-section
//!     const nav = SectionNav.install();
//!
//!     // Or override any subset of the configuration
//!     // const nav = SectionNav.install({ active_class: "is-current" });
//!
//!     nav.activate("about");
//!     console.log(nav.active_section()); // "about"
//! }
//! ```
//!
//! `install` runs once per page; a second call is rejected. The click handlers live as long as the
//! page, independent of the returned handle, so the handle may be dropped or `free()`d.

use std::rc::Rc;

use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event};

use crate::{
    activator::{ClickBindings, InstallGuard, SectionActivator},
    config::NavConfig,
    error::NavError,
    page::{PageDocument, PageElement},
};

/// A live DOM element.
#[derive(Debug, Clone)]
pub struct DomElement(Element);

impl DomElement {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl PageElement for DomElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, on) {
            tracing::warn!(
                "Could not toggle class '{}' on element '{}': {:?}",
                class,
                self.0.id(),
                err
            );
        }
    }
}

/// The browser document.
#[derive(Debug, Clone)]
pub struct DomDocument(Document);

impl DomDocument {
    pub fn current() -> Result<DomDocument, NavError> {
        let window = web_sys::window().ok_or_else(|| NavError::Dom("no global window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| NavError::Dom("window has no document".into()))?;
        Ok(DomDocument(document))
    }
}

impl PageDocument for DomDocument {
    type Element = DomElement;

    fn query_all(&self, selector: &str) -> Result<Vec<DomElement>, NavError> {
        let list = self.0.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomElement)
            .collect())
    }
}

thread_local! {
    static INSTALLED: InstallGuard = const { InstallGuard::new() };
}

/// Routes `tracing` output to the browser console. Silent until called.
#[wasm_bindgen]
pub fn enable_logging() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        web_sys::console::warn_1(&"section-nav: a tracing subscriber is already set".into());
    }
}

#[wasm_bindgen]
pub struct SectionNav {
    activator: Rc<SectionActivator<DomElement>>,
    bindings: Rc<ClickBindings>,
}

#[wasm_bindgen]
impl SectionNav {
    /// Captures the document and registers the click handlers. Fails when called a second time.
    ///
    /// `config` is an optional object with any of `nav_selector`, `section_selector`,
    /// `active_class` and `target_attribute`.
    pub fn install(config: JsValue) -> Result<SectionNav, JsValue> {
        let config: NavConfig = if config.is_undefined() || config.is_null() {
            NavConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(NavError::from)?
        };

        INSTALLED.with(InstallGuard::claim)?;

        let document = DomDocument::current()?;
        let (activator, bindings) = SectionActivator::install(&document, &config)?;
        let activator = Rc::new(activator);
        let bindings = Rc::new(bindings);

        for (binding, item) in bindings.iter().zip(&activator.snapshot().nav_items) {
            let nav_index = binding.nav_index;
            let handler_activator = Rc::clone(&activator);
            let handler_bindings = Rc::clone(&bindings);
            let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                handler_bindings.dispatch(nav_index, &handler_activator);
            });
            item.element
                .element()
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            // Owned by the JS listener from here on; never removed.
            handler.forget();
        }

        tracing::debug!("Registered {} click handlers", bindings.len());

        Ok(SectionNav {
            activator,
            bindings,
        })
    }

    #[wasm_bindgen]
    pub fn activate(&self, section_id: String) {
        self.activator.activate(&section_id);
    }

    /// Simulates a click on the nav item at `nav_index` (capture order).
    #[wasm_bindgen]
    pub fn click(&self, nav_index: usize) -> bool {
        self.bindings.dispatch(nav_index, &self.activator)
    }

    #[wasm_bindgen]
    pub fn active_section(&self) -> Option<String> {
        self.activator.active_section().map(str::to_string)
    }

    /// Returns `{ sections: [{ id, active }], nav_items: [{ id, active }] }`
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.activator.state())
            .map_err(|err| NavError::from(err).into())
    }

    #[wasm_bindgen]
    pub fn nav_count(&self) -> usize {
        self.activator.snapshot().nav_items.len()
    }

    #[wasm_bindgen]
    pub fn section_count(&self) -> usize {
        self.activator.snapshot().sections.len()
    }
}
