//! Host abstraction over an element tree.
//!
//! The activator never talks to a concrete DOM. It captures elements through [`PageDocument`]
//! and flips the marker class through [`PageElement`]. The browser binding (`wasm` feature)
//! implements these over `web-sys`; [`crate::static_page`] implements them in memory.

use crate::error::NavError;

/// One element handle.
///
/// Handles behave like DOM references: cloning a handle does not copy the element, and a
/// class change through one handle is visible through every other handle to the same element.
pub trait PageElement {
    /// The element's `id` attribute, or an empty string when it has none.
    fn id(&self) -> String;

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    /// Adds `class` when `on` is true, removes it otherwise.
    ///
    /// Infallible from the caller's view: hosts that can fail log and swallow the failure.
    fn toggle_class(&self, class: &str, on: bool);
}

/// A document that can be queried for elements.
pub trait PageDocument {
    type Element: PageElement;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, NavError>;
}
