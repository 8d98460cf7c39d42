//! In-memory page.
//!
//! A flat list of elements that can be loaded from TOML or JSON, queried with compound
//! selectors and mutated through shared handles, the same way DOM references behave.
//!
//! ```toml
//! [[elements]]
//! tag = "button"
//! classes = ["nav-item"]
//! attributes = { data-section = "home" }
//!
//! [[elements]]
//! tag = "section"
//! id = "home"
//! classes = ["section", "active"]
//! ```

use crate::{
    config::get_content,
    error::NavError,
    page::{PageDocument, PageElement},
    selector::{Matchable, Selector},
};
use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, path::Path, sync::Arc};

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementData {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class list in insertion order, without duplicates
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Default for ElementData {
    fn default() -> Self {
        ElementData {
            tag: default_tag(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        ElementData {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// `id` and `class` go to their dedicated fields, as they do on a DOM element.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        match name {
            "id" => self.id = Some(value.to_string()),
            "class" => {
                for class in value.split_whitespace() {
                    self = self.with_class(class);
                }
            }
            _ => {
                self.attributes.insert(name.to_string(), value.to_string());
            }
        }
        self
    }

    /// Folds `id` / `class` entries of the attribute map into the dedicated fields.
    ///
    /// An `id` entry that disagrees with the `id` field is an error.
    pub fn normalize(mut self) -> Result<ElementData, NavError> {
        if let Some(id) = self.attributes.remove("id") {
            match &self.id {
                Some(existing) if existing != &id => {
                    return Err(NavError::Serialization(format!(
                        "element has id '{existing}' and attribute id '{id}'"
                    )));
                }
                _ => self.id = Some(id),
            }
        }
        if let Some(classes) = self.attributes.remove("class") {
            self = self.with_attribute("class", &classes);
        }
        Ok(self)
    }
}

/// Shared handle to one element of a [`StaticPage`].
#[derive(Debug, Clone)]
pub struct StaticElement(Arc<RwLock<ElementData>>);

impl From<ElementData> for StaticElement {
    fn from(data: ElementData) -> Self {
        StaticElement(Arc::new(RwLock::new(data)))
    }
}

impl StaticElement {
    pub fn data(&self) -> ElementData {
        self.0.read().clone()
    }

    pub fn tag_name(&self) -> String {
        self.0.read().tag.clone()
    }

    pub fn id(&self) -> String {
        self.0.read().id.clone().unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.read().classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.read();
        match name {
            "id" => data.id.clone(),
            "class" => Some(data.classes.join(" ")),
            _ => data.attributes.get(name).cloned(),
        }
    }

    pub fn toggle_class(&self, class: &str, on: bool) {
        let mut data = self.0.write();
        let present = data.classes.iter().position(|c| c == class);
        match (present, on) {
            (None, true) => data.classes.push(class.to_string()),
            (Some(idx), false) => {
                data.classes.remove(idx);
            }
            _ => {}
        }
    }

    pub fn same_element(&self, other: &StaticElement) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PageElement for StaticElement {
    fn id(&self) -> String {
        StaticElement::id(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        StaticElement::attribute(self, name)
    }

    fn has_class(&self, class: &str) -> bool {
        StaticElement::has_class(self, class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        StaticElement::toggle_class(self, class, on)
    }
}

impl Matchable for StaticElement {
    fn tag_name(&self) -> String {
        StaticElement::tag_name(self)
    }

    fn element_id(&self) -> String {
        StaticElement::id(self)
    }

    fn has_class(&self, class: &str) -> bool {
        StaticElement::has_class(self, class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        StaticElement::attribute(self, name)
    }
}

impl Serialize for StaticElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.read().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StaticElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ElementData::deserialize(deserializer)?
            .normalize()
            .map(StaticElement::from)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPage {
    #[serde(default)]
    elements: Vec<StaticElement>,
}

impl StaticPage {
    pub fn new() -> Self {
        StaticPage::default()
    }

    /// Loads a page file; `.json` files are read as JSON, anything else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<StaticPage, NavError> {
        let path = path.as_ref();
        let content = get_content(path)?;
        let page = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => StaticPage::from_json_str(&content)?,
            _ => StaticPage::from_toml_str(&content)?,
        };
        tracing::debug!("Loaded {} elements from {:?}", page.len(), path);
        Ok(page)
    }

    pub fn from_toml_str(content: &str) -> Result<StaticPage, NavError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<StaticPage, NavError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, NavError> {
        Ok(toml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, NavError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the page to `path`, as JSON for `.json` files and TOML otherwise.
    ///
    /// The text goes to a temporary file next to `path` first and is renamed over it, so a failed
    /// write leaves the previous file intact.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), NavError> {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let path = path.as_ref();
        let text = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => self.to_json_string()?,
            _ => self.to_toml_string()?,
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(text.as_bytes())?;
        file.persist(path)?;
        tracing::debug!("Saved {} elements to {:?}", self.len(), path);
        Ok(())
    }

    /// Appends an element and returns its handle.
    pub fn append(&mut self, data: ElementData) -> StaticElement {
        let element = StaticElement::from(data);
        self.elements.push(element.clone());
        element
    }

    pub fn elements(&self) -> &[StaticElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&StaticElement> {
        self.elements
            .iter()
            .find(|el| el.0.read().id.as_deref() == Some(id))
    }
}

impl PageDocument for StaticPage {
    type Element = StaticElement;

    fn query_all(&self, selector: &str) -> Result<Vec<StaticElement>, NavError> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .elements
            .iter()
            .filter(|el| selector.matches(*el))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
[[elements]]
tag = "button"
classes = ["nav-item"]
attributes = { data-section = "home" }

[[elements]]
tag = "section"
id = "home"
classes = ["section", "active"]
"#;

    #[test]
    fn loads_toml_page() {
        let page = StaticPage::from_toml_str(PAGE).unwrap();
        assert_eq!(page.len(), 2);
        let home = page.find_by_id("home").unwrap();
        assert_eq!(home.tag_name(), "section");
        assert!(home.has_class("active"));
        assert_eq!(
            page.elements()[0].attribute("data-section").as_deref(),
            Some("home")
        );
    }

    #[test]
    fn handles_share_state() {
        let mut page = StaticPage::new();
        let handle = page.append(ElementData::new("div").with_class("section"));
        let queried = page.query_all(".section").unwrap();
        queried[0].toggle_class("active", true);
        assert!(handle.has_class("active"));
        assert!(handle.same_element(&queried[0]));
    }

    #[test]
    fn toggle_is_idempotent_and_keeps_order() {
        let element = StaticElement::from(ElementData::new("div").with_class("a").with_class("b"));
        element.toggle_class("active", true);
        element.toggle_class("active", true);
        assert_eq!(element.data().classes, vec!["a", "b", "active"]);
        element.toggle_class("a", false);
        element.toggle_class("a", false);
        assert_eq!(element.data().classes, vec!["b", "active"]);
    }

    #[test]
    fn query_uses_compound_selectors() {
        let mut page = StaticPage::new();
        page.append(ElementData::new("section").with_id("a").with_class("section"));
        page.append(ElementData::new("div").with_id("b").with_class("section"));
        let sections = page.query_all("section.section").unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id(), "a");
        assert!(page.query_all("div .section").is_err());
    }

    #[test]
    fn toml_output_keeps_attributes_and_markers() {
        let page = StaticPage::from_toml_str(PAGE).unwrap();
        page.elements()[0].toggle_class("active", true);
        let reloaded = StaticPage::from_toml_str(&page.to_toml_string().unwrap()).unwrap();
        let nav = &reloaded.elements()[0];
        assert!(nav.has_class("active"));
        assert_eq!(nav.attribute("data-section").as_deref(), Some("home"));
        assert_eq!(nav.id(), "");
    }

    #[test]
    fn id_and_class_attributes_fold_into_fields() {
        let page = StaticPage::from_toml_str(
            r#"
[[elements]]
tag = "section"
classes = ["section"]
attributes = { id = "about", class = "wide section", data-x = "1" }
"#,
        )
        .unwrap();
        let element = &page.elements()[0];
        assert_eq!(element.attribute("id").as_deref(), Some("about"));
        assert_eq!(element.id(), "about");
        assert_eq!(element.data().classes, vec!["section", "wide"]);
        assert_eq!(element.data().attributes.len(), 1);
        assert_eq!(page.query_all("#about.wide").unwrap().len(), 1);
    }

    #[test]
    fn conflicting_id_attribute_is_rejected() {
        let err = StaticPage::from_toml_str(
            r#"
[[elements]]
id = "home"
attributes = { id = "about" }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, NavError::Serialization(_)));
    }

    #[test]
    fn builder_routes_id_and_class() {
        let data = ElementData::new("div")
            .with_attribute("id", "x")
            .with_attribute("class", "a b");
        assert_eq!(data.id.as_deref(), Some("x"));
        assert_eq!(data.classes, vec!["a", "b"]);
        assert!(data.attributes.is_empty());
    }

    #[test]
    fn json_output_reflects_mutations() {
        let page = StaticPage::from_toml_str(PAGE).unwrap();
        page.find_by_id("home").unwrap().toggle_class("active", false);
        let json = page.to_json_string().unwrap();
        let reloaded = StaticPage::from_json_str(&json).unwrap();
        assert!(!reloaded.find_by_id("home").unwrap().has_class("active"));
        assert!(reloaded.find_by_id("home").unwrap().has_class("section"));
    }
}
