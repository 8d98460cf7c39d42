//! Collections captured once at startup.

use crate::{
    config::NavConfig,
    error::NavError,
    page::{PageDocument, PageElement},
};
use serde::{Deserialize, Serialize};

/// A content block, identified by its element id.
#[derive(Debug, Clone)]
pub struct Section<E> {
    pub id: String,
    pub element: E,
}

/// A clickable navigation control.
#[derive(Debug, Clone)]
pub struct NavItem<E> {
    /// Value of the target attribute; `None` when the element does not carry one
    pub section_id: Option<String>,
    pub element: E,
}

/// The sections and nav items found when the page was captured.
///
/// Never re-queried: elements added to the page afterwards are not part of the snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot<E> {
    pub sections: Vec<Section<E>>,
    pub nav_items: Vec<NavItem<E>>,
}

impl<E> Default for Snapshot<E> {
    fn default() -> Self {
        Snapshot {
            sections: Vec::new(),
            nav_items: Vec::new(),
        }
    }
}

impl<E: PageElement> Snapshot<E> {
    pub fn capture<D>(document: &D, config: &NavConfig) -> Result<Snapshot<E>, NavError>
    where
        D: PageDocument<Element = E>,
    {
        let nav_items: Vec<NavItem<E>> = document
            .query_all(&config.nav_selector)?
            .into_iter()
            .map(|element| NavItem {
                section_id: element.attribute(&config.target_attribute),
                element,
            })
            .collect();
        let sections: Vec<Section<E>> = document
            .query_all(&config.section_selector)?
            .into_iter()
            .map(|element| Section {
                id: element.id(),
                element,
            })
            .collect();

        tracing::debug!(
            "Captured {} nav items and {} sections ({} / {})",
            nav_items.len(),
            sections.len(),
            config.nav_selector,
            config.section_selector
        );
        for item in nav_items.iter().filter(|item| item.section_id.is_none()) {
            tracing::debug!(
                "Nav item with id '{}' has no '{}' attribute",
                item.element.id(),
                config.target_attribute
            );
        }

        Ok(Snapshot {
            sections,
            nav_items,
        })
    }
}

impl<E> Snapshot<E> {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.nav_items.is_empty()
    }

    pub fn section(&self, id: &str) -> Option<&Section<E>> {
        self.sections.iter().find(|section| section.id == id)
    }
}

/// Serializable view of one captured element and its marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementState {
    /// Section id, or the target section id of a nav item
    pub id: Option<String>,
    pub active: bool,
}

/// Active flags of every captured element, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationState {
    pub sections: Vec<ElementState>,
    pub nav_items: Vec<ElementState>,
}

impl ActivationState {
    pub fn active_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.active)
            .filter_map(|s| s.id.as_deref())
            .collect()
    }

    pub fn active_nav_targets(&self) -> Vec<Option<&str>> {
        self.nav_items
            .iter()
            .filter(|n| n.active)
            .map(|n| n.id.as_deref())
            .collect()
    }
}
