//! Shared helpers for activation tests

use crate::static_page::{ElementData, StaticElement, StaticPage};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Handles to the elements of a page built by [`nav_page`].
pub struct NavPage {
    pub page: StaticPage,
    pub nav_items: Vec<StaticElement>,
    pub sections: Vec<StaticElement>,
}

/// A page with one `.nav-item` button and one `.section` per id, in order.
pub fn nav_page(ids: &[&str]) -> NavPage {
    init_logging();

    let mut page = StaticPage::new();
    let mut nav_items = Vec::new();
    let mut sections = Vec::new();
    for id in ids {
        nav_items.push(
            page.append(
                ElementData::new("button")
                    .with_class("nav-item")
                    .with_attribute("data-section", id),
            ),
        );
    }
    for id in ids {
        sections.push(page.append(ElementData::new("section").with_id(id).with_class("section")));
    }
    NavPage {
        page,
        nav_items,
        sections,
    }
}

pub fn active_ids(elements: &[StaticElement], attr: Option<&str>) -> Vec<String> {
    elements
        .iter()
        .filter(|el| el.has_class("active"))
        .map(|el| match attr {
            Some(name) => el.attribute(name).unwrap_or_default(),
            None => el.id(),
        })
        .collect()
}
